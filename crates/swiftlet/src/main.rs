mod tokens;
mod verify;

use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use swiftlet_db::{File, RootDatabase, diagnostics};
use swiftlet_errors::Renderer;
use swiftlet_parse::FileParse as _;
use swiftlet_yellow::DumpOptions;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(version, about = "Lossless parser front end for Swift sources")]
enum Options {
    /// Print the structural dump of a file.
    Dump {
        path: Utf8PathBuf,
        /// Append the trimmed byte range to every node and token.
        #[arg(long)]
        ranges: bool,
        /// Exit with status 1 when the file has diagnostics.
        #[arg(long)]
        deny_errors: bool,
    },
    /// Report diagnostics; exits with status 1 when there are any.
    Check { path: Utf8PathBuf },
    /// Print every token with its trivia.
    Tokens { path: Utf8PathBuf },
    /// Check that the file round-trips and that rewriting its trivia keeps
    /// the dump unchanged.
    Verify { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    match Options::parse() {
        Options::Dump { path, ranges, deny_errors } => {
            let db = RootDatabase::default();
            let file = load(&db, path)?;
            let parse = file.parse(&db);

            print!("{}", parse.dump_with_errors(DumpOptions { ranges }));

            Ok(if deny_errors && !parse.errors().is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Options::Check { path } => {
            let db = RootDatabase::default();
            let file = load(&db, path)?;
            let diagnostics = diagnostics(&db, file);

            let renderer = Renderer::styled();
            let path = file.path(&db).as_str();
            let text = file.text(&db).as_str();
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path, text));
            }

            if diagnostics.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{path}: {} error(s)", diagnostics.len());
                Ok(ExitCode::FAILURE)
            }
        }
        Options::Tokens { path } => {
            let db = RootDatabase::default();
            let file = load(&db, path)?;
            print!("{}", tokens::render(file.text(&db)));
            Ok(ExitCode::SUCCESS)
        }
        Options::Verify { path } => {
            let db = RootDatabase::default();
            let file = load(&db, path)?;
            match verify::verify(file.text(&db)) {
                Ok(()) => {
                    println!("{}: ok", file.path(&db));
                    Ok(ExitCode::SUCCESS)
                }
                Err(mismatch) => {
                    eprintln!("{}: {mismatch}", file.path(&db));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn load(db: &RootDatabase, path: Utf8PathBuf) -> anyhow::Result<File> {
    let contents = std::fs::read(&path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(File::new(db, path, contents))
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(EnvFilter::from_default_env())
        .init();
}
