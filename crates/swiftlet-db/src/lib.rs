use salsa::{Accumulator as _, Database};
pub use swiftlet_errors::Diagnostic;
pub use swiftlet_inputs::File;
use swiftlet_parse::FileParse as _;

#[salsa::db]
#[derive(Default, Clone)]
pub struct RootDatabase {
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl Database for RootDatabase {}

/// Pushes every lexing and parsing diagnostic of `file` into the
/// [`Diagnostic`] accumulator.
#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    let parse = file.parse(db);
    tracing::debug!(path = %file.path(db), errors = parse.errors().len(), "checked file");
    for error in parse.errors() {
        error.clone().accumulate(db);
    }
}

/// The diagnostics of `file`, ordered by position.
pub fn diagnostics(db: &dyn Database, file: File) -> Vec<Diagnostic> {
    check_file::accumulated::<Diagnostic>(db, file).into_iter().cloned().collect()
}
