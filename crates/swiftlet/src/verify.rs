//! Self-checks for a single file: the tree must reproduce the source byte for
//! byte, and normalizing the trivia must not change the dump.

use std::fmt;

use swiftlet_parse::{Parse, parse};
use swiftlet_tokenizer::{SyntaxKind, tokenize};
use swiftlet_yellow::DumpOptions;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Mismatch {
    /// The tree text differs from the source starting at this byte offset.
    RoundTrip { offset: usize },
    /// The dump of the normalized copy differs at this (1-based) line.
    Dump { line: usize, original: String, normalized: String },
    /// The normalized copy reports different diagnostics.
    Errors { original: Vec<String>, normalized: Vec<String> },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::RoundTrip { offset } => {
                write!(f, "tree text differs from the source at byte {offset}")
            }
            Mismatch::Dump { line, original, normalized } => write!(
                f,
                "dump changes when trivia is normalized, line {line}:\n  original:   {original}\n  normalized: {normalized}"
            ),
            Mismatch::Errors { original, normalized } => write!(
                f,
                "diagnostics change when trivia is normalized: {original:?} vs {normalized:?}"
            ),
        }
    }
}

pub(crate) fn verify(text: &str) -> Result<(), Mismatch> {
    let original = parse(text);

    let printed = original.syntax_node().to_string();
    if printed != text {
        let offset = printed
            .bytes()
            .zip(text.bytes())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| printed.len().min(text.len()));
        return Err(Mismatch::RoundTrip { offset });
    }

    let normalized_text = normalize_trivia(text);
    tracing::debug!(before = text.len(), after = normalized_text.len(), "normalized trivia");
    let normalized = parse(&normalized_text);

    compare_dumps(&original, &normalized)?;

    let original = messages(&original);
    let normalized = messages(&normalized);
    if original != normalized {
        return Err(Mismatch::Errors { original, normalized });
    }
    Ok(())
}

/// Rewrites every gap between tokens: comments and runs of blanks become a
/// single space, anything with a line break becomes a single newline, and
/// tokens that touched keep touching.
pub(crate) fn normalize_trivia(text: &str) -> String {
    let tokens = tokenize(text);
    let mut out = String::with_capacity(text.len());

    for (index, token) in tokens.iter().enumerate() {
        let separated = !tokens.leading_trivia(index).is_empty()
            || (index > 0 && !tokens.trailing_trivia(index - 1).is_empty());
        if tokens.has_newline_before(index) {
            out.push('\n');
        } else if separated && index > 0 && token.kind != SyntaxKind::EOF {
            out.push(' ');
        }
        out.push_str(&text[token.range]);
    }
    out
}

fn compare_dumps(original: &Parse, normalized: &Parse) -> Result<(), Mismatch> {
    let original = original.dump(DumpOptions::default());
    let normalized = normalized.dump(DumpOptions::default());
    if original == normalized {
        return Ok(());
    }

    let mut original_lines = original.lines();
    let mut normalized_lines = normalized.lines();
    let mut line = 1;
    loop {
        match (original_lines.next(), normalized_lines.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            (a, b) => {
                return Err(Mismatch::Dump {
                    line,
                    original: a.unwrap_or("<end>").trim().to_owned(),
                    normalized: b.unwrap_or("<end>").trim().to_owned(),
                });
            }
        }
    }
}

fn messages(parse: &Parse) -> Vec<String> {
    parse.errors().iter().map(|error| error.message().to_owned()).collect()
}
