use std::fmt::Write as _;

use swiftlet_tokenizer::tokenize;
use swiftlet_yellow::GreenTrivia;

/// One line per token: kind, byte range, text, then any non-empty trivia.
pub(crate) fn render(text: &str) -> String {
    let tokens = tokenize(text);
    let mut out = String::new();

    for (index, token) in tokens.iter().enumerate() {
        let _ = write!(
            out,
            "{:?}@{:?} {:?}",
            token.kind,
            token.range,
            &text[token.range]
        );
        trivia(&mut out, "leading", tokens.leading_trivia(index));
        trivia(&mut out, "trailing", tokens.trailing_trivia(index));
        out.push('\n');
    }
    for error in tokens.errors() {
        let _ = writeln!(out, "error@{:?}: {}", error.offset, error.kind);
    }
    out
}

fn trivia(out: &mut String, label: &str, trivia: &GreenTrivia) {
    if trivia.is_empty() {
        return;
    }
    let _ = write!(out, " {label}=[");
    for (i, piece) in trivia.pieces().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{:?}", piece.kind);
    }
    out.push(']');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_tokens_with_trivia() {
        assert_eq!(
            render("let x = 1 // one\n"),
            "LET_KW@0..3 \"let\" trailing=[Space]\n\
             NAME@4..5 \"x\" trailing=[Space]\n\
             EQ@6..7 \"=\" trailing=[Space]\n\
             INT_NUMBER@8..9 \"1\" trailing=[Space, LineComment]\n\
             EOF@17..17 \"\" leading=[Newline]\n"
        );
    }
}
