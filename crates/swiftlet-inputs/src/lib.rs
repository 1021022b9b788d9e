pub use line_index::LineIndex;
use swiftlet_tokenizer::{LexError, utf8_prefix};

/// A source file as read from disk. The contents are raw bytes; decoding
/// happens in [`File::text`] so that malformed UTF-8 is reported, not fatal.
#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(ref)]
    pub contents: Vec<u8>,
}

#[salsa::tracked]
impl File {
    /// The longest valid UTF-8 prefix of the contents.
    #[salsa::tracked(returns(ref))]
    pub fn text(self, db: &dyn salsa::Database) -> String {
        utf8_prefix(self.contents(db)).0.to_owned()
    }

    /// Where decoding stopped, if the contents are not valid UTF-8.
    #[salsa::tracked]
    pub fn encoding_error(self, db: &dyn salsa::Database) -> Option<LexError> {
        utf8_prefix(self.contents(db)).1
    }

    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}
