/// A named, closed set of enum wire tokens.
///
/// Tokens are matched exactly and case-sensitively. There is no catch-all
/// bucket: a token outside the declared set is always a decode failure, even
/// when the set itself declares an `UNKNOWN` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: String,
    pub tokens: Vec<String>,
}

impl EnumSchema {
    pub fn new(name: impl Into<String>, tokens: &[&str]) -> Self {
        Self {
            name: name.into(),
            tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Exact case-sensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}
