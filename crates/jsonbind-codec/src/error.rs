//! Decode/encode error taxonomy.

use thiserror::Error;

/// Errors while decoding a wire JSON value against a schema.
///
/// Failures inside a union trial are suppressed locally into "try next
/// candidate"; a failure that escapes the top-level call surfaces unchanged
/// to the caller. There is no retry and no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The JSON value's runtime shape does not match the expected kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// An enum token outside the declared set. Never silently bucketed.
    #[error("unknown {schema} variant `{token}`")]
    UnknownVariant { schema: String, token: String },
    /// A required field absent from the wire object.
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),
    /// A JSON string that no accepted ISO-8601 form parses.
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
    /// Every union candidate failed. Carries each candidate's typed error so
    /// "wrong shape" and "right shape, invalid content" stay distinguishable;
    /// the display surfaces the most specific of them.
    #[error("no union candidate matched: {}", most_specific(.errors))]
    NoCandidateMatched { errors: Vec<DecodeError> },
}

impl DecodeError {
    /// Content-level errors outrank shape-level mismatches when a union
    /// failure has to be summarized as one message.
    fn specificity(&self) -> u8 {
        match self {
            Self::TypeMismatch { .. } => 0,
            Self::NoCandidateMatched { .. } => 1,
            Self::UnknownVariant { .. }
            | Self::MissingRequiredField(_)
            | Self::InvalidTimestamp(_) => 2,
        }
    }
}

fn most_specific(errors: &[DecodeError]) -> String {
    let mut best: Option<&DecodeError> = None;
    for error in errors {
        // Strictly greater, so ties resolve to the first declared candidate.
        if best.map_or(true, |b| error.specificity() > b.specificity()) {
            best = Some(error);
        }
    }
    best.map(|e| e.to_string())
        .unwrap_or_else(|| "no candidates".to_string())
}

/// Errors while encoding a decoded value back to wire JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The decoded value's kind contradicts the codec it is encoded against.
    #[error("value kind `{found}` does not fit codec `{expected}`")]
    SchemaMismatch { expected: String, found: &'static str },
    /// An enum value whose token is not in the target schema.
    #[error("unknown {schema} variant `{token}`")]
    UnknownVariant { schema: String, token: String },
}
