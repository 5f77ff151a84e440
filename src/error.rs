use std::fmt;

/// Errors reported by the bid core.
///
/// Load failures are not part of this type, they are reported as [anyhow::Error] with the
/// offending path as context.
#[derive(Clone, Debug, PartialEq)]
pub enum BidError {
    /// The text could not be coerced to an amount
    Parse {
        text: String,
    },
    /// The requested inclusive index span does not fit the sequence
    Range {
        begin: usize,
        end: usize,
        len: usize,
    },
}

impl fmt::Display for BidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidError::Parse { text } => {
                write!(f, "Failed to parse amount from '{}'", text)
            }
            BidError::Range { begin, end, len } => {
                write!(f, "Sort range [{}, {}] is out of bounds for {} bids", begin, end, len)
            }
        }
    }
}

impl std::error::Error for BidError {}
