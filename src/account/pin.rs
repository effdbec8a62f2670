use std::fmt;

/// Shared-secret token gating account operations.
///
/// Compared by exact equality. A numeric PIN never matches a textual one,
/// so `1234` and `"1234"` are different PINs.
#[derive(Clone, PartialEq, Eq)]
pub enum Pin {
    Text(String),
    Number(u64),
}

impl Pin {
    pub fn new(value: impl Into<String>) -> Self {
        Pin::Text(value.into())
    }
}

impl From<&str> for Pin {
    fn from(value: &str) -> Self {
        Pin::Text(value.to_string())
    }
}

impl From<String> for Pin {
    fn from(value: String) -> Self {
        Pin::Text(value)
    }
}

impl From<&String> for Pin {
    fn from(value: &String) -> Self {
        Pin::Text(value.clone())
    }
}

impl From<u32> for Pin {
    fn from(value: u32) -> Self {
        Pin::Number(u64::from(value))
    }
}

impl From<u64> for Pin {
    fn from(value: u64) -> Self {
        Pin::Number(value)
    }
}

// Never print the secret, not even in debug output.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::Text(_) => f.write_str("Pin::Text(****)"),
            Pin::Number(_) => f.write_str("Pin::Number(****)"),
        }
    }
}
