use std::io;
use std::result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{input}` is not a valid integer key")]
    InvalidKey {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// Parses a query key, trimming surrounding whitespace.
///
/// # Examples
/// ```
/// use search_trees::error::parse_key;
///
/// assert_eq!(parse_key(" 42\n").unwrap(), 42);
/// assert!(parse_key("forty-two").is_err());
/// ```
pub fn parse_key(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|source| Error::InvalidKey {
        input: trimmed.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_key, Error};

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_key("-17").unwrap(), -17);
    }

    #[test]
    fn test_parse_overflow() {
        match parse_key("99999999999") {
            Err(Error::InvalidKey { input, .. }) => assert_eq!(input, "99999999999"),
            _ => panic!("expected an invalid key"),
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_key("   ").is_err());
    }
}
