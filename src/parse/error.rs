use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    Pattern(String),
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::Pattern(e.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(msg) => write!(f, "Pattern Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_regex_error() {
        let e: Error = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(e.to_string().starts_with("Pattern Error: "));
    }
}
