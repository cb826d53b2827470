use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_convert_with_source_message() {
        let io: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, Error::Io(_)));
        assert_eq!(io.to_string(), "IO error: gone");

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let toml: Error = toml_err.into();
        assert!(matches!(toml, Error::Toml(_)));
        assert!(toml.to_string().starts_with("TOML error: "));
    }
}
