// The Serialize and Deserialize traits are derived so an Error can be stored in a signal or
// handed across a Resource boundary without conversion.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Token {0} not found in the catalog!")]
    UnknownToken(String),

    #[error("Token {0} appears more than once in the catalog!")]
    DuplicateToken(String),

    #[error("The token catalog is empty!")]
    EmptyCatalog,

    #[error("Serde Error: {0}")]
    Serde(String),
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn serde(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Serde(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Error::from("oops"), Error::Generic("oops".to_string()));
        assert_eq!(Error::generic(42), Error::Generic("42".to_string()));
        assert_eq!(Error::serde("bad"), Error::Serde("bad".to_string()));

        let json_error = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(Error::from(json_error), Error::Serde(_)));
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnknownToken("DOGE".to_string()).to_string(),
            "Token DOGE not found in the catalog!"
        );
        assert_eq!(Error::EmptyCatalog.to_string(), "The token catalog is empty!");
    }
}
