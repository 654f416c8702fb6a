#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Failed to parse operation: {0}")]
    ParseError(String),

    #[error("String literal could not be restored from its hex form: {0}")]
    InvalidHexLiteral(#[from] hex::FromHexError),

    #[error("String literal is not valid UTF-8 after restoring it: {0}")]
    InvalidUtf8Literal(#[from] std::string::FromUtf8Error),
}

impl From<graphql_parser::query::ParseError> for SignatureError {
    fn from(error: graphql_parser::query::ParseError) -> Self {
        SignatureError::ParseError(error.to_string())
    }
}
