//! Errors and result aliases used across the workspace.

/// Result alias carrying an [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    #[error("Failed to serialize to {0} format")]
    EncodeError(&'static str),
    #[error("Failed to parse email")]
    EmailParsingError,
    #[error("Failed to format date time")]
    DateTimeFormattingError,
    #[error("Failed to convert i64 amount to decimal")]
    I64ToDecimalConversionFailure,
    #[error("Failed to convert decimal amount to i64")]
    DecimalToI64ConversionFailure,
    #[error("Failed to convert string amount to decimal: {error}")]
    StringToDecimalConversionFailure { error: String },
    #[error("Failed to convert float amount to decimal")]
    FloatToDecimalConversionFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },
    #[error("{message}")]
    InvalidValue { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Failed to sign message")]
    MessageSigningFailed,
    #[error("Failed to verify signature")]
    SignatureVerificationFailed,
    #[error("Failed to encode given message")]
    EncodingFailed,
}
