//! Constants shared across the connector crates.

/// Error code used when a connector response carries none.
pub const NO_ERROR_CODE: &str = "No error code";

/// Error message used when a connector response carries none.
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Content type for the WorldNet XML gateway.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Placeholder for values scrubbed from stored payloads.
pub const REDACTED: &str = "Redacted";

/// Length of a lowercase hex MD5 digest.
pub const MD5_HEX_LENGTH: usize = 32;
