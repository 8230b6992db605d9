use crate::errors::ConnectorError;

pub type Error = error_stack::Report<ConnectorError>;

/// Fallible conversion from a foreign type, kept separate from `TryFrom` so
/// conversions between types owned by other crates stay expressible.
pub trait ForeignTryFrom<F>: Sized {
    type Error;

    fn foreign_try_from(from: F) -> Result<Self, error_stack::Report<Self::Error>>;
}

/// Builds the closure used with `ok_or_else` when a flow payload is missing a
/// field the connector requires.
pub fn missing_field_err(message: &'static str) -> Box<dyn Fn() -> Error + 'static> {
    Box::new(move || ConnectorError::MissingRequiredField {
        field_name: message,
    }
    .into())
}
