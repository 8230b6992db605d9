//! Extension traits for parsing wire payloads.

use error_stack::ResultExt;
use serde::de::DeserializeOwned;

use crate::errors::{CustomResult, ParsingError, ValidationError};

/// Parsing helpers over raw response bytes.
pub trait BytesExt {
    /// Parses JSON bytes into `T`.
    fn parse_struct<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned;

    /// Parses an XML document into `T`, tolerating a leading XML declaration
    /// and surrounding whitespace.
    fn parse_xml<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned;
}

impl BytesExt for bytes::Bytes {
    fn parse_struct<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(self)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| {
                format!("Unable to parse {type_name} from json bytes")
            })
    }

    fn parse_xml<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned,
    {
        let document = std::str::from_utf8(self)
            .change_context(ParsingError::StructParseFailure(type_name))?
            .trim();

        // The gateway prepends `<?xml version="1.0" ...?>` on some terminals.
        let document = match document.strip_prefix("<?xml") {
            Some(rest) => rest
                .split_once("?>")
                .map(|(_, body)| body.trim())
                .unwrap_or(document),
            None => document,
        };

        quick_xml::de::from_str(document)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from xml bytes"))
    }
}

/// Option helpers mirroring the field-access style of the connector code.
pub trait OptionExt<T> {
    fn get_required_value(
        self,
        field_name: &'static str,
    ) -> CustomResult<T, ValidationError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn get_required_value(
        self,
        field_name: &'static str,
    ) -> CustomResult<T, ValidationError> {
        self.ok_or_else(|| {
            error_stack::report!(ValidationError::MissingRequiredField {
                field_name: field_name.to_string(),
            })
        })
    }
}

/// Parsing helpers over secret-wrapped JSON values.
pub trait ValueExt {
    fn parse_value<T>(self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned;
}

impl ValueExt for serde_json::Value {
    fn parse_value<T>(self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(self).change_context(ParsingError::StructParseFailure(type_name))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Doc {
        #[serde(rename = "RESPONSECODE")]
        response_code: String,
    }

    #[test]
    fn parse_xml_strips_declaration() {
        let body = bytes::Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<PAYMENTRESPONSE><RESPONSECODE>A</RESPONSECODE></PAYMENTRESPONSE>",
        );
        let parsed: Doc = body.parse_xml("Doc").unwrap();
        assert_eq!(parsed.response_code, "A");
    }

    #[test]
    fn parse_xml_rejects_garbage() {
        let body = bytes::Bytes::from_static(b"not xml at all");
        assert!(body.parse_xml::<Doc>("Doc").is_err());
    }
}
