use common_utils::ext_traits::ValueExt;
use error_stack::ResultExt;
use hyperswitch_masking::{ExposeInterface, Secret};

pub type Error = error_stack::Report<crate::errors::ConnectorError>;

#[derive(Default, Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    SignatureKey {
        api_key: Secret<String>,
        key1: Secret<String>,
        api_secret: Secret<String>,
    },
    #[default]
    NoKey,
}

impl ConnectorAuthType {
    pub fn from_secret_value(
        value: common_utils::pii::SecretSerdeValue,
    ) -> common_utils::errors::CustomResult<Self, common_utils::errors::ParsingError> {
        value
            .expose()
            .parse_value::<Self>("ConnectorAuthType")
            .change_context(common_utils::errors::ParsingError::StructParseFailure(
                "ConnectorAuthType",
            ))
    }

    // show only first and last two characters, mask the rest with *
    fn mask_key(&self, key: String) -> Secret<String> {
        let key_len = key.len();
        let masked_key = if key_len <= 4 {
            "*".repeat(key_len)
        } else {
            key.chars()
                .enumerate()
                .map(|(index, character)| {
                    if index < 2 || index >= key_len - 2 {
                        character
                    } else {
                        '*'
                    }
                })
                .collect()
        };
        Secret::new(masked_key)
    }

    /// Auth material with every key masked, safe for logs.
    pub fn get_masked_keys(&self) -> Self {
        match self {
            Self::NoKey => Self::NoKey,
            Self::HeaderKey { api_key } => Self::HeaderKey {
                api_key: self.mask_key(api_key.clone().expose()),
            },
            Self::BodyKey { api_key, key1 } => Self::BodyKey {
                api_key: self.mask_key(api_key.clone().expose()),
                key1: self.mask_key(key1.clone().expose()),
            },
            Self::SignatureKey {
                api_key,
                key1,
                api_secret,
            } => Self::SignatureKey {
                api_key: self.mask_key(api_key.clone().expose()),
                key1: self.mask_key(key1.clone().expose()),
                api_secret: self.mask_key(api_secret.clone().expose()),
            },
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub reason: Option<String>,
    pub status_code: u16,
    pub attempt_status: Option<common_enums::AttemptStatus>,
    pub connector_transaction_id: Option<String>,
    pub raw_connector_response: Option<String>,
}

impl Default for ErrorResponse {
    fn default() -> Self {
        Self {
            code: "HE_00".to_string(),
            message: "Something went wrong".to_string(),
            reason: None,
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            attempt_status: None,
            connector_transaction_id: None,
            raw_connector_response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use hyperswitch_masking::PeekInterface;

    use super::*;

    #[test]
    fn masked_keys_keep_edges_only() {
        let auth = ConnectorAuthType::SignatureKey {
            api_key: Secret::new("TERMINAL1".to_string()),
            key1: Secret::new("mr".to_string()),
            api_secret: Secret::new("topsecret".to_string()),
        };
        match auth.get_masked_keys() {
            ConnectorAuthType::SignatureKey {
                api_key,
                key1,
                api_secret,
            } => {
                assert_eq!(api_key.peek(), "TE*****L1");
                assert_eq!(key1.peek(), "**");
                assert_eq!(api_secret.peek(), "to*****et");
            }
            _ => panic!("variant changed"),
        }
    }

    #[test]
    fn auth_parses_from_secret_value() {
        let value = serde_json::json!({
            "auth_type": "SignatureKey",
            "api_key": "6491002",
            "key1": "ref",
            "api_secret": "x4n35mynyzmcrg"
        });
        let auth = ConnectorAuthType::from_secret_value(Secret::new(value)).unwrap();
        assert!(matches!(auth, ConnectorAuthType::SignatureKey { .. }));
    }
}
