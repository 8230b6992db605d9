pub mod connector_api_logs {
    use serde::Serialize;
    use time::OffsetDateTime;

    /// Captures one outgoing connector call for structured logging.
    #[derive(Debug)]
    pub struct ConnectorEvent {
        connector_name: String,
        flow: String,
        url: String,
        request: serde_json::Value,
        response: Option<serde_json::Value>,
        error: Option<serde_json::Value>,
        status_code: Option<u16>,
        created_at: OffsetDateTime,
    }

    impl ConnectorEvent {
        pub fn new(
            connector_name: &str,
            flow: &str,
            url: &str,
            request: serde_json::Value,
        ) -> Self {
            Self {
                connector_name: connector_name.to_string(),
                flow: flow.to_string(),
                url: url.to_string(),
                request,
                response: None,
                error: None,
                status_code: None,
                created_at: OffsetDateTime::now_utc(),
            }
        }

        pub fn set_response_body<T: Serialize>(&mut self, response: &T) {
            match hyperswitch_masking::masked_serialize(response) {
                Ok(body) => self.response = Some(body),
                Err(error) => {
                    tracing::warn!(?error, "failed to serialize connector response for logging");
                }
            }
        }

        pub fn set_error_response_body<T: Serialize>(&mut self, response: &T) {
            match hyperswitch_masking::masked_serialize(response) {
                Ok(body) => self.error = Some(body),
                Err(error) => {
                    tracing::warn!(?error, "failed to serialize connector error for logging");
                }
            }
        }

        pub fn set_error(&mut self, error: serde_json::Value) {
            self.error = Some(error);
        }

        pub fn set_status_code(&mut self, code: u16) {
            self.status_code = Some(code);
        }

        /// Emits the collected event on the current subscriber.
        pub fn emit(&self) {
            tracing::info!(
                connector = %self.connector_name,
                flow = %self.flow,
                url = %self.url,
                request = %self.request,
                response = ?self.response,
                error = ?self.error,
                status_code = ?self.status_code,
                created_at = %self.created_at,
                "connector api event"
            );
        }
    }
}
