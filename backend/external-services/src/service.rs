//! Drives one connector call end to end: build the request, send it through
//! the shared HTTP client, hand the response back to the connector.

use std::{str::FromStr, time::Duration};

use common_utils::{
    errors::CustomResult,
    request::{Method, Request, RequestContent},
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Proxy,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{ErasedMaskSerialize, Maskable};
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::BoxedConnectorIntegrationV2,
    events::connector_api_logs::ConnectorEvent,
};
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::field::Empty;

pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

pub async fn execute_connector_processing_step<F, ResourceCommonData, Req, Resp>(
    proxy: &Proxy,
    connector: BoxedConnectorIntegrationV2<'static, F, ResourceCommonData, Req, Resp>,
    router_data: RouterDataV2<F, ResourceCommonData, Req, Resp>,
) -> CustomResult<RouterDataV2<F, ResourceCommonData, Req, Resp>, ConnectorError>
where
    F: Clone + 'static,
    ResourceCommonData: Clone + 'static,
    Req: Clone + std::fmt::Debug + 'static,
    Resp: Clone + std::fmt::Debug + 'static,
{
    let span = tracing::info_span!(
        "outgoing_connector_call",
        request_headers = Empty,
        request_body = Empty,
        status_code = Empty,
        latency = Empty,
        url = Empty,
    );
    let _enter = span.enter();
    let start = tokio::time::Instant::now();

    let connector_request = connector.build_request_v2(&router_data)?;
    let mut router_data = router_data.clone();

    let result = match connector_request {
        Some(request) => {
            let url = request.url.clone();
            let masked_headers = mask_headers(&request.headers);
            let masked_request = request
                .body
                .as_ref()
                .map(masked_body)
                .unwrap_or(Value::Null);
            let mut event = ConnectorEvent::new(
                connector.id(),
                std::any::type_name::<F>(),
                &url,
                masked_request.clone(),
            );

            let current = tracing::Span::current();
            current.record("url", tracing::field::display(&url));
            current.record("request_headers", tracing::field::display(&masked_headers));
            current.record("request_body", tracing::field::display(&masked_request));

            match call_connector_api(proxy, request).await {
                Ok(Ok(body)) => {
                    let status_code = body.status_code;
                    event.set_status_code(status_code);
                    current.record("status_code", tracing::field::display(status_code));

                    let data =
                        connector.handle_response_v2(&router_data, Some(&mut event), body)?;
                    event.emit();
                    Ok(data)
                }
                Ok(Err(body)) => {
                    event.set_status_code(body.status_code);
                    current.record("status_code", tracing::field::display(body.status_code));

                    let error = match body.status_code {
                        500..=511 => connector.get_5xx_error_response(body, Some(&mut event))?,
                        _ => connector.get_error_response_v2(body, Some(&mut event))?,
                    };
                    event.emit();
                    router_data.response = Err(error);
                    Ok(router_data)
                }
                Err(err) => {
                    error_log(
                        "NETWORK_ERROR",
                        &json!(format!("failed getting response from connector: {err:?}")),
                    );
                    Err(err.change_context(ConnectorError::ProcessingStepFailed(None)))
                }
            }
        }
        None => Ok(router_data),
    };

    tracing::Span::current().record("latency", start.elapsed().as_millis());
    tracing::info!(tag = ?Tag::OutgoingApi, log_type = "api", "outgoing request completed");
    result
}

fn mask_headers(headers: &Headers) -> Value {
    let map = headers
        .iter()
        .fold(serde_json::Map::new(), |mut acc, (name, value)| {
            let rendered = match value {
                Maskable::Masked(_) => Value::String("*** masked ***".to_string()),
                Maskable::Normal(value) => Value::String(value.clone()),
            };
            acc.insert(name.clone(), rendered);
            acc
        });
    Value::Object(map)
}

fn masked_body(body: &RequestContent) -> Value {
    match body {
        RequestContent::Json(inner)
        | RequestContent::FormUrlEncoded(inner)
        | RequestContent::Xml(inner) => (**inner)
            .masked_serialize()
            .unwrap_or_else(|_| json!({"error": "failed to mask serialize connector request"})),
        RequestContent::RawBytes(_) => json!({"request_type": "RAW_BYTES"}),
    }
}

pub async fn call_connector_api(
    proxy: &Proxy,
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let should_bypass_proxy = proxy.bypass_proxy_urls.contains(&url.to_string());
    let client = create_client(
        proxy,
        should_bypass_proxy,
        request.certificate,
        request.certificate_key,
    )?;

    let headers = request.headers.construct_header_map()?;

    let request = match request.method {
        Method::Get => client.get(url),
        Method::Post => {
            let client = client.post(url);
            match request.body {
                Some(RequestContent::Json(payload)) => {
                    client.json(&*payload as &dyn ErasedMaskSerialize)
                }
                Some(RequestContent::FormUrlEncoded(payload)) => {
                    client.form(&*payload as &dyn ErasedMaskSerialize)
                }
                Some(RequestContent::Xml(payload)) => {
                    let body = quick_xml::se::to_string(&*payload as &dyn ErasedMaskSerialize)
                        .change_context(ApiClientError::BodySerializationFailed)?;
                    client.body(body)
                }
                Some(RequestContent::RawBytes(payload)) => client.body(payload),
                None => client,
            }
        }
        Method::Put => client.put(url),
        Method::Delete => client.delete(url),
    }
    .add_headers(headers);

    let response = request.send().await.map_err(|error| {
        let api_error = if error.is_timeout() {
            ApiClientError::RequestTimeoutReceived
        } else {
            ApiClientError::RequestNotSent(error.to_string())
        };
        error_log(
            "REQUEST_FAILURE",
            &json!("unable to send request to connector"),
        );
        report!(api_error)
    })?;

    handle_response(response).await
}

pub fn create_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
    _client_certificate: Option<hyperswitch_masking::Secret<String>>,
    _client_certificate_key: Option<hyperswitch_masking::Secret<String>>,
) -> CustomResult<Client, ApiClientError> {
    get_base_client(proxy_config, should_bypass_proxy)
}

static NON_PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();
static PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();

fn get_base_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    Ok(if should_bypass_proxy
        || (proxy_config.http_url.is_none() && proxy_config.https_url.is_none())
    {
        &NON_PROXIED_CLIENT
    } else {
        &PROXIED_CLIENT
    }
    .get_or_try_init(|| {
        get_client_builder(proxy_config, should_bypass_proxy)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .inspect_err(|err| {
                error_log(
                    "CLIENT_ERROR",
                    &json!(format!("failed to construct base client: {err:?}")),
                );
            })
    })?
    .clone())
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }

    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }

    Ok(client_builder)
}

async fn handle_response(
    response: reqwest::Response,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let status_code = response.status().as_u16();
    let headers = Some(response.headers().to_owned());
    let bytes = response
        .bytes()
        .await
        .change_context(ApiClientError::ResponseDecodingFailed)?;

    let payload = Response {
        headers,
        response: bytes,
        status_code,
    };
    match status_code {
        200..=202 | 204 | 302 => Ok(Ok(payload)),
        400..=599 => Ok(Err(payload)),
        _ => {
            error_log(
                "UNEXPECTED_RESPONSE",
                &json!("unexpected response from server"),
            );
            Err(report!(ApiClientError::UnexpectedServerResponse))
        }
    }
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

pub(super) trait RequestBuilderExt {
    fn add_headers(self, headers: reqwest::header::HeaderMap) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn add_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self = self.headers(headers);
        self
    }
}

#[derive(Debug, Default, serde::Deserialize, Clone, strum::EnumString)]
pub enum Tag {
    #[default]
    General,
    /// Call initiated to the gateway.
    InitiatedToConnector,
    /// Response received from the gateway.
    IncomingApi,
    /// Outgoing gateway request.
    OutgoingApi,
}

#[inline]
pub fn error_log(action: &str, message: &Value) {
    tracing::error!(tags = %action, json_value = %message);
}
