//! Outgoing request primitives handed from the connector trait to the HTTP
//! client.

use std::collections::HashSet;

use hyperswitch_masking::{ErasedMaskSerialize, Maskable, Secret};

pub type Headers = HashSet<(String, Maskable<String>)>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Body of an outgoing connector request.
///
/// `Json`, `FormUrlEncoded` and `Xml` carry the typed payload so the logging
/// layer can emit a masked rendering while the client serializes the real
/// values onto the wire.
pub enum RequestContent {
    Json(Box<dyn ErasedMaskSerialize + Send + Sync>),
    FormUrlEncoded(Box<dyn ErasedMaskSerialize + Send + Sync>),
    Xml(Box<dyn ErasedMaskSerialize + Send + Sync>),
    RawBytes(Vec<u8>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Json(_) => "Json",
            Self::FormUrlEncoded(_) => "FormUrlEncoded",
            Self::Xml(_) => "Xml",
            Self::RawBytes(_) => "RawBytes",
        };
        f.debug_tuple("RequestContent").field(&kind).finish()
    }
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub headers: Headers,
    pub body: Option<RequestContent>,
    pub certificate: Option<Secret<String>>,
    pub certificate_key: Option<Secret<String>>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashSet::new(),
            body: None,
            certificate: None,
            certificate_key: None,
        }
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: Request::new(Method::Get, ""),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.request.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.request.method = method;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.headers.insert((name.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.request.headers.extend(headers);
        self
    }

    pub fn set_body(mut self, body: RequestContent) -> Self {
        self.request.body = Some(body);
        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
