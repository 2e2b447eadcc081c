pub mod auth;
pub mod comment;
pub mod engagement;
pub mod initiative;
pub mod post;

use crate::errors::CivicError;

use reqwest::Method;
use serde::de::DeserializeOwned;

/// A single backend endpoint.
///
/// Each operation knows how to describe itself as an [`ApiRequest`] and which
/// payload type the `data` field of a successful envelope decodes into.
pub trait Operation {
    type Output: DeserializeOwned;

    fn into_request(self) -> ApiRequest;
}

#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {

    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Encodes the query pairs in insertion order, without the leading `?`.
    pub fn query_string(&self) -> Result<String, CivicError> {
        serde_urlencoded::to_string(&self.query)
            .map_err(|e| CivicError::ConfigurationError(e.into()))
    }
}

#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart { name: name.into(), value: FormValue::Text(value.into()) }
    }

    pub fn file(name: impl Into<String>, upload: Upload) -> Self {
        FormPart { name: name.into(), value: FormValue::File(upload) }
    }
}

#[derive(Debug)]
pub enum FormValue {
    Text(String),
    File(Upload),
}

/// An in-memory file attached to a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Upload {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}
