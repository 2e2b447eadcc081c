use crate::errors::CivicError;
use crate::requests::{ApiRequest, FormPart, FormValue, RequestBody};
use crate::responses::{ApiResponse, RawOutcome};
use crate::transport::Transport;
use crate::utils::is_dot_segment;

use async_trait::async_trait;
use log::Level;
use logging_timer::{finish, timer};
use reqwest::multipart::{Form, Part};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// An HTTP session against one backend host.
#[derive(Debug)]
pub struct Session {
    pub(crate) client: reqwest::Client,
    pub(crate) host: String,
}

impl Session {

    pub fn new(client: reqwest::Client, host: &str) -> Self {
        Session {
            client,
            host: host.trim_end_matches('/').to_owned(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse<serde_json::Value>, CivicError> {
        let method = request.method.clone();
        let path = request.path.clone();
        let req = self.build_request(request)?;

        let timer = timer!(Level::Debug; "REQUEST", "{} {}", method, path);

        let res = self.client
            .execute(req).await
            .map_err(|e| {
                log::error!("Request {method} {path} failed: {e}");
                CivicError::TransportError(e.into())
            })?;

        let status = res.status();
        let text = res
            .text().await
            .map_err(|e| CivicError::TransportError(e.into()))?;

        finish!(timer, "{} {} returned {}", method, path, status);

        match serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
            Ok(envelope) => {
                if !status.is_success() {
                    log::warn!("{method} {path} returned {status}: {}", envelope.message);
                }
                Ok(envelope)
            }
            Err(e) if status.is_success() => {
                log::error!("Failed to read {method} {path} due to deserialization error.");
                Err(CivicError::new_deserialization_error_with_value(e.into(), text))
            }
            Err(_) => {
                log::warn!("{method} {path} returned {status} without an envelope");
                Err(CivicError::StatusError { status: status.as_u16(), body: text })
            }
        }
    }

    fn build_request(&self, request: ApiRequest) -> Result<reqwest::Request, CivicError> {
        if request.path.split('/').any(is_dot_segment) {
            return Err(CivicError::ConfigurationError(
                anyhow::anyhow!("Path {} contains a dot segment", request.path)
            ));
        }

        let url = self.get_url(&request.path, &request.query_string()?);

        let builder = self.client
            .request(request.method, &url)
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(parts) => builder.multipart(make_form(parts)?),
        };

        builder
            .build()
            .map_err(|e| CivicError::ConfigurationError(e.into()))
    }

    fn get_url(&self, path: &str, query: &str) -> String {
        let url = if query.is_empty() {
            format!("{}{path}", self.host)
        }
        else {
            format!("{}{path}?{query}", self.host)
        };
        log::debug!("Using url {url}");
        url
    }

}

#[async_trait]
impl Transport for Session {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        self.dispatch(request).await.into()
    }
}

fn make_form(parts: Vec<FormPart>) -> Result<Form, CivicError> {
    parts.into_iter().try_fold(Form::new(), |form, part| {
        let form = match part.value {
            FormValue::Text(text) => form.text(part.name, text),
            FormValue::File(upload) => {
                let file = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.mime)
                    .map_err(|e| CivicError::ConfigurationError(e.into()))?;
                form.part(part.name, file)
            }
        };
        Ok(form)
    })
}
