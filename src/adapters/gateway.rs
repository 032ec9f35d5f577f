use crate::adapters::http::{handle_request, ApiResponse};
use crate::core::chart::ChartEngine;
use crate::utils::error::{BaziError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway proxy event. Covers the REST (v1) and HTTP API (v2) shapes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    pub http_method: Option<String>,
    pub request_context: Option<RequestContext>,
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: Option<String>,
}

impl GatewayEvent {
    pub fn method(&self) -> Option<&str> {
        self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|c| c.http.as_ref())
                .and_then(|h| h.method.as_deref())
        })
    }

    pub fn text_body(&self) -> Result<Option<&str>> {
        if self.is_base64_encoded {
            return Err(BaziError::InvalidRequest {
                message: "base64-encoded bodies are not supported".to_string(),
            });
        }
        Ok(self.body.as_deref())
    }
}

/// Only a POST reads the body, so the base64 check does not affect GET or 405 answers.
/// An event with no method is answered 405.
pub fn handle_event(engine: &ChartEngine, event: &GatewayEvent) -> GatewayResponse {
    let method = event.method().unwrap_or_default();
    let response = if method.eq_ignore_ascii_case("POST") {
        match event.text_body() {
            Ok(body) => handle_request(engine, method, body),
            Err(e) => ApiResponse::from_error(&e),
        }
    } else {
        handle_request(engine, method, None)
    };
    GatewayResponse::from(response)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<ApiResponse> for GatewayResponse {
    fn from(response: ApiResponse) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status_code: response.status,
            headers,
            body: response.body.to_string(),
        }
    }
}
