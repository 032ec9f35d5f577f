use crate::adapters::request::parse_birth_input;
use crate::core::chart::ChartEngine;
use crate::domain::model::Chart;
use crate::utils::error::{BaziError, Result};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn from_error(err: &BaziError) -> Self {
        Self::error(err.status_code(), err.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn chart_to_json(chart: &Chart) -> Result<Value> {
    Ok(serde_json::to_value(chart)?)
}

/// POST calculates a chart, GET reports liveness, anything else is 405.
pub fn handle_request(engine: &ChartEngine, method: &str, body: Option<&str>) -> ApiResponse {
    tracing::info!("{} request received", method);

    match method.to_ascii_uppercase().as_str() {
        "POST" => match calculate(engine, body) {
            Ok(chart) => ApiResponse::ok(chart),
            Err(e) => {
                tracing::warn!("Chart calculation failed: {}", e);
                ApiResponse::from_error(&e)
            }
        },
        "GET" => ApiResponse::ok(json!({ "status": "ok" })),
        _ => {
            let err = BaziError::MethodNotAllowed {
                method: method.to_string(),
            };
            tracing::warn!("{}", err);
            ApiResponse::error(err.status_code(), "Method not allowed")
        }
    }
}

fn calculate(engine: &ChartEngine, body: Option<&str>) -> Result<Value> {
    let input = parse_birth_input(body)?;
    let chart = engine.calculate(&input)?;
    chart_to_json(&chart)
}
