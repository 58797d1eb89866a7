// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use krishi_core::{EngineError, EngineErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidInput,
    NotFound,
    SourceUnavailable,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SourceUnavailable => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EngineErrorCode> for ApiErrorCode {
    fn from(code: EngineErrorCode) -> Self {
        match code {
            EngineErrorCode::InvalidInput => Self::InvalidInput,
            EngineErrorCode::NotFound => Self::NotFound,
            EngineErrorCode::SourceUnavailable => Self::SourceUnavailable,
            _ => Self::Internal,
        }
    }
}

/// Wire error envelope. Every non-2xx body is `{"error": ApiError}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn from_engine(err: &EngineError, request_id: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::from(err.code),
            err.message.clone(),
            Value::Null,
            request_id,
        )
    }

    #[must_use]
    pub fn invalid_param(name: &str, reason: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::InvalidInput,
            format!("invalid parameter: {name}"),
            json!({"field_errors":[{"parameter": name, "reason": reason}]}),
            request_id,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        (status, Json(json!({"error": self}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_codes_map_to_http_statuses() {
        let err = EngineError::not_found("no crop");
        let api = ApiError::from_engine(&err, "req-000001");
        assert_eq!(api.code, ApiErrorCode::NotFound);
        assert_eq!(api.code.status(), StatusCode::NOT_FOUND);

        assert_eq!(
            ApiErrorCode::from(EngineErrorCode::SourceUnavailable).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiErrorCode::from(EngineErrorCode::InvalidInput).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn envelope_serializes_snake_case_codes() {
        let api = ApiError::invalid_param("area_acres", "must be positive", "req-000002");
        let value = serde_json::to_value(&api).unwrap();
        assert_eq!(value["code"], "invalid_input");
        assert_eq!(value["request_id"], "req-000002");
    }
}
