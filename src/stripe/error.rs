//! Stripe 请求错误分类

use reqwest::StatusCode;
use serde::Deserialize;

/// Stripe 错误响应体：`{"error": {...}}`
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: ErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorDetail {
    /// authentication_error / invalid_request_error / api_error ...
    #[serde(rename = "type", default)]
    kind: Option<String>,
    /// 结构化错误码，如 resource_missing
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("no such resource: {0}")]
    NotFound(String),

    #[error("HTTP {status} - {message}")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StripeError {
    /// 根据非 2xx 响应构造错误
    ///
    /// 优先使用结构化的 `type`/`code`，仅在两者都缺失时按消息文本 "No such" 判断资源不存在。
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_default();

        let message = detail
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body.trim().to_string()
                }
            });

        if status == StatusCode::UNAUTHORIZED
            || detail.kind.as_deref() == Some("authentication_error")
        {
            return Self::Authentication(message);
        }

        let structured_missing = detail.code.as_deref() == Some("resource_missing");
        let no_structured_signal = detail.code.is_none() && detail.kind.is_none();
        if structured_missing
            || status == StatusCode::NOT_FOUND
            || (no_structured_signal && message.contains("No such"))
        {
            return Self::NotFound(message);
        }

        Self::Api {
            status,
            code: detail.code,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}
