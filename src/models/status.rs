use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const MESSAGE: &str = "Funcionando!";

/// Body written by the status handler on every invocation.
///
/// `method` stays `None` when the request carries no method; it then
/// serializes as `null` so the key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
    pub method: Option<String>,
    pub timestamp: String,
}

impl ResponseBody {
    pub fn new(method: Option<&str>, at: DateTime<Utc>) -> Self {
        Self {
            message: MESSAGE.to_string(),
            method: method.map(str::to_string),
            timestamp: iso_timestamp(at),
        }
    }

    pub fn now(method: Option<&str>) -> Self {
        Self::new(method, Utc::now())
    }
}

impl From<ResponseBody> for Value {
    fn from(body: ResponseBody) -> Self {
        json!({
            "message": body.message,
            "method": body.method,
            "timestamp": body.timestamp,
        })
    }
}

/// Formats as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
