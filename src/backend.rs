use crate::{error::Error, Action};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

/// Fallback message when a non-2xx payload carries no recognizable field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Raw state reported by a backend: a flat grid index for discrete
/// environments, an observation vector for continuous ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawState {
    Index(i64),
    Vector(Vec<f64>),
}

impl RawState {
    pub fn index(&self) -> Option<i64> {
        if let Self::Index(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn vector(&self) -> Option<&[f64]> {
        if let Self::Vector(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Successful `/reset` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct InitialState {
    /// Rendered frame as a base64-encoded PNG; backends may omit it.
    pub image: Option<String>,
    pub state: RawState,
}

/// Successful `/step` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StepResult {
    pub image: Option<String>,
    /// Human-readable label of the move the backend performed.
    #[serde(rename = "move")]
    pub move_label: String,
    pub state: RawState,
    pub done: bool,
}

/// The two remote operations a simulation backend exposes. The session
/// controller is written against this trait so it can be exercised without
/// a live server.
pub trait Backend {
    fn reset(&self) -> Result<InitialState, Error>;
    fn step(&self, action: Action) -> Result<StepResult, Error>;
}

impl<B: Backend> Backend for &B {
    fn reset(&self) -> Result<InitialState, Error> {
        (**self).reset()
    }

    fn step(&self, action: Action) -> Result<StepResult, Error> {
        (**self).step(action)
    }
}

/// HTTP binding of [`Backend`] against one environment origin.
///
/// Calls are blocking and issued one at a time by the caller; there is no
/// client-side timeout, retry, or cancellation.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.replace("//localhost:", "//127.0.0.1:");
        if base_url.ends_with('/') {
            _ = base_url.remove(base_url.len() - 1);
        }

        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<T>(&self, path: &str, body: Option<Value>, error_key: &str) -> Result<T, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{path}", self.base_url);
        let mut req = self
            .client
            .post(&url)
            .headers(Self::construct_common_headers());
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req.send().map_err(|e| {
            tracing::warn!(%url, error = %e, "backend unreachable");
            Error::Connect
        })?;

        let status = res.status();
        if !status.is_success() {
            let payload = res.json::<Value>().map_err(|_| Error::Connect)?;
            let message = error_message(&payload, error_key);
            tracing::warn!(%url, %status, %message, "backend rejected request");
            return Err(Error::Backend(message));
        }

        res.json::<T>().map_err(|e| {
            tracing::warn!(%url, error = %e, "unreadable backend response");
            Error::Connect
        })
    }

    fn construct_common_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

impl Backend for HttpBackend {
    fn reset(&self) -> Result<InitialState, Error> {
        self.post("/reset", None, "error")
    }

    fn step(&self, action: Action) -> Result<StepResult, Error> {
        self.post("/step", Some(json!({ "action": action })), "detail")
    }
}

/// The two backends use different error-payload conventions (`error` for the
/// grid service, `detail` for the lander service); accept either, preferring
/// the one the operation expects.
fn error_message(payload: &Value, preferred: &str) -> String {
    for key in [preferred, "error", "detail"] {
        if let Some(message) = payload.get(key).and_then(Value::as_str) {
            return message.to_string();
        }
    }

    UNKNOWN_ERROR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_operation_key() {
        let payload = json!({ "error": "bad map", "detail": "bad action" });
        assert_eq!(error_message(&payload, "detail"), "bad action");
        assert_eq!(error_message(&payload, "error"), "bad map");
    }

    #[test]
    fn error_message_falls_back_across_conventions() {
        let payload = json!({ "detail": "Invalid action" });
        assert_eq!(error_message(&payload, "error"), "Invalid action");
    }

    #[test]
    fn error_message_defaults_when_field_absent() {
        assert_eq!(error_message(&json!({}), "error"), UNKNOWN_ERROR);
        assert_eq!(error_message(&json!({ "error": 42 }), "error"), UNKNOWN_ERROR);
    }

    #[test]
    fn raw_state_accepts_flat_index() {
        let state: RawState = serde_json::from_value(json!(9)).unwrap();
        assert_eq!(state.index(), Some(9));
        assert_eq!(state.vector(), None);
    }

    #[test]
    fn raw_state_accepts_observation_vector() {
        use float_eq::assert_float_eq;

        let state: RawState = serde_json::from_value(json!([0.1, -0.5, 0.0])).unwrap();
        assert_eq!(state.index(), None);

        let v = state.vector().unwrap();
        assert_eq!(v.len(), 3);
        assert_float_eq!(v[0], 0.1, rmax <= 1e-15);
        assert_float_eq!(v[1], -0.5, rmax <= 1e-15);
        assert_float_eq!(v[2], 0.0, abs <= 1e-15);
    }

    #[test]
    fn step_result_tolerates_missing_image() {
        let result: StepResult = serde_json::from_value(json!({
            "move": "Down",
            "state": 8,
            "done": false,
        }))
        .unwrap();
        assert!(result.image.is_none());
        assert_eq!(result.move_label, "Down");
    }
}
