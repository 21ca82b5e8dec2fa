use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::strings::domain::StringService;

#[derive(Clone)]
pub struct AppState {
    pub(crate) string_service: Arc<dyn StringService>,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(string_service: Arc<dyn StringService>,
               catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            string_service,
            catalog_service,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

// json_to_server_error maps a request body that could not be decoded to a failed response.
pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("malformed request: {}", err))
}

// decode_request decodes a request body the way a lenient JSON client expects:
// object keys match field names regardless of letter case, and a null body or null
// member leaves the corresponding fields at their zero values. Request types therefore
// use lowercase field names for deserialization and `#[serde(default)]`.
pub(crate) fn decode_request<Req: DeserializeOwned>(body: &[u8]) -> Result<Req, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    let value = match value {
        Value::Null => Value::Object(Map::new()),
        other => fold_keys(other),
    };
    serde_json::from_value(value)
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.to_lowercase(), fold_keys(v)))
            .collect()),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

// bind decodes the raw body into the command's request, runs the command and hands back
// its response for JSON encoding. Decoding is the only step that can fail.
pub(crate) async fn bind<Req, Res, C>(route: &'static str, cmd: C, body: &[u8]) -> Result<Json<Res>, ServerError>
    where Req: DeserializeOwned + Send + 'static,
          Res: Serialize + Send,
          C: Command<Req, Res> + Send + Sync {
    let request_id = Uuid::new_v4();
    async move {
        let req: Req = decode_request(body).map_err(|err| {
            warn!("rejecting malformed request: {}", err);
            json_to_server_error(err)
        })?;
        let res = cmd.execute(req).await;
        debug!("request served");
        Ok(Json(res))
    }.instrument(info_span!("rpc", route, %request_id)).await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde::{Deserialize, Serialize};
    use crate::core::command::Command;
    use crate::core::controller::{bind, decode_request};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct EchoRequest {
        s: String,
    }

    #[derive(Debug, Serialize)]
    struct EchoResponse {
        v: String,
    }

    struct EchoCommand {}

    #[async_trait]
    impl Command<EchoRequest, EchoResponse> for EchoCommand {
        async fn execute(&self, req: EchoRequest) -> EchoResponse {
            EchoResponse { v: req.s }
        }
    }

    #[tokio::test]
    async fn test_should_bind_command() {
        let res = bind("/echo", EchoCommand {}, br#"{"s":"hi"}"#).await.expect("should run command");
        assert_eq!("hi", res.0.v.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_body() {
        let res: Result<_, _> = bind::<EchoRequest, EchoResponse, _>("/echo", EchoCommand {}, b"{\"s\":").await;
        let (status, message) = res.expect_err("should reject body");
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(message.starts_with("malformed request"));
    }

    #[tokio::test]
    async fn test_should_reject_wrong_shape() {
        let res = bind::<EchoRequest, EchoResponse, _>("/echo", EchoCommand {}, br#"{"s":5}"#).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_decode_null_body_as_zero_values() {
        let req: EchoRequest = decode_request(b"null").expect("should decode null");
        assert!(req.s.is_empty());
        let req: EchoRequest = decode_request(br#"{"s":null}"#).expect("should decode null member");
        assert!(req.s.is_empty());
    }

    #[tokio::test]
    async fn test_should_match_keys_regardless_of_case() {
        let req: EchoRequest = decode_request(br#"{"S":"upper key"}"#).expect("should decode");
        assert_eq!("upper key", req.s.as_str());
    }

    #[tokio::test]
    async fn test_should_still_reject_invalid_json() {
        assert!(decode_request::<EchoRequest>(b"").is_err());
        assert!(decode_request::<EchoRequest>(b"[1,").is_err());
        assert!(decode_request::<EchoRequest>(br#""text""#).is_err());
    }
}
