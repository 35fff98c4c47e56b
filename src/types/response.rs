use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use axum::{
    Json as AxumJson,
    response::{
        IntoResponse,
        Response as AxumResponse
    }
};

pub const OK: &str = "ok";

/// The `{msg, data}` envelope every endpoint answers with. Errors carry
/// `data: null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response<T: Serialize> {
    pub msg: String,
    pub data: T,
}

impl<T> Response<T>
    where
        T: Serialize,
{
    pub fn new(message: &str, data: T) -> Self {
        Self {
            msg: message.to_string(),
            data,
        }
    }
    pub fn from(data: T) -> Self {
        Self::new(OK, data)
    }
}

impl Response<Json> {
    /// A message with nothing attached, e.g. "Logged out".
    pub fn from_msg(msg: &str) -> Self {
        Self::new(msg, Json::Null)
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        AxumJson::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape() {
        let v = serde_json::to_value(Response::from(vec![1, 2])).unwrap();
        assert_eq!(v, json!({ "msg": "ok", "data": [1, 2] }));
        let v = serde_json::to_value(Response::from_msg("Email sent!")).unwrap();
        assert_eq!(v, json!({ "msg": "Email sent!", "data": null }));
    }
}
