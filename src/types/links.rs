use super::error_response::ErrorResponse;
use serde_json::{Map, Value as Json};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type JsonMap = Map<String, Json>;
pub type ResponseResult = Result<axum::response::Response, ErrorResponse>;
pub type Db = Arc<RwLock<crate::dao::database::Database>>;
