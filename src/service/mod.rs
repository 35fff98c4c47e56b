pub mod account_service;
pub mod admin_service;
pub mod challenge_service;
pub mod contest_service;
pub mod forms;
pub mod site_service;
pub mod user_service;

/// Status and decoded envelope of a handler's response.
#[cfg(test)]
pub async fn read_response(
    r: crate::types::links::ResponseResult,
) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::response::IntoResponse;
    let resp = match r {
        Ok(resp) => resp,
        Err(e) => e.into_response(),
    };
    let status = resp.status();
    let bytes = hyper::body::to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
