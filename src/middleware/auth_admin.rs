use axum::{
    http::Request,
    response::IntoResponse
};
use crate::utils::jwt::UserToken;
use crate::types::error_response::ErrorResponse;
use super::auth_login::LOGIN_REQUIRED;

use axum_extra::middleware::{Next};

pub async fn auth_admin<B>(req: Request<B>, next: Next<B>) -> impl IntoResponse {
    match req.extensions().get::<UserToken>() {
        Some(token_data) => {
            match token_data.is_admin() {
                true => Ok(next.run(req).await),
                _ => Err(ErrorResponse::forbidden_with_str("Admin access required.")),
            }
        }
        _ => Err(ErrorResponse::unauthorized_with_str(LOGIN_REQUIRED)),
    }
}
