use axum::{
    http::{HeaderMap, Request},
    response::IntoResponse
};
use crate::constants;
use crate::utils::jwt::{self, UserToken};
use axum_extra::middleware::{Next};

/// The session carried by a valid `Authorization: Bearer` header.
pub fn session_from_headers(headers: &HeaderMap) -> Option<UserToken> {
    let token = headers.get(constants::AUTHORIZATION)?.to_str().ok()?;
    if !(token.starts_with("bearer") || token.starts_with("Bearer")) {
        return None;
    }
    jwt::decode::<UserToken>(token[6..].trim()).ok()
}

pub async fn token_decode<B>(mut req: Request<B>, next: Next<B>) -> impl IntoResponse {
    if let Some(claims) = session_from_headers(req.headers()) {
        req.extensions_mut().insert(claims);
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    fn headers(v: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::AUTHORIZATION, HeaderValue::from_str(v).unwrap());
        h
    }

    #[test]
    fn bearer_tokens_become_sessions() {
        let t = UserToken::from(1, "John Doe".into(), "john@bytearena.com".into(), constants::USER.into());
        let token = jwt::encode(&t).unwrap();
        assert_eq!(session_from_headers(&headers(format!("Bearer {}", token).as_str())), Some(t.clone()));
        assert_eq!(session_from_headers(&headers(format!("bearer  {}", token).as_str())), Some(t));
    }

    #[test]
    fn anything_else_is_anonymous() {
        assert_eq!(session_from_headers(&HeaderMap::new()), None);
        assert_eq!(session_from_headers(&headers("Bearer nonsense")), None);
        assert_eq!(session_from_headers(&headers("Basic am9objpwdw==")), None);
    }
}
