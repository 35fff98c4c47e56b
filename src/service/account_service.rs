use crate::service::forms::{from_validation_errors, AdminLoginForm, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::constants;
use crate::dao::{crud, user_dao};
use crate::model::user::User;
use crate::types::{error_response::ErrorResponse, links::{Db, ResponseResult}, response::Response};
use crate::utils::{generator, jwt::{self, UserToken}};
use validator::Validate;
use serde::Serialize;
use axum::{
    extract::{Form, Extension},
    http::HeaderValue,
    response::IntoResponse
};

// fixed id of the demo administrator's session, outside every table
pub const ADMIN_ID: i64 = 0;

#[derive(Serialize, Debug)]
pub struct AccountInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
}

fn validated<T: Validate>(form: &T) -> Result<(), ErrorResponse> {
    form.validate()
        .map_err(|e| ErrorResponse::bad_request_with_str(from_validation_errors(e).as_str()))
}

pub async fn login(Extension(db): Extension<Db>, Form(lf): Form<LoginForm>) -> ResponseResult {
    validated(&lf)?;
    let user = match user_dao::find_by_email(&db, lf.email.as_str()).await {
        Ok(u) => u,
        Err(_) => user_dao::create(&db, generator::name_from_email(lf.email.as_str()).as_str(), lf.email.as_str()).await?,
    };
    tracing::info!("user {} logged in", user.id);
    account_info_response(&user)
}

pub async fn register(Extension(db): Extension<Db>, Form(rf): Form<RegisterForm>) -> ResponseResult {
    validated(&rf)?;
    if user_dao::email_taken(&db, rf.email.as_str()).await? {
        return Err(ErrorResponse::bad_request_with_str("Email is already registered"));
    }
    let user = user_dao::create(&db, rf.name.trim(), rf.email.as_str()).await?;
    account_info_response(&user)
}

pub async fn logout() -> ResponseResult {
    Ok(Response::from_msg("Logged out").into_response())
}

pub async fn autologin(Extension(db): Extension<Db>, Extension(token_data): Extension<UserToken>) -> ResponseResult {
    if token_data.is_admin() {
        return admin_info_response(token_data.email);
    }
    let user = crud::get_object::<User>(&db, token_data.id).await?;
    account_info_response(&user)
}

pub async fn admin_login(Form(af): Form<AdminLoginForm>) -> ResponseResult {
    validated(&af)?;
    tokio::time::sleep(*constants::ADMIN_LOGIN_DELAY).await;
    if af.email != *constants::ADMIN_EMAIL || af.password != *constants::ADMIN_PASSWORD {
        tracing::warn!("rejected admin login for {}", af.email);
        return Err(ErrorResponse::unauthorized_with_str("Invalid admin credentials."));
    }
    tracing::info!("admin {} logged in", af.email);
    admin_info_response(af.email)
}

pub async fn forgot_password(Form(ff): Form<ForgotPasswordForm>) -> ResponseResult {
    validated(&ff)?;
    tokio::time::sleep(*constants::FORGOT_PASSWORD_DELAY).await;
    Ok(Response::from_msg("Email sent!").into_response())
}

fn admin_info_response(email: String) -> ResponseResult {
    session_response(AccountInfo {
        id: ADMIN_ID,
        name: "Admin".into(),
        avatar: "AD".into(),
        email,
        role: constants::ADMIN.into(),
    })
}

pub fn account_info_response(user: &User) -> ResponseResult {
    session_response(AccountInfo {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        avatar: user.avatar.clone(),
        role: user.role.clone(),
    })
}

/// The account as data, its fresh session in the token header.
fn session_response(info: AccountInfo) -> ResponseResult {
    let token_data = UserToken::from(info.id, info.name.clone(), info.email.clone(), info.role.clone());
    let token = jwt::encode(&token_data)?;

    let mut resp = Response::from(info).into_response();
    resp.headers_mut().insert(
        constants::HEAD_TOKEN_NAME,
        HeaderValue::from_str(token.as_str())
            .map_err(|e| ErrorResponse::server_error_with_str(e.to_string().as_str()))?,
    );
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::database::test_db;
    use crate::service::read_response;
    use axum::http::StatusCode;

    fn admin_form(email: &str, password: &str) -> Form<AdminLoginForm> {
        Form(AdminLoginForm {
            email: email.into(),
            password: password.into(),
        })
    }

    fn session_of(r: &ResponseResult) -> UserToken {
        let resp = r.as_ref().unwrap();
        let token = resp.headers().get(constants::HEAD_TOKEN_NAME).unwrap().to_str().unwrap();
        jwt::decode::<UserToken>(token).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn demo_admin_credentials_open_an_admin_session() {
        let r = admin_login(admin_form("admin@bytearena.com", "admin123")).await;
        assert!(session_of(&r).is_admin());
        let (status, body) = read_response(r).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "admin");
    }

    #[tokio::test(start_paused = true)]
    async fn any_other_admin_credentials_are_rejected() {
        for (email, password) in [
            ("admin@bytearena.com", "admin1234"),
            ("root@bytearena.com", "admin123"),
            ("john@bytearena.com", "secret1"),
        ] {
            let (status, body) = read_response(admin_login(admin_form(email, password)).await).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["msg"], "Invalid admin credentials.");
        }
    }

    #[tokio::test]
    async fn login_creates_unknown_accounts() {
        let db = test_db();
        let form = |email: &str| {
            Form(LoginForm {
                email: email.into(),
                password: "secret1".into(),
            })
        };
        let r = login(Extension(db.clone()), form("john@bytearena.com")).await;
        assert_eq!(session_of(&r).id, 1);

        let before = crud::list::<User>(&db).await.len();
        let r = login(Extension(db.clone()), form("jane.doe@x.io")).await;
        let t = session_of(&r);
        assert_eq!(t.name, "jane.doe");
        assert!(!t.is_admin());
        assert_eq!(crud::list::<User>(&db).await.len(), before + 1);

        let (status, _) = read_response(login(Extension(db), form("not-an-email")).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_refuses_taken_emails() {
        let db = test_db();
        let form = |email: &str| {
            Form(RegisterForm {
                name: "Jane Doe".into(),
                email: email.into(),
                password: "secret1".into(),
            })
        };
        let r = register(Extension(db.clone()), form("jane@x.io")).await;
        assert_eq!(session_of(&r).name, "Jane Doe");
        let (status, _) = read_response(register(Extension(db.clone()), form("jane@x.io")).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = read_response(register(Extension(db), form("john@bytearena.com")).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn autologin_refreshes_the_session() {
        let db = test_db();
        let t = UserToken::from(1, "John Doe".into(), "john@bytearena.com".into(), constants::USER.into());
        let r = autologin(Extension(db.clone()), Extension(t)).await;
        assert_eq!(session_of(&r).email, "john@bytearena.com");

        let admin = UserToken::from(ADMIN_ID, "Admin".into(), "admin@bytearena.com".into(), constants::ADMIN.into());
        assert!(session_of(&autologin(Extension(db), Extension(admin)).await).is_admin());
    }

    #[tokio::test(start_paused = true)]
    async fn forgot_password_always_sends() {
        let form = Form(ForgotPasswordForm {
            email: "john@bytearena.com".into(),
        });
        let (status, body) = read_response(forgot_password(form).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Email sent!");
    }
}
