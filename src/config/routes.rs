use crate::{
    middleware::{
        token_decode::token_decode,
        auth_login::auth_login,
        auth_admin::auth_admin
    },
    service::{account_service, admin_service, challenge_service, contest_service, site_service, user_service},
    types::links::Db
};
use axum::{
    AddExtensionLayer,
    Router,
    routing::{get, post},
};

use axum_extra::middleware::from_fn;

fn account_routes() -> Router {
    Router::new()
        .route(
            "/logout",
            get(account_service::logout).route_layer(from_fn(auth_login))
        )
        .route(
            "/autologin",
               get(account_service::autologin).route_layer(from_fn(auth_login))
        )
        .route("/register", post(account_service::register))
        .route("/login", post(account_service::login))
        .route("/admin_login", post(account_service::admin_login))
        .route("/forgot_password", post(account_service::forgot_password))
}

pub fn admin_routes() -> Router {
    Router::new()
        .route(
            "/challenges",
            get(admin_service::challenges).post(admin_service::create_challenge)
        )
        .route(
            "/challenge/:id",
            get(admin_service::get_challenge)
                .post(admin_service::update_challenge)
                .delete(admin_service::delete_challenge)
        )
        .route("/challenge/:id/test_cases", post(admin_service::add_test_cases))
        .route("/challenge/:id/test_case/:tid", axum::routing::delete(admin_service::delete_test_case))
        .route("/generate_test_cases", post(admin_service::generate_test_cases))
        .route("/students", get(admin_service::students))
}

// run and submit answer their own 401, so they sit outside the login layer
pub fn page_routes() -> Router {
    Router::new()
        .route("/layout", get(site_service::layout))
        .route("/landing", get(site_service::landing))
        .route("/languages", get(challenge_service::languages))
        .route("/challenges", get(challenge_service::list))
        .route("/challenge/:id", get(challenge_service::detail))
        .route("/challenge/:id/leaderboard", get(challenge_service::leaderboard))
        .route("/challenge/:id/run", post(challenge_service::run))
        .route("/challenge/:id/submit", post(challenge_service::submit))
        .route("/contests", get(contest_service::list))
        .route("/contest/:key", get(contest_service::detail))
        .route("/contest/:key/standings", get(contest_service::standings))
        .route(
            "/contest/:key/register",
            post(contest_service::register).route_layer(from_fn(auth_login))
        )
        .route("/leaderboard", get(user_service::leaderboard))
        .route("/user/:id", get(user_service::get_user))
}

pub fn user_routes() -> Router {
    Router::new()
        .route("/dashboard", get(user_service::dashboard))
        .route("/submissions", get(user_service::submissions))
        .route(
            "/profile",
            get(user_service::get_profile).post(user_service::update_profile)
        )
        .route_layer(from_fn(auth_login))
}

pub fn config_routes(db: Db) -> Router {
     Router::new()
        .nest(
            "/api",
            Router::new()
                .nest("/admin", admin_routes().route_layer(from_fn(auth_admin)))
                .merge(page_routes())
                .merge(user_routes())
                .merge(account_routes())
        )
        .route_layer(from_fn(token_decode))
        .layer(AddExtensionLayer::new(db))
}
