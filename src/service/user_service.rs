use super::forms::{from_validation_errors, ProfileForm};
use crate::dao::{crud, dashboard_dao as dd, submission_dao as sd, user_dao as ud};
use crate::dao::user_dao::LeaderboardFilter;
use crate::model::submission::SubmissionView;
use crate::model::user::User;
use crate::types::{
    error_response::ErrorResponse,
    links::{Db, JsonMap, ResponseResult},
    response::Response
};
use crate::utils::{generator, jwt::UserToken};
use serde_json::Value as Json;
use validator::Validate;
use axum::{
    extract::{Extension, Json as AxumJson, Path, Query},
    response::IntoResponse
};

pub async fn leaderboard(Extension(db): Extension<Db>, Query(f): Query<LeaderboardFilter>) -> ResponseResult {
    Ok(Response::from(ud::leaderboard(&db, &f).await?).into_response())
}

pub async fn dashboard(Extension(db): Extension<Db>, Extension(token_data): Extension<UserToken>) -> ResponseResult {
    let now = chrono::Local::now();
    let d = dd::dashboard(&db, token_data.id, now.timestamp_millis(), now.naive_local().date()).await?;
    Ok(Response::from(d).into_response())
}

pub async fn submissions(Extension(db): Extension<Db>, Extension(token_data): Extension<UserToken>) -> ResponseResult {
    let now = chrono::Local::now().timestamp_millis();
    let v: Vec<SubmissionView> = sd::of_user(&db, token_data.id)
        .await
        .iter()
        .map(|s| SubmissionView::from(s, now))
        .collect();
    Ok(Response::from(v).into_response())
}

async fn profile_of(db: &Db, uid: i64, with_email: bool) -> Result<JsonMap, ErrorResponse> {
    let user = crud::get_object::<User>(db, uid).await?;
    let rank = ud::rank_of(db, uid).await?;
    let mut mp: JsonMap = user.into();
    if !with_email {
        mp.remove("email");
    }
    mp.insert("rank".into(), Json::from(rank));
    Ok(mp)
}

pub async fn get_profile(Extension(db): Extension<Db>, Extension(token_data): Extension<UserToken>) -> ResponseResult {
    Ok(Response::from(profile_of(&db, token_data.id, true).await?).into_response())
}

/// Someone else's profile, without contact details.
pub async fn get_user(Extension(db): Extension<Db>, Path(uid): Path<i64>) -> ResponseResult {
    Ok(Response::from(profile_of(&db, uid, false).await?).into_response())
}

pub async fn update_profile(
    Extension(db): Extension<Db>,
    Extension(token_data): Extension<UserToken>,
    AxumJson(body): AxumJson<ProfileForm>,
) -> ResponseResult {
    if let Err(e) = body.validate() {
        return Err(ErrorResponse::bad_request_with_str(
            from_validation_errors(e).as_str(),
        ));
    }
    let mut update_map = JsonMap::new();
    if let Some(name) = body.name {
        update_map.insert("avatar".into(), Json::String(generator::initials(name.as_str())));
        update_map.insert("name".into(), Json::String(name));
    }
    if let Some(bio) = body.bio {
        update_map.insert("bio".into(), Json::String(bio));
    }
    if let Some(location) = body.location {
        update_map.insert("location".into(), Json::String(location));
    }
    if let Some(skills) = body.skills {
        update_map.insert("skills".into(), Json::from(skills));
    }
    crud::update_by_map::<User>(&db, token_data.id, &update_map).await?;
    Ok(Response::new("Profile updated", profile_of(&db, token_data.id, true).await?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use crate::dao::database::test_db;
    use crate::dao::seed::DEMO_USER_ID;
    use crate::service::read_response;
    use axum::http::StatusCode;

    fn john() -> Extension<UserToken> {
        Extension(UserToken::from(
            DEMO_USER_ID,
            "John Doe".into(),
            "john@bytearena.com".into(),
            constants::USER.into(),
        ))
    }

    #[tokio::test]
    async fn public_profiles_hide_the_email() {
        let db = test_db();
        let (_, own) = read_response(get_profile(Extension(db.clone()), john()).await).await;
        assert_eq!(own["data"]["email"], "john@bytearena.com");
        assert_eq!(own["data"]["rank"], 11);

        let (status, other) = read_response(get_user(Extension(db.clone()), Path(DEMO_USER_ID)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert!(other["data"].get("email").is_none());
        assert_eq!(other["data"]["name"], "John Doe");

        let (status, _) = read_response(get_user(Extension(db), Path(-5)).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_edits_are_validated_and_saved() {
        let db = test_db();
        let form = ProfileForm {
            name: Some("Johnny Doe".into()),
            location: Some("Berlin".into()),
            ..Default::default()
        };
        let (status, v) = read_response(update_profile(Extension(db.clone()), john(), AxumJson(form)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["location"], "Berlin");
        assert!(!v["data"]["bio"].as_str().unwrap().is_empty());
        let saved = crud::get_object::<User>(&db, DEMO_USER_ID).await.unwrap();
        assert_eq!(saved.name, "Johnny Doe");

        let form = ProfileForm {
            bio: Some("b".repeat(300)),
            ..Default::default()
        };
        let (status, _) = read_response(update_profile(Extension(db), john(), AxumJson(form)).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submissions_are_newest_first() {
        let (_, v) = read_response(submissions(Extension(test_db()), john()).await).await;
        let rows = v["data"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["time"], "2 hours ago");
        assert_eq!(rows[4]["time"], "3 days ago");
    }

    #[tokio::test]
    async fn leaderboard_rejects_unknown_periods() {
        let f = LeaderboardFilter {
            period: Some("Forever".into()),
            ..Default::default()
        };
        let (status, _) = read_response(leaderboard(Extension(test_db()), Query(f)).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
