use crate::constants;
use crate::dao::{challenge_dao as chd, submission_dao as sd};
use crate::dao::challenge_dao::ChallengeFilter;
use crate::types::{error_response::ErrorResponse, links::{Db, ResponseResult}, response::Response};
use crate::utils::{judger, jwt::UserToken};
use serde::Deserialize;
use serde_json::json;
use axum::{
    extract::{Extension, Json, Path, Query},
    response::IntoResponse
};

pub const LOGIN_TO_JUDGE: &str = "Please login to run or submit your code.";

pub async fn list(Extension(db): Extension<Db>, Query(f): Query<ChallengeFilter>) -> ResponseResult {
    let challenges = chd::filter(&db, &f).await;
    Ok(Response::from(json!({
        "total": challenges.len(),
        "challenges": challenges,
        "difficulties": constants::DIFFICULTIES,
        "categories": constants::CATEGORIES,
    }))
        .into_response())
}

/// The problem statement with every test case still pending.
pub async fn detail(Extension(db): Extension<Db>, Path(id): Path<i64>) -> ResponseResult {
    let c = chd::get(&db, id).await?;
    let results = judger::pending(&c.test_cases);
    Ok(Response::from(json!({ "challenge": c, "results": results })).into_response())
}

pub async fn leaderboard(Extension(db): Extension<Db>, Path(id): Path<i64>) -> ResponseResult {
    Ok(Response::from(chd::get(&db, id).await?.solvers).into_response())
}

pub async fn languages() -> ResponseResult {
    let languages: Vec<_> = constants::LANGUAGES
        .iter()
        .map(|l| json!({ "id": l.id, "name": l.name, "template": l.template }))
        .collect();
    Ok(Response::from(json!({
        "default": constants::DEFAULT_LANGUAGE,
        "languages": languages,
    }))
        .into_response())
}

#[derive(Deserialize, Debug)]
pub struct CodeBody {
    pub language: String,
    #[serde(default)]
    pub code: String,
}

fn check_judge_request(session: Option<Extension<UserToken>>, body: &CodeBody) -> Result<UserToken, ErrorResponse> {
    let Extension(token) = session.ok_or_else(|| ErrorResponse::unauthorized_with_str(LOGIN_TO_JUDGE))?;
    if constants::find_language(body.language.as_str()).is_none() {
        return Err(ErrorResponse::bad_request_with_str(
            format!("Unsupported language {}", body.language).as_str(),
        ));
    }
    Ok(token)
}

pub async fn run(
    Extension(db): Extension<Db>,
    session: Option<Extension<UserToken>>,
    Path(id): Path<i64>,
    Json(body): Json<CodeBody>,
) -> ResponseResult {
    let token = check_judge_request(session, &body)?;
    let c = chd::get(&db, id).await?;
    tracing::debug!("user {} runs {} ({} bytes of {})", token.id, c.id, body.code.len(), body.language);
    let outcome = judger::run(&c.test_cases, *constants::RUN_DELAY).await;
    Ok(Response::from(outcome).into_response())
}

/// Every case passes and the attempt is stored as accepted. A challenge
/// without test cases is never accepted and nothing is stored.
pub async fn submit(
    Extension(db): Extension<Db>,
    session: Option<Extension<UserToken>>,
    Path(id): Path<i64>,
    Json(body): Json<CodeBody>,
) -> ResponseResult {
    let token = check_judge_request(session, &body)?;
    let c = chd::get(&db, id).await?;
    let outcome = judger::submit(&c.test_cases, *constants::SUBMIT_DELAY).await;
    if !outcome.accepted {
        return Ok(Response::from(json!({ "outcome": outcome, "submission": null })).into_response());
    }

    let submission = sd::record_accepted(&db, token.id, !token.is_admin(), c.id, body.language.as_str()).await?;
    tracing::info!("user {} solved challenge {}", token.id, c.id);
    Ok(Response::from(json!({ "outcome": outcome, "submission": submission })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{crud, database::test_db, seed::DEMO_USER_ID};
    use crate::model::challenge::Challenge;
    use crate::model::submission::CaseStatus;
    use crate::service::read_response;
    use axum::http::StatusCode;

    fn john() -> Option<Extension<UserToken>> {
        Some(Extension(UserToken::from(
            DEMO_USER_ID,
            "John Doe".into(),
            "john@bytearena.com".into(),
            constants::USER.into(),
        )))
    }

    fn body(language: &str, code: &str) -> Json<CodeBody> {
        Json(CodeBody {
            language: language.into(),
            code: code.into(),
        })
    }

    #[tokio::test]
    async fn list_reports_total_and_options() {
        let db = test_db();
        let f = ChallengeFilter {
            difficulty: Some("Hard".into()),
            ..Default::default()
        };
        let (status, v) = read_response(list(Extension(db), Query(f)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["total"], 2);
        assert_eq!(v["data"]["categories"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn detail_of_missing_challenge_is_404() {
        let (status, _) = read_response(detail(Extension(test_db()), Path(99)).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn judging_needs_a_session() {
        let db = test_db();
        let (status, v) = read_response(run(Extension(db.clone()), None, Path(1), body("python", "")).await).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(v["msg"], LOGIN_TO_JUDGE);
        let (status, _) = read_response(submit(Extension(db), None, Path(1), body("python", "")).await).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_languages_are_rejected() {
        let (status, _) = read_response(run(Extension(test_db()), john(), Path(1), body("rust", "")).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn run_outcome_ignores_the_code() {
        let db = test_db();
        let mut seen = vec![];
        for code in ["", "print(1)", "while True: pass"] {
            let (status, v) = read_response(run(Extension(db.clone()), john(), Path(1), body("python", code)).await).await;
            assert_eq!(status, StatusCode::OK);
            seen.push(v["data"].clone());
        }
        assert!(seen.windows(2).all(|w| w[0] == w[1]));
        let statuses: Vec<CaseStatus> = serde_json::from_value(
            seen[0]["results"]
                .as_array()
                .unwrap()
                .iter()
                .map(|r| r["status"].clone())
                .collect(),
        )
            .unwrap();
        assert_eq!(statuses, vec![CaseStatus::Passed, CaseStatus::Passed, CaseStatus::Failed]);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_accepts_and_records() {
        let db = test_db();
        let before = crud::get_object::<Challenge>(&db, 6).await.unwrap().submissions;
        let history = sd::of_user(&db, DEMO_USER_ID).await.len();

        let (status, v) = read_response(submit(Extension(db.clone()), john(), Path(6), body("java", "x")).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["outcome"]["accepted"], true);
        assert_eq!(v["data"]["submission"]["language"], "Java");

        assert_eq!(crud::get_object::<Challenge>(&db, 6).await.unwrap().submissions, before + 1);
        assert_eq!(sd::of_user(&db, DEMO_USER_ID).await.len(), history + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_for_a_vanished_user_writes_nothing() {
        let db = test_db();
        let ghost = Some(Extension(UserToken::from(
            999,
            "Ghost".into(),
            "ghost@bytearena.com".into(),
            constants::USER.into(),
        )));
        let rows = db.read().await.submissions.rows.len();
        let counter = crud::get_object::<Challenge>(&db, 1).await.unwrap().submissions;

        let (status, _) = read_response(submit(Extension(db.clone()), ghost, Path(1), body("python", "")).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(db.read().await.submissions.rows.len(), rows);
        assert_eq!(crud::get_object::<Challenge>(&db, 1).await.unwrap().submissions, counter);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_without_test_cases_is_not_accepted() {
        let db = test_db();
        let c = crud::get_object::<Challenge>(&db, 6).await.unwrap();
        for tc in &c.test_cases {
            chd::remove_test_case(&db, 6, tc.id).await.unwrap();
        }
        let history = sd::of_user(&db, DEMO_USER_ID).await.len();

        let (status, v) = read_response(submit(Extension(db.clone()), john(), Path(6), body("java", "x")).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["outcome"]["accepted"], false);
        assert!(v["data"]["submission"].is_null());
        assert_eq!(sd::of_user(&db, DEMO_USER_ID).await.len(), history);
        assert_eq!(crud::get_object::<Challenge>(&db, 6).await.unwrap().submissions, c.submissions);
    }
}
