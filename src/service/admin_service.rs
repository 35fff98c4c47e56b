use super::forms::from_validation_errors;
use crate::constants;
use crate::dao::{challenge_dao as chd, crud, user_dao as ud};
use crate::dao::user_dao::LeaderboardFilter;
use crate::model::challenge::{Challenge, TestCase};
use crate::types::{
    error_response::ErrorResponse,
    links::{Db, JsonMap, ResponseResult},
    response::Response
};
use crate::utils::judger;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;
use axum::{
    response::IntoResponse,
    extract::{Json as AxumJson, Path, Query, Extension}
};

fn validated(challenge: &Challenge) -> Result<(), ErrorResponse> {
    challenge
        .validate()
        .map_err(|e| ErrorResponse::bad_request_with_str(from_validation_errors(e).as_str()))
}

pub async fn challenges(Extension(db): Extension<Db>) -> ResponseResult {
    Ok(Response::from(chd::admin_rows(&db).await).into_response())
}

pub async fn create_challenge(Extension(db): Extension<Db>, AxumJson(mp): AxumJson<JsonMap>) -> ResponseResult {
    let mut challenge = Challenge::try_from(mp).map_err(|e| ErrorResponse::bad_request_with_str(e.as_str()))?;
    challenge.test_cases = chd::renumbered(challenge.test_cases);
    validated(&challenge)?;
    let created = crud::insert(&db, challenge).await?;
    tracing::info!("challenge {} created: {}", created.id, created.title);
    Ok(Response::new("Challenge created", created).into_response())
}

pub async fn get_challenge(Extension(db): Extension<Db>, Path(id): Path<i64>) -> ResponseResult {
    Ok(Response::from(chd::get(&db, id).await?).into_response())
}

/// Patches known fields. The merged record is validated before it replaces the old one.
pub async fn update_challenge(
    Extension(db): Extension<Db>,
    Path(id): Path<i64>,
    AxumJson(mp): AxumJson<JsonMap>,
) -> ResponseResult {
    let mut merged = crud::merge(chd::get(&db, id).await?, &mp)?;
    merged.test_cases = chd::renumbered(merged.test_cases);
    validated(&merged)?;
    crud::replace(&db, merged.clone()).await?;
    tracing::info!("challenge {} updated", id);
    Ok(Response::new("Challenge updated", merged).into_response())
}

pub async fn delete_challenge(Extension(db): Extension<Db>, Path(id): Path<i64>) -> ResponseResult {
    let removed = crud::delete::<Challenge>(&db, id).await?;
    tracing::info!("challenge {} deleted: {}", id, removed.title);
    Ok(Response::new("Challenge deleted", json!({ "id": removed.id })).into_response())
}

#[derive(Deserialize, Debug)]
pub struct TestCasesBody {
    pub test_cases: Vec<TestCase>,
}

pub async fn add_test_cases(
    Extension(db): Extension<Db>,
    Path(id): Path<i64>,
    AxumJson(body): AxumJson<TestCasesBody>,
) -> ResponseResult {
    Ok(Response::from(chd::add_test_cases(&db, id, body.test_cases).await?).into_response())
}

pub async fn delete_test_case(Extension(db): Extension<Db>, Path((id, tid)): Path<(i64, i64)>) -> ResponseResult {
    Ok(Response::from(chd::remove_test_case(&db, id, tid).await?).into_response())
}

#[derive(Deserialize, Debug)]
pub struct GenerateBody {
    pub provider: String,
    pub challenge_id: Option<i64>,
}

/// Canned cases numbered after the challenge's existing ones.
pub async fn generate_test_cases(Extension(db): Extension<Db>, AxumJson(body): AxumJson<GenerateBody>) -> ResponseResult {
    if !constants::AI_PROVIDERS.contains(&body.provider.as_str()) {
        return Err(ErrorResponse::bad_request_with_str(
            format!("provider must be one of {}", constants::AI_PROVIDERS.join(", ")).as_str(),
        ));
    }
    let base_id = match body.challenge_id {
        Some(id) => chd::get(&db, id).await?.test_cases.iter().map(|t| t.id).max().unwrap_or(0) + 1,
        None => 1,
    };
    let cases = judger::generate_test_cases(body.provider.as_str(), base_id, *constants::GENERATE_DELAY).await;
    Ok(Response::from(cases).into_response())
}

pub async fn students(Extension(db): Extension<Db>, Query(f): Query<LeaderboardFilter>) -> ResponseResult {
    Ok(Response::from(ud::students(&db, &f).await?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::database::test_db;
    use crate::json_map;
    use crate::service::read_response;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn create_appends_one_challenge_with_a_fresh_id() {
        let db = test_db();
        let before = crud::list::<Challenge>(&db).await;
        let mp = json_map!("title" => "Merge Intervals", "category" => "Arrays", "difficulty" => "Medium");
        let (status, v) = read_response(create_challenge(Extension(db.clone()), AxumJson(mp)).await).await;
        assert_eq!(status, StatusCode::OK);

        let id = v["data"]["id"].as_i64().unwrap();
        let after = crud::list::<Challenge>(&db).await;
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|c| c.id != id));
        assert_eq!(after.last().unwrap().title, "Merge Intervals");
    }

    #[tokio::test]
    async fn create_rejects_bad_records() {
        let db = test_db();
        for mp in [
            json_map!("title" => "", "category" => "Arrays"),
            json_map!("title" => "Knapsack", "category" => "Cooking"),
            json_map!("title" => "Knapsack", "category" => "Arrays", "points" => "many"),
        ] {
            let (status, _) = read_response(create_challenge(Extension(db.clone()), AxumJson(mp)).await).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(crud::list::<Challenge>(&db).await.len(), 6);
    }

    #[tokio::test]
    async fn update_validates_before_saving() {
        let db = test_db();
        let (status, _) = read_response(
            update_challenge(Extension(db.clone()), Path(1), AxumJson(json_map!("title" => ""))).await,
        )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(chd::get(&db, 1).await.unwrap().title, "Two Sum");

        let (status, v) = read_response(
            update_challenge(Extension(db.clone()), Path(1), AxumJson(json_map!("points" => 150))).await,
        )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["points"], 150);
        assert_eq!(chd::get(&db, 1).await.unwrap().points, 150);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_target() {
        let db = test_db();
        let (status, _) = read_response(delete_challenge(Extension(db.clone()), Path(3)).await).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = crud::list::<Challenge>(&db).await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
        let (status, _) = read_response(delete_challenge(Extension(db), Path(3)).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn generation_checks_the_provider() {
        let db = test_db();
        let body = |provider: &str| {
            AxumJson(GenerateBody {
                provider: provider.into(),
                challenge_id: Some(1),
            })
        };
        let (status, v) = read_response(generate_test_cases(Extension(db.clone()), body("gemini")).await).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = v["data"].as_array().unwrap().iter().map(|t| t["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);

        let (status, _) = read_response(generate_test_cases(Extension(db), body("claude")).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_case_round_trip_through_handlers() {
        let db = test_db();
        let body = AxumJson(TestCasesBody {
            test_cases: vec![TestCase::new(0, "[1], 1", "[0,0]")],
        });
        let (_, v) = read_response(add_test_cases(Extension(db.clone()), Path(4), body).await).await;
        assert_eq!(v["data"].as_array().unwrap().len(), 4);
        let (status, _) = read_response(delete_test_case(Extension(db.clone()), Path((4, 4))).await).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = read_response(delete_test_case(Extension(db), Path((4, 4))).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_case_ids_stay_unique_on_create_and_patch() {
        let db = test_db();
        let cases = json!([
            { "id": 1, "input": "1", "expected_output": "1" },
            { "id": 1, "input": "2", "expected_output": "2" },
            { "input": "3", "expected_output": "3" },
        ]);
        let ids = |v: &serde_json::Value| -> Vec<i64> {
            v["data"]["test_cases"].as_array().unwrap().iter().map(|t| t["id"].as_i64().unwrap()).collect()
        };

        let mp = json_map!("title" => "Jump Game", "category" => "Arrays", "test_cases" => cases.clone());
        let (status, v) = read_response(create_challenge(Extension(db.clone()), AxumJson(mp)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&v), vec![1, 2, 3]);

        let mp = json_map!("test_cases" => cases);
        let (status, v) = read_response(update_challenge(Extension(db.clone()), Path(2), AxumJson(mp)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&v), vec![1, 2, 3]);

        let left = chd::remove_test_case(&db, 2, 1).await.unwrap();
        assert_eq!(left.len(), 2);
    }
}
