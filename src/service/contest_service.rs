use crate::dao::contest_dao as cd;
use crate::model::contest::{ContestCard, ContestProblem};
use crate::types::{links::{Db, ResponseResult}, response::Response};
use crate::utils::jwt::UserToken;
use serde::{Deserialize, Serialize};
use serde_json::json;
use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse
};

#[derive(Serialize)]
pub struct ContestDetail<'a> {
    #[serde(flatten)]
    pub card: ContestCard,
    pub end_time: &'a str,
    pub rules: &'a [String],
    pub problem_list: &'a [ContestProblem],
    pub registered: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct TabQuery {
    pub tab: Option<String>,
}

pub async fn list(Extension(db): Extension<Db>, Query(q): Query<TabQuery>) -> ResponseResult {
    let tab = q.tab.unwrap_or_else(|| "all".into());
    let status = cd::parse_tab(tab.as_str())?;
    let counts = cd::status_counts(&db).await?;
    let contests = cd::list(&db, status).await;
    Ok(Response::from(json!({
        "tab": tab,
        "contests": contests,
        "counts": counts,
    }))
        .into_response())
}

pub async fn detail(
    Extension(db): Extension<Db>,
    session: Option<Extension<UserToken>>,
    Path(key): Path<String>,
) -> ResponseResult {
    let c = cd::find_by_key(&db, key.as_str()).await?;
    let registered = session.map_or(false, |Extension(t)| c.registered.contains(&t.id));
    Ok(Response::from(ContestDetail {
        card: ContestCard::from(&c),
        end_time: c.end_time.as_str(),
        rules: &c.rules,
        problem_list: &c.problems,
        registered,
    })
        .into_response())
}

pub async fn standings(Extension(db): Extension<Db>, Path(key): Path<String>) -> ResponseResult {
    Ok(Response::from(cd::find_by_key(&db, key.as_str()).await?.standings).into_response())
}

pub async fn register(
    Extension(db): Extension<Db>,
    Extension(token_data): Extension<UserToken>,
    Path(key): Path<String>,
) -> ResponseResult {
    let r = cd::register(&db, key.as_str(), token_data.id).await?;
    tracing::info!("user {} registered for contest {}", token_data.id, r.contest_id);
    Ok(Response::new("Registered", r).into_response())
}
