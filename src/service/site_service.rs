use crate::constants;
use crate::dao::{contest_dao as cd, seed};
use crate::model::site::NavLink;
use crate::types::{error_response::ErrorResponse, links::{Db, ResponseResult}, response::Response};
use crate::utils::jwt::UserToken;
use serde::{Deserialize, Serialize};
use serde_json::json;
use axum::{
    extract::{Extension, Query},
    response::IntoResponse
};

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

const PUBLIC_LINKS: [NavLink; 3] = [
    link("Problems", "/challenges"),
    link("Contests", "/contests"),
    link("Leaderboard", "/leaderboard"),
];

const MEMBER_LINKS: [NavLink; 5] = [
    link("Dashboard", "/dashboard"),
    link("Problems", "/challenges"),
    link("Contests", "/contests"),
    link("Leaderboard", "/leaderboard"),
    link("Profile", "/profile"),
];

const DASHBOARD_LINKS: [NavLink; 4] = [
    link("Dashboard", "/dashboard"),
    link("Challenges", "/challenges"),
    link("Leaderboard", "/leaderboard"),
    link("Profile", "/profile"),
];

const GUEST_ACTIONS: [NavLink; 2] = [link("Sign In", "/login"), link("Get Started", "/register")];
const MEMBER_ACTIONS: [NavLink; 1] = [link("Logout", "/")];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub shell: &'static str,
    pub signed_in: bool,
    pub user: Option<String>,
    pub links: Vec<NavLink>,
    pub actions: Vec<NavLink>,
    pub show_progress: bool,
}

/// Navigation of a page shell, `public` or `dashboard`.
pub fn layout_of(shell: &str, session: Option<&UserToken>) -> Result<Layout, ErrorResponse> {
    let signed_in = session.is_some();
    let (shell, links) = match (shell, signed_in) {
        ("public", false) => ("public", PUBLIC_LINKS.to_vec()),
        ("public", true) => ("public", MEMBER_LINKS.to_vec()),
        ("dashboard", _) => ("dashboard", DASHBOARD_LINKS.to_vec()),
        _ => return Err(ErrorResponse::bad_request_with_str("shell must be public or dashboard")),
    };
    Ok(Layout {
        shell,
        signed_in,
        user: session.map(|t| t.name.clone()),
        links,
        actions: match signed_in {
            true => MEMBER_ACTIONS.to_vec(),
            false => GUEST_ACTIONS.to_vec(),
        },
        show_progress: signed_in,
    })
}

#[derive(Deserialize, Debug, Default)]
pub struct LayoutQuery {
    pub shell: Option<String>,
}

pub async fn layout(session: Option<Extension<UserToken>>, Query(q): Query<LayoutQuery>) -> ResponseResult {
    let shell = q.shell.unwrap_or_else(|| "public".into());
    let l = layout_of(shell.as_str(), session.as_ref().map(|Extension(t)| t))?;
    Ok(Response::from(l).into_response())
}

pub async fn landing(Extension(db): Extension<Db>) -> ResponseResult {
    let contests = cd::featured(&db, constants::FEATURED_CONTESTS).await;
    Ok(Response::from(json!({
        "stats": seed::headline_stats(),
        "features": seed::features(),
        "testimonials": seed::testimonials(),
        "contests": contests,
    }))
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::database::test_db;
    use crate::service::read_response;

    fn john() -> UserToken {
        UserToken::from(1, "John Doe".into(), "john@bytearena.com".into(), constants::USER.into())
    }

    fn names(links: &[NavLink]) -> Vec<&str> {
        links.iter().map(|l| l.name).collect()
    }

    #[test]
    fn session_changes_the_public_navigation() {
        let guest = layout_of("public", None).unwrap();
        assert_eq!(names(&guest.links), vec!["Problems", "Contests", "Leaderboard"]);
        assert_eq!(names(&guest.actions), vec!["Sign In", "Get Started"]);
        assert!(!guest.show_progress);

        let t = john();
        let member = layout_of("public", Some(&t)).unwrap();
        assert_eq!(
            names(&member.links),
            vec!["Dashboard", "Problems", "Contests", "Leaderboard", "Profile"]
        );
        assert_eq!(names(&member.actions), vec!["Logout"]);
        assert!(member.show_progress);
        assert_eq!(member.user.as_deref(), Some("John Doe"));
    }

    #[test]
    fn dashboard_shell_only_toggles_progress() {
        let t = john();
        let guest = layout_of("dashboard", None).unwrap();
        let member = layout_of("dashboard", Some(&t)).unwrap();
        assert_eq!(guest.links, member.links);
        assert_eq!(names(&member.links), vec!["Dashboard", "Challenges", "Leaderboard", "Profile"]);
        assert!(!guest.show_progress);
        assert!(member.show_progress);
        assert!(layout_of("admin", None).is_err());
    }

    #[tokio::test]
    async fn landing_features_live_contests_first() {
        let (_, v) = read_response(landing(Extension(test_db())).await).await;
        let contests = v["data"]["contests"].as_array().unwrap();
        assert_eq!(contests.len(), 3);
        assert_eq!(contests[0]["status"], "live");
        assert_eq!(v["data"]["testimonials"].as_array().unwrap().len(), 3);
        assert_eq!(v["data"]["stats"][0]["label"], "Active Students");
    }
}
