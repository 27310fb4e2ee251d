use crate::web::roster_view::list_url;
use crate::{AppState, OperatorSession, WebResult};

use ck_core::Touchpoint;

use axum::{extract::State, response::Html};
use serde::Serialize;

#[derive(Serialize)]
struct Tile {
    label: &'static str,
    href: String,
}

#[derive(Serialize)]
struct DashboardPage {
    tiles: Vec<Tile>,
    confirm_logout: bool,
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _session: OperatorSession,
) -> WebResult<Html<String>> {
    render(&state, false)
}

/// GET /dashboard/logout
///
/// Dashboard with the sign-out confirmation open; confirming posts back here.
pub async fn confirm_logout(
    State(state): State<AppState>,
    _session: OperatorSession,
) -> WebResult<Html<String>> {
    render(&state, true)
}

fn render(state: &AppState, confirm_logout: bool) -> WebResult<Html<String>> {
    let tiles = Touchpoint::ALL
        .into_iter()
        .map(|touchpoint| Tile {
            label: touchpoint.label(),
            href: list_url(touchpoint, "", 1),
        })
        .collect();

    state.renderer.render(
        "dashboard.html",
        DashboardPage {
            tiles,
            confirm_logout,
        },
    )
}
