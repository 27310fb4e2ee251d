//! Check-in roster handlers, shared by every touchpoint.

use crate::web::roster_view::{RosterQuery, RosterView, list_url};
use crate::{AppState, OperatorSession, SubmissionKey, WebError, WebResult};

use ck_client::{ClientError, ClientResult};
use ck_core::{Attendee, Session, Touchpoint};

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use log::{debug, info, warn};

const FETCH_FALLBACK: &str = "Failed to fetch data";
const COMMIT_FALLBACK: &str = "Something went wrong";

/// GET /dashboard/check-in/{slug}
pub async fn roster(
    State(state): State<AppState>,
    OperatorSession(session): OperatorSession,
    Path(slug): Path<String>,
    Query(query): Query<RosterQuery>,
) -> WebResult<Html<String>> {
    let touchpoint: Touchpoint = slug.parse()?;

    let view = match fetch(&state, &session, touchpoint).await {
        Ok(records) => RosterView::build(touchpoint, &records, &query, &state.ui),
        Err(e) => RosterView::failed(touchpoint, &query, fetch_message(&e), &state.ui),
    };

    state.renderer.render("roster.html", view)
}

/// GET /dashboard/check-in/{slug}/{id}/confirm
///
/// Opens the confirmation dialog. A record that is already done gets no
/// dialog; the operator lands back on the list.
pub async fn confirm(
    State(state): State<AppState>,
    OperatorSession(session): OperatorSession,
    Path((slug, id)): Path<(String, String)>,
    Query(query): Query<RosterQuery>,
) -> WebResult<Response> {
    let touchpoint: Touchpoint = slug.parse()?;
    let id = Attendee::validate_id(&id)?;

    let records = match fetch(&state, &session, touchpoint).await {
        Ok(records) => records,
        Err(e) => {
            let view = RosterView::failed(touchpoint, &query, fetch_message(&e), &state.ui);
            return Ok(state.renderer.render("roster.html", view)?.into_response());
        }
    };

    let record = records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| WebError::not_found(format!("No record '{}' on this roster", id)))?;

    if touchpoint.is_complete(record) {
        debug!("Record {} already done for {}, not opening dialog", id, touchpoint);
        return Ok(Redirect::to(&list_url(touchpoint, query.text(), query.page())).into_response());
    }

    let view = RosterView::build(touchpoint, &records, &query, &state.ui).with_dialog(record);
    Ok(state.renderer.render("roster.html", view)?.into_response())
}

/// POST /dashboard/check-in/{slug}/{id}
///
/// Exactly one status update, then exactly one roster refetch; the list is
/// rendered with the success notification only after the refetch resolves.
pub async fn commit(
    State(state): State<AppState>,
    OperatorSession(session): OperatorSession,
    Path((slug, id)): Path<(String, String)>,
    Form(query): Form<RosterQuery>,
) -> WebResult<Html<String>> {
    let touchpoint: Touchpoint = slug.parse()?;
    let id = Attendee::validate_id(&id)?.to_string();

    let _submission = state
        .submissions
        .begin(SubmissionKey {
            session: session.clone(),
            touchpoint,
            record_id: id.clone(),
        })
        .ok_or_else(|| WebError::conflict("This transition is already being processed"))?;

    let outcome = state
        .client
        .mark_touchpoint(&session, touchpoint, &id)
        .await;

    let view = match outcome {
        Ok(()) => {
            info!("Marked {} complete for record {}", touchpoint, id);

            match fetch(&state, &session, touchpoint).await {
                Ok(records) => RosterView::build(touchpoint, &records, &query, &state.ui),
                Err(e) => RosterView::failed(touchpoint, &query, fetch_message(&e), &state.ui),
            }
            .with_toast(touchpoint.success_message())
        }
        Err(e) => {
            warn!("Marking {} for record {} failed: {}", touchpoint, id, e);
            let alert = e.backend_message().unwrap_or(COMMIT_FALLBACK).to_string();

            match fetch(&state, &session, touchpoint).await {
                Ok(records) => {
                    let view = RosterView::build(touchpoint, &records, &query, &state.ui);
                    match records.iter().find(|record| record.id == id) {
                        Some(record) => view.with_dialog(record),
                        None => view,
                    }
                }
                Err(e) => RosterView::failed(touchpoint, &query, fetch_message(&e), &state.ui),
            }
            .with_alert(alert)
        }
    };

    state.renderer.render("roster.html", view)
}

async fn fetch(
    state: &AppState,
    session: &Session,
    touchpoint: Touchpoint,
) -> ClientResult<Vec<Attendee>> {
    let result = state
        .client
        .list_roster(session, touchpoint.roster_source())
        .await;

    match result {
        Ok(ref records) => debug!("Fetched {} records for {}", records.len(), touchpoint),
        Err(ref e) => warn!("Roster fetch for {} failed: {}", touchpoint, e),
    }
    result
}

fn fetch_message(err: &ClientError) -> String {
    err.backend_message().unwrap_or(FETCH_FALLBACK).to_string()
}
