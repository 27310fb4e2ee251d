//! View model for the generic check-in roster page.
//!
//! One builder serves all five touchpoints; the [`Touchpoint`] descriptor
//! supplies labels, the searchable field, the card lines and the status flag.

use ck_config::UiConfig;
use ck_core::{Attendee, DetailLine, Page, PageWindow, Touchpoint, search, timestamp};

use serde::{Deserialize, Serialize};

pub const NO_MATCHES: &str = "No faculty members match your search";
pub const NO_RECORDS: &str = "No faculty members found";

/// Search and page state carried by roster links and forms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub page: Option<String>,
}

impl RosterQuery {
    pub fn new(q: impl Into<String>, page: u32) -> Self {
        Self {
            q: q.into(),
            page: Some(page.to_string()),
        }
    }

    /// Search text as typed, without surrounding whitespace
    pub fn text(&self) -> &str {
        self.q.trim()
    }

    /// Requested 1-based page; anything unparsable means page 1
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }
}

/// `/dashboard/check-in/{slug}` with the search and page carried along
pub fn list_url(touchpoint: Touchpoint, query: &str, page: u32) -> String {
    with_query(
        format!("/dashboard/check-in/{}", touchpoint.slug()),
        query,
        page,
    )
}

/// Commit target for one record
pub fn record_url(touchpoint: Touchpoint, id: &str) -> String {
    format!("/dashboard/check-in/{}/{}", touchpoint.slug(), id)
}

fn confirm_url(touchpoint: Touchpoint, id: &str, query: &str, page: u32) -> String {
    with_query(
        format!("{}/confirm", record_url(touchpoint, id)),
        query,
        page,
    )
}

fn with_query(mut url: String, query: &str, page: u32) -> String {
    let mut params = Vec::new();
    if !query.trim().is_empty() {
        params.push(format!("q={}", urlencoding::encode(query.trim())));
    }
    if page > 1 {
        params.push(format!("page={page}"));
    }

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

#[derive(Debug, Serialize)]
pub struct TouchpointView {
    pub slug: &'static str,
    pub title: &'static str,
    pub action_label: &'static str,
    pub done_label: &'static str,
    pub completed_label: &'static str,
    pub confirm_title: &'static str,
    pub confirm_lead: &'static str,
    pub details_placeholder: &'static str,
}

impl From<Touchpoint> for TouchpointView {
    fn from(touchpoint: Touchpoint) -> Self {
        Self {
            slug: touchpoint.slug(),
            title: touchpoint.title(),
            action_label: touchpoint.action_label(),
            done_label: touchpoint.done_label(),
            completed_label: touchpoint.completed_label(),
            confirm_title: touchpoint.confirm_title(),
            confirm_lead: touchpoint.confirm_lead(),
            details_placeholder: touchpoint.details_placeholder(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub details: Vec<DetailLine>,
    /// Action control is disabled for good once this is set
    pub completed: bool,
    pub completed_at: String,
    pub confirm_url: String,
}

impl CardView {
    fn new(touchpoint: Touchpoint, attendee: &Attendee, query: &str, page: u32) -> Self {
        Self {
            id: attendee.id.clone(),
            name: attendee.name().to_string(),
            email: attendee.email().to_string(),
            mobile: attendee.mobile().to_string(),
            details: touchpoint.details(attendee),
            completed: touchpoint.is_complete(attendee),
            completed_at: timestamp::display(touchpoint.completed_at(attendee)),
            confirm_url: confirm_url(touchpoint, &attendee.id, query, page),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageLink {
    pub number: u32,
    pub url: String,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct PagerView {
    pub links: Vec<PageLink>,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

impl PagerView {
    fn new(touchpoint: Touchpoint, query: &str, window: PageWindow) -> Self {
        let url = |page: u32| list_url(touchpoint, query, page);

        Self {
            links: window
                .pages
                .iter()
                .map(|&number| PageLink {
                    number,
                    url: url(number),
                    current: number == window.current,
                })
                .collect(),
            leading_ellipsis: window.leading_ellipsis,
            trailing_ellipsis: window.trailing_ellipsis,
            prev_url: window.prev.map(url),
            next_url: window.next.map(url),
        }
    }
}

/// Confirmation dialog for one record
#[derive(Debug, Serialize)]
pub struct DialogView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub commit_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Serialize)]
pub struct RosterView {
    #[serde(skip)]
    pub kind: Touchpoint,
    pub touchpoint: TouchpointView,
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    /// Records left after search
    pub matched: usize,
    pub cards: Vec<CardView>,
    pub pager: Option<PagerView>,
    pub empty_message: Option<&'static str>,
    pub fetch_error: Option<String>,
    pub dialog: Option<DialogView>,
    /// Blocking alert after a failed commit
    pub alert: Option<String>,
    pub toast: Option<&'static str>,
    pub toast_ms: u64,
    pub list_url: String,
}

impl RosterView {
    /// Search, slice and lay out one page of `records`
    pub fn build(
        touchpoint: Touchpoint,
        records: &[Attendee],
        query: &RosterQuery,
        ui: &UiConfig,
    ) -> Self {
        let text = query.text();
        let matched = search(records, text, touchpoint);
        // A stale or hand-edited page number lands on the last page
        let last_page = matched.len().div_ceil(ui.page_size.max(1)).max(1) as u32;
        let page = Page::slice(&matched, query.page().min(last_page), ui.page_size);

        let cards = page
            .items
            .iter()
            .map(|attendee| CardView::new(touchpoint, attendee, text, page.current))
            .collect();
        let pager = PageWindow::new(page.current, page.total_pages, ui.max_visible_pages)
            .map(|window| PagerView::new(touchpoint, text, window));
        let empty_message = page
            .is_empty()
            .then_some(if text.is_empty() { NO_RECORDS } else { NO_MATCHES });

        Self {
            kind: touchpoint,
            touchpoint: touchpoint.into(),
            query: text.to_string(),
            page: page.current,
            total_pages: page.total_pages,
            matched: page.total_items,
            cards,
            pager,
            empty_message,
            fetch_error: None,
            dialog: None,
            alert: None,
            toast: None,
            toast_ms: ui.toast_ms,
            list_url: list_url(touchpoint, text, page.current),
        }
    }

    /// Page shown when the roster could not be fetched
    pub fn failed(
        touchpoint: Touchpoint,
        query: &RosterQuery,
        message: impl Into<String>,
        ui: &UiConfig,
    ) -> Self {
        let mut view = Self::build(touchpoint, &[], query, ui);
        view.empty_message = None;
        view.fetch_error = Some(message.into());
        view
    }

    pub fn with_dialog(mut self, attendee: &Attendee) -> Self {
        self.dialog = Some(DialogView {
            id: attendee.id.clone(),
            name: attendee.name().to_string(),
            email: attendee.email().to_string(),
            mobile: attendee.mobile().to_string(),
            commit_url: record_url(self.kind, &attendee.id),
            cancel_url: self.list_url.clone(),
        });
        self
    }

    pub fn with_alert(mut self, message: impl Into<String>) -> Self {
        self.alert = Some(message.into());
        self
    }

    pub fn with_toast(mut self, message: &'static str) -> Self {
        self.toast = Some(message);
        self
    }
}
