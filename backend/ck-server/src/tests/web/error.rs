use crate::WebError;

use ck_core::Touchpoint;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header::LOCATION};
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_renders_escaped_message() {
    let error = WebError::NotFound {
        message: "<b>gone</b>".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("&lt;b&gt;gone&lt;"));
    assert!(!html.contains("<b>gone"));
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let response = WebError::conflict("busy").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_unauthenticated_redirects_to_login() {
    let response = WebError::unauthenticated().into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");
}

#[tokio::test]
async fn test_template_error_hides_details() {
    let error = WebError::Template {
        message: "undefined variable `secret`".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("secret"));
}

#[test]
fn test_unknown_touchpoint_maps_to_not_found() {
    let error: WebError = "lounge".parse::<Touchpoint>().unwrap_err().into();

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
    assert!(error.to_string().contains("lounge"));
}
