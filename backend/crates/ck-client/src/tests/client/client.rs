use crate::BackendClient;
use crate::client::client::cookie_value;

use std::time::Duration;

use reqwest::Response;
use reqwest::header::SET_COOKIE;

fn response_setting(cookies: &[&str]) -> Response {
    let mut builder = http::Response::builder();
    for cookie in cookies {
        builder = builder.header(SET_COOKIE, *cookie);
    }
    Response::from(builder.body("").unwrap())
}

fn client(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    assert_eq!(client("http://localhost:5000/").base_url, "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    assert_eq!(client("http://localhost:5000").base_url, "http://localhost:5000");
}

#[test]
fn test_cookie_value_found_among_several_set_cookie_headers() {
    let response = response_setting(&[
        "session=abc; Path=/; HttpOnly",
        "refreshToken=r-123; Path=/; HttpOnly; SameSite=None",
    ]);

    assert_eq!(
        cookie_value(&response, "refreshToken"),
        Some("r-123".to_string())
    );
    assert_eq!(cookie_value(&response, "accessToken"), None);
}

#[test]
fn test_cleared_cookie_reads_as_absent() {
    let response = response_setting(&["refreshToken=; Max-Age=0"]);

    assert_eq!(cookie_value(&response, "refreshToken"), None);
}
