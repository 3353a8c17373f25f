use crate::api::session_cookie::find_cookie;
use crate::tests::test_state;
use crate::{CookieSettings, SessionCookie};

use hp_session::SessionId;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[test]
fn test_find_cookie_among_several() {
    let header = "theme=dark; hp_session=abc; lang=en";

    assert_eq!(find_cookie(header, "hp_session"), Some("abc"));
    assert_eq!(find_cookie(header, "lang"), Some("en"));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[test]
fn test_find_cookie_requires_exact_name() {
    assert_eq!(find_cookie("hp_session_old=abc", "hp_session"), None);
}

#[test]
fn test_set_cookie_attributes() {
    let settings = CookieSettings {
        name: "hp_session".to_string(),
        secure: false,
    };
    let id = SessionId::new();

    let value = settings.set_cookie(id).unwrap();
    let value = value.to_str().unwrap();

    assert_eq!(
        value,
        format!("hp_session={id}; Path=/; HttpOnly; SameSite=Lax")
    );
}

#[test]
fn test_set_cookie_secure_flag() {
    let settings = CookieSettings {
        name: "hp_session".to_string(),
        secure: true,
    };

    let value = settings.set_cookie(SessionId::new()).unwrap();

    assert!(value.to_str().unwrap().ends_with("; Secure"));
}

async fn extract(cookie: Option<&str>) -> Option<SessionId> {
    let state = test_state(false);
    let mut request = Request::builder().uri("/");
    if let Some(cookie) = cookie {
        request = request.header("cookie", cookie);
    }
    let (mut parts, _) = request.body(Body::empty()).unwrap().into_parts();

    let SessionCookie(id) = SessionCookie::from_request_parts(&mut parts, &state)
        .await
        .unwrap();
    id
}

#[tokio::test]
async fn test_extractor_reads_session_id() {
    let id = SessionId::new();

    let extracted = extract(Some(&format!("theme=dark; hp_session={id}"))).await;

    assert_eq!(extracted, Some(id));
}

#[tokio::test]
async fn test_extractor_ignores_malformed_id() {
    assert_eq!(extract(Some("hp_session=not-a-uuid")).await, None);
}

#[tokio::test]
async fn test_extractor_without_cookie_header() {
    assert_eq!(extract(None).await, None);
}
