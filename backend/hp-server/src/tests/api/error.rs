use crate::ApiError;
use crate::api::error::public_message;

use hp_auth::AuthError;
use hp_session::SessionError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_code_and_field() {
    let error = ApiError::Unauthorized {
        code: "INVALID_CLAIM",
        message: "Invalid claim 'sub'".into(),
        field: Some("sub".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_CLAIM");
    assert_eq!(json["error"]["field"], "sub");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let response = ApiError::bad_request("Invalid session id").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "Invalid session id");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Cannot encode session cookie".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_invalid_transition_maps_to_conflict() {
    let error: ApiError = AuthError::InvalidTransition {
        action: "begin login",
        state: "authorized",
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Cannot begin login while authorized");
}

#[tokio::test]
async fn test_state_mismatch_maps_to_unauthorized() {
    let error: ApiError = AuthError::StateMismatch {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"]["code"], "STATE_MISMATCH");
}

#[tokio::test]
async fn test_not_signed_in_maps_to_unauthorized() {
    let error: ApiError = SessionError::not_signed_in().into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_SIGNED_IN");
}

#[test]
fn test_public_message_has_no_source_location() {
    let error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let message = public_message(&error);

    assert_eq!(message, "Sign-in token has expired");
    assert!(!message.contains(".rs"));
}
