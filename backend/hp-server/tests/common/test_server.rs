#![allow(dead_code)]

use crate::common::TEST_JWT_SECRET;

use hp_auth::{JwtValidator, OidcIdentityProvider, OidcSettings};
use hp_server::{AppState, CookieSettings, build_router};
use hp_session::{SessionSettings, SessionStore};
use hp_tenant::TenantApiClient;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path_regex},
};

pub const AUTHORIZE_URL: &str = "https://idp.test/authorize";
pub const LOGOUT_URL: &str = "https://idp.test/v2/logout";
pub const PUBLIC_URL: &str = "http://portal.test";
pub const COOKIE_NAME: &str = "hp_session";

/// Gateway router wired to a mock tenant API.
pub struct TestGateway {
    pub app: Router,
    pub state: AppState,
    pub tenant_api: MockServer,
}

/// Gateway whose tenant API answers every organization with `selected`
pub async fn create_gateway(selected: Value) -> TestGateway {
    create_gateway_with(
        ResponseTemplate::new(200).set_body_json(json!({ "selectedUseCase": selected })),
        SessionSettings::default(),
    )
    .await
}

pub async fn create_gateway_with(
    response: ResponseTemplate,
    settings: SessionSettings,
) -> TestGateway {
    let tenant_api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/retrieve/.*$"))
        .respond_with(response)
        .mount(&tenant_api)
        .await;

    let client = TenantApiClient::new(&tenant_api.uri()).expect("Invalid mock server URI");

    let identity = OidcIdentityProvider::new(
        OidcSettings {
            authorize_url: AUTHORIZE_URL.to_string(),
            logout_url: LOGOUT_URL.to_string(),
            client_id: "portal-client".to_string(),
            redirect_uri: format!("{PUBLIC_URL}/callback"),
        },
        JwtValidator::with_hs256(TEST_JWT_SECRET),
    )
    .expect("Invalid provider settings");

    let state = AppState {
        sessions: SessionStore::new(settings, Arc::new(client), 100),
        identity: Arc::new(identity),
        cookie: CookieSettings {
            name: COOKIE_NAME.to_string(),
            secure: false,
        },
        signed_out_url: format!("{PUBLIC_URL}/signed-out"),
    };

    TestGateway {
        app: build_router(state.clone(), &["http://localhost:3000".to_string()]),
        state,
        tenant_api,
    }
}

impl TestGateway {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send("GET", uri, cookie).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send("POST", uri, cookie).await
    }

    async fn send(&self, method: &str, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        self.app
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Visit `first_path`, follow the login redirect and complete the
    /// callback with `token`. Returns the session cookie and callback response.
    pub async fn sign_in(&self, first_path: &str, token: &str) -> (String, Response<Body>) {
        let response = self.get(first_path, None).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        let cookie = session_cookie(&response).expect("no session cookie");
        let state = state_param(&location(&response));

        let callback = self
            .get(
                &format!("/callback?id_token={token}&state={state}"),
                Some(&cookie),
            )
            .await;

        (cookie, callback)
    }
}

/// `name=value` pair from the response's `Set-Cookie`
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(String::from)
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("no Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// `state` query parameter of a provider authorize URL
pub fn state_param(location: &str) -> String {
    Url::parse(location)
        .expect("authorize URL")
        .query_pairs()
        .find(|(key, _)| key == "state")
        .map(|(_, value)| value.into_owned())
        .expect("no state parameter")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
