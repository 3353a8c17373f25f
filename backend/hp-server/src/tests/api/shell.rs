use crate::render_view;
use crate::tests::test_state;

use hp_core::UseCase;
use hp_session::ShellView;

use http::{StatusCode, header::LOCATION};

#[test]
fn test_start_login_redirects_to_provider() {
    let state = test_state(false);

    let response = render_view(
        &state,
        ShellView::StartLogin {
            nonce: "n-1".to_string(),
        },
    );

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[LOCATION],
        "https://idp.test/authorize?state=n-1"
    );
}

#[test]
fn test_external_module_redirects_off_portal() {
    let state = test_state(false);

    let response = render_view(
        &state,
        ShellView::External {
            use_case: UseCase::VoiceEnabledHealthcarePriceTransparency,
            url: "https://voice.example.com".to_string(),
        },
    );

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "https://voice.example.com");
}

#[test]
fn test_view_status_codes() {
    let state = test_state(false);

    let cases = [
        (ShellView::Loading, StatusCode::ACCEPTED),
        (
            ShellView::Error {
                message: "denied".to_string(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ShellView::NotFound {
                path: "/feedback".to_string(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            ShellView::Page {
                use_case: UseCase::MemberDashboard,
                path: "/memberdashboard",
                nav: Vec::new(),
            },
            StatusCode::OK,
        ),
        (
            ShellView::NoModulesEnabled { notice: None },
            StatusCode::OK,
        ),
    ];

    for (view, expected) in cases {
        assert_eq!(render_view(&state, view).status(), expected);
    }
}

#[test]
fn test_redirect_with_invalid_location_is_internal_error() {
    let state = test_state(false);

    let response = render_view(
        &state,
        ShellView::Redirect {
            to: "/bad\nheader".to_string(),
        },
    );

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
