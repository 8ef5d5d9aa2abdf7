use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use campus_auth_ui::api::{LoginRequest, ResendOtpRequest, SignupRequest, VerifyOtpRequest};
use campus_auth_ui::constants::GENERIC_ERROR;
use campus_auth_ui::{ApiResponse, AuthApi, AuthUiConfig, AuthUiError, HttpAuthApi};

fn api_for(server: &MockServer) -> HttpAuthApi {
    let config = AuthUiConfig {
        api_base_url: server.uri(),
        ..AuthUiConfig::default()
    };
    HttpAuthApi::new(&config).unwrap()
}

#[tokio::test]
async fn signup_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "juan",
            "email": "juan@campus.edu",
            "password": "hunter22",
            "strand": "STEM"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "OTP sent"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server)
        .signup(SignupRequest {
            username: "juan".to_string(),
            email: "juan@campus.edu".to_string(),
            password: "hunter22".to_string(),
            strand: "STEM".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Accepted(json!({"message": "OTP sent"})));
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .mount(&server)
        .await;

    let response = api_for(&server)
        .login(LoginRequest {
            email: "juan@campus.edu".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap();

    match response {
        ApiResponse::Rejected(rejection) => {
            assert_eq!(rejection.status, 401);
            assert_eq!(rejection.message(), "Invalid credentials");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_without_message_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify-otp"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let response = api_for(&server)
        .verify_otp(VerifyOtpRequest {
            email: "juan@campus.edu".to_string(),
            otp: "123456".to_string(),
        })
        .await
        .unwrap();

    match response {
        ApiResponse::Rejected(rejection) => assert_eq!(rejection.message(), GENERIC_ERROR),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resend-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let result = api_for(&server)
        .resend_otp(ResendOtpRequest {
            email: "juan@campus.edu".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthUiError::Decode(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port.
    let config = AuthUiConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        ..AuthUiConfig::default()
    };
    let api = HttpAuthApi::new(&config).unwrap();

    let result = api
        .login(LoginRequest {
            email: "juan@campus.edu".to_string(),
            password: "hunter22".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthUiError::Network(_))));
}
