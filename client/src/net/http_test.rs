use super::*;

use std::sync::Mutex;

use crate::net::types::TokenPair;
use crate::store::MemoryTokenStore;

struct RecordingNavigator {
    current: String,
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn at(route: &str) -> Self {
        Self {
            current: route.to_owned(),
            visited: Mutex::new(Vec::new()),
        }
    }

    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_route(&self) -> String {
        self.current.clone()
    }

    fn go_to(&self, route: &str) {
        self.visited.lock().unwrap().push(route.to_owned());
    }
}

#[test]
fn unauthorized_always_reads_as_invalid_session() {
    assert!(matches!(
        classify_failure(StatusCode::UNAUTHORIZED, true),
        FailureClass::InvalidSession
    ));
    assert!(matches!(
        classify_failure(StatusCode::UNAUTHORIZED, false),
        FailureClass::InvalidSession
    ));
}

#[test]
fn bad_request_depends_on_bearer_presence() {
    assert!(matches!(
        classify_failure(StatusCode::BAD_REQUEST, true),
        FailureClass::InvalidSession
    ));
    assert!(matches!(
        classify_failure(StatusCode::BAD_REQUEST, false),
        FailureClass::Validation
    ));
}

#[test]
fn other_statuses_are_not_session_failures() {
    assert!(matches!(
        classify_failure(StatusCode::INTERNAL_SERVER_ERROR, true),
        FailureClass::Other
    ));
    assert!(matches!(classify_failure(StatusCode::NOT_FOUND, false), FailureClass::Other));
}

#[test]
fn redirects_to_login_from_other_routes() {
    let nav = RecordingNavigator::at("/cars");
    redirect_to_login(&nav);
    assert_eq!(nav.visited(), vec![LOGIN_ROUTE.to_owned()]);
}

#[test]
fn never_redirects_when_already_on_login_route() {
    let nav = RecordingNavigator::at(LOGIN_ROUTE);
    redirect_to_login(&nav);
    assert!(nav.visited().is_empty());
}

#[test]
fn bearer_header_only_when_token_stored() {
    let store = MemoryTokenStore::new();
    assert_eq!(bearer_header(&store, ActorKind::User), None);

    let pair = TokenPair {
        access_token: "abc".to_owned(),
        refresh_token: "def".to_owned(),
    };
    store.save(ActorKind::User, &pair).unwrap();
    assert_eq!(bearer_header(&store, ActorKind::User), Some("Bearer abc".to_owned()));
    // Admin namespace stays empty.
    assert_eq!(bearer_header(&store, ActorKind::Admin), None);
}

#[test]
fn failure_message_prefers_envelope_message() {
    let body = r#"{"statusCode":401,"message":"Token expired","timestamp":"2025-01-01T00:00:00Z"}"#;
    assert_eq!(failure_message(StatusCode::UNAUTHORIZED, body), "Token expired");
}

#[test]
fn failure_message_falls_back_to_status() {
    let message = failure_message(StatusCode::BAD_GATEWAY, "<html>oops</html>");
    assert!(message.contains("502"));
}
