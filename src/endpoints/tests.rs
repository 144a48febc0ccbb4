//! Tests for the endpoint registry

use super::*;
use crate::error::Error;
use crate::template;
use pretty_assertions::assert_eq;
use test_case::test_case;

const BASE: &str = "https://api.codementor.io/api/v2";

fn registry() -> EndpointRegistry {
    EndpointRegistry::new(BASE).unwrap()
}

#[test_case("job detail", &[("random_key", "k1")], "https://api.codementor.io/api/v2/requests/k1?access_as=mentor" ; "job detail")]
#[test_case("job list", &[], "https://api.codementor.io/api/v2/requests/search" ; "job list")]
#[test_case("job apply", &[("random_key", "k1")], "https://api.codementor.io/api/v2/requests/k1/interests" ; "job apply")]
#[test_case("user chat", &[("username", "alice")], "https://api.codementor.io/api/v2/chats/messages/alice" ; "user chat")]
#[test_case("session list", &[], "https://api.codementor.io/api/v2/lessons" ; "session list")]
#[test_case("session detail", &[("session_id", "42")], "https://api.codementor.io/api/v2/lessons/42" ; "session detail")]
#[test_case("reviews", &[("username", "alice")], "https://api.codementor.io/api/v2/users/alice/reviews" ; "reviews")]
#[test_case("me", &[], "https://api.codementor.io/api/v2/me" ; "me")]
#[test_case("freelance jobs", &[], "https://api.codementor.io/api/v2/offline-helps" ; "freelance jobs")]
fn test_resolve(name: &str, params: &[(&str, &str)], expected: &str) {
    let url = registry().resolve(name, params).unwrap();
    assert_eq!(url, expected);
    assert!(!template::has_placeholders(&url));
}

#[test]
fn test_every_endpoint_resolves_without_placeholders() {
    let registry = registry();
    let params = [
        ("random_key", "k"),
        ("username", "u"),
        ("session_id", "s"),
    ];

    for endpoint in Endpoint::all() {
        let url = registry.url_for(endpoint, &params).unwrap();
        assert!(!template::has_placeholders(&url), "{endpoint}: {url}");
        assert!(url.starts_with(BASE));
    }
}

#[test]
fn test_every_required_parameter_is_enforced() {
    let registry = registry();

    for endpoint in Endpoint::all() {
        let Some(required) = template::placeholders(endpoint.path()).first().copied() else {
            continue;
        };
        match registry.url_for(endpoint, &[]).unwrap_err() {
            Error::MissingPathParameter {
                endpoint: name,
                parameter,
            } => {
                assert_eq!(name, endpoint.name());
                assert_eq!(parameter, required);
            }
            other => panic!("Expected MissingPathParameter, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_endpoint() {
    let err = registry().resolve("job delete", &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownEndpoint { ref name } if name == "job delete"));
}

#[test]
fn test_missing_path_parameter() {
    let err = registry().resolve("session detail", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingPathParameter { ref parameter, .. } if parameter == "session_id"
    ));
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let registry = EndpointRegistry::new("http://127.0.0.1:8080/").unwrap();
    assert_eq!(registry.base_url(), "http://127.0.0.1:8080");
    assert_eq!(
        registry.url_for(Endpoint::Me, &[]).unwrap(),
        "http://127.0.0.1:8080/me"
    );
}

#[test]
fn test_invalid_base_url() {
    let err = EndpointRegistry::new("not a url").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_names_round_trip() {
    for endpoint in Endpoint::all() {
        assert_eq!(Endpoint::from_name(endpoint.name()), Some(endpoint));
    }
    assert_eq!(Endpoint::from_name("unknown"), None);
}
