//! Integration tests for the attribute macro.
//!
//! These tests verify that the generated enums compile and behave like
//! hand-written ones.

use sealforge::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub name: String,
}

/// Screen state with a generic payload.
#[extensive_sealed(model(ty = String), model(ty = i32), model(ty = Vec<Poster>, name = "posters"))]
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Success(Extensive),
    Loading,
    Error { message: String, retry: bool },
}

#[extensive_sealed(model(ty = u64, name = "id"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Lookup {
    Found { key: Extensive, hits: u32 },
    Missing,
    Pair(Extensive, Extensive),
}

#[test]
fn test_string_state() {
    let state = StringUiState::Success("ready".to_string());
    match &state {
        StringUiState::Success(payload) => assert_eq!(payload.len(), 5),
        other => panic!("unexpected state: {other:?}"),
    }
    assert_ne!(state, StringUiState::Loading);
}

#[test]
fn test_primitive_state() {
    let state = I32UiState::Success(42);
    let cloned = state.clone();
    assert_eq!(state, cloned);
    assert_eq!(
        I32UiState::Error {
            message: "offline".into(),
            retry: true
        },
        I32UiState::Error {
            message: "offline".into(),
            retry: true
        }
    );
}

#[test]
fn test_named_model() {
    let posters = vec![Poster {
        name: "Spirited Away".into(),
    }];
    let state = PostersUiState::Success(posters.clone());
    assert_eq!(state, PostersUiState::Success(posters));
}

#[test]
fn test_source_enum_is_kept() {
    let state = UiState::Success(Extensive);
    assert_eq!(state, UiState::Success(Extensive::default()));
    assert!(matches!(UiState::Loading, UiState::Loading));
}

#[test]
fn test_every_placeholder_field_is_replaced() {
    use std::collections::HashSet;

    let found = IdLookup::Found { key: 7, hits: 2 };
    let pair = IdLookup::Pair(1, 2);
    let set: HashSet<IdLookup> = [found, pair, IdLookup::Missing, found].into_iter().collect();
    assert_eq!(set.len(), 3);
    if let IdLookup::Pair(a, b) = pair {
        assert_eq!(a + b, 3);
    }
}

#[test]
fn test_pass_cases_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}
