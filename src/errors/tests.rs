//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.scl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.scl".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "then".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_variable_not_declared_mentions_declaration() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string(),
        },
        Position(0, Rc::new("test.scl".to_string())),
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("hasn't been declared")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            variable: "x".to_string(),
            received: "float".to_string(),
        },
        Position(0, Rc::new("test.scl".to_string())),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert!(tip.contains("x"));
            assert!(tip.contains("float"));
        }
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_already_declared_suggests_reassignment() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "count".to_string(),
        },
        Position(7, Rc::new("test.scl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("now")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_value_overflow_tip() {
    let error = Error::new(
        ErrorImpl::ValueOverflow {
            literal: "9.9e999".to_string(),
        },
        Position(0, Rc::new("test.scl".to_string())),
    );

    assert_eq!(error.get_error_name(), "ValueOverflow");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("does not fit")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        Position(0, Rc::new("test.scl".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}
