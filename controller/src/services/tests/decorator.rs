//! Tests for the decorator capability

use crate::services::decorator::{AnsiDecorator, IdentityDecorator};
use crate::traits::StatusDecorator;

#[test]
fn test_identity_decorator_is_a_no_op() {
    let decorator = IdentityDecorator;
    assert_eq!(decorator.decorate("Thank you!"), "Thank you!");
    assert_eq!(decorator.name(), "identity");
}

#[test]
fn test_ansi_decorator_wraps_without_changing_copy() {
    let decorator = AnsiDecorator;
    let decorated = decorator.decorate("Thank you!");

    assert!(decorated.contains("Thank you!"));
    assert!(decorated.starts_with("\x1b["));
    assert!(decorated.ends_with("\x1b[0m"));
}
