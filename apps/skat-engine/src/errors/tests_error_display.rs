use crate::errors::domain::{DomainError, IllegalMoveKind};

#[test]
fn illegal_move_display_carries_kind_and_reason() {
    let err = DomainError::illegal(IllegalMoveKind::OutOfTurn, "seat 2 is not to move");
    assert_eq!(
        err.to_string(),
        "illegal move (OutOfTurn): seat 2 is not to move"
    );
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::OutOfTurn));
}

#[test]
fn non_move_errors_have_no_illegal_kind() {
    let err = DomainError::malformed(7, "bad card token 'X9'");
    assert_eq!(err.to_string(), "malformed log entry at 7: bad card token 'X9'");
    assert_eq!(err.illegal_kind(), None);
    assert_eq!(DomainError::desync("phase").illegal_kind(), None);
}
