pub mod domain;

#[cfg(test)]
mod tests_error_display;

pub use domain::{DomainError, IllegalMoveKind};
