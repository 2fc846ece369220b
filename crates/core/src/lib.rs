//! Registration form validation.
//!
//! Pure logic only: field rules, age computation, the validation engine and a
//! headless form controller. Nothing in this crate performs I/O.

pub mod error;
pub mod registration;
