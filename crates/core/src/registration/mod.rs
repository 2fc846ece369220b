//! Registration record validation engine.
//!
//! Provides the input and field types, the per-field rules, the engine that
//! assembles a [`ValidationResult`], and a form controller that gates
//! submission on it.

pub mod age;
pub mod engine;
pub mod form;
pub mod input;
pub mod rules;

pub use engine::{
    parse, parse_on, validate, validate_on, FieldErrors, ValidRegistration, ValidationResult,
};
pub use form::RegistrationForm;
pub use input::{Field, RegistrationInput};
