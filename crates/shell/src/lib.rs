//! MentorConnect UI shell.
//!
//! The shell owns everything around the rule engine: declared field
//! bindings, whole-form evaluation, button-action simulations, match-card
//! filtering, goal tracking, the simulated submission flow, and the static
//! navigation table. It renders engine verdicts as field states and toast
//! notifications; it never re-implements a validation rule.

pub mod actions;
pub mod binding;
pub mod config;
pub mod error;
pub mod form;
pub mod goals;
pub mod matching;
pub mod navigation;
pub mod submit;

pub use error::{ShellError, ShellResult};
