//! Shiritori rules: opening word selection and move validation.
//!
//! Both components are pure with respect to `GameState`: they read it and
//! return a decision, and `GameController` applies the decision.

pub mod start;
pub mod validator;

pub use start::StartWordSelector;
pub use validator::{Rejection, Termination, TurnValidator, Verdict};
