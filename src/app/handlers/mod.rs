//! Feature-Handler für den AppController.
//!
//! Jeder Handler delegiert an die passenden Use-Cases; der Controller
//! dispatcht nur noch.

pub mod editing;
pub mod history;
pub mod interaction;
pub mod session;
pub mod view;
