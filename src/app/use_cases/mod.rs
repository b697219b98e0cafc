//! Use-Cases: fachliche Operationen auf dem `AppState`.

pub mod camera;
pub mod editing;
pub mod export;
pub mod interaction;
pub mod interpretation;
pub mod picking;
pub mod prediction;
pub mod viewport;
