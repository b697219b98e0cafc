//! Use-Case-Funktionen für das Bearbeiten der Kurven.
//!
//! Aufgeteilt nach Operation:
//! - `move_point`: Drag-Geste (ein Undo-Schritt pro Geste)
//! - `insert_point`: Punkt auf dem nächsten Segment einfügen
//! - `erase_point`: Punkt entfernen (Mindestlänge 2)
//! - `reset_curve`: Kurve auf den geladenen Stand zurücksetzen

mod erase_point;
mod insert_point;
mod move_point;
mod reset_curve;

pub use erase_point::erase_point_at;
pub use insert_point::insert_point;
pub use move_point::{begin_drag, drag_to, end_drag};
pub use reset_curve::reset_curve;

use crate::app::AppState;
use crate::core::CurveSet;
use std::sync::Arc;

/// Mutabler Zugriff auf den Kurvensatz (CoW: klont nur, wenn ein Snapshot ihn teilt).
fn curves_mut(state: &mut AppState) -> Option<&mut CurveSet> {
    state.curves.as_mut().map(Arc::make_mut)
}
