use crate::core::CurveSet;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Kurvenklon passiert erst beim nächsten `Arc::make_mut()`
/// in einem Use-Case. Der Snapshot bleibt damit eine unveränderliche
/// Tiefenkopie des Stands vor der Mutation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Kurvensatz zum Zeitpunkt des Snapshots
    pub curves: Option<Arc<CurveSet>>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            curves: state.curves.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.curves = self.curves;
    }
}

/// Begrenzter Undo-Stack. Bei voller Tiefe fällt der älteste Eintrag heraus.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen vorab erstellten Snapshot ab.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Anzahl gespeicherter Undo-Schritte.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn keine Undo-Schritte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Entnimmt den jüngsten Snapshot (Aufrufer wendet ihn an).
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    /// Verwirft alle Einträge (neue Vorhersage geladen).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{Curve, NormalizedPoint};

    fn make_snapshot_with_heart_points(count: usize) -> Snapshot {
        let heart = Curve::new(
            (0..count)
                .map(|i| NormalizedPoint::new(i as f32 / count as f32, 0.5))
                .collect(),
        );
        Snapshot {
            curves: Some(Arc::new(CurveSet {
                heart,
                ..Default::default()
            })),
        }
    }

    fn heart_len(snap: &Snapshot) -> usize {
        snap.curves.as_deref().map_or(0, |c| c.heart.len())
    }

    #[test]
    fn empty_history_cannot_undo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(history.is_empty());
    }

    #[test]
    fn undo_returns_latest_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_heart_points(2));
        history.record_snapshot(make_snapshot_with_heart_points(3));

        let restored = history.pop_undo().expect("undo vorhanden");
        assert_eq!(heart_len(&restored), 3);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn respects_max_depth_and_evicts_oldest() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_heart_points(i + 1));
        }
        assert_eq!(history.len(), 3);

        let mut lens = Vec::new();
        while let Some(snap) = history.pop_undo() {
            lens.push(heart_len(&snap));
        }
        // Älteste zwei (2 und 3 Punkte) wurden verdrängt
        assert_eq!(lens, vec![6, 5, 4]);
    }

    #[test]
    fn pop_undo_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history.pop_undo().is_none());
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut state = AppState::new();
        state.curves = Some(Arc::new(CurveSet::demo()));
        state.record_undo_snapshot();

        if let Some(curves) = state.curves.as_mut() {
            Arc::make_mut(curves).heart.points.clear();
        }

        let snap = state.history.pop_undo().expect("Snapshot vorhanden");
        assert_eq!(heart_len(&snap), 20);
        snap.apply_to(&mut state);
        assert_eq!(state.point_count(), 60);
    }
}
