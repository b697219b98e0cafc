//! Kurvenmodell: drei benannte, geordnete Punktfolgen pro Vorhersage.

use super::NormalizedPoint;
use serde::{Deserialize, Serialize};

/// Minimale Punktanzahl einer bearbeitbaren Kurve.
pub const MIN_CURVE_POINTS: usize = 2;

/// Punktanzahl der Demo-Kurven.
const DEMO_POINT_COUNT: usize = 20;

/// Identität einer Handlinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveId {
    /// Herzlinie
    #[default]
    Heart,
    /// Kopflinie
    Head,
    /// Lebenslinie
    Life,
}

impl CurveId {
    /// Alle Kurven in fester Scan- und Zeichenreihenfolge.
    pub const ALL: [CurveId; 3] = [CurveId::Heart, CurveId::Head, CurveId::Life];

    /// Schlüssel im JSON-Payload.
    pub fn key(self) -> &'static str {
        match self {
            CurveId::Heart => "heart",
            CurveId::Head => "head",
            CurveId::Life => "life",
        }
    }

    /// Ob die Kurve gestrichelt gezeichnet wird (feste Konvention: nur die Kopflinie).
    pub fn is_dashed(self) -> bool {
        matches!(self, CurveId::Head)
    }
}

/// Referenz auf einen einzelnen Punkt einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRef {
    pub curve: CurveId,
    pub index: usize,
}

/// Geordnete Punktfolge einer Handlinie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    pub points: Vec<NormalizedPoint>,
}

impl Curve {
    /// Erstellt eine Kurve aus einer Punktliste.
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ob ein Punkt entfernt werden darf, ohne die Mindestlänge zu unterschreiten.
    pub fn can_remove_point(&self) -> bool {
        self.points.len() > MIN_CURVE_POINTS
    }

    /// Ob Segmente existieren, in die eingefügt werden kann.
    pub fn can_insert_point(&self) -> bool {
        self.points.len() >= MIN_CURVE_POINTS
    }

    /// Ersetzt den Punkt an `index`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set_point(&mut self, index: usize, point: NormalizedPoint) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Fügt `point` direkt hinter `start_index` ein.
    ///
    /// Abgelehnt, wenn die Kurve weniger als zwei Punkte hat oder
    /// `start_index` kein gültiger Segmentanfang ist.
    pub fn insert_after(&mut self, start_index: usize, point: NormalizedPoint) -> bool {
        if !self.can_insert_point() || start_index + 1 >= self.points.len() {
            return false;
        }
        self.points.insert(start_index + 1, point);
        true
    }

    /// Entfernt den Punkt an `index`, sofern danach noch mindestens zwei Punkte bleiben.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if !self.can_remove_point() || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }
}

/// Satz der drei Handlinien einer Vorhersage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveSet {
    #[serde(default)]
    pub heart: Curve,
    #[serde(default)]
    pub head: Curve,
    #[serde(default)]
    pub life: Curve,
}

impl CurveSet {
    /// Read-only Zugriff auf eine Kurve.
    pub fn get(&self, id: CurveId) -> &Curve {
        match id {
            CurveId::Heart => &self.heart,
            CurveId::Head => &self.head,
            CurveId::Life => &self.life,
        }
    }

    /// Mutabler Zugriff auf eine Kurve.
    pub fn get_mut(&mut self, id: CurveId) -> &mut Curve {
        match id {
            CurveId::Heart => &mut self.heart,
            CurveId::Head => &mut self.head,
            CurveId::Life => &mut self.life,
        }
    }

    /// Liefert einen einzelnen Punkt, falls vorhanden.
    pub fn point(&self, point_ref: PointRef) -> Option<NormalizedPoint> {
        self.get(point_ref.curve).points.get(point_ref.index).copied()
    }

    /// Iteriert über alle Kurven in fester Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &Curve)> {
        CurveId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Gesamtzahl der Punkte über alle Kurven.
    pub fn total_points(&self) -> usize {
        self.heart.len() + self.head.len() + self.life.len()
    }

    /// Deterministische Demo-Kurven, wenn kein Modell-Service erreichbar ist.
    pub fn demo() -> Self {
        let n = DEMO_POINT_COUNT;
        let sample = |f: &dyn Fn(f32) -> (f32, f32)| -> Curve {
            Curve::new(
                (0..n)
                    .map(|i| {
                        let t = i as f32 / (n - 1) as f32;
                        let (x, y) = f(t);
                        NormalizedPoint::new(x, y)
                    })
                    .collect(),
            )
        };
        let pi = std::f32::consts::PI;

        Self {
            heart: sample(&|t| {
                (
                    0.12 + 0.76 * t,
                    0.28 - 0.05 * (pi * t).sin() + 0.02 * t,
                )
            }),
            head: sample(&|t| (0.18 + 0.72 * t, 0.46 + 0.03 * (pi * 1.2 * t).sin())),
            life: sample(&|t| {
                let angle = pi * (0.15 + 0.8 * t);
                (0.3 + 0.2 * angle.cos(), 0.18 + 0.62 * angle.sin())
            }),
        }
    }
}
