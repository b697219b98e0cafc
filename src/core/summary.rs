//! Geometrische Kurvenzusammenfassung für den Interpretations-Service.

use super::{Confidences, Curve, CurveSet, NormalizedPoint, Roi};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format-Version des Interpretations-Payloads.
pub const INTERPRETATION_VERSION: u32 = 1;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Kennzahlen einer einzelnen Kurve in ROI-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSummary {
    pub point_count: usize,
    /// Polylinienlänge
    pub length: f64,
    /// Mittlerer Abknickwinkel der inneren Punkte in Radiant
    pub curvature: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub span_x: f64,
    pub span_y: f64,
}

impl LineSummary {
    /// Fasst eine Kurve zusammen. `None` für eine leere Kurve.
    pub fn from_curve(curve: &Curve) -> Option<Self> {
        let points = &curve.points;
        let first = points.first()?;
        let last = points.last()?;

        let (mut min_x, mut max_x) = (f64::from(first.x), f64::from(first.x));
        let (mut min_y, mut max_y) = (f64::from(first.y), f64::from(first.y));
        for p in points {
            min_x = min_x.min(f64::from(p.x));
            max_x = max_x.max(f64::from(p.x));
            min_y = min_y.min(f64::from(p.y));
            max_y = max_y.max(f64::from(p.y));
        }

        Some(Self {
            point_count: points.len(),
            length: round4(polyline_length(points)),
            curvature: round4(mean_turning_angle(points)),
            start_x: round4(f64::from(first.x)),
            start_y: round4(f64::from(first.y)),
            end_x: round4(f64::from(last.x)),
            end_y: round4(f64::from(last.y)),
            span_x: round4(max_x - min_x),
            span_y: round4(max_y - min_y),
        })
    }
}

fn delta(a: &NormalizedPoint, b: &NormalizedPoint) -> (f64, f64) {
    (f64::from(b.x - a.x), f64::from(b.y - a.y))
}

fn polyline_length(points: &[NormalizedPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let (dx, dy) = delta(&w[0], &w[1]);
            dx.hypot(dy)
        })
        .sum()
}

/// Segmente der Länge 0 werden übersprungen.
fn mean_turning_angle(points: &[NormalizedPoint]) -> f64 {
    let mut total = 0.0;
    let mut samples = 0usize;
    for w in points.windows(3) {
        let (v1x, v1y) = delta(&w[0], &w[1]);
        let (v2x, v2y) = delta(&w[1], &w[2]);
        let n1 = v1x.hypot(v1y);
        let n2 = v2x.hypot(v2y);
        if n1 == 0.0 || n2 == 0.0 {
            continue;
        }
        let cos = ((v1x * v2x + v1y * v2y) / (n1 * n2)).clamp(-1.0, 1.0);
        total += cos.acos();
        samples += 1;
    }
    total / samples.max(1) as f64
}

/// Anfrage an den Interpretations-Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub version: u32,
    pub lines: BTreeMap<String, LineSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidences: Option<Confidences>,
    pub roi: Roi,
}

impl InterpretationRequest {
    /// Baut die Anfrage aus dem aktuellen (ggf. bearbeiteten) Kurvensatz.
    pub fn new(curves: &CurveSet, confidences: Option<Confidences>, roi: Roi) -> Self {
        let lines = curves
            .iter()
            .filter_map(|(id, curve)| {
                LineSummary::from_curve(curve).map(|s| (id.key().to_string(), s))
            })
            .collect();
        Self {
            version: INTERPRETATION_VERSION,
            lines,
            confidences,
            roi,
        }
    }
}
