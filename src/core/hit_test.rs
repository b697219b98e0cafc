//! Geometrische Abfragen: Nearest-Point-Hit-Test und Segment-Projektion.
//!
//! Alle Abfragen arbeiten in unskalierten Flächenpixeln. Kurvenpunkte werden
//! dafür über die ROI in Pixel abgebildet.

use super::{CurveId, CurveSet, NormalizedPoint, PointRef, Roi};
use glam::Vec2;

/// Treffer eines Nearest-Point-Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Getroffener Punkt
    pub point: PointRef,
    /// Euklidische Distanz zum Suchpunkt in Flächenpixeln
    pub distance: f32,
}

/// Ergebnis der Projektion eines Suchpunkts auf das nächstgelegene Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Index des Segmentanfangs (Segment = `start_index`..`start_index + 1`)
    pub start_index: usize,
    /// Parameter auf dem Segment in `[0, 1]`
    pub t: f32,
    /// Projizierter Punkt in Flächenpixeln
    pub projected: Vec2,
    /// Distanz Projektion ↔ Suchpunkt in Flächenpixeln
    pub distance: f32,
}

impl SegmentProjection {
    /// Index, an dem ein neuer Punkt eingefügt wird.
    pub fn insert_index(&self) -> usize {
        self.start_index + 1
    }
}

/// Projiziert `query` geklemmt auf das Segment `a`–`b`.
///
/// Gibt `(projizierter Punkt, t)` zurück. Ein Segment der Länge 0 liefert `t = 0`.
pub fn project_onto_segment(query: Vec2, a: Vec2, b: Vec2) -> (Vec2, f32) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (a, 0.0);
    }
    let t = ((query - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Sucht den nächstgelegenen Punkt aller sichtbaren Kurven innerhalb `max_distance`.
///
/// Kurven, für die `is_visible` `false` liefert, sind keine Kandidaten.
/// Bei gleicher Distanz gewinnt der zuerst gescannte Punkt
/// (Kurvenreihenfolge `CurveId::ALL`, dann Punktindex).
pub fn nearest_point(
    curves: &CurveSet,
    roi: &Roi,
    surface_size: Vec2,
    query: Vec2,
    max_distance: f32,
    is_visible: impl Fn(CurveId) -> bool,
) -> Option<PointHit> {
    if !query.is_finite() || max_distance.is_nan() || max_distance < 0.0 {
        return None;
    }

    let mut best: Option<PointHit> = None;
    for (id, curve) in curves.iter() {
        if !is_visible(id) {
            continue;
        }
        for (index, point) in curve.points.iter().enumerate() {
            let distance = roi.to_pixel(*point, surface_size).distance(query);
            if distance > max_distance {
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(PointHit {
                    point: PointRef { curve: id, index },
                    distance,
                });
            }
        }
    }
    best
}

/// Sucht das Segment einer Punktfolge mit minimaler Distanz zum Suchpunkt.
///
/// `None`, wenn weniger als zwei Punkte vorhanden sind oder der Suchpunkt
/// nicht endlich ist.
pub fn nearest_segment(
    points: &[NormalizedPoint],
    roi: &Roi,
    surface_size: Vec2,
    query: Vec2,
) -> Option<SegmentProjection> {
    if points.len() < 2 || !query.is_finite() {
        return None;
    }

    let mut best: Option<SegmentProjection> = None;
    for (start_index, pair) in points.windows(2).enumerate() {
        let a = roi.to_pixel(pair[0], surface_size);
        let b = roi.to_pixel(pair[1], surface_size);
        let (projected, t) = project_onto_segment(query, a, b);
        let distance = projected.distance(query);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(SegmentProjection {
                start_index,
                t,
                projected,
                distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Curve;
    use approx::assert_relative_eq;

    const SIZE: Vec2 = Vec2::new(100.0, 100.0);

    fn set_with(heart: Vec<(f32, f32)>, head: Vec<(f32, f32)>) -> CurveSet {
        let to_curve = |pts: Vec<(f32, f32)>| {
            Curve::new(pts.into_iter().map(|(x, y)| NormalizedPoint::new(x, y)).collect())
        };
        CurveSet {
            heart: to_curve(heart),
            head: to_curve(head),
            life: Curve::default(),
        }
    }

    #[test]
    fn nearest_point_prefers_smaller_distance() {
        // Suchpunkt (50,50): Kandidat A in 5px, Kandidat B in 8px
        let set = set_with(vec![(0.58, 0.5), (0.0, 0.0)], vec![(0.55, 0.5), (1.0, 1.0)]);
        let hit = nearest_point(&set, &Roi::FULL, SIZE, Vec2::new(50.0, 50.0), 10.0, |_| true)
            .expect("Treffer erwartet");
        assert_eq!(hit.point, PointRef { curve: CurveId::Head, index: 0 });
        assert_relative_eq!(hit.distance, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn nearest_point_respects_threshold() {
        let set = set_with(vec![(0.8, 0.8), (1.0, 1.0)], vec![]);
        let hit = nearest_point(&set, &Roi::FULL, SIZE, Vec2::new(50.0, 50.0), 10.0, |_| true);
        assert!(hit.is_none());
    }

    #[test]
    fn hidden_curves_are_not_candidates() {
        let set = set_with(vec![(0.5, 0.5), (1.0, 1.0)], vec![(0.55, 0.5), (0.0, 0.0)]);
        let hit = nearest_point(&set, &Roi::FULL, SIZE, Vec2::new(50.0, 50.0), 10.0, |id| {
            id != CurveId::Heart
        })
        .expect("Treffer auf sichtbarer Kurve");
        assert_eq!(hit.point.curve, CurveId::Head);
    }

    #[test]
    fn ties_keep_first_scanned_point() {
        let set = set_with(vec![(0.375, 0.5), (0.0, 0.0)], vec![(0.625, 0.5), (1.0, 1.0)]);
        let hit = nearest_point(&set, &Roi::FULL, SIZE, Vec2::new(50.0, 50.0), 10.0, |_| true)
            .expect("Treffer erwartet");
        assert_eq!(hit.point.curve, CurveId::Heart);
    }

    #[test]
    fn nearest_point_maps_through_roi() {
        let roi = Roi::new(0.5, 0.5, 0.5, 0.5);
        let set = set_with(vec![(0.0, 0.0), (1.0, 1.0)], vec![]);
        let hit = nearest_point(&set, &roi, SIZE, Vec2::new(51.0, 50.0), 3.0, |_| true)
            .expect("ROI-Ursprung liegt bei (50,50)");
        assert_eq!(hit.point.index, 0);
    }

    #[test]
    fn non_finite_query_never_hits() {
        let set = set_with(vec![(0.5, 0.5), (1.0, 1.0)], vec![]);
        for query in [Vec2::new(f32::NAN, 50.0), Vec2::new(f32::INFINITY, 0.0)] {
            assert!(nearest_point(&set, &Roi::FULL, SIZE, query, 10.0, |_| true).is_none());
            assert!(nearest_segment(&set.heart.points, &Roi::FULL, SIZE, query).is_none());
        }
        let query = Vec2::new(50.0, 50.0);
        assert!(nearest_point(&set, &Roi::FULL, SIZE, query, f32::NAN, |_| true).is_none());
    }

    #[test]
    fn projection_clamps_to_segment_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(project_onto_segment(Vec2::new(-5.0, 3.0), a, b), (a, 0.0));
        assert_eq!(project_onto_segment(Vec2::new(15.0, 3.0), a, b), (b, 1.0));
        let (p, t) = project_onto_segment(Vec2::new(4.0, 3.0), a, b);
        assert_eq!(p, Vec2::new(4.0, 0.0));
        assert_relative_eq!(t, 0.4);
    }

    #[test]
    fn projection_on_degenerate_segment_returns_start() {
        let a = Vec2::new(3.0, 3.0);
        assert_eq!(project_onto_segment(Vec2::new(9.0, 9.0), a, a), (a, 0.0));
    }

    #[test]
    fn nearest_segment_at_midpoint_inserts_after_start() {
        let points = [
            NormalizedPoint::new(0.0, 0.0),
            NormalizedPoint::new(0.5, 0.0),
            NormalizedPoint::new(1.0, 0.0),
            NormalizedPoint::new(1.0, 1.0),
        ];
        let proj = nearest_segment(&points, &Roi::FULL, SIZE, Vec2::new(75.0, 0.0))
            .expect("Segment vorhanden");
        assert_eq!(proj.start_index, 1);
        assert_eq!(proj.insert_index(), 2);
        assert_relative_eq!(proj.t, 0.5);
    }

    #[test]
    fn nearest_segment_requires_two_points() {
        let points = [NormalizedPoint::new(0.5, 0.5)];
        assert!(nearest_segment(&points, &Roi::FULL, SIZE, Vec2::ZERO).is_none());
    }
}
