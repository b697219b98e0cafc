//! Core-Domänentypen: Kurven, ROI, Keypoints, View-Transformation und Geometrie-Abfragen.

pub mod curve;
pub mod export;
pub mod hit_test;
pub mod keypoints;
pub mod point;
pub mod prediction;
pub mod roi;
pub mod summary;
pub mod surface;
pub mod view_transform;

pub use curve::{Curve, CurveId, CurveSet, PointRef, MIN_CURVE_POINTS};
pub use export::{ExportSnapshot, EXPORT_VERSION};
pub use hit_test::{nearest_point, nearest_segment, project_onto_segment, PointHit, SegmentProjection};
pub use keypoints::{KeypointId, KeypointSet};
pub use point::NormalizedPoint;
pub use prediction::{Confidences, PredictionResult, DEFAULT_FAILURE_MESSAGE};
pub use roi::{Roi, DEFAULT_ROI};
pub use summary::{InterpretationRequest, LineSummary, INTERPRETATION_VERSION};
pub use surface::Surface;
pub use view_transform::ViewTransform;
