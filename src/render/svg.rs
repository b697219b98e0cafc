//! SVG-Backend für Display-Listen (Headless-Ausgabe).
//!
//! Die Zoom-Transformation wird als `transform` auf eine umschließende Gruppe
//! gelegt, die Befehle selbst bleiben im unskalierten Flächenraum.

use super::{Color, DrawCommand, DrawList};
use std::fmt::Write;

fn rgb(color: &Color) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({},{},{})", c(color[0]), c(color[1]), c(color[2]))
}

fn opacity(color: &Color) -> f32 {
    color[3].clamp(0.0, 1.0)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn path_data(points: &[glam::Vec2]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd} {} {}", p.x, p.y);
    }
    d
}

/// Serialisiert eine Display-Liste als eigenständiges SVG-Dokument.
pub fn to_svg(list: &DrawList) -> String {
    let (w, h) = (list.size.x, list.size.y);
    let o = list.transform.origin * list.size;
    let zoom = list.transform.zoom;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"<g transform="translate({} {}) scale({zoom}) translate({} {})">"#,
        o.x, o.y, -o.x, -o.y
    );

    for command in &list.commands {
        match command {
            DrawCommand::Clear => {}
            DrawCommand::StrokeRect {
                min,
                size,
                color,
                width,
            } => {
                let _ = writeln!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                    min.x,
                    min.y,
                    size.x,
                    size.y,
                    rgb(color),
                    opacity(color)
                );
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
                dash,
            } => {
                if points.is_empty() {
                    continue;
                }
                let dash_attr = dash
                    .map(|[a, b]| format!(r#" stroke-dasharray="{a} {b}""#))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round"{dash_attr}/>"#,
                    path_data(points),
                    rgb(color),
                    opacity(color)
                );
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}" fill-opacity="{}"/>"#,
                    center.x,
                    center.y,
                    rgb(color),
                    opacity(color)
                );
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let _ = writeln!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    rgb(color),
                    opacity(color)
                );
            }
            DrawCommand::Text {
                pos,
                text,
                size,
                color,
            } => {
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{size}" font-family="sans-serif" fill="{}" fill-opacity="{}">{}</text>"#,
                    pos.x,
                    pos.y,
                    rgb(color),
                    opacity(color),
                    escape(text)
                );
            }
        }
    }

    out.push_str("</g>\n</svg>\n");
    out
}
