//! Replays a [`DisplayList`] onto an egui painter. This is the only place
//! that knows both the primitive vocabulary and the egui shape API.

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Color32, Pos2, Stroke};
use wavekit_core::{DisplayList, Primitive, Rgba};

pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c.r * 255.0).round() as u8,
        (c.g * 255.0).round() as u8,
        (c.b * 255.0).round() as u8,
        (c.a * 255.0).round() as u8,
    )
}

/// Gradient color at height `y` for a fill spanning 0..floor.
pub fn gradient_at(top: Rgba, bottom: Rgba, y: f32, floor: f32) -> Rgba {
    let s = if floor > 0.0 { (y / floor).clamp(0.0, 1.0) } else { 0.0 };
    Rgba::new(
        top.r + (bottom.r - top.r) * s,
        top.g + (bottom.g - top.g) * s,
        top.b + (bottom.b - top.b) * s,
        top.a + (bottom.a - top.a) * s,
    )
}

/// Paint every primitive in order, translated by `origin` (the canvas
/// rect's top-left corner in screen coordinates).
pub fn paint_display_list(painter: &egui::Painter, origin: Pos2, list: &DisplayList) {
    let at = |p: glam::Vec2| Pos2::new(origin.x + p.x, origin.y + p.y);

    for primitive in list.iter() {
        match primitive {
            Primitive::Polyline { points, color, width } => {
                let points: Vec<Pos2> = points.iter().map(|p| at(*p)).collect();
                painter.add(egui::Shape::line(points, Stroke::new(*width, to_color32(*color))));
            }
            Primitive::FillBelow { points, floor, top, bottom } => {
                painter.add(egui::Shape::mesh(fill_below_mesh(
                    origin, points, *floor, *top, *bottom,
                )));
            }
            Primitive::Disc { center, radius, color } => {
                painter.circle_filled(at(*center), *radius, to_color32(*color));
            }
            Primitive::Rect { min, size, color } => {
                let rect = egui::Rect::from_min_size(at(*min), egui::vec2(size.x, size.y));
                painter.rect_filled(rect, egui::CornerRadius::ZERO, to_color32(*color));
            }
            Primitive::Triangle { a, b, c, color } => {
                painter.add(egui::Shape::convex_polygon(
                    vec![at(*a), at(*b), at(*c)],
                    to_color32(*color),
                    Stroke::NONE,
                ));
            }
        }
    }
}

/// Triangulate the region between the surface curve and `y = floor` as one
/// vertical quad strip per curve segment, with per-vertex gradient colors.
/// Strips stay correct even where the curve is non-convex.
fn fill_below_mesh(
    origin: Pos2,
    points: &[glam::Vec2],
    floor: f32,
    top: Rgba,
    bottom: Rgba,
) -> Mesh {
    let mut mesh = Mesh::default();
    let vertex = |x: f32, y: f32| Vertex {
        pos: Pos2::new(origin.x + x, origin.y + y),
        uv: WHITE_UV,
        color: to_color32(gradient_at(top, bottom, y, floor)),
    };
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(vertex(p0.x, p0.y));
        mesh.vertices.push(vertex(p1.x, p1.y));
        mesh.vertices.push(vertex(p1.x, floor));
        mesh.vertices.push(vertex(p0.x, floor));
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let c = to_color32(Rgba::new(1.0, 0.0, 0.5, 0.5));
        assert_eq!(c, Color32::from_rgba_unmultiplied(255, 0, 128, 128));
    }

    #[test]
    fn test_gradient_endpoints() {
        let top = Rgba::new(0.0, 0.0, 1.0, 0.4);
        let bottom = Rgba::new(0.0, 0.0, 1.0, 0.05);
        assert_eq!(gradient_at(top, bottom, 0.0, 360.0), top);
        assert_eq!(gradient_at(top, bottom, 360.0, 360.0), bottom);
        let mid = gradient_at(top, bottom, 180.0, 360.0);
        assert!((mid.a - 0.225).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_degenerate_floor() {
        let top = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let bottom = Rgba::new(0.0, 1.0, 0.0, 0.0);
        // Zero floor cannot divide; the top color wins.
        assert_eq!(gradient_at(top, bottom, 10.0, 0.0), top);
    }

    #[test]
    fn test_fill_mesh_strip_counts() {
        let points = vec![
            glam::Vec2::new(0.0, 100.0),
            glam::Vec2::new(4.0, 110.0),
            glam::Vec2::new(8.0, 90.0),
        ];
        let mesh = fill_below_mesh(
            Pos2::ZERO,
            &points,
            360.0,
            Rgba::new(0.0, 0.0, 1.0, 0.4),
            Rgba::new(0.0, 0.0, 1.0, 0.05),
        );
        // Two segments, one quad each.
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 12);
    }
}
