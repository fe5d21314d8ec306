//! Line icons painted from 24×24 vector paths.

use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};

/// Side length of the path coordinate space.
const VIEWBOX: f32 = 24.0;
const STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Check,
    Close,
    Chevron,
}

/// Primitive in viewbox coordinates.
#[derive(Debug, Clone, PartialEq)]
enum PathOp {
    Polyline(&'static [(f32, f32)]),
    Circle { center: (f32, f32), radius: f32 },
}

impl Icon {
    /// Rendered size in points.
    pub fn size(&self) -> f32 {
        match self {
            Icon::Search => 18.0,
            Icon::Check | Icon::Close => 20.0,
            Icon::Chevron => 16.0,
        }
    }

    fn ops(&self) -> &'static [PathOp] {
        match self {
            Icon::Search => &[
                PathOp::Circle { center: (11.0, 11.0), radius: 7.0 },
                PathOp::Polyline(&[(20.0, 20.0), (16.65, 16.65)]),
            ],
            Icon::Check => &[PathOp::Polyline(&[(20.0, 6.0), (9.0, 17.0), (4.0, 12.0)])],
            Icon::Close => &[
                PathOp::Polyline(&[(6.0, 6.0), (18.0, 18.0)]),
                PathOp::Polyline(&[(18.0, 6.0), (6.0, 18.0)]),
            ],
            Icon::Chevron => &[PathOp::Polyline(&[(6.0, 9.0), (12.0, 15.0), (18.0, 9.0)])],
        }
    }

    /// Paint the icon scaled to fill `rect`.
    pub fn paint(&self, painter: &Painter, rect: Rect, color: Color32) {
        let scale = rect.width().min(rect.height()) / VIEWBOX;
        let stroke = Stroke::new(STROKE_WIDTH * scale.max(0.75), color);

        for op in self.ops() {
            match op {
                PathOp::Polyline(points) => {
                    let points: Vec<Pos2> = points.iter().map(|&p| to_screen(rect, p)).collect();
                    for pair in points.windows(2) {
                        painter.line_segment([pair[0], pair[1]], stroke);
                    }
                    // Round joins, so elbows don't show a notch
                    for p in points.iter().skip(1).take(points.len().saturating_sub(2)) {
                        painter.circle_filled(*p, stroke.width / 2.0, color);
                    }
                }
                PathOp::Circle { center, radius } => {
                    painter.circle_stroke(to_screen(rect, *center), radius * scale, stroke);
                }
            }
        }
    }
}

/// Map a viewbox point into `rect`, keeping the aspect ratio and centering.
fn to_screen(rect: Rect, (x, y): (f32, f32)) -> Pos2 {
    let side = rect.width().min(rect.height());
    let scale = side / VIEWBOX;
    let origin = rect.center() - Vec2::splat(side / 2.0);
    origin + Vec2::new(x * scale, y * scale)
}

/// Allocate space for an icon and paint it.
pub fn icon(ui: &mut Ui, icon: Icon, color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(icon.size()), Sense::hover());
    if ui.is_rect_visible(rect) {
        icon.paint(ui.painter(), rect, color);
    }
    response
}
