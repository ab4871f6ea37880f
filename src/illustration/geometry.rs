use kurbo::{Circle, Ellipse, Line, ParamCurveArclen, Shape as _};

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{RevealError, RevealResult};

/// Primitive kind of a shape, as it would appear in SVG markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// `<path>`
    Path,
    /// `<line>`
    Line,
    /// `<polyline>`
    Polyline,
    /// `<polygon>`
    Polygon,
    /// `<rect>`
    Rect,
    /// `<circle>`
    Circle,
    /// `<ellipse>`
    Ellipse,
    /// `<text>`; drawn in the color layer but never measured.
    Text,
    /// `<image>`; drawn in the color layer but never measured.
    Image,
}

impl ShapeKind {
    /// Whether shapes of this kind have a measurable outline.
    pub fn is_strokable(self) -> bool {
        !matches!(self, Self::Text | Self::Image)
    }
}

/// Geometry of one shape in its own user space (no transform applied).
#[derive(Clone, Debug)]
pub enum Geometry {
    /// Arbitrary Bézier path.
    Path(BezPath),
    /// Straight segment.
    Line(Line),
    /// Open polyline.
    Polyline(Vec<Point>),
    /// Closed polygon.
    Polygon(Vec<Point>),
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Circle.
    Circle(Circle),
    /// Ellipse.
    Ellipse(Ellipse),
    /// Text run.
    Text,
    /// Raster image.
    Image,
}

impl Geometry {
    /// Primitive kind of this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Path(_) => ShapeKind::Path,
            Self::Line(_) => ShapeKind::Line,
            Self::Polyline(_) => ShapeKind::Polyline,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Rect(_) => ShapeKind::Rect,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Text => ShapeKind::Text,
            Self::Image => ShapeKind::Image,
        }
    }

    /// Total arc length of the outline in user units.
    ///
    /// Fails for unsupported primitives and for lengths that are zero, negative or not finite,
    /// so callers never see a degenerate measurement.
    pub fn arc_length(&self, accuracy: f64) -> RevealResult<f64> {
        let len = match self {
            Self::Path(p) => path_length(p, accuracy),
            Self::Line(l) => l.perimeter(accuracy),
            Self::Polyline(pts) => polyline_length(pts, false),
            Self::Polygon(pts) => polyline_length(pts, true),
            Self::Rect(r) => r.perimeter(accuracy),
            Self::Circle(c) => c.perimeter(accuracy),
            Self::Ellipse(e) => e.perimeter(accuracy),
            Self::Text | Self::Image => {
                return Err(RevealError::measurement(format!(
                    "{:?} has no measurable outline",
                    self.kind()
                )));
            }
        };

        if !len.is_finite() {
            return Err(RevealError::measurement(format!(
                "{:?} length is not finite",
                self.kind()
            )));
        }
        if len <= 0.0 {
            return Err(RevealError::measurement(format!(
                "{:?} is degenerate (length {len})",
                self.kind()
            )));
        }
        Ok(len)
    }

    /// Outline as a Bézier path, or `None` for unsupported primitives.
    pub fn to_bez_path(&self, tolerance: f64) -> Option<BezPath> {
        match self {
            Self::Path(p) => Some(p.clone()),
            Self::Line(l) => Some(l.to_path(tolerance)),
            Self::Polyline(pts) => Some(polyline_path(pts, false)),
            Self::Polygon(pts) => Some(polyline_path(pts, true)),
            Self::Rect(r) => Some(r.to_path(tolerance)),
            Self::Circle(c) => Some(c.to_path(tolerance)),
            Self::Ellipse(e) => Some(e.to_path(tolerance)),
            Self::Text | Self::Image => None,
        }
    }
}

fn path_length(path: &BezPath, accuracy: f64) -> f64 {
    path.segments().map(|seg| seg.arclen(accuracy)).sum()
}

fn polyline_length(pts: &[Point], closed: bool) -> f64 {
    let open: f64 = pts.windows(2).map(|w| w[0].distance(w[1])).sum();
    match (closed, pts.first(), pts.last()) {
        (true, Some(first), Some(last)) => open + last.distance(*first),
        _ => open,
    }
}

fn polyline_path(pts: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = pts.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        if closed {
            path.close_path();
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/illustration/geometry.rs"]
mod tests;
