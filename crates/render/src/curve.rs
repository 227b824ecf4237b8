use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Renderer-agnostic path instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Interpolation family used between consecutive samples of a line chart.
///
/// Parsed from the `line_curve` option; unknown names fall back to
/// [`CurveKind::Linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurveKind {
    /// Straight segments.
    #[default]
    Linear,
    /// Shape-preserving cubic: no overshoot between monotonic points.
    Monotone,
    /// Natural cubic spline.
    Natural,
}

impl CurveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CurveKind::Linear   => "linear",
            CurveKind::Monotone => "monotone",
            CurveKind::Natural  => "natural",
        }
    }
}

impl From<&str> for CurveKind {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "monotone" => CurveKind::Monotone,
            "natural"  => CurveKind::Natural,
            _          => CurveKind::Linear,
        }
    }
}

impl From<String> for CurveKind {
    fn from(name: String) -> Self {
        CurveKind::from(name.as_str())
    }
}

impl From<CurveKind> for String {
    fn from(kind: CurveKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Build a path through `points` using the chosen curve family.
///
/// Every point is a segment endpoint regardless of `kind`; the curve only
/// changes what happens in between.
pub fn curve_path(points: &[Point], kind: CurveKind) -> Vec<PathCommand> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathCommand::MoveTo(*first));

    // Two points carry no curvature information.
    match (kind, points.len()) {
        (CurveKind::Monotone, 3..) => monotone(points, &mut path),
        (CurveKind::Natural, 3..)  => natural(points, &mut path),
        _ => path.extend(points[1..].iter().map(|p| PathCommand::LineTo(*p))),
    }
    path
}

// ── Monotone (Steffen) ────────────────────────────────────────────────────────

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

fn secant(a: Point, b: Point) -> f64 {
    let h = b.x - a.x;
    if h == 0.0 { 0.0 } else { (b.y - a.y) / h }
}

/// One-sided tangent at an end point, given the tangent of its neighbour.
fn end_tangent(a: Point, b: Point, neighbour: f64) -> f64 {
    let h = b.x - a.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (b.y - a.y) / h - neighbour) / 2.0
    }
}

fn monotone(points: &[Point], path: &mut Vec<PathCommand>) {
    let n = points.len();
    let mut tangents = vec![0.0; n];

    for i in 1..n - 1 {
        let (prev, cur, next) = (points[i - 1], points[i], points[i + 1]);
        let h0 = cur.x - prev.x;
        let h1 = next.x - cur.x;
        let s0 = secant(prev, cur);
        let s1 = secant(cur, next);
        let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_finite() { t } else { 0.0 };
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        path.push(PathCommand::CubicTo {
            c1: Point::new(a.x + dx, a.y + dx * tangents[i]),
            c2: Point::new(b.x - dx, b.y - dx * tangents[i + 1]),
            to: b,
        });
    }
}

// ── Natural cubic spline ──────────────────────────────────────────────────────

/// Bézier control points of a natural cubic spline through `x`, one
/// coordinate at a time (tridiagonal solve, Thomas algorithm).
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}

fn natural(points: &[Point], path: &mut Vec<PathCommand>) {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let (ax, bx) = control_points(&xs);
    let (ay, by) = control_points(&ys);

    for i in 0..points.len() - 1 {
        path.push(PathCommand::CubicTo {
            c1: Point::new(ax[i], ay[i]),
            c2: Point::new(bx[i], by[i]),
            to: points[i + 1],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn endpoints(path: &[PathCommand]) -> Vec<Point> {
        path.iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
                PathCommand::CubicTo { to, .. } => to,
            })
            .collect()
    }

    #[test]
    fn parses_curve_names() {
        assert_eq!(CurveKind::from("monotone"), CurveKind::Monotone);
        assert_eq!(CurveKind::from("Natural"), CurveKind::Natural);
        assert_eq!(CurveKind::from("step"), CurveKind::Linear);

        #[derive(Deserialize)]
        struct Wrapper {
            curve: CurveKind,
        }
        let w: Wrapper = toml::from_str("curve = \"bogus\"").unwrap();
        assert_eq!(w.curve, CurveKind::Linear);
    }

    #[test]
    fn empty_and_single_point() {
        assert!(curve_path(&[], CurveKind::Natural).is_empty());
        let one = curve_path(&pts(&[(1.0, 2.0)]), CurveKind::Monotone);
        assert_eq!(one, vec![PathCommand::MoveTo(Point::new(1.0, 2.0))]);
    }

    #[test]
    fn two_points_are_always_a_line() {
        let p = pts(&[(0.0, 0.0), (10.0, 5.0)]);
        for kind in [CurveKind::Linear, CurveKind::Monotone, CurveKind::Natural] {
            let path = curve_path(&p, kind);
            assert_eq!(path[1], PathCommand::LineTo(p[1]));
        }
    }

    #[test]
    fn curve_choice_keeps_sample_positions() {
        let p = pts(&[(0.0, 10.0), (10.0, 30.0), (20.0, 5.0), (30.0, 40.0), (40.0, 35.0)]);
        for kind in [CurveKind::Linear, CurveKind::Monotone, CurveKind::Natural] {
            assert_eq!(endpoints(&curve_path(&p, kind)), p);
        }
    }

    #[test]
    fn monotone_does_not_overshoot() {
        let p = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 10.0), (4.0, 11.0)]);
        let path = curve_path(&p, CurveKind::Monotone);
        for (i, cmd) in path.iter().skip(1).enumerate() {
            let PathCommand::CubicTo { c1, c2, .. } = *cmd else {
                panic!("expected cubic segment");
            };
            let lo = p[i].y.min(p[i + 1].y);
            let hi = p[i].y.max(p[i + 1].y);
            for c in [c1, c2] {
                assert!(c.y >= lo - EPS && c.y <= hi + EPS, "segment {i}: {c:?}");
            }
        }
    }

    #[test]
    fn monotone_flat_run_stays_flat() {
        let p = pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]);
        for cmd in curve_path(&p, CurveKind::Monotone).iter().skip(1) {
            let PathCommand::CubicTo { c1, c2, .. } = *cmd else {
                panic!("expected cubic segment");
            };
            assert_eq!(c1.y, 5.0);
            assert_eq!(c2.y, 5.0);
        }
    }

    #[test]
    fn natural_spline_of_collinear_points_is_straight() {
        let p = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        let path = curve_path(&p, CurveKind::Natural);
        for (i, cmd) in path.iter().skip(1).enumerate() {
            let PathCommand::CubicTo { c1, c2, .. } = *cmd else {
                panic!("expected cubic segment");
            };
            let x0 = i as f64;
            assert!((c1.x - (x0 + 1.0 / 3.0)).abs() < EPS);
            assert!((c2.x - (x0 + 2.0 / 3.0)).abs() < EPS);
            assert!((c1.y - 2.0 * c1.x).abs() < EPS);
            assert!((c2.y - 2.0 * c2.x).abs() < EPS);
        }
    }
}
