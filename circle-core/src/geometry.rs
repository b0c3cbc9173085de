use serde::{Deserialize, Serialize};

/// Basic two dimensional point in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn dist(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// Points sampled during one continuous draw gesture, in recording order.
/// Duplicates are kept as they came in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Stroke { points: Vec::new() }
    }

    /// Start a stroke at the pointer-down position.
    pub fn with_start(p: Point) -> Self {
        Stroke { points: vec![p] }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Stroke { points }
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Stroke {
            points: iter.into_iter().collect(),
        }
    }
}

/// Arithmetic mean of the points. `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point { x: sx / n, y: sy / n })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_of_square_corners() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let c = centroid(&pts).unwrap();
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn centroid_of_nothing() {
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn stroke_keeps_order_and_duplicates() {
        let mut s = Stroke::with_start(Point::new(1.0, 1.0));
        s.push(Point::new(1.0, 1.0));
        s.push(Point::new(2.0, 3.0));
        assert_eq!(s.len(), 3);
        assert_eq!(s.first(), Some(Point::new(1.0, 1.0)));
        assert_eq!(s.last(), Some(Point::new(2.0, 3.0)));
        assert_eq!(s.points()[1], s.points()[0]);
    }

    #[test]
    fn dist_is_euclidean() {
        assert_relative_eq!(Point::new(0.0, 0.0).dist(Point::new(3.0, 4.0)), 5.0);
    }
}
