//! Circle similarity scoring.
//!
//! A stroke is measured five ways against the circle centered on its
//! centroid with the mean distance to that centroid as radius. Each measure
//! yields a sub-score around 0..=100 and the weighted blend, rounded to one
//! decimal, is the displayed score.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ANGLE_SEGMENTS, MIN_POINTS, ROUNDNESS_SCALE, WEIGHTS};
use crate::geometry::{Point, Stroke};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("stroke has {got} points, at least {required} are needed")]
    InsufficientPoints { got: usize, required: usize },
}

/// The five independent measures before blending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub circularity: f64,
    pub roundness: f64,
    pub symmetry: f64,
    pub closure: f64,
    pub smoothness: f64,
}

impl SubScores {
    /// Weighted blend of the sub-scores, unrounded.
    pub fn weighted_total(&self) -> f64 {
        self.circularity * WEIGHTS.circularity
            + self.roundness * WEIGHTS.roundness
            + self.symmetry * WEIGHTS.symmetry
            + self.closure * WEIGHTS.closure
            + self.smoothness * WEIGHTS.smoothness
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score rounded to one decimal place.
    pub score: f64,
    pub sub_scores: SubScores,
    /// Center and radius of the reference circle.
    pub center: Point,
    pub avg_radius: f64,
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Score how closely `stroke` resembles a circle.
pub fn score(stroke: &Stroke) -> Result<ScoreResult, ScoreError> {
    let points = stroke.points();
    if points.len() < MIN_POINTS {
        log::debug!("rejecting stroke with {} points", points.len());
        return Err(ScoreError::InsufficientPoints {
            got: points.len(),
            required: MIN_POINTS,
        });
    }
    let n = points.len() as f64;
    let center = Point {
        x: points.iter().map(|p| p.x).sum::<f64>() / n,
        y: points.iter().map(|p| p.y).sum::<f64>() / n,
    };

    let radii: Vec<f64> = points.iter().map(|p| p.dist(center)).collect();
    let avg_radius = mean(&radii);

    let sub_scores = SubScores {
        circularity: circularity(&radii, avg_radius),
        roundness: roundness(&radii, avg_radius),
        symmetry: symmetry(points, center),
        closure: closure(points[0], points[points.len() - 1], avg_radius),
        smoothness: smoothness(points),
    };
    let score = round_to_tenth(sub_scores.weighted_total());
    log::debug!("scored {} points: {} from {:?}", points.len(), score, sub_scores);

    Ok(ScoreResult {
        score,
        sub_scores,
        center,
        avg_radius,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// `max(0, 100 - scale * deviation / avg_radius)`; a zero radius counts as
/// maximal deviation.
fn radius_normalized(deviation: f64, avg_radius: f64, scale: f64) -> f64 {
    if avg_radius > 0.0 {
        (100.0 - deviation / avg_radius * scale).max(0.0)
    } else {
        0.0
    }
}

fn circularity(radii: &[f64], avg_radius: f64) -> f64 {
    let abs_dev: Vec<f64> = radii.iter().map(|r| (r - avg_radius).abs()).collect();
    radius_normalized(mean(&abs_dev), avg_radius, 100.0)
}

fn roundness(radii: &[f64], avg_radius: f64) -> f64 {
    let sq_dev: Vec<f64> = radii.iter().map(|r| (r - avg_radius).powi(2)).collect();
    radius_normalized(mean(&sq_dev).sqrt(), avg_radius, ROUNDNESS_SCALE)
}

fn symmetry(points: &[Point], center: Point) -> f64 {
    let seg = TAU / ANGLE_SEGMENTS as f64;
    let mut counts = [0usize; ANGLE_SEGMENTS];
    for p in points {
        let mut ang = (p.y - center.y).atan2(p.x - center.x);
        if ang < 0.0 {
            ang += TAU;
        }
        // a tiny negative angle plus TAU can round to TAU itself
        let idx = ((ang / seg).floor() as usize).min(ANGLE_SEGMENTS - 1);
        counts[idx] += 1;
    }
    let expected = points.len() as f64 / ANGLE_SEGMENTS as f64;
    let mad = counts
        .iter()
        .map(|&c| (c as f64 - expected).abs())
        .sum::<f64>()
        / ANGLE_SEGMENTS as f64;
    (100.0 - mad / expected * 100.0).max(0.0)
}

fn closure(first: Point, last: Point, avg_radius: f64) -> f64 {
    radius_normalized(first.dist(last), avg_radius, 100.0)
}

/// Mean turning angle at interior points as a share of a straight line.
/// Left unclamped: the angle is never negative.
fn smoothness(points: &[Point]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for w in points.windows(3) {
        let (p1, p2, p3) = (w[0], w[1], w[2]);
        let (v1x, v1y) = (p1.x - p2.x, p1.y - p2.y);
        let (v2x, v2y) = (p3.x - p2.x, p3.y - p2.y);
        let mag1 = (v1x * v1x + v1y * v1y).sqrt();
        let mag2 = (v2x * v2x + v2y * v2y).sqrt();
        if mag1 > 0.0 && mag2 > 0.0 {
            let cos = (v1x * v2x + v1y * v2y) / (mag1 * mag2);
            sum += cos.clamp(-1.0, 1.0).acos();
            count += 1;
        }
    }
    let avg = if count > 0 { sum / count as f64 } else { PI };
    avg / PI * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn circle(n: usize, r: f64, cx: f64, cy: f64) -> Vec<Point> {
        // Half-step offset keeps samples off the bin boundaries.
        (0..n)
            .map(|i| {
                let a = (i as f64 + 0.5) * TAU / n as f64;
                Point::new(cx + r * a.cos(), cy + r * a.sin())
            })
            .collect()
    }

    fn square(per_edge: usize, half: f64) -> Vec<Point> {
        let corners = [(-half, -half), (half, -half), (half, half), (-half, half)];
        let mut pts = Vec::new();
        for k in 0..4 {
            let (x0, y0) = corners[k];
            let (x1, y1) = corners[(k + 1) % 4];
            for i in 0..per_edge {
                let t = i as f64 / per_edge as f64;
                pts.push(Point::new(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
            }
        }
        pts
    }

    #[test]
    fn short_strokes_are_rejected() {
        for n in 0..MIN_POINTS {
            let s: Stroke = circle(n.max(1), 50.0, 0.0, 0.0).into_iter().take(n).collect();
            assert_eq!(
                score(&s),
                Err(ScoreError::InsufficientPoints {
                    got: n,
                    required: MIN_POINTS
                })
            );
        }
    }

    #[test]
    fn center_is_the_centroid() {
        let pts = square(10, 100.0)
            .into_iter()
            .map(|p| Point::new(p.x + 40.0, p.y - 15.0))
            .collect::<Vec<_>>();
        let expected = crate::geometry::centroid(&pts).unwrap();
        let res = score(&Stroke::from(pts)).unwrap();
        assert_relative_eq!(res.center.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(res.center.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn closure_measures_first_to_last() {
        let a = Point::new(0.0, 0.0);
        assert_relative_eq!(closure(a, a, 50.0), 100.0);
        assert_relative_eq!(closure(a, Point::new(25.0, 0.0), 50.0), 50.0);
        assert_eq!(closure(a, Point::new(80.0, 0.0), 50.0), 0.0);
        assert_eq!(closure(a, Point::new(1.0, 0.0), 0.0), 0.0);
    }

    #[test]
    fn ten_points_are_enough() {
        let s = Stroke::from(circle(MIN_POINTS, 50.0, 0.0, 0.0));
        assert!(score(&s).is_ok());
    }

    #[test]
    fn perfect_circle_scores_full() {
        let s = Stroke::from(circle(3600, 120.0, 300.0, 200.0));
        let res = score(&s).unwrap();
        let sub = res.sub_scores;
        assert_relative_eq!(sub.circularity, 100.0, epsilon = 1e-6);
        assert_relative_eq!(sub.roundness, 100.0, epsilon = 1e-6);
        assert_relative_eq!(sub.symmetry, 100.0, epsilon = 1e-9);
        assert!(sub.closure > 99.5);
        assert!(sub.smoothness > 99.5);
        assert_relative_eq!(res.score, 100.0);
        assert_relative_eq!(res.center.x, 300.0, epsilon = 1e-6);
        assert_relative_eq!(res.center.y, 200.0, epsilon = 1e-6);
        assert_relative_eq!(res.avg_radius, 120.0, epsilon = 1e-6);
    }

    #[test]
    fn identical_points_do_not_divide_by_zero() {
        let s = Stroke::from(vec![Point::new(42.0, 7.0); 25]);
        let res = score(&s).unwrap();
        assert_eq!(res.avg_radius, 0.0);
        assert_eq!(res.sub_scores.circularity, 0.0);
        assert_eq!(res.sub_scores.roundness, 0.0);
        assert_eq!(res.sub_scores.closure, 0.0);
        assert_eq!(res.sub_scores.symmetry, 0.0);
        // no valid triple, treated as perfectly smooth
        assert_relative_eq!(res.sub_scores.smoothness, 100.0);
        assert_relative_eq!(res.score, 10.0);
        assert!(res.score.is_finite());
    }

    #[test]
    fn square_loses_to_circle_on_smoothness_and_roundness() {
        let sq = score(&Stroke::from(square(10, 100.0))).unwrap();
        let ci = score(&Stroke::from(circle(120, 100.0, 0.0, 0.0))).unwrap();
        assert!(sq.sub_scores.smoothness < ci.sub_scores.smoothness);
        assert!(sq.sub_scores.roundness < ci.sub_scores.roundness);
        assert!(sq.score < ci.score);
        // both come back close to where they started
        assert!(sq.sub_scores.closure > 75.0);
        assert!(ci.sub_scores.closure > 90.0);
    }

    #[test]
    fn reordering_changes_closure_and_smoothness() {
        let pts = circle(120, 100.0, 0.0, 0.0);
        let mut sorted = pts.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        let a = score(&Stroke::from(pts)).unwrap().sub_scores;
        let b = score(&Stroke::from(sorted)).unwrap().sub_scores;
        assert_relative_eq!(a.circularity, b.circularity, epsilon = 1e-9);
        assert_relative_eq!(a.roundness, b.roundness, epsilon = 1e-9);
        assert_relative_eq!(a.symmetry, b.symmetry);
        assert!(b.closure < a.closure - 50.0);
        assert!(b.smoothness < a.smoothness - 10.0);
    }

    #[test]
    fn open_arc_gets_poor_closure_and_symmetry() {
        let arc: Vec<Point> = (0..60)
            .map(|i| {
                let a = i as f64 * PI / 59.0;
                Point::new(100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect();
        let res = score(&Stroke::from(arc)).unwrap();
        assert!(res.sub_scores.closure < 10.0);
        assert!(res.sub_scores.symmetry < 60.0);
    }

    #[test]
    fn coincident_neighbors_are_skipped() {
        let mut pts = circle(40, 80.0, 0.0, 0.0);
        let dup = pts[10];
        pts.insert(10, dup);
        let with_dup = smoothness(&pts);
        let without = smoothness(&circle(40, 80.0, 0.0, 0.0));
        // only the two triples touching the duplicate drop out
        assert_relative_eq!(with_dup, without, epsilon = 1e-9);
    }

    #[test]
    fn straight_line_is_perfectly_smooth() {
        let line: Vec<Point> = (0..12).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        assert_relative_eq!(smoothness(&line), 100.0, epsilon = 1e-5);
    }

    #[test]
    fn back_and_forth_is_not_smooth() {
        let zigzag: Vec<Point> = (0..12)
            .map(|i| Point::new(if i % 2 == 0 { 0.0 } else { 10.0 }, 0.0))
            .collect();
        assert_relative_eq!(smoothness(&zigzag), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(87.34), 87.3);
        assert_eq!(round_to_tenth(87.36), 87.4);
        assert_eq!(round_to_tenth(99.97), 100.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn weights_sum_to_one() {
        let w = WEIGHTS;
        assert_relative_eq!(
            w.circularity + w.roundness + w.symmetry + w.closure + w.smoothness,
            1.0
        );
    }

    #[test]
    fn weighted_total_blends_sub_scores() {
        let sub = SubScores {
            circularity: 90.0,
            roundness: 80.0,
            symmetry: 70.0,
            closure: 60.0,
            smoothness: 50.0,
        };
        assert_relative_eq!(sub.weighted_total(), 76.0, epsilon = 1e-9);
    }

    prop_compose! {
        // Integer coordinates keep the centroid exact under reordering.
        fn stroke_and_shuffle()(
            pts in prop::collection::vec((-500i32..500, -500i32..500), MIN_POINTS..80)
        )(
            shuffled in Just(pts.clone()).prop_shuffle(),
            pts in Just(pts)
        ) -> (Vec<Point>, Vec<Point>) {
            let conv = |v: Vec<(i32, i32)>| {
                v.into_iter()
                    .map(|(x, y)| Point::new(x as f64, y as f64))
                    .collect::<Vec<_>>()
            };
            (conv(pts), conv(shuffled))
        }
    }

    proptest! {
        #[test]
        fn order_free_measures_ignore_permutation((pts, shuffled) in stroke_and_shuffle()) {
            let a = score(&Stroke::from(pts)).unwrap().sub_scores;
            let b = score(&Stroke::from(shuffled)).unwrap().sub_scores;
            prop_assert!((a.circularity - b.circularity).abs() < 1e-6);
            prop_assert!((a.roundness - b.roundness).abs() < 1e-6);
            prop_assert_eq!(a.symmetry, b.symmetry);
        }

        #[test]
        fn sub_scores_are_never_negative(
            pts in prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4), MIN_POINTS..60)
        ) {
            let s: Stroke = pts.into_iter().map(Point::from).collect();
            let res = score(&s).unwrap();
            let sub = res.sub_scores;
            for v in [sub.circularity, sub.roundness, sub.symmetry, sub.closure, sub.smoothness] {
                prop_assert!(v >= 0.0);
            }
            prop_assert!(res.score >= 0.0 && res.score <= 100.0);
        }
    }
}
