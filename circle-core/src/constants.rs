/// Scoring constants shared by the engine and the browser glue.
/// A stroke shorter than this is rejected before any computation.
pub const MIN_POINTS: usize = 10;
/// Number of equal angular bins used by the symmetry measure.
pub const ANGLE_SEGMENTS: usize = 8;
/// Roundness penalizes the radius standard deviation this many times harder
/// than circularity penalizes the mean absolute deviation.
pub const ROUNDNESS_SCALE: f64 = 300.0;

/// Fixed blending weights of the five sub-scores. They sum to 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub circularity: f64,
    pub roundness: f64,
    pub symmetry: f64,
    pub closure: f64,
    pub smoothness: f64,
}

pub const WEIGHTS: Weights = Weights {
    circularity: 0.3,
    roundness: 0.3,
    symmetry: 0.2,
    closure: 0.1,
    smoothness: 0.1,
};
