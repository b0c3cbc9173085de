use std::fmt;

use serde::{Deserialize, Serialize};

/// RGB triple. Channels are not restricted to 0..=255 so that scores outside
/// 0..=100 show up as out-of-gamut values instead of silently wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Red at 0 through yellow at 50 to green at 100.
/// The input is not clamped; callers keep it within 0..=100.
pub fn color_for(score: f64) -> Rgb {
    if score < 50.0 {
        Rgb {
            r: 255,
            g: (255.0 * (score / 50.0)).round() as i32,
            b: 0,
        }
    } else {
        Rgb {
            r: (255.0 * (1.0 - (score - 50.0) / 50.0)).round() as i32,
            g: 255,
            b: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(color_for(0.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(color_for(50.0), Rgb { r: 255, g: 255, b: 0 });
        assert_eq!(color_for(100.0), Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn css_form() {
        assert_eq!(color_for(0.0).to_string(), "rgb(255, 0, 0)");
        assert_eq!(color_for(100.0).to_string(), "rgb(0, 255, 0)");
    }

    #[test]
    fn halfway_points_round_up() {
        // 127.5 on both ramps
        assert_eq!(color_for(25.0), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(color_for(75.0), Rgb { r: 128, g: 255, b: 0 });
    }

    #[test]
    fn just_below_fifty_stays_on_red_ramp() {
        let c = color_for(49.9);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 254);
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        assert_eq!(color_for(110.0).r, -51);
        assert_eq!(color_for(-10.0).g, -51);
    }
}
