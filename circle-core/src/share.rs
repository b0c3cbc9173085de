// Messages used by the share and copy buttons.

pub const SHARE_TITLE: &str = "{Circle} Game";

/// Nothing to share until a stroke has been scored above zero.
pub fn can_share(score: f64) -> bool {
    score != 0.0
}

pub fn share_text(score: f64) -> String {
    format!("I just scored {score}% on the {{Circle}} game! Can you beat my score?")
}

pub fn copy_text(score: f64) -> String {
    format!("I just scored {score}% on the {{Circle}} game!")
}
