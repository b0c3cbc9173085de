/// Page wiring and drawing constants.
/// localStorage key holding the best score.
pub const HIGH_SCORE_KEY: &str = "perfectCircleHighScore";
/// How long a notification stays visible (ms).
pub const NOTIFICATION_MS: i32 = 2000;

pub const CANVAS_ID: &str = "canvas";
pub const CONTAINER_SELECTOR: &str = ".canvas-container";
pub const SCORE_CONTAINER_ID: &str = "scoreContainer";
pub const SCORE_ID: &str = "score";
pub const SCORE_LABEL_ID: &str = "scoreLabel";
pub const SHARE_BTN_ID: &str = "shareBtn";
pub const COPY_BTN_ID: &str = "copyBtn";
pub const NOTIFICATION_ID: &str = "notification";
pub const HINT_ID: &str = "drawingHint";

pub const STROKE_COLOR: &str = "#fff";
pub const STROKE_WIDTH: f64 = 3.0;
pub const GUIDE_COLOR: &str = "rgba(255, 255, 255, 0.3)";
pub const GUIDE_WIDTH: f64 = 2.0;
