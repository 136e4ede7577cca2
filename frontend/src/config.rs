use shared::confetti::BurstConfig;
use shared::constants::*;

/// Drawing parameters handed to the wheel canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelStyle {
    pub text_color: String,
    pub outer_border_color: String,
    pub outer_border_width: f64,
    /// Fraction of the radius left empty in the middle.
    pub inner_radius: f64,
    pub radius_line_color: String,
    pub radius_line_width: f64,
    pub font_size: u32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            text_color: WHEEL_TEXT_COLOR.to_string(),
            outer_border_color: WHEEL_OUTER_BORDER_COLOR.to_string(),
            outer_border_width: WHEEL_OUTER_BORDER_WIDTH,
            inner_radius: WHEEL_INNER_RADIUS,
            radius_line_color: WHEEL_RADIUS_LINE_COLOR.to_string(),
            radius_line_width: WHEEL_RADIUS_LINE_WIDTH,
            font_size: WHEEL_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// `localStorage` key the options are saved under.
    pub storage_key: String,
    pub spin_duration_ms: f64,
    pub burst: BurstConfig,
    pub style: WheelStyle,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            spin_duration_ms: SPIN_DURATION_MS,
            burst: BurstConfig::default(),
            style: WheelStyle::default(),
        }
    }
}
