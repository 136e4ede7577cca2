pub const STORAGE_KEY: &str = "wheelOptions";
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

pub const DUPLICATE_OPTION_ERROR: &str = "This option already exists!";
pub const EMPTY_WHEEL_MESSAGE: &str = "Add some options to start spinning!";
pub const SPIN_BUTTON_IDLE: &str = "Spin the Wheel!";
pub const SPIN_BUTTON_SPINNING: &str = "Spinning...";
pub const WINNER_HEADING: &str = "🎉 Winner! 🎉";

// Wheel styling
pub const WHEEL_TEXT_COLOR: &str = "#ffffff";
pub const WHEEL_OUTER_BORDER_COLOR: &str = "#1a1a1a";
pub const WHEEL_OUTER_BORDER_WIDTH: f64 = 3.0;
pub const WHEEL_INNER_RADIUS: f64 = 0.0;
pub const WHEEL_RADIUS_LINE_COLOR: &str = "#1a1a1a";
pub const WHEEL_RADIUS_LINE_WIDTH: f64 = 1.0;
pub const WHEEL_FONT_SIZE: u32 = 16;

// Spin animation
pub const SPIN_DURATION_MS: f64 = 6000.0;
pub const MIN_SPINS: u32 = 5;
pub const MAX_SPINS: u32 = 8;
/// Fraction of half a wedge the pointer may land away from the wedge centre.
pub const LANDING_JITTER: f64 = 0.7;

// Confetti burst fired when a winner is announced
pub const BURST_PARTICLE_COUNT: usize = 100;
pub const BURST_SPREAD_DEG: f64 = 70.0;
pub const BURST_ORIGIN_X: f64 = 0.5;
pub const BURST_ORIGIN_Y: f64 = 0.6;
pub const BURST_ANGLE_DEG: f64 = 90.0;
pub const BURST_START_VELOCITY: f64 = 45.0;
pub const BURST_DECAY: f64 = 0.9;
pub const BURST_GRAVITY: f64 = 1.0;
pub const BURST_TICKS: u32 = 200;
