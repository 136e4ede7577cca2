pub mod confetti_canvas;
pub mod gradient_background;

pub use confetti_canvas::ConfettiCanvas;
pub use gradient_background::GradientBackground;
