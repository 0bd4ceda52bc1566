pub mod answer_display;
pub mod loading_indicator;
pub mod status_display;

pub use answer_display::*;
pub use loading_indicator::*;
pub use status_display::*;
