pub mod question_form;
pub mod video_form;

pub use question_form::*;
pub use video_form::*;
