#![forbid(unsafe_code)]

pub mod model;
pub mod navigation;

pub use navigation::{AnswerVisibility, Navigator};
