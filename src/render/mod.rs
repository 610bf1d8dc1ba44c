//! Output rendering and delivery

pub mod document;
pub mod output;

pub use document::render;
pub use output::{write_output, write_stdout};
