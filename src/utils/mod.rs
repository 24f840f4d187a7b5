pub mod files;
pub mod lines;

pub use files::open_input_file;
pub use lines::{exceeds_length, read_text_line};
