pub mod assertion_file;

pub use assertion_file::{load_assertions, parse_assertions, AssertionFormat};
