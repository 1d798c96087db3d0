pub mod parse;

pub use parse::{Element, Pattern};
