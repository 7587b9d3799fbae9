pub mod pattern;

pub use pattern::{Dataset, Pattern};
