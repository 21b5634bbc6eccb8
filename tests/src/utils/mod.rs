pub mod assert;

pub use assert::*;
