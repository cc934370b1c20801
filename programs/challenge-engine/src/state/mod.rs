pub mod platform;
pub mod challenge;

pub use platform::*;
pub use challenge::*;
