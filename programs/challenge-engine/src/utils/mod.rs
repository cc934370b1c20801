pub mod modes;
pub mod resolution;

pub use modes::*;
pub use resolution::*;
