pub mod resolve_challenge;

pub use resolve_challenge::*;
