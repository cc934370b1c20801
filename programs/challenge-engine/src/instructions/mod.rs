pub mod admin;
pub mod betting;
pub mod oracle;

pub use admin::*;
pub use betting::*;
pub use oracle::*;
