pub mod join_challenge;
pub mod claim_payout;
pub mod claim_refund;

pub use join_challenge::*;
pub use claim_payout::*;
pub use claim_refund::*;
