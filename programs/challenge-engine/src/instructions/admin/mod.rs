pub mod init_platform;
pub mod create_challenge;
pub mod cancel_challenge;
pub mod close_challenge;
pub mod pause;
pub mod update_fees;
pub mod update_collateral_mint;
pub mod update_treasury;

pub use init_platform::*;
pub use create_challenge::*;
pub use cancel_challenge::*;
pub use close_challenge::*;
pub use pause::*;
pub use update_fees::*;
pub use update_collateral_mint::*;
pub use update_treasury::*;
