pub mod admin;
pub mod claim_prize;
pub mod close_lottery;
pub mod commit_randomness;
pub mod join_lottery;
pub mod pick_winner;
pub mod reveal_winner;

pub use admin::*;
pub use claim_prize::*;
pub use close_lottery::*;
pub use commit_randomness::*;
pub use join_lottery::*;
pub use pick_winner::*;
pub use reveal_winner::*;
