pub mod bet;
pub mod league;
pub mod stat;

pub use bet::*;
pub use league::*;
pub use stat::*;
