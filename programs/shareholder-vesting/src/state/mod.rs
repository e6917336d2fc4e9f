pub mod shareholder_record;
pub mod vesting_config;

pub use shareholder_record::*;
pub use vesting_config::*;
