pub mod initialize;
pub mod deposit_tokens;
pub mod register_shareholder;
pub mod claim;
pub mod emit_claim_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use register_shareholder::*;
pub use claim::*;
pub use emit_claim_quote::*;
