//! Program-wide constants.

/// Denominator for distribution percentages.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Upper bound for `distribution_percent` (whole percent unlocked per interval).
pub const MAX_DISTRIBUTION_PERCENT: u8 = 100;
