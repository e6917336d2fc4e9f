//! Unlocked-cap arithmetic for interval-based vesting.
//!
//! Each whole elapsed `time_interval` unlocks `distribution_percent` of the
//! record's total allocation. Exact truncating integer division, no
//! partial-interval credit, cap never exceeds the total allocation.

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::VestingError;
use crate::state::{ShareholderRecord, VestingConfig};

/// Whole intervals elapsed since `start_date`, clamped to >= 0 so a clock
/// anomaly can never yield a negative count.
pub fn elapsed_intervals(
    config: &VestingConfig,
    start_date: i64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if config.time_interval <= 0 {
        return Err(VestingError::InvalidConfig);
    }
    let elapsed = now_ts.saturating_sub(start_date).max(0);
    Ok((elapsed / config.time_interval) as u64)
}

/// Maximum cumulative amount the record may have claimed as of `now_ts`:
/// `min(total_allocation * distribution_percent * intervals / 100, total_allocation)`.
///
/// During the first interval the cap is 0, so no claim is possible right
/// after registration.
pub fn unlocked_cap(
    config: &VestingConfig,
    record: &ShareholderRecord,
    now_ts: i64,
) -> Result<u64, VestingError> {
    let intervals = elapsed_intervals(config, record.start_date, now_ts)?;
    // Once percent * intervals >= 100 the cap is the full allocation, so the
    // interval count can be clamped before multiplying; arbitrarily distant
    // timestamps then cannot overflow the u128 product.
    let intervals = intervals.min(PERCENT_DENOMINATOR);
    let raw = (record.total_allocation as u128)
        .checked_mul(config.distribution_percent as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_mul(intervals as u128)
        .ok_or(VestingError::MathOverflow)?
        / PERCENT_DENOMINATOR as u128;
    let cap = raw.min(record.total_allocation as u128);
    u64::try_from(cap).map_err(|_| VestingError::MathOverflow)
}

/// Validate a claim of `requested` tokens against the record and the current
/// cap; returns the new cumulative claimed amount on success.
///
/// Checks run in a fixed order: zero amount, all-claimed, then the cap. A
/// rejected request leaves the record untouched, so repeating it rejects
/// identically. Since `cap <= total_allocation`, the cap check also prevents
/// claiming past the total allocation.
pub fn authorize_claim(
    record: &ShareholderRecord,
    requested: u64,
    cap: u64,
) -> Result<u64, VestingError> {
    if requested == 0 {
        return Err(VestingError::InvalidAmount);
    }
    if record.claimed_amount == record.total_allocation {
        return Err(VestingError::AllClaimed);
    }
    let new_claimed = record
        .claimed_amount
        .checked_add(requested)
        .ok_or(VestingError::MathOverflow)?;
    if new_claimed > cap {
        return Err(VestingError::ClaimExceedsLimit);
    }
    Ok(new_claimed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const INTERVAL: i64 = 2_630_000;
    const START: i64 = 1_000;

    fn config(percent: u8) -> VestingConfig {
        VestingConfig {
            mint: Pubkey::default(),
            admin: Pubkey::default(),
            distribution_percent: percent,
            time_interval: INTERVAL,
        }
    }

    fn record(total: u64, claimed: u64) -> ShareholderRecord {
        ShareholderRecord {
            shareholder: Pubkey::default(),
            total_allocation: total,
            start_date: START,
            claimed_amount: claimed,
        }
    }

    fn after(intervals: i64) -> i64 {
        START + intervals * INTERVAL
    }

    #[test]
    fn cap_is_zero_during_first_interval() {
        let cfg = config(1);
        let rec = record(10_000, 0);
        assert_eq!(unlocked_cap(&cfg, &rec, START).unwrap(), 0);
        assert_eq!(unlocked_cap(&cfg, &rec, after(1) - 1).unwrap(), 0);
        // Claim(1) right after registration is rejected.
        let cap = unlocked_cap(&cfg, &rec, START).unwrap();
        assert!(matches!(
            authorize_claim(&rec, 1, cap),
            Err(VestingError::ClaimExceedsLimit)
        ));
    }

    #[test]
    fn first_round_claim_within_cap() {
        let cfg = config(1);
        let rec = record(10_000, 0);
        let cap = unlocked_cap(&cfg, &rec, after(1)).unwrap();
        assert_eq!(cap, 100);
        assert_eq!(authorize_claim(&rec, 50, cap).unwrap(), 50);
    }

    #[test]
    fn second_round_cumulative_claim() {
        let cfg = config(1);
        let rec = record(10_000, 50);
        let cap = unlocked_cap(&cfg, &rec, after(2)).unwrap();
        assert_eq!(cap, 200);
        // 50 already claimed + 150 more lands exactly on the cap.
        assert_eq!(authorize_claim(&rec, 150, cap).unwrap(), 200);
    }

    #[test]
    fn full_drain_once_everything_unlocked() {
        let cfg = config(1);
        let rec = record(10_000, 200);
        let cap = unlocked_cap(&cfg, &rec, after(100)).unwrap();
        assert_eq!(cap, 10_000);
        assert_eq!(authorize_claim(&rec, 9_800, cap).unwrap(), 10_000);
    }

    #[test]
    fn all_claimed_rejected() {
        let cfg = config(1);
        let rec = record(10_000, 10_000);
        let cap = unlocked_cap(&cfg, &rec, after(101)).unwrap();
        assert!(matches!(
            authorize_claim(&rec, 1, cap),
            Err(VestingError::AllClaimed)
        ));
    }

    #[test]
    fn claim_above_cap_rejected() {
        let cfg = config(1);
        let rec = record(10_000, 0);
        let cap = unlocked_cap(&cfg, &rec, after(1)).unwrap();
        assert!(matches!(
            authorize_claim(&rec, 500, cap),
            Err(VestingError::ClaimExceedsLimit)
        ));
    }

    #[test]
    fn rejection_is_idempotent() {
        let cfg = config(1);
        let rec = record(10_000, 0);
        let cap = unlocked_cap(&cfg, &rec, after(1)).unwrap();
        for _ in 0..3 {
            assert!(matches!(
                authorize_claim(&rec, 500, cap),
                Err(VestingError::ClaimExceedsLimit)
            ));
        }
    }

    #[test]
    fn zero_amount_rejected() {
        let rec = record(10_000, 0);
        assert!(matches!(
            authorize_claim(&rec, 0, 10_000),
            Err(VestingError::InvalidAmount)
        ));
    }

    #[test]
    fn cap_monotonic_and_bounded() {
        let cfg = config(3);
        let rec = record(10_000, 0);
        let mut prev = 0;
        for k in 0..=250 {
            let cap = unlocked_cap(&cfg, &rec, after(k)).unwrap();
            assert!(cap >= prev);
            assert!(cap <= rec.total_allocation);
            prev = cap;
        }
        assert_eq!(prev, rec.total_allocation);
    }

    #[test]
    fn division_truncates() {
        let cfg = config(1);
        // 99 * 1 * 1 / 100 = 0 (truncated), not 1.
        assert_eq!(unlocked_cap(&cfg, &record(99, 0), after(1)).unwrap(), 0);
        // 101 * 1 * 1 / 100 = 1.01 -> 1.
        assert_eq!(unlocked_cap(&cfg, &record(101, 0), after(1)).unwrap(), 1);
        // After 100 intervals the truncated remainder is released too.
        assert_eq!(unlocked_cap(&cfg, &record(99, 0), after(100)).unwrap(), 99);
    }

    #[test]
    fn clock_before_start_clamps_to_zero() {
        let cfg = config(1);
        let rec = record(10_000, 0);
        assert_eq!(elapsed_intervals(&cfg, START, START - INTERVAL).unwrap(), 0);
        assert_eq!(unlocked_cap(&cfg, &rec, START - 1).unwrap(), 0);
    }

    #[test]
    fn interval_boundary_is_inclusive() {
        let cfg = config(1);
        assert_eq!(elapsed_intervals(&cfg, START, after(1)).unwrap(), 1);
        assert_eq!(elapsed_intervals(&cfg, START, after(1) - 1).unwrap(), 0);
    }

    #[test]
    fn cap_never_exceeds_allocation_for_large_percent() {
        let cfg = config(100);
        let rec = record(u64::MAX, 0);
        assert_eq!(unlocked_cap(&cfg, &rec, after(1)).unwrap(), u64::MAX);
        assert_eq!(unlocked_cap(&cfg, &rec, i64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn cap_check_subsumes_allocation_check() {
        // Even with the full allocation unlocked, a claim cannot push the
        // cumulative total past it.
        let cfg = config(1);
        let rec = record(10_000, 9_990);
        let cap = unlocked_cap(&cfg, &rec, after(100)).unwrap();
        assert!(matches!(
            authorize_claim(&rec, 20, cap),
            Err(VestingError::ClaimExceedsLimit)
        ));
        assert_eq!(authorize_claim(&rec, 10, cap).unwrap(), 10_000);
    }

    #[test]
    fn nonpositive_interval_is_invalid_config() {
        let mut cfg = config(1);
        cfg.time_interval = 0;
        assert!(matches!(
            elapsed_intervals(&cfg, START, after(1)),
            Err(VestingError::InvalidConfig)
        ));
    }
}
