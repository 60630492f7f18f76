use {
  alloy_primitives::U256,
  serde::{Deserialize, Serialize},
};

/// Raw allowance parameters as stored by the roles modifier, plus the
/// timestamp of the block they were read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceSnapshot {
  pub refill: U256,
  pub max_refill: U256,
  pub period: U256,
  pub balance: U256,
  /// Timestamp of the last refill.
  pub timestamp: U256,
  pub block_timestamp: U256,
}

/// The spending allowance as it is at the snapshot's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowance {
  /// Amount that can be spent right now, refills included.
  pub balance: U256,
  pub refill: U256,
  pub max_refill: U256,
  pub period: U256,
  /// When the next refill tick happens, if refills are configured at all.
  pub next_refill: Option<U256>,
}

/// Applies the refills that accrued since the last stored refill.
///
/// The roles modifier only writes refills to storage when the allowance is
/// consumed, so the stored balance alone lags behind. A refill is granted
/// once per whole elapsed period and never lifts the balance above
/// `max_refill`. A balance already above the cap is left as is. A block
/// older than the last refill accrues nothing.
///
/// All inputs originate from at most 128-bit wide storage, so the
/// arithmetic cannot overflow 256 bits; it saturates regardless.
pub fn accrue(snapshot: &AllowanceSnapshot) -> Allowance {
  Allowance {
    balance: accrued_balance(snapshot),
    refill: snapshot.refill,
    max_refill: snapshot.max_refill,
    period: snapshot.period,
    next_refill: next_refill(snapshot),
  }
}

fn accrued_balance(snapshot: &AllowanceSnapshot) -> U256 {
  let AllowanceSnapshot {
    refill,
    max_refill,
    period,
    balance,
    timestamp,
    block_timestamp,
  } = *snapshot;

  if period.is_zero() || block_timestamp < timestamp.saturating_add(period) {
    return balance;
  }

  if balance >= max_refill {
    return balance;
  }

  let uncapped =
    balance.saturating_add(refill.saturating_mul(elapsed_intervals(snapshot)));
  uncapped.min(max_refill)
}

fn next_refill(snapshot: &AllowanceSnapshot) -> Option<U256> {
  if snapshot.period.is_zero() || snapshot.refill.is_zero() {
    return None;
  }

  let intervals = elapsed_intervals(snapshot).saturating_add(U256::from(1));
  Some(
    snapshot
      .timestamp
      .saturating_add(intervals.saturating_mul(snapshot.period)),
  )
}

/// Whole periods between the last refill and the block, rounded down.
///
/// A block older than the last refill is clamped to zero elapsed periods
/// rather than a negative count, so the balance stays as stored and the
/// next refill is one period after the last one. The roles modifier never
/// stores a refill timestamp ahead of the chain, so this only matters for
/// snapshots assembled by hand.
fn elapsed_intervals(snapshot: &AllowanceSnapshot) -> U256 {
  snapshot
    .block_timestamp
    .saturating_sub(snapshot.timestamp)
    .checked_div(snapshot.period)
    .unwrap_or(U256::ZERO)
}
