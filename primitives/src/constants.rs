use {
  alloy_primitives::{keccak256, B256, U256},
  once_cell::sync::Lazy,
};

/// Salt nonce every account is created with, unless the caller overrides
/// it. Sharing it is what lets anyone derive the account of a given owner.
pub static ACCOUNT_CREATION_NONCE: Lazy<U256> =
  Lazy::new(|| U256::from_be_bytes(keccak256("account-kit.account").0));

/// Salt nonce for plain multi-owner spender Safes.
pub static SPENDER_CREATION_NONCE: Lazy<U256> =
  Lazy::new(|| U256::from_be_bytes(keccak256("account-kit.spender").0));

/// Key of the roles modifier allowance that holds the spending limit.
pub static SPENDING_ALLOWANCE_KEY: Lazy<B256> =
  Lazy::new(|| keccak256("SPENDING_ALLOWANCE"));

/// Salt nonce for the delay and roles module proxies. The initializer
/// already binds each proxy to its account, so no extra entropy is needed.
pub const MODULE_SALT_NONCE: U256 = U256::ZERO;

/// Number of enabled modules read in one page. A correctly configured
/// account has exactly two, anything beyond is a misconfiguration anyway.
pub const MODULES_PAGE_SIZE: u64 = 10;
