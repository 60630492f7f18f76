use {
  crate::{
    accrual::{accrue, Allowance, AllowanceSnapshot},
    predict::{bouncer_address, delay_address, roles_address},
    query::PROBE_COUNT,
  },
  account_kit_primitives::{
    abi::{IDelay, IMulticall3, IRoles, ISafe},
    address::SENTINEL_OWNER,
    Deployments,
  },
  alloy_primitives::{Address, U256},
  alloy_sol_types::SolCall,
  serde::{Deserialize, Serialize},
  thiserror::Error,
  tracing::{debug, warn},
};

/// Outcome of an integrity check. When several things are wrong at once
/// the first failing check, in declaration order, decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountIntegrityStatus {
  /// Deployed, wired up and within policy.
  Ok,
  /// The account itself does not answer.
  SafeNotDeployed,
  /// Wrong owners, wrong threshold or not exactly the delay and roles
  /// modules enabled.
  SafeMisconfigured,
  RolesNotDeployed,
  /// Roles module not owned by the account's bouncer.
  RolesMisconfigured,
  DelayNotDeployed,
  /// Delay module not owned by the account, or its cooldown is too short.
  DelayMisconfigured,
  /// A delayed transaction is queued and not executed yet.
  DelayQueueNotEmpty,
  /// The response could not be decoded.
  UnexpectedError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountQueryResult {
  pub status: AccountIntegrityStatus,
  /// Present only when the status is [`AccountIntegrityStatus::Ok`].
  pub allowance: Option<Allowance>,
}

#[derive(Debug, Error)]
enum Rejection {
  #[error("integrity check failed with {0:?}")]
  Status(AccountIntegrityStatus),

  #[error("malformed response: {0}")]
  Malformed(#[from] alloy_sol_types::Error),

  #[error("misaligned response with {0} results")]
  Misaligned(usize),
}

/// Evaluates the response to an [`crate::IntegrityQuery`] for `account`.
///
/// `cooldown` is the minimum delay, in seconds, the account's delay module
/// must enforce. Never fails: any response that cannot be decoded, however
/// garbled, is reported as [`AccountIntegrityStatus::UnexpectedError`].
pub fn evaluate(
  deployments: &Deployments,
  account: Address,
  cooldown: u64,
  response: &[u8],
) -> AccountQueryResult {
  match check(deployments, account, cooldown, response) {
    Ok(allowance) => {
      debug!("account {account} is ok, allowance: {allowance:?}");
      AccountQueryResult {
        status: AccountIntegrityStatus::Ok,
        allowance: Some(allowance),
      }
    }
    Err(Rejection::Status(status)) => {
      debug!("account {account} rejected: {status:?}");
      AccountQueryResult {
        status,
        allowance: None,
      }
    }
    Err(error) => {
      warn!("account {account} integrity response unusable: {error}");
      AccountQueryResult {
        status: AccountIntegrityStatus::UnexpectedError,
        allowance: None,
      }
    }
  }
}

fn check(
  deployments: &Deployments,
  account: Address,
  cooldown: u64,
  response: &[u8],
) -> Result<Allowance, Rejection> {
  use AccountIntegrityStatus as Status;

  let results =
    IMulticall3::aggregate3Call::abi_decode_returns(response, true)?
      .returnData;
  let [
    owners,
    threshold,
    modules,
    roles_owner,
    allowance,
    delay_owner,
    tx_cooldown,
    tx_nonce,
    queue_nonce,
    block_timestamp,
  ]: [IMulticall3::CallResult; PROBE_COUNT] = results
    .try_into()
    .map_err(|results: Vec<_>| Rejection::Misaligned(results.len()))?;

  ensure(
    owners.success && threshold.success && modules.success,
    Status::SafeNotDeployed,
  )?;

  let threshold =
    ISafe::getThresholdCall::abi_decode_returns(&threshold.returnData, true)?
      .threshold;
  ensure(threshold == U256::from(1), Status::SafeMisconfigured)?;

  let owners =
    ISafe::getOwnersCall::abi_decode_returns(&owners.returnData, true)?
      .owners;
  ensure(owners == [SENTINEL_OWNER], Status::SafeMisconfigured)?;

  let modules = ISafe::getModulesPaginatedCall::abi_decode_returns(
    &modules.returnData,
    true,
  )?
  .array;
  ensure(
    has_exactly_modules(&modules, [
      delay_address(deployments, account),
      roles_address(deployments, account),
    ]),
    Status::SafeMisconfigured,
  )?;

  ensure(roles_owner.success && allowance.success, Status::RolesNotDeployed)?;

  let roles_owner =
    IRoles::ownerCall::abi_decode_returns(&roles_owner.returnData, true)?
      .owner;
  ensure(
    roles_owner == bouncer_address(deployments, account),
    Status::RolesMisconfigured,
  )?;

  ensure(
    delay_owner.success
      && tx_cooldown.success
      && tx_nonce.success
      && queue_nonce.success,
    Status::DelayNotDeployed,
  )?;

  let delay_owner =
    IDelay::ownerCall::abi_decode_returns(&delay_owner.returnData, true)?
      .owner;
  let tx_cooldown =
    IDelay::txCooldownCall::abi_decode_returns(&tx_cooldown.returnData, true)?
      .cooldown;
  ensure(
    delay_owner == account && tx_cooldown >= U256::from(cooldown),
    Status::DelayMisconfigured,
  )?;

  let tx_nonce =
    IDelay::txNonceCall::abi_decode_returns(&tx_nonce.returnData, true)?
      .nonce;
  let queue_nonce =
    IDelay::queueNonceCall::abi_decode_returns(&queue_nonce.returnData, true)?
      .nonce;
  ensure(tx_nonce == queue_nonce, Status::DelayQueueNotEmpty)?;

  let allowance =
    IRoles::allowancesCall::abi_decode_returns(&allowance.returnData, true)?;
  let block_timestamp =
    IMulticall3::getCurrentBlockTimestampCall::abi_decode_returns(
      &block_timestamp.returnData,
      true,
    )?
    .timestamp;

  Ok(accrue(&AllowanceSnapshot {
    refill: U256::from(allowance.refill),
    max_refill: U256::from(allowance.maxRefill),
    period: U256::from(allowance.period),
    balance: U256::from(allowance.balance),
    timestamp: U256::from(allowance.timestamp),
    block_timestamp,
  }))
}

fn ensure(
  condition: bool,
  otherwise: AccountIntegrityStatus,
) -> Result<(), Rejection> {
  match condition {
    true => Ok(()),
    false => Err(Rejection::Status(otherwise)),
  }
}

/// Order independent, and duplicates do not count twice.
fn has_exactly_modules<const N: usize>(
  enabled: &[Address],
  expected: [Address; N],
) -> bool {
  enabled.len() == N && expected.iter().all(|module| enabled.contains(module))
}
