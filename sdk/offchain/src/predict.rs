//! Deterministic (`CREATE2`) addresses of an account and its modules.
//!
//! Every contract of an account is deployed through a factory with
//! `CREATE2`, so its address is a pure function of the factory, a salt and
//! the hash of the creation code. Both salt and code are derived from the
//! owner (for the account) or from the account (for its modules), which
//! makes every address computable before anything is deployed:
//!
//! ```text
//!   owner -> account -+-> delay
//!                     +-> roles --+
//!                     +-----------+-> bouncer
//! ```

use {
  account_kit_primitives::{
    abi::{IDelay, IRoles, ISafe},
    address,
    constants::{
      ACCOUNT_CREATION_NONCE,
      MODULE_SALT_NONCE,
      SPENDER_CREATION_NONCE,
    },
    AddressError,
    Deployments,
    MODULE_PROXY_PREFIX,
    MODULE_PROXY_SUFFIX,
  },
  alloy_primitives::{keccak256, Address, Bytes, FixedBytes, B256, U256},
  alloy_sol_types::{SolCall, SolValue},
  serde::{Deserialize, Serialize},
  tracing::debug,
};

/// Contracts that make up an account besides the Safe itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
  /// Timelock every owner transaction goes through.
  Delay,

  /// Roles modifier holding the spending allowance.
  Roles,

  /// Owner of the roles modifier, only able to call `setAllowance`.
  Bouncer,

  /// Shared allowance singleton, the same for every account.
  Allowance,
}

/// All addresses that belong to one owner's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedAddresses {
  pub account: Address,
  pub delay: Address,
  pub roles: Address,
  pub bouncer: Address,
}

/// Address of the account created for `owner`.
///
/// `creation_nonce` should normally be left as `None`: the shared default
/// is what makes the address of an owner's account well known.
pub fn predict_account_address(
  deployments: &Deployments,
  owner: &str,
  creation_nonce: Option<U256>,
) -> Result<Address, AddressError> {
  let owner = address::parse(owner)?;
  let nonce = creation_nonce.unwrap_or(*ACCOUNT_CREATION_NONCE);
  Ok(safe_address(deployments, &[owner], 1, nonce))
}

/// Address of a plain multi-owner Safe, as used for spenders.
pub fn predict_spender_address(
  deployments: &Deployments,
  owners: &[&str],
  threshold: u64,
  creation_nonce: Option<U256>,
) -> Result<Address, AddressError> {
  let owners = owners
    .iter()
    .map(|owner| address::parse(owner))
    .collect::<Result<Vec<_>, _>>()?;
  let nonce = creation_nonce.unwrap_or(*SPENDER_CREATION_NONCE);
  Ok(safe_address(deployments, &owners, threshold, nonce))
}

/// Address of one of the modules of an already known `account`.
pub fn predict_module_address(
  deployments: &Deployments,
  account: &str,
  kind: ModuleKind,
) -> Result<Address, AddressError> {
  let account = address::parse(account)?;
  Ok(module_address(deployments, account, kind))
}

/// The account of `owner` together with all of its modules.
pub fn predict_addresses(
  deployments: &Deployments,
  owner: &str,
  creation_nonce: Option<U256>,
) -> Result<PredictedAddresses, AddressError> {
  let account = predict_account_address(deployments, owner, creation_nonce)?;
  Ok(PredictedAddresses {
    account,
    delay: delay_address(deployments, account),
    roles: roles_address(deployments, account),
    bouncer: bouncer_address(deployments, account),
  })
}

pub fn module_address(
  deployments: &Deployments,
  account: Address,
  kind: ModuleKind,
) -> Address {
  match kind {
    ModuleKind::Delay => delay_address(deployments, account),
    ModuleKind::Roles => roles_address(deployments, account),
    ModuleKind::Bouncer => bouncer_address(deployments, account),
    ModuleKind::Allowance => deployments.allowance_singleton,
  }
}

/// Address of a Safe proxy created by the proxy factory through
/// `createProxyWithNonce`.
pub fn safe_address(
  deployments: &Deployments,
  owners: &[Address],
  threshold: u64,
  salt_nonce: U256,
) -> Address {
  let initializer = safe_initializer(deployments, owners, threshold);
  let init_code = [
    deployments.safe_proxy_creation_code.as_ref(),
    deployments.safe_mastercopy.into_word().as_slice(),
  ]
  .concat();

  let address = deployments
    .safe_proxy_factory
    .create2(factory_salt(&initializer, salt_nonce), keccak256(init_code));
  debug!("safe of {owners:?} (threshold {threshold}) at {address}");
  address
}

pub fn delay_address(deployments: &Deployments, account: Address) -> Address {
  let address = module_proxy_address(
    deployments,
    deployments.delay_mastercopy,
    &delay_initializer(account),
  );
  debug!("delay module of {account} at {address}");
  address
}

pub fn roles_address(deployments: &Deployments, account: Address) -> Address {
  let address = module_proxy_address(
    deployments,
    deployments.roles_mastercopy,
    &roles_initializer(account),
  );
  debug!("roles module of {account} at {address}");
  address
}

/// The bouncer's constructor arguments carry the account and its roles
/// module, so each bouncer can only ever forward `setAllowance` calls from
/// one account to one roles module.
pub fn bouncer_address(deployments: &Deployments, account: Address) -> Address {
  let init_code = bouncer_init_code(deployments, account);
  let address = deployments
    .singleton_factory
    .create2(B256::ZERO, keccak256(init_code));
  debug!("bouncer of {account} at {address}");
  address
}

/// Calldata of `Safe.setup` the account proxy is initialized with.
pub(crate) fn safe_initializer(
  deployments: &Deployments,
  owners: &[Address],
  threshold: u64,
) -> Vec<u8> {
  ISafe::setupCall {
    owners: owners.to_vec(),
    threshold: U256::from(threshold),
    to: Address::ZERO,
    data: Bytes::new(),
    fallbackHandler: deployments.fallback_handler,
    paymentToken: Address::ZERO,
    payment: U256::ZERO,
    paymentReceiver: Address::ZERO,
  }
  .abi_encode()
}

/// Delay `setUp(owner, avatar, target, cooldown, expiration)`. The cooldown
/// is configured after deployment so that the address does not depend on
/// it.
pub(crate) fn delay_initializer(account: Address) -> Vec<u8> {
  let params =
    (account, account, account, U256::ZERO, U256::ZERO).abi_encode_params();
  IDelay::setUpCall {
    initParams: params.into(),
  }
  .abi_encode()
}

/// Roles `setUp(owner, avatar, target)`. Ownership moves to the bouncer
/// during account setup.
pub(crate) fn roles_initializer(account: Address) -> Vec<u8> {
  let params = (account, account, account).abi_encode_params();
  IRoles::setUpCall {
    initParams: params.into(),
  }
  .abi_encode()
}

pub(crate) fn bouncer_init_code(
  deployments: &Deployments,
  account: Address,
) -> Vec<u8> {
  let roles = roles_address(deployments, account);
  let selector = FixedBytes::<4>::from(IRoles::setAllowanceCall::SELECTOR);
  [
    deployments.bouncer_creation_code.to_vec(),
    (account, roles, selector).abi_encode_params(),
  ]
  .concat()
}

fn module_proxy_address(
  deployments: &Deployments,
  mastercopy: Address,
  initializer: &[u8],
) -> Address {
  let init_code =
    [MODULE_PROXY_PREFIX, mastercopy.as_slice(), MODULE_PROXY_SUFFIX].concat();
  deployments.module_proxy_factory.create2(
    factory_salt(initializer, MODULE_SALT_NONCE),
    keccak256(init_code),
  )
}

/// `keccak256(keccak256(initializer) ++ saltNonce)`, the salt both the Safe
/// proxy factory and the module proxy factory derive.
fn factory_salt(initializer: &[u8], salt_nonce: U256) -> B256 {
  keccak256(
    [
      keccak256(initializer).as_slice(),
      salt_nonce.to_be_bytes::<32>().as_slice(),
    ]
    .concat(),
  )
}
