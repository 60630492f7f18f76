//! Unsigned creation calls for an account and its modules.
//!
//! Each call is built from the very same initializer its address is
//! predicted from, so relaying it deploys the contract exactly where
//! [`crate::predict`] says it will be.

use {
  crate::predict::{
    bouncer_init_code,
    delay_initializer,
    roles_initializer,
    safe_initializer,
  },
  account_kit_primitives::{
    abi::{IModuleProxyFactory, ISafeProxyFactory},
    address,
    constants::{ACCOUNT_CREATION_NONCE, MODULE_SALT_NONCE},
    AddressError,
    Deployments,
    TransactionRequest,
  },
  alloy_primitives::{Address, B256, U256},
  alloy_sol_types::SolCall,
};

/// `createProxyWithNonce` on the Safe proxy factory for `owner`'s account.
pub fn populate_account_creation(
  deployments: &Deployments,
  owner: &str,
  creation_nonce: Option<U256>,
) -> Result<TransactionRequest, AddressError> {
  let owner = address::parse(owner)?;
  let data = ISafeProxyFactory::createProxyWithNonceCall {
    singleton: deployments.safe_mastercopy,
    initializer: safe_initializer(deployments, &[owner], 1).into(),
    saltNonce: creation_nonce.unwrap_or(*ACCOUNT_CREATION_NONCE),
  }
  .abi_encode();

  Ok(TransactionRequest::call(deployments.safe_proxy_factory, data))
}

/// `deployModule` on the module proxy factory for `account`'s delay.
pub fn populate_delay_creation(
  deployments: &Deployments,
  account: &str,
) -> Result<TransactionRequest, AddressError> {
  let account = address::parse(account)?;
  Ok(deploy_module(
    deployments,
    deployments.delay_mastercopy,
    delay_initializer(account),
  ))
}

/// `deployModule` on the module proxy factory for `account`'s roles.
pub fn populate_roles_creation(
  deployments: &Deployments,
  account: &str,
) -> Result<TransactionRequest, AddressError> {
  let account = address::parse(account)?;
  Ok(deploy_module(
    deployments,
    deployments.roles_mastercopy,
    roles_initializer(account),
  ))
}

/// Deployment of `account`'s bouncer through the singleton factory, which
/// takes `salt ++ initcode` as raw calldata.
pub fn populate_bouncer_creation(
  deployments: &Deployments,
  account: &str,
) -> Result<TransactionRequest, AddressError> {
  let account = address::parse(account)?;
  let data = [
    B256::ZERO.to_vec(),
    bouncer_init_code(deployments, account),
  ]
  .concat();

  Ok(TransactionRequest::call(deployments.singleton_factory, data))
}

fn deploy_module(
  deployments: &Deployments,
  mastercopy: Address,
  initializer: Vec<u8>,
) -> TransactionRequest {
  let data = IModuleProxyFactory::deployModuleCall {
    masterCopy: mastercopy,
    initializer: initializer.into(),
    saltNonce: MODULE_SALT_NONCE,
  }
  .abi_encode();

  TransactionRequest::call(deployments.module_proxy_factory, data)
}
