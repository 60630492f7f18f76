mod accrual;
mod evaluate;
mod populate;
mod predict;
mod query;

pub use {
  accrual::{accrue, Allowance, AllowanceSnapshot},
  evaluate::{evaluate, AccountIntegrityStatus, AccountQueryResult},
  populate::{
    populate_account_creation,
    populate_bouncer_creation,
    populate_delay_creation,
    populate_roles_creation,
  },
  predict::{
    bouncer_address,
    delay_address,
    module_address,
    predict_account_address,
    predict_addresses,
    predict_module_address,
    predict_spender_address,
    roles_address,
    safe_address,
    ModuleKind,
    PredictedAddresses,
  },
  query::{IntegrityQuery, PROBE_COUNT},
};
use {
  account_kit_primitives::{
    address,
    AddressError,
    Bytes,
    Deployments,
    TransactionRequest,
  },
  std::future::Future,
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Error)]
pub enum Error<E> {
  #[error(transparent)]
  InvalidAddress(#[from] AddressError),

  #[error("eth_call failed: {0}")]
  EthCall(E),
}

/// Builds the integrity query for the account at `account`, awaits
/// `eth_call` to execute it once and evaluates the response.
///
/// `eth_call` receives a read-only call to the multicall contract and must
/// return its raw return data. Retrying or cancelling that call is up to
/// the caller. Once the data is in, evaluation itself cannot fail.
///
/// ```ignore
/// let result = account_query(&deployments, account, 3600, |request| {
///   rpc.eth_call(request)
/// })
/// .await?;
/// ```
pub async fn account_query<F, Fut, E>(
  deployments: &Deployments,
  account: &str,
  cooldown: u64,
  eth_call: F,
) -> Result<AccountQueryResult, Error<E>>
where
  F: FnOnce(TransactionRequest) -> Fut,
  Fut: Future<Output = Result<Bytes, E>>,
{
  let account = address::parse(account)?;
  let request = IntegrityQuery::new(deployments, account).request();

  debug!("querying integrity of {account} via {}", request.to);
  let response = eth_call(request).await.map_err(Error::EthCall)?;
  Ok(evaluate(deployments, account, cooldown, &response))
}
