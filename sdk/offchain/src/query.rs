use {
  crate::predict::{delay_address, roles_address},
  account_kit_primitives::{
    abi::{IDelay, IMulticall3, IRoles, ISafe},
    address::SENTINEL_MODULES,
    constants::{MODULES_PAGE_SIZE, SPENDING_ALLOWANCE_KEY},
    Deployments,
    TransactionRequest,
  },
  alloy_primitives::{Address, U256},
  alloy_sol_types::SolCall,
};

/// Number of calls in an integrity query. The evaluator relies on results
/// coming back in exactly this order and count.
pub const PROBE_COUNT: usize = 10;

/// One batched read that collects everything needed to judge whether an
/// account is deployed and wired up correctly.
///
/// Probes are ordered: safe (owners, threshold, modules), roles (owner,
/// allowance), delay (owner, cooldown, tx nonce, queue nonce) and finally
/// the block timestamp. Every probe except the timestamp tolerates failure,
/// because a module that is not deployed yet must show up as a failed call
/// and not abort the whole batch. Without a timestamp there is nothing
/// meaningful to compute, so that one is allowed to abort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityQuery {
  pub multicall: Address,
  pub calls: Vec<IMulticall3::Call3>,
}

impl IntegrityQuery {
  pub fn new(deployments: &Deployments, account: Address) -> Self {
    let delay = delay_address(deployments, account);
    let roles = roles_address(deployments, account);
    let multicall = deployments.multicall;

    let calls = vec![
      probe(account, ISafe::getOwnersCall {}),
      probe(account, ISafe::getThresholdCall {}),
      probe(account, ISafe::getModulesPaginatedCall {
        start: SENTINEL_MODULES,
        pageSize: U256::from(MODULES_PAGE_SIZE),
      }),
      probe(roles, IRoles::ownerCall {}),
      probe(roles, IRoles::allowancesCall {
        key: *SPENDING_ALLOWANCE_KEY,
      }),
      probe(delay, IDelay::ownerCall {}),
      probe(delay, IDelay::txCooldownCall {}),
      probe(delay, IDelay::txNonceCall {}),
      probe(delay, IDelay::queueNonceCall {}),
      IMulticall3::Call3 {
        target: multicall,
        allowFailure: false,
        callData: IMulticall3::getCurrentBlockTimestampCall {}
          .abi_encode()
          .into(),
      },
    ];

    debug_assert_eq!(calls.len(), PROBE_COUNT);
    Self { multicall, calls }
  }

  /// `aggregate3` calldata for the multicall contract.
  pub fn calldata(&self) -> Vec<u8> {
    IMulticall3::aggregate3Call {
      calls: self.calls.clone(),
    }
    .abi_encode()
  }

  /// The read-only call to hand to an `eth_call` executor.
  pub fn request(&self) -> TransactionRequest {
    TransactionRequest::call(self.multicall, self.calldata())
  }
}

fn probe(target: Address, call: impl SolCall) -> IMulticall3::Call3 {
  IMulticall3::Call3 {
    target,
    allowFailure: true,
    callData: call.abi_encode().into(),
  }
}
