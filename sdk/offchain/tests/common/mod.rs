use {
  account_kit_primitives::{
    abi::{IDelay, IMulticall3, IRoles, ISafe},
    address::{SENTINEL_MODULES, SENTINEL_OWNER},
    constants::SPENDING_ALLOWANCE_KEY,
    Address,
    Bytes,
    Deployments,
    TransactionRequest,
    U256,
  },
  account_kit_sdk::{bouncer_address, delay_address, roles_address},
  alloy_sol_types::SolCall,
};

pub const NOW: u64 = 1_700_000_000;

/// Deployments with a stand-in bouncer creation code, so that bouncer
/// addresses depend on some code as they do in production.
pub fn deployments() -> Deployments {
  Deployments {
    bouncer_creation_code: vec![0x60, 0x80, 0x60, 0x40, 0x52].into(),
    ..Default::default()
  }
}

pub fn random_address() -> Address {
  Address::from(rand::random::<[u8; 20]>())
}

#[derive(Debug, Clone)]
pub struct SafeState {
  pub owners: Vec<Address>,
  pub threshold: u64,
  pub modules: Vec<Address>,
}

#[derive(Debug, Clone)]
pub struct AllowanceState {
  pub refill: u128,
  pub max_refill: u128,
  pub period: u64,
  pub balance: u128,
  pub timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct RolesState {
  pub owner: Address,
  pub allowance: AllowanceState,
}

#[derive(Debug, Clone)]
pub struct DelayState {
  pub owner: Address,
  pub cooldown: u64,
  pub tx_nonce: u64,
  pub queue_nonce: u64,
}

/// In-memory stand-in for the contracts of a single account.
///
/// It serves `eth_call`s against the multicall contract the same way a
/// node would: the `aggregate3` batch is decoded and every call is routed
/// by target and selector. Contracts that are `None` are not deployed and
/// make their calls fail.
#[derive(Debug, Clone)]
pub struct MockChain {
  pub deployments: Deployments,
  pub account: Address,
  pub safe: Option<SafeState>,
  pub roles: Option<RolesState>,
  pub delay: Option<DelayState>,
  pub block_timestamp: u64,
}

impl MockChain {
  /// Nothing deployed at `account` yet.
  pub fn empty(deployments: Deployments, account: Address) -> Self {
    Self {
      deployments,
      account,
      safe: None,
      roles: None,
      delay: None,
      block_timestamp: NOW,
    }
  }

  /// An account the way account setup leaves it: the owner is replaced by
  /// the sentinel, delay and roles are enabled, the roles module is owned
  /// by the bouncer and a full allowance of `amount` renews every `period`.
  pub fn configured(
    deployments: Deployments,
    account: Address,
    amount: u128,
    period: u64,
    cooldown: u64,
  ) -> Self {
    let delay = delay_address(&deployments, account);
    let roles = roles_address(&deployments, account);
    let bouncer = bouncer_address(&deployments, account);

    Self {
      safe: Some(SafeState {
        owners: vec![SENTINEL_OWNER],
        threshold: 1,
        modules: vec![roles, delay],
      }),
      roles: Some(RolesState {
        owner: bouncer,
        allowance: AllowanceState {
          refill: amount,
          max_refill: amount,
          period,
          balance: amount,
          timestamp: NOW,
        },
      }),
      delay: Some(DelayState {
        owner: account,
        cooldown,
        tx_nonce: 0,
        queue_nonce: 0,
      }),
      ..Self::empty(deployments, account)
    }
  }

  pub fn eth_call(
    &self,
    request: &TransactionRequest,
  ) -> anyhow::Result<Bytes> {
    anyhow::ensure!(
      request.to == self.deployments.multicall,
      "unexpected eth_call target {}",
      request.to
    );

    let calls =
      IMulticall3::aggregate3Call::abi_decode(&request.data, true)?.calls;

    let mut results = Vec::with_capacity(calls.len());
    for call in calls {
      match self.answer(&call) {
        Some(data) => results.push(IMulticall3::CallResult {
          success: true,
          returnData: data.into(),
        }),
        None if call.allowFailure => results.push(IMulticall3::CallResult {
          success: false,
          returnData: Bytes::new(),
        }),
        None => anyhow::bail!("multicall reverted on call to {}", call.target),
      }
    }

    Ok(IMulticall3::aggregate3Call::abi_encode_returns(&(results,)).into())
  }

  fn answer(&self, call: &IMulticall3::Call3) -> Option<Vec<u8>> {
    let data = call.callData.as_ref();
    let selector: [u8; 4] = data.get(..4)?.try_into().ok()?;

    if call.target == self.account {
      let safe = self.safe.as_ref()?;
      return match selector {
        s if s == ISafe::getOwnersCall::SELECTOR => Some(
          ISafe::getOwnersCall::abi_encode_returns(&(safe.owners.clone(),)),
        ),
        s if s == ISafe::getThresholdCall::SELECTOR => {
          Some(ISafe::getThresholdCall::abi_encode_returns(&(U256::from(
            safe.threshold,
          ),)))
        }
        s if s == ISafe::getModulesPaginatedCall::SELECTOR => {
          let page = ISafe::getModulesPaginatedCall::abi_decode(data, true)
            .ok()?
            .pageSize;
          let page: Vec<_> = safe
            .modules
            .iter()
            .copied()
            .take(page.saturating_to::<usize>())
            .collect();
          Some(ISafe::getModulesPaginatedCall::abi_encode_returns(&(
            page,
            SENTINEL_MODULES,
          )))
        }
        _ => None,
      };
    }

    if call.target == roles_address(&self.deployments, self.account) {
      let roles = self.roles.as_ref()?;
      return match selector {
        s if s == IRoles::ownerCall::SELECTOR => {
          Some(IRoles::ownerCall::abi_encode_returns(&(roles.owner,)))
        }
        s if s == IRoles::allowancesCall::SELECTOR => {
          let key = IRoles::allowancesCall::abi_decode(data, true).ok()?.key;
          let unset = AllowanceState {
            refill: 0,
            max_refill: 0,
            period: 0,
            balance: 0,
            timestamp: 0,
          };
          let allowance = match key == *SPENDING_ALLOWANCE_KEY {
            true => &roles.allowance,
            false => &unset,
          };
          Some(IRoles::allowancesCall::abi_encode_returns(&(
            allowance.refill,
            allowance.max_refill,
            allowance.period,
            allowance.balance,
            allowance.timestamp,
          )))
        }
        _ => None,
      };
    }

    if call.target == delay_address(&self.deployments, self.account) {
      let delay = self.delay.as_ref()?;
      return match selector {
        s if s == IDelay::ownerCall::SELECTOR => {
          Some(IDelay::ownerCall::abi_encode_returns(&(delay.owner,)))
        }
        s if s == IDelay::txCooldownCall::SELECTOR => Some(
          IDelay::txCooldownCall::abi_encode_returns(&(U256::from(
            delay.cooldown,
          ),)),
        ),
        s if s == IDelay::txNonceCall::SELECTOR => Some(
          IDelay::txNonceCall::abi_encode_returns(&(U256::from(
            delay.tx_nonce,
          ),)),
        ),
        s if s == IDelay::queueNonceCall::SELECTOR => Some(
          IDelay::queueNonceCall::abi_encode_returns(&(U256::from(
            delay.queue_nonce,
          ),)),
        ),
        _ => None,
      };
    }

    if call.target == self.deployments.multicall
      && selector == IMulticall3::getCurrentBlockTimestampCall::SELECTOR
    {
      return Some(
        IMulticall3::getCurrentBlockTimestampCall::abi_encode_returns(&(
          U256::from(self.block_timestamp),
        )),
      );
    }

    None
  }
}
