use {
  alloy_primitives::{Address, Bytes, U256},
  serde::{Deserialize, Serialize},
};

/// An unsigned call. It is either executed read-only through `eth_call`
/// or handed to a relayer. Signing and sending it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
  pub to: Address,
  pub value: U256,
  pub data: Bytes,
}

impl TransactionRequest {
  /// A call that transfers no value.
  pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
    Self {
      to,
      value: U256::ZERO,
      data: data.into(),
    }
  }
}
