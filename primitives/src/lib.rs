pub mod abi;
pub mod address;
pub mod constants;
mod deployments;
mod request;

pub use {
  address::Error as AddressError,
  alloy_primitives::{Address, Bytes, B256, U256},
  deployments::{
    Deployments,
    MODULE_PROXY_PREFIX,
    MODULE_PROXY_SUFFIX,
    SAFE_PROXY_CREATION_CODE,
  },
  request::TransactionRequest,
};
