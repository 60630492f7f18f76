mod rpc;

pub use rpc::{Error, RpcClient};
