use {
  account_kit_primitives::TransactionRequest,
  alloy_primitives::{Address, Bytes},
  serde::{Deserialize, Serialize},
  std::sync::atomic::{AtomicU64, Ordering},
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("node returned error {code}: {message}")]
  Rpc { code: i64, message: String },

  #[error("node response carries neither a result nor an error")]
  MissingResult,
}

/// Minimal Ethereum JSON-RPC client. It only knows `eth_call` against the
/// latest block, which is all an integrity query needs.
///
/// Every call is a single HTTP request. Nothing is retried.
#[derive(Debug)]
pub struct RpcClient {
  http: reqwest::Client,
  url: String,
  next_id: AtomicU64,
}

#[derive(Debug, Serialize)]
struct CallParams<'a> {
  to: Address,
  data: &'a Bytes,
}

#[derive(Debug, Serialize)]
struct Request<'a> {
  jsonrpc: &'static str,
  id: u64,
  method: &'static str,
  params: (CallParams<'a>, &'static str),
}

#[derive(Debug, Deserialize)]
struct RpcError {
  code: i64,
  message: String,
}

#[derive(Debug, Deserialize)]
struct Response {
  #[serde(default)]
  result: Option<Bytes>,
  #[serde(default)]
  error: Option<RpcError>,
}

impl Response {
  fn into_result(self) -> Result<Bytes, Error> {
    match (self.result, self.error) {
      (_, Some(RpcError { code, message })) => {
        Err(Error::Rpc { code, message })
      }
      (Some(data), None) => Ok(data),
      (None, None) => Err(Error::MissingResult),
    }
  }
}

impl RpcClient {
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      url: url.into(),
      next_id: AtomicU64::new(1),
    }
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  /// Executes `request` as a read-only call and returns its raw return
  /// data. The value of the request is not sent.
  pub async fn eth_call(
    &self,
    request: TransactionRequest,
  ) -> Result<Bytes, Error> {
    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    let body = Request {
      jsonrpc: "2.0",
      id,
      method: "eth_call",
      params: (
        CallParams {
          to: request.to,
          data: &request.data,
        },
        "latest",
      ),
    };

    debug!("eth_call #{id} to {} via {}", request.to, self.url);
    let response: Response = self
      .http
      .post(&self.url)
      .json(&body)
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;

    response.into_result()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, alloy_primitives::address};

  #[test]
  fn request_shape() -> anyhow::Result<()> {
    let data = Bytes::from(vec![0x82, 0xad, 0x56, 0xcb]);
    let body = Request {
      jsonrpc: "2.0",
      id: 7,
      method: "eth_call",
      params: (
        CallParams {
          to: address!("cA11bde05977b3631167028862bE2a173976CA11"),
          data: &data,
        },
        "latest",
      ),
    };

    assert_eq!(
      serde_json::to_value(&body)?,
      serde_json::json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "eth_call",
        "params": [
          {
            "to": "0xca11bde05977b3631167028862be2a173976ca11",
            "data": "0x82ad56cb"
          },
          "latest"
        ]
      })
    );
    Ok(())
  }

  #[test]
  fn result_is_returned() -> anyhow::Result<()> {
    let response: Response = serde_json::from_str(
      r#"{"jsonrpc":"2.0","id":1,"result":"0x00ff"}"#,
    )?;
    assert_eq!(response.into_result()?, Bytes::from(vec![0x00, 0xff]));
    Ok(())
  }

  #[test]
  fn node_error_is_surfaced() -> anyhow::Result<()> {
    let response: Response = serde_json::from_value(serde_json::json!({
      "jsonrpc": "2.0",
      "id": 1,
      "error": { "code": -32000, "message": "execution reverted" }
    }))?;
    match response.into_result() {
      Err(Error::Rpc { code, message }) => {
        assert_eq!(code, -32000);
        assert_eq!(message, "execution reverted");
      }
      other => panic!("unexpected {other:?}"),
    }
    Ok(())
  }

  #[test]
  fn empty_response_is_missing_result() -> anyhow::Result<()> {
    let response: Response =
      serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#)?;
    assert!(matches!(response.into_result(), Err(Error::MissingResult)));
    Ok(())
  }

  #[tokio::test]
  async fn unreachable_node_is_transport_error() {
    let client = RpcClient::new("http://127.0.0.1:1");
    let request = TransactionRequest::call(Address::ZERO, vec![0x00]);
    assert!(matches!(
      client.eth_call(request).await,
      Err(Error::Transport(_))
    ));
  }
}
