use {
  alloy_primitives::{address, hex, Address, Bytes},
  serde::{Deserialize, Serialize},
};

/// Creation bytecode of the Safe v1.3.0 proxy (`GnosisSafeProxy`). The
/// proxy factory appends the singleton address to it before `CREATE2`.
pub const SAFE_PROXY_CREATION_CODE: &[u8] = &hex!(
  "608060405234801561001057600080fd5b506040516101e63803806101e68339818101604052602081101561003357600080fd5b8101908080519060200190929190505050600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff1614156100ca576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260228152602001806101c46022913960400191505060405180910390fd5b806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505060ab806101196000396000f3fe608060405273ffffffffffffffffffffffffffffffffffffffff600054167fa619486e0000000000000000000000000000000000000000000000000000000060003514156050578060005260206000f35b3660008037600080366000845af43d6000803e60008114156070573d6000fd5b3d6000f3fea2646970667358221220d1429297349653a4918076d650332de1a1068c5f3e07c5c82360c277770b955264736f6c63430007060033496e76616c69642073696e676c65746f6e20616464726573732070726f7669646564"
);

/// Code of the EIP-1167 style minimal proxy the Zodiac module proxy
/// factory deploys. The mastercopy address goes between prefix and suffix.
pub const MODULE_PROXY_PREFIX: &[u8] =
  &hex!("602d8060093d393df3363d3d373d3d3d363d73");
pub const MODULE_PROXY_SUFFIX: &[u8] = &hex!("5af43d82803e903d91602b57fd5bf3");

/// Where every contract an account is assembled from lives, and the code
/// needed to predict the addresses of the ones that are deployed per
/// account.
///
/// The default registry carries the canonical addresses shared by every
/// chain these contracts were deployed to. It can be overridden as a whole
/// from JSON, which is also the way to supply the bouncer creation code:
/// that artifact is produced by the bouncer build and is not bundled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deployments {
  /// Safe v1.3.0 proxy factory.
  pub safe_proxy_factory: Address,

  /// Safe v1.3.0 singleton every account proxy delegates to.
  pub safe_mastercopy: Address,

  /// Compatibility fallback handler set up on every account.
  pub fallback_handler: Address,

  /// Creation bytecode of the proxy deployed by the proxy factory.
  pub safe_proxy_creation_code: Bytes,

  /// Zodiac module proxy factory, deploys the delay and roles modules.
  pub module_proxy_factory: Address,

  pub delay_mastercopy: Address,

  pub roles_mastercopy: Address,

  /// Shared Safe allowance module. It is a singleton, so every account
  /// uses the same instance and nothing is derived per account.
  pub allowance_singleton: Address,

  /// Deterministic deployment proxy (`salt ++ initcode` calldata) that
  /// deploys the bouncer.
  pub singleton_factory: Address,

  /// Creation bytecode of the bouncer, without constructor arguments.
  pub bouncer_creation_code: Bytes,

  /// Multicall3 aggregator used for batched reads.
  pub multicall: Address,
}

impl Default for Deployments {
  fn default() -> Self {
    Self {
      safe_proxy_factory: address!(
        "a6B71E26C5e0845f74c812102Ca7114b6a896AB2"
      ),
      safe_mastercopy: address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552"),
      fallback_handler: address!(
        "f48f2B2d2a534e402487b3ee7C18c33Aec0Fe5e4"
      ),
      safe_proxy_creation_code: Bytes::from_static(SAFE_PROXY_CREATION_CODE),
      module_proxy_factory: address!(
        "000000000000aDdB49795b0f9bA5BC298cDda236"
      ),
      delay_mastercopy: address!("D62129BF40CD1694b3d9D9847367783a1A4d5cB4"),
      roles_mastercopy: address!("9646fDAD06d3e24444381f44362a3B0eB343D337"),
      allowance_singleton: address!(
        "CFbFaC74C26F8647cBDb8c5caf80BB5b32E43134"
      ),
      singleton_factory: address!(
        "4e59b44847b379578588920cA78FbF26c0B4956C"
      ),
      bouncer_creation_code: Bytes::new(),
      multicall: address!("cA11bde05977b3631167028862bE2a173976CA11"),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::Deployments, alloy_primitives::address};

  #[test]
  fn partial_json_override_keeps_defaults() -> anyhow::Result<()> {
    let deployments: Deployments = serde_json::from_str(
      r#"{
        "multicall": "0x0000000000000000000000000000000000000abc",
        "bouncerCreationCode": "0x6080604052"
      }"#,
    )?;

    let defaults = Deployments::default();
    assert_eq!(
      deployments.multicall,
      address!("0000000000000000000000000000000000000abc")
    );
    assert_eq!(deployments.bouncer_creation_code.as_ref(), [
      0x60, 0x80, 0x60, 0x40, 0x52
    ]);
    assert_eq!(deployments.safe_mastercopy, defaults.safe_mastercopy);
    assert_eq!(
      deployments.safe_proxy_creation_code,
      defaults.safe_proxy_creation_code
    );
    Ok(())
  }
}
