//! Solidity interfaces of every contract the account is composed of.
//!
//! Only the functions that are encoded or decoded somewhere in the
//! workspace are declared.

use alloy_sol_types::sol;

sol! {
  /// Safe v1.3.0 singleton, the multi-signature wallet behind an account.
  #[sol(all_derives)]
  interface ISafe {
    function setup(
      address[] owners,
      uint256 threshold,
      address to,
      bytes data,
      address fallbackHandler,
      address paymentToken,
      uint256 payment,
      address paymentReceiver
    ) external;

    function getOwners() external view returns (address[] owners);

    function getThreshold() external view returns (uint256 threshold);

    function getModulesPaginated(address start, uint256 pageSize)
      external
      view
      returns (address[] array, address next);
  }

  /// Safe v1.3.0 proxy factory.
  #[sol(all_derives)]
  interface ISafeProxyFactory {
    function createProxyWithNonce(
      address singleton,
      bytes initializer,
      uint256 saltNonce
    ) external returns (address proxy);
  }

  /// Zodiac module proxy factory, deploys minimal proxies of module
  /// mastercopies.
  #[sol(all_derives)]
  interface IModuleProxyFactory {
    function deployModule(
      address masterCopy,
      bytes initializer,
      uint256 saltNonce
    ) external returns (address proxy);
  }

  /// Zodiac delay (timelock) modifier.
  #[sol(all_derives)]
  interface IDelay {
    function setUp(bytes initParams) external;

    function owner() external view returns (address owner);

    function txCooldown() external view returns (uint256 cooldown);

    function txNonce() external view returns (uint256 nonce);

    function queueNonce() external view returns (uint256 nonce);
  }

  /// Zodiac roles modifier (v2). Its allowance table holds the spending
  /// limit of the account.
  #[sol(all_derives)]
  interface IRoles {
    function setUp(bytes initParams) external;

    function owner() external view returns (address owner);

    function setAllowance(
      bytes32 key,
      uint128 balance,
      uint128 maxRefill,
      uint128 refill,
      uint64 period,
      uint64 timestamp
    ) external;

    function allowances(bytes32 key)
      external
      view
      returns (
        uint128 refill,
        uint128 maxRefill,
        uint64 period,
        uint128 balance,
        uint64 timestamp
      );
  }

  /// Multicall3 batched read aggregator.
  #[sol(all_derives)]
  interface IMulticall3 {
    #[derive(Debug, PartialEq, Eq)]
    struct Call3 {
      address target;
      bool allowFailure;
      bytes callData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct CallResult {
      bool success;
      bytes returnData;
    }

    function aggregate3(Call3[] calls)
      external
      payable
      returns (CallResult[] returnData);

    function getCurrentBlockTimestamp()
      external
      view
      returns (uint256 timestamp);
  }
}
