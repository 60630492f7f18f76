use {
  alloy_primitives::{address, Address},
  thiserror::Error,
};

/// Start and end marker of the linked list a Safe keeps its enabled
/// modules in. Paging through the list starts from here.
pub const SENTINEL_MODULES: Address =
  address!("0000000000000000000000000000000000000001");

/// Placeholder owner that replaces the real signer once an account is
/// configured. From then on the owner acts only through the delay module,
/// so a correctly configured account has this as its one and only owner.
pub const SENTINEL_OWNER: Address =
  address!("0000000000000000000000000000000000000002");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid address {0:?}: expected 40 hex characters")]
  Malformed(String),

  #[error("invalid address {0:?}: mixed-case checksum mismatch")]
  BadChecksum(String),
}

/// Parses and normalizes a textual 20-byte address.
///
/// The `0x` prefix is optional. Addresses written entirely in lower or
/// upper case are accepted as-is. An address that mixes cases is taken to
/// carry an EIP-55 checksum, and that checksum must be valid, otherwise a
/// mistyped character could silently yield a different (but well formed)
/// account.
pub fn parse(value: &str) -> Result<Address, Error> {
  let hex = value.strip_prefix("0x").unwrap_or(value);
  if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(Error::Malformed(value.to_owned()));
  }

  let address: Address = hex
    .parse()
    .map_err(|_| Error::Malformed(value.to_owned()))?;

  let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
  let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
  if has_lower && has_upper && address.to_checksum(None)[2..] != *hex {
    return Err(Error::BadChecksum(value.to_owned()));
  }

  Ok(address)
}
