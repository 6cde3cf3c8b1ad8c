//! Base58 addresses with a two byte network id and a BLAKE-256 checksum.
//!
//! The decoded payload of an address is `id || data || checksum`, where `id`
//! selects both the network and the kind of address, and `checksum` is the
//! first four bytes of `BLAKE256(BLAKE256(id || data))`.

use {
  super::*,
  blake_hash::{Blake256, Digest},
  script::SignatureType,
};

const CHECKSUM_LEN: usize = 4;
const HASH_LEN: usize = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressKind {
  PubKeyHash,
  PubKeyHashEd25519,
  PubKeyHashSchnorr,
  ScriptHash,
}

impl AddressKind {
  pub fn script_size(self) -> usize {
    match self {
      Self::PubKeyHash => script::P2PKH_SIZE,
      Self::PubKeyHashEd25519 | Self::PubKeyHashSchnorr => script::P2PKH_ALT_SIZE,
      Self::ScriptHash => script::P2SH_SIZE,
    }
  }

  fn addr_id(self, params: &Params) -> [u8; 2] {
    match self {
      Self::PubKeyHash => params.pubkey_hash_addr_id,
      Self::PubKeyHashEd25519 => params.pkh_edwards_addr_id,
      Self::PubKeyHashSchnorr => params.pkh_schnorr_addr_id,
      Self::ScriptHash => params.script_hash_addr_id,
    }
  }

  fn from_addr_id(id: [u8; 2], params: &Params) -> Option<Self> {
    [
      Self::PubKeyHash,
      Self::PubKeyHashEd25519,
      Self::PubKeyHashSchnorr,
      Self::ScriptHash,
    ]
    .into_iter()
    .find(|kind| kind.addr_id(params) == id)
  }
}

impl Display for AddressKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::PubKeyHash => "p2pkh",
        Self::PubKeyHashEd25519 => "p2pkh-ed25519",
        Self::PubKeyHashSchnorr => "p2pkh-schnorr",
        Self::ScriptHash => "p2sh",
      }
    )
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("invalid base58 encoding")]
  Base58,
  #[error("checksum mismatch")]
  Checksum,
  #[error("invalid payload length {0}")]
  Length(usize),
  #[error("address is for {actual}, expected {expected}")]
  WrongNetwork { expected: Network, actual: Network },
  #[error("pay-to-pubkey addresses are not supported")]
  PubKey,
  #[error("unknown address id {0:02x?}")]
  UnknownId([u8; 2]),
}

impl Error {
  /// Whether the address decoded cleanly but has no locking script template.
  pub fn is_unsupported_type(&self) -> bool {
    matches!(self, Self::PubKey | Self::UnknownId(_))
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address {
  hash: [u8; HASH_LEN],
  kind: AddressKind,
  network: Network,
}

impl Address {
  pub fn new(network: Network, kind: AddressKind, hash: [u8; HASH_LEN]) -> Self {
    Self {
      hash,
      kind,
      network,
    }
  }

  /// Decodes `s`, requiring that it belongs to `network`.
  pub fn decode(s: &str, network: Network) -> Result<Self, Error> {
    let payload = bitcoin::base58::decode(s).map_err(|_| Error::Base58)?;

    if payload.len() < 2 + CHECKSUM_LEN {
      return Err(Error::Length(payload.len()));
    }

    let (data, checksum) = payload.split_at(payload.len() - CHECKSUM_LEN);

    if self::checksum(data) != checksum {
      return Err(Error::Checksum);
    }

    let id = [data[0], data[1]];
    let params = network.params();

    if id == params.pubkey_addr_id {
      return Err(Error::PubKey);
    }

    let Some(kind) = AddressKind::from_addr_id(id, params) else {
      return Err(match Network::from_addr_id(id) {
        Some(actual) => Error::WrongNetwork {
          expected: network,
          actual,
        },
        None => Error::UnknownId(id),
      });
    };

    let hash = <[u8; HASH_LEN]>::try_from(&data[2..]).map_err(|_| Error::Length(payload.len()))?;

    Ok(Self {
      hash,
      kind,
      network,
    })
  }

  pub fn kind(&self) -> AddressKind {
    self.kind
  }

  pub fn network(&self) -> Network {
    self.network
  }

  pub fn hash(&self) -> [u8; HASH_LEN] {
    self.hash
  }

  pub fn script_pubkey(&self) -> Vec<u8> {
    match self.kind {
      AddressKind::PubKeyHash => script::pay_to_pubkey_hash(self.hash),
      AddressKind::PubKeyHashEd25519 => {
        script::pay_to_pubkey_hash_alt(self.hash, SignatureType::Ed25519)
      }
      AddressKind::PubKeyHashSchnorr => {
        script::pay_to_pubkey_hash_alt(self.hash, SignatureType::Schnorr)
      }
      AddressKind::ScriptHash => script::pay_to_script_hash(self.hash),
    }
  }

  pub fn script_size(&self) -> usize {
    self.kind.script_size()
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut data = Vec::with_capacity(2 + HASH_LEN);
    data.extend_from_slice(&self.kind.addr_id(self.network.params()));
    data.extend_from_slice(&self.hash);
    write!(f, "{}", encode_check(&data))
  }
}

/// Base58 encoding of `data` followed by its checksum.
pub fn encode_check(data: &[u8]) -> String {
  let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
  payload.extend_from_slice(data);
  payload.extend_from_slice(&checksum(data));
  bitcoin::base58::encode(&payload)
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
  let first = Blake256::digest(data);
  let second = Blake256::digest(first.as_slice());
  [second[0], second[1], second[2], second[3]]
}
