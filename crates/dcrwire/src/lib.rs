//! Types for building Decred transactions: amounts, addresses, scripts, and
//! the wire format of unsigned and signed transactions.

use {
  bitcoin::{
    consensus::{encode::VarInt, Encodable},
    io,
  },
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
  },
  thiserror::Error,
};

pub use {
  address::{Address, AddressKind},
  amount::Amount,
  network::{Network, Params, UnknownNetwork},
  transaction::{OutPoint, ParseOutPointError, Transaction, Tree, TxIn, TxOut, Txid},
};

pub mod address;
mod amount;
mod network;
pub mod script;
mod transaction;
pub mod varint;

/// Atoms in one coin.
pub const ATOMS_PER_COIN: i64 = 100_000_000;

/// Maximum number of bytes that may be pushed to the script stack.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 2048;

/// Transaction version produced for regular transactions.
pub const TX_VERSION: u16 = 1;
