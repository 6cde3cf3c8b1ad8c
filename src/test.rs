pub(crate) use {
  super::*,
  dcrwire::AddressKind,
  pretty_assertions::assert_eq as pretty_assert_eq,
  rand::{rngs::StdRng, SeedableRng},
};

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

pub(crate) fn txid(n: u64) -> Txid {
  let hex = format!("{n:x}");

  if hex.is_empty() || hex.len() > 1 {
    panic!();
  }

  hex.repeat(64).parse().unwrap()
}

pub(crate) fn outpoint(n: u64) -> OutPoint {
  format!("{}:{}", txid(n), n).parse().unwrap()
}

fn hash(n: u64) -> [u8; 20] {
  let mut hash = [0x11; 20];
  hash[..8].copy_from_slice(&n.to_le_bytes());
  hash
}

/// A distinct mainnet P2PKH address for each `n`.
pub(crate) fn address(n: u64) -> Address {
  Address::new(Network::Mainnet, AddressKind::PubKeyHash, hash(n))
}

pub(crate) fn p2sh_address(n: u64) -> Address {
  Address::new(Network::Mainnet, AddressKind::ScriptHash, hash(n))
}

pub(crate) fn input(n: u64, atoms: i64) -> SelectedInput {
  SelectedInput::new(
    outpoint(n),
    Amount::from_atoms(atoms),
    SigScriptClass::P2pkh,
  )
}

pub(crate) fn destination(n: u64, atoms: i64) -> Destination {
  Destination::new(address(n).to_string(), Amount::from_atoms(atoms))
}

pub(crate) fn policy() -> Policy {
  Policy::new(Network::Mainnet)
}

pub(crate) fn rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}
