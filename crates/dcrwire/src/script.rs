//! Locking script templates.

use bitcoin::{
  opcodes::{
    all::{OP_CHECKSIG, OP_DUP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160, OP_PUSHNUM_1, OP_PUSHNUM_2},
    Opcode,
  },
  script::Builder,
};

/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
pub const P2PKH_SIZE: usize = 1 + 1 + 1 + 20 + 1 + 1;

/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY <sig type> OP_CHECKSIGALT`
pub const P2PKH_ALT_SIZE: usize = 1 + 1 + 1 + 20 + 1 + 1 + 1;

/// `OP_HASH160 <20 bytes> OP_EQUAL`
pub const P2SH_SIZE: usize = 1 + 1 + 20 + 1;

const OP_CHECKSIGALT: u8 = 0xbe;

/// Signature schemes verified by `OP_CHECKSIGALT`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignatureType {
  Ed25519,
  Schnorr,
}

impl SignatureType {
  fn opcode(self) -> Opcode {
    match self {
      Self::Ed25519 => OP_PUSHNUM_1,
      Self::Schnorr => OP_PUSHNUM_2,
    }
  }
}

pub fn pay_to_pubkey_hash(hash: [u8; 20]) -> Vec<u8> {
  Builder::new()
    .push_opcode(OP_DUP)
    .push_opcode(OP_HASH160)
    .push_slice(hash)
    .push_opcode(OP_EQUALVERIFY)
    .push_opcode(OP_CHECKSIG)
    .into_script()
    .into_bytes()
}

pub fn pay_to_pubkey_hash_alt(hash: [u8; 20], signature_type: SignatureType) -> Vec<u8> {
  Builder::new()
    .push_opcode(OP_DUP)
    .push_opcode(OP_HASH160)
    .push_slice(hash)
    .push_opcode(OP_EQUALVERIFY)
    .push_opcode(signature_type.opcode())
    .push_opcode(Opcode::from(OP_CHECKSIGALT))
    .into_script()
    .into_bytes()
}

pub fn pay_to_script_hash(hash: [u8; 20]) -> Vec<u8> {
  Builder::new()
    .push_opcode(OP_HASH160)
    .push_slice(hash)
    .push_opcode(OP_EQUAL)
    .into_script()
    .into_bytes()
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn p2pkh() {
    let script = pay_to_pubkey_hash([0xab; 20]);
    assert_eq!(script.len(), P2PKH_SIZE);
    assert_eq!(&script[..3], &[0x76, 0xa9, 0x14]);
    assert_eq!(&script[23..], &[0x88, 0xac]);
  }

  #[test]
  fn p2pkh_alt() {
    let script = pay_to_pubkey_hash_alt([0xab; 20], SignatureType::Schnorr);
    assert_eq!(script.len(), P2PKH_ALT_SIZE);
    assert_eq!(&script[23..], &[0x88, 0x52, 0xbe]);

    let script = pay_to_pubkey_hash_alt([0xab; 20], SignatureType::Ed25519);
    assert_eq!(&script[23..], &[0x88, 0x51, 0xbe]);
  }

  #[test]
  fn p2sh() {
    let script = pay_to_script_hash([0xcd; 20]);
    assert_eq!(script.len(), P2SH_SIZE);
    assert_eq!(script[0], 0xa9);
    assert_eq!(script[1], 0x14);
    assert_eq!(script[22], 0x87);
  }
}
