//! Worst case sizes of signed transactions, computed before any signature
//! exists.
//!
//! Inputs are sized by the class of signature script that will redeem them,
//! so fees can be fixed while the transaction is still unsigned.

use super::*;

/// `OP_DATA_73 <sig> OP_DATA_33 <compressed pubkey>`
pub const REDEEM_P2PKH_SIG_SCRIPT_SIZE: usize = 1 + 73 + 1 + 33;

/// `OP_DATA_73 <sig>`
pub const REDEEM_P2PK_SIG_SCRIPT_SIZE: usize = 1 + 73;

pub const P2PKH_PK_SCRIPT_SIZE: usize = dcrwire::script::P2PKH_SIZE;

pub const P2SH_PK_SCRIPT_SIZE: usize = dcrwire::script::P2SH_SIZE;

/// Serialized size of an input whose signature script is `sig_script_size`
/// bytes, prefix and witness together.
pub fn input_size(sig_script_size: usize) -> usize {
  // outpoint (hash, index, tree) and sequence
  32 + 4 + 1 + 4
  // value, block height, block index
    + 8 + 4 + 4
    + varint::serialize_size(sig_script_size)
    + sig_script_size
}

pub fn output_size(pk_script_size: usize) -> usize {
  8 + 2 + varint::serialize_size(pk_script_size) + pk_script_size
}

/// Size of the fully serialized transaction once every input is signed.
///
/// `change_script_size`, when present, reserves one more output of that
/// script size.
pub fn estimate_signed_size(
  input_script_sizes: &[usize],
  outputs: &[TxOut],
  change_script_size: Option<usize>,
) -> usize {
  let output_count = outputs.len() + usize::from(change_script_size.is_some());

  // version, lock time, and expiry
  12
    // input count is written in both the prefix and the witness
    + 2 * varint::serialize_size(input_script_sizes.len())
    + varint::serialize_size(output_count)
    + input_script_sizes
      .iter()
      .map(|size| input_size(*size))
      .sum::<usize>()
    + outputs.iter().map(TxOut::serialize_size).sum::<usize>()
    + change_script_size.map(output_size).unwrap_or_default()
}

/// Length of the locking script paying `address`.
pub fn change_script_size(address: &str, network: Network) -> Result<usize, AuthorError> {
  Ok(destination::decode_address(address, network)?.script_size())
}
