use super::*;

/// Number of bytes the compact size encoding of `n` occupies.
pub fn serialize_size(n: usize) -> usize {
  VarInt::from(n).size()
}
