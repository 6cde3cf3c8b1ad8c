//! Network policy that feeds the fee and dust decisions of an authoring call.
//!
//! An output is dust when the fee to later spend it is too large a share of
//! its value. The spend cost is estimated from the output's own serialized
//! size plus that of an average compressed P2PKH redeem input, and the output
//! is dust when `value * 1000 / (dust_factor * size)` falls below the relay
//! fee rate. With a factor of three an output must be worth at least three
//! times its spend cost.

use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
  pub network: Network,
  pub fee_rate: FeeRate,
  pub dust_factor: i64,
  pub max_script_element_size: usize,
}

impl Policy {
  pub const DEFAULT_DUST_FACTOR: i64 = 3;

  /// Average size of a compressed P2PKH redeem input, used when pricing the
  /// spend of a candidate output.
  pub const DUST_REDEEM_INPUT_SIZE: usize = 165;

  pub fn new(network: Network) -> Self {
    Self {
      network,
      fee_rate: FeeRate::DEFAULT_RELAY,
      dust_factor: Self::DEFAULT_DUST_FACTOR,
      max_script_element_size: dcrwire::MAX_SCRIPT_ELEMENT_SIZE,
    }
  }

  pub fn with_fee_rate(self, fee_rate: FeeRate) -> Self {
    Self { fee_rate, ..self }
  }

  pub fn required_fee(&self, size: usize) -> Amount {
    self.fee_rate.fee(size)
  }

  pub fn is_dust(&self, value: Amount, script_size: usize) -> bool {
    let total_size =
      8 + 2 + varint::serialize_size(script_size) + script_size + Self::DUST_REDEEM_INPUT_SIZE;

    let Some(denominator) = i64::try_from(total_size)
      .ok()
      .and_then(|size| size.checked_mul(self.dust_factor))
      .filter(|denominator| *denominator > 0)
    else {
      return false;
    };

    match value.to_atoms().checked_mul(1000) {
      Some(scaled) => scaled / denominator < self.fee_rate.per_kb().to_atoms(),
      None => false,
    }
  }

  /// Smallest value that is not dust for a script of `script_size` bytes.
  pub fn dust_limit(&self, script_size: usize) -> Amount {
    let (mut low, mut high) = (0, Amount::MAX.to_atoms());

    while low < high {
      let mid = low + (high - low) / 2;
      if self.is_dust(Amount::from_atoms(mid), script_size) {
        low = mid + 1;
      } else {
        high = mid;
      }
    }

    Amount::from_atoms(low)
  }
}
