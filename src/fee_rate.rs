use super::*;

/// Relay fee, in atoms per 1000 bytes of serialized transaction.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FeeRate(Amount);

impl FromStr for FeeRate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::try_from(i64::from_str(s)?)
  }
}

impl TryFrom<i64> for FeeRate {
  type Error = Error;

  fn try_from(rate: i64) -> Result<Self, Self::Error> {
    if rate < 0 {
      bail!("invalid fee rate: {rate}")
    }
    Ok(Self(Amount::from_atoms(rate)))
  }
}

impl From<FeeRate> for i64 {
  fn from(fee_rate: FeeRate) -> Self {
    fee_rate.0.to_atoms()
  }
}

impl Default for FeeRate {
  fn default() -> Self {
    Self::DEFAULT_RELAY
  }
}

impl Display for FeeRate {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} atoms/kB", self.0.to_atoms())
  }
}

impl FeeRate {
  pub const DEFAULT_RELAY: Self = Self(Amount::from_atoms(10_000));

  pub fn per_kb(self) -> Amount {
    self.0
  }

  /// Fee for a transaction of `size` bytes, rounded down and capped at
  /// `Amount::MAX`.
  pub fn fee(self, size: usize) -> Amount {
    i64::try_from(size)
      .ok()
      .and_then(|size| self.0.to_atoms().checked_mul(size))
      .map(|product| product / 1000)
      .filter(|fee| *fee <= Amount::MAX.to_atoms())
      .map(Amount::from_atoms)
      .unwrap_or(Amount::MAX)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse() {
    assert_eq!("10000".parse::<FeeRate>().unwrap(), FeeRate::DEFAULT_RELAY);
    assert_eq!("0".parse::<FeeRate>().unwrap().per_kb(), Amount::ZERO);
    assert!("-1".parse::<FeeRate>().is_err());
    assert!("1.5".parse::<FeeRate>().is_err());
  }

  #[test]
  fn fee() {
    let rate = FeeRate::DEFAULT_RELAY;
    assert_eq!(rate.fee(217), Amount::from_atoms(2_170));
    assert_eq!(rate.fee(253), Amount::from_atoms(2_530));
    assert_eq!(rate.fee(1_000), Amount::from_atoms(10_000));
  }

  #[test]
  fn fee_truncates() {
    assert_eq!(
      FeeRate::try_from(1_500).unwrap().fee(999),
      Amount::from_atoms(1_498)
    );
  }

  #[test]
  fn zero_rate_is_free() {
    assert_eq!(FeeRate::try_from(0).unwrap().fee(1_000), Amount::ZERO);
  }

  #[test]
  fn fee_is_capped() {
    assert_eq!(FeeRate::try_from(i64::MAX).unwrap().fee(2), Amount::MAX);
    assert_eq!(
      FeeRate::try_from(Amount::MAX.to_atoms()).unwrap().fee(10_000),
      Amount::MAX
    );
  }

  #[test]
  fn fee_is_monotonic() {
    for rate in [1, 5, 100, 1_234, 10_000] {
      let rate = FeeRate::try_from(rate).unwrap();
      for size in 0..2_000 {
        assert!(rate.fee(size) <= rate.fee(size + 1));
      }
    }
  }

  #[test]
  fn deserialize() {
    assert_eq!(
      serde_json::from_str::<FeeRate>("20000").unwrap(),
      FeeRate::try_from(20_000).unwrap()
    );
    assert!(serde_json::from_str::<FeeRate>("-5").is_err());
  }
}
