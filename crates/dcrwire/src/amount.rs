use super::*;

/// A signed quantity of atoms.
#[derive(
  Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
  pub const ZERO: Self = Self(0);
  pub const ONE_COIN: Self = Self(ATOMS_PER_COIN);
  /// The total supply ceiling. No single output may carry more.
  pub const MAX: Self = Self(21_000_000 * ATOMS_PER_COIN);

  pub const fn from_atoms(atoms: i64) -> Self {
    Self(atoms)
  }

  pub const fn to_atoms(self) -> i64 {
    self.0
  }

  pub fn checked_add(self, rhs: Self) -> Option<Self> {
    self.0.checked_add(rhs.0).map(Self)
  }

  pub fn checked_sub(self, rhs: Self) -> Option<Self> {
    self.0.checked_sub(rhs.0).map(Self)
  }

  pub fn checked_mul(self, rhs: i64) -> Option<Self> {
    self.0.checked_mul(rhs).map(Self)
  }

  pub fn checked_div(self, rhs: i64) -> Option<Self> {
    self.0.checked_div(rhs).map(Self)
  }

  pub const fn is_positive(self) -> bool {
    self.0 > 0
  }

  pub const fn is_negative(self) -> bool {
    self.0 < 0
  }
}

impl Add for Amount {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self(self.0 + rhs.0)
  }
}

impl AddAssign for Amount {
  fn add_assign(&mut self, rhs: Self) {
    self.0 += rhs.0;
  }
}

impl Sub for Amount {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Self(self.0 - rhs.0)
  }
}

impl Sum for Amount {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, Add::add)
  }
}

impl<'a> Sum<&'a Amount> for Amount {
  fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.copied().sum()
  }
}

impl Display for Amount {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let atoms = self.0.unsigned_abs();
    let per_coin = ATOMS_PER_COIN.unsigned_abs();
    let whole = atoms / per_coin;
    let fractional = atoms % per_coin;

    if fractional == 0 {
      write!(f, "{sign}{whole} DCR")
    } else {
      let fractional = format!("{fractional:08}");
      write!(
        f,
        "{sign}{whole}.{} DCR",
        fractional.trim_end_matches('0')
      )
    }
  }
}

impl FromStr for Amount {
  type Err = ParseError;

  /// Parses an atom count.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<i64>()
      .map(Self)
      .map_err(|source| ParseError::Atoms {
        input: s.into(),
        source,
      })
  }
}

#[derive(Debug, Error)]
pub enum ParseError {
  #[error("invalid atom amount `{input}`: {source}")]
  Atoms {
    input: String,
    source: std::num::ParseIntError,
  },
}
