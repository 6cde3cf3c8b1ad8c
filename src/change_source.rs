use super::*;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Hands out fresh internal addresses for change. Called at most once per
/// authored transaction, and only when the transaction needs one.
pub trait ChangeSource {
  fn next_change_address(&mut self, account: u32) -> Result<String, BoxError>;
}

impl<F> ChangeSource for F
where
  F: FnMut(u32) -> Result<String, BoxError>,
{
  fn next_change_address(&mut self, account: u32) -> Result<String, BoxError> {
    self(account)
  }
}

/// Returns a fixed list of addresses in order, regardless of account.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaticChangeSource(VecDeque<String>);

impl StaticChangeSource {
  pub fn new(addresses: impl IntoIterator<Item = String>) -> Self {
    Self(addresses.into_iter().collect())
  }

  pub fn remaining(&self) -> usize {
    self.0.len()
  }
}

impl ChangeSource for StaticChangeSource {
  fn next_change_address(&mut self, account: u32) -> Result<String, BoxError> {
    self
      .0
      .pop_front()
      .ok_or_else(|| Exhausted { account }.into())
  }
}

#[derive(Debug, PartialEq)]
pub struct Exhausted {
  pub account: u32,
}

impl Display for Exhausted {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "no change addresses left for account {}", self.account)
  }
}

impl std::error::Error for Exhausted {}
