use super::*;

/// The kind of signature script that will eventually redeem an input, which
/// fixes its size for fee estimation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SigScriptClass {
  #[default]
  P2pkh,
  P2pk,
}

impl SigScriptClass {
  pub fn size(self) -> usize {
    match self {
      Self::P2pkh => estimate::REDEEM_P2PKH_SIG_SCRIPT_SIZE,
      Self::P2pk => estimate::REDEEM_P2PK_SIG_SCRIPT_SIZE,
    }
  }
}

/// An input chosen by the caller's coin selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedInput {
  pub tx_in: TxIn,
  #[serde(default)]
  pub script_class: SigScriptClass,
}

impl SelectedInput {
  pub fn new(outpoint: OutPoint, value: Amount, script_class: SigScriptClass) -> Self {
    Self {
      tx_in: TxIn::new(outpoint, value),
      script_class,
    }
  }

  pub fn value(&self) -> Amount {
    self.tx_in.value_in
  }
}

/// `TXID:VOUT:ATOMS`, spending a regular tree P2PKH output.
impl FromStr for SelectedInput {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (outpoint, atoms) = s
      .rsplit_once(':')
      .ok_or_else(|| anyhow!("input `{s}` must be of the form TXID:VOUT:ATOMS"))?;

    let outpoint = outpoint
      .parse::<OutPoint>()
      .with_context(|| format!("invalid outpoint in input `{s}`"))?;

    let value = atoms
      .parse::<Amount>()
      .with_context(|| format!("invalid value in input `{s}`"))?;

    Ok(Self::new(outpoint, value, SigScriptClass::P2pkh))
  }
}
