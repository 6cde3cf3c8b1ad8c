use {super::*, clap::ValueEnum};

#[derive(Default, ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
  #[default]
  #[value(alias("main"))]
  Mainnet,
  #[value(alias("test"))]
  Testnet,
  #[value(alias("sim"))]
  Simnet,
  #[value(alias("reg"))]
  Regnet,
}

impl Chain {
  pub fn network(self) -> Network {
    match self {
      Self::Mainnet => Network::Mainnet,
      Self::Testnet => Network::Testnet3,
      Self::Simnet => Network::Simnet,
      Self::Regnet => Network::Regnet,
    }
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Mainnet => "mainnet",
        Self::Testnet => "testnet",
        Self::Simnet => "simnet",
        Self::Regnet => "regnet",
      }
    )
  }
}

impl FromStr for Chain {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" => Ok(Self::Mainnet),
      "testnet" => Ok(Self::Testnet),
      "simnet" => Ok(Self::Simnet),
      "regnet" => Ok(Self::Regnet),
      _ => bail!("invalid chain `{s}`"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_str() {
    assert_eq!("mainnet".parse::<Chain>().unwrap(), Chain::Mainnet);
    assert_eq!("testnet".parse::<Chain>().unwrap(), Chain::Testnet);
    assert_eq!("simnet".parse::<Chain>().unwrap(), Chain::Simnet);
    assert_eq!("regnet".parse::<Chain>().unwrap(), Chain::Regnet);
    assert_eq!(
      "foo".parse::<Chain>().unwrap_err().to_string(),
      "invalid chain `foo`"
    );
  }

  #[test]
  fn display_round_trips() {
    for chain in [Chain::Mainnet, Chain::Testnet, Chain::Simnet, Chain::Regnet] {
      assert_eq!(chain.to_string().parse::<Chain>().unwrap(), chain);
    }
  }

  #[test]
  fn network() {
    assert_eq!(Chain::Testnet.network(), Network::Testnet3);
    assert_eq!(Chain::default().network(), Network::Mainnet);
  }
}
