use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub enum Network {
  Mainnet,
  Testnet3,
  Simnet,
  Regnet,
}

/// Address prefixes of a network. Each id is the two leading bytes of the
/// base58 payload, chosen so that encoded addresses start with a fixed
/// two-character prefix such as `Ds` or `Ts`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Params {
  pub name: &'static str,
  pub pubkey_addr_id: [u8; 2],
  pub pubkey_hash_addr_id: [u8; 2],
  pub pkh_edwards_addr_id: [u8; 2],
  pub pkh_schnorr_addr_id: [u8; 2],
  pub script_hash_addr_id: [u8; 2],
}

const MAINNET: Params = Params {
  name: "mainnet",
  pubkey_addr_id: [0x13, 0x86],
  pubkey_hash_addr_id: [0x07, 0x3f],
  pkh_edwards_addr_id: [0x07, 0x1f],
  pkh_schnorr_addr_id: [0x07, 0x01],
  script_hash_addr_id: [0x07, 0x1a],
};

const TESTNET3: Params = Params {
  name: "testnet3",
  pubkey_addr_id: [0x28, 0xf7],
  pubkey_hash_addr_id: [0x0f, 0x21],
  pkh_edwards_addr_id: [0x0f, 0x01],
  pkh_schnorr_addr_id: [0x0e, 0xe3],
  script_hash_addr_id: [0x0e, 0xfc],
};

const SIMNET: Params = Params {
  name: "simnet",
  pubkey_addr_id: [0x27, 0x6f],
  pubkey_hash_addr_id: [0x0e, 0x91],
  pkh_edwards_addr_id: [0x0e, 0x71],
  pkh_schnorr_addr_id: [0x0e, 0x53],
  script_hash_addr_id: [0x0e, 0x6c],
};

const REGNET: Params = Params {
  name: "regnet",
  pubkey_addr_id: [0x25, 0xe5],
  pubkey_hash_addr_id: [0x0e, 0x00],
  pkh_edwards_addr_id: [0x0d, 0xe0],
  pkh_schnorr_addr_id: [0x0d, 0xc2],
  script_hash_addr_id: [0x0d, 0xdb],
};

impl Network {
  pub const ALL: [Self; 4] = [Self::Mainnet, Self::Testnet3, Self::Simnet, Self::Regnet];

  pub fn params(self) -> &'static Params {
    match self {
      Self::Mainnet => &MAINNET,
      Self::Testnet3 => &TESTNET3,
      Self::Simnet => &SIMNET,
      Self::Regnet => &REGNET,
    }
  }

  /// Returns the network whose address ids include `id`, if any.
  pub fn from_addr_id(id: [u8; 2]) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|network| network.params().addr_ids().contains(&id))
  }
}

impl Params {
  fn addr_ids(&self) -> [[u8; 2]; 5] {
    [
      self.pubkey_addr_id,
      self.pubkey_hash_addr_id,
      self.pkh_edwards_addr_id,
      self.pkh_schnorr_addr_id,
      self.script_hash_addr_id,
    ]
  }
}

impl Display for Network {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.params().name)
  }
}

impl FromStr for Network {
  type Err = UnknownNetwork;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" => Ok(Self::Mainnet),
      "testnet3" => Ok(Self::Testnet3),
      "simnet" => Ok(Self::Simnet),
      "regnet" => Ok(Self::Regnet),
      _ => Err(UnknownNetwork(s.into())),
    }
  }
}

#[derive(Debug, Error)]
#[error("unknown network `{0}`")]
pub struct UnknownNetwork(String);
