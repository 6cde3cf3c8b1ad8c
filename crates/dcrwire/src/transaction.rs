use {
  super::*,
  blake_hash::{Blake256, Digest},
};

#[derive(
  Debug,
  Default,
  Copy,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  DeserializeFromStr,
  SerializeDisplay,
)]
pub struct Txid([u8; 32]);

impl Txid {
  pub const fn from_byte_array(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  pub const fn to_byte_array(self) -> [u8; 32] {
    self.0
  }
}

/// Hashes are displayed byte-reversed.
impl Display for Txid {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut bytes = self.0;
    bytes.reverse();
    write!(f, "{}", hex::encode(bytes))
  }
}

impl FromStr for Txid {
  type Err = ParseOutPointError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut bytes = <[u8; 32]>::try_from(hex::decode(s)?.as_slice())
      .map_err(|_| ParseOutPointError::TxidLength(s.len()))?;
    bytes.reverse();
    Ok(Self(bytes))
  }
}

/// The tree an output was mined in.
#[derive(
  Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tree {
  #[default]
  Regular = 0,
  Stake = 1,
}

#[derive(
  Debug,
  Default,
  Copy,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  DeserializeFromStr,
  SerializeDisplay,
)]
pub struct OutPoint {
  pub txid: Txid,
  pub vout: u32,
  pub tree: Tree,
}

impl Display for OutPoint {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.txid, self.vout)
  }
}

impl FromStr for OutPoint {
  type Err = ParseOutPointError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (txid, vout) = s
      .split_once(':')
      .ok_or_else(|| ParseOutPointError::Colon(s.into()))?;

    Ok(Self {
      txid: txid.parse()?,
      vout: vout.parse()?,
      tree: Tree::Regular,
    })
  }
}

#[derive(Debug, Error)]
pub enum ParseOutPointError {
  #[error("outpoint `{0}` missing colon")]
  Colon(String),
  #[error("invalid txid hex: {0}")]
  Hex(#[from] hex::FromHexError),
  #[error("txid must be 64 hex characters, got {0}")]
  TxidLength(usize),
  #[error("invalid output index: {0}")]
  Vout(#[from] std::num::ParseIntError),
}

impl Encodable for OutPoint {
  fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
    let mut len = self.txid.0.consensus_encode(w)?;
    len += self.vout.consensus_encode(w)?;
    len += (self.tree as u8).consensus_encode(w)?;
    Ok(len)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxIn {
  pub previous_output: OutPoint,
  pub sequence: u32,
  pub value_in: Amount,
  pub block_height: u32,
  pub block_index: u32,
  #[serde(with = "hex::serde")]
  pub signature_script: Vec<u8>,
}

impl TxIn {
  pub const SEQUENCE_FINAL: u32 = u32::MAX;
  pub const NULL_BLOCK_HEIGHT: u32 = 0;
  pub const NULL_BLOCK_INDEX: u32 = u32::MAX;

  /// An unsigned input spending `previous_output`, which holds `value_in`.
  pub fn new(previous_output: OutPoint, value_in: Amount) -> Self {
    Self {
      previous_output,
      sequence: Self::SEQUENCE_FINAL,
      value_in,
      block_height: Self::NULL_BLOCK_HEIGHT,
      block_index: Self::NULL_BLOCK_INDEX,
      signature_script: Vec::new(),
    }
  }

  fn encode_prefix<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
    let mut len = self.previous_output.consensus_encode(w)?;
    len += self.sequence.consensus_encode(w)?;
    Ok(len)
  }

  fn encode_witness<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
    let mut len = self.value_in.to_atoms().consensus_encode(w)?;
    len += self.block_height.consensus_encode(w)?;
    len += self.block_index.consensus_encode(w)?;
    len += self.signature_script.consensus_encode(w)?;
    Ok(len)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxOut {
  pub value: Amount,
  pub version: u16,
  #[serde(with = "hex::serde")]
  pub pk_script: Vec<u8>,
}

impl TxOut {
  pub fn new(value: Amount, address: &Address) -> Self {
    Self {
      value,
      version: 0,
      pk_script: address.script_pubkey(),
    }
  }

  /// Value, script version, and length-prefixed script.
  pub fn serialize_size(&self) -> usize {
    8 + 2 + varint::serialize_size(self.pk_script.len()) + self.pk_script.len()
  }
}

impl Encodable for TxOut {
  fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
    let mut len = self.value.to_atoms().consensus_encode(w)?;
    len += self.version.consensus_encode(w)?;
    len += self.pk_script.consensus_encode(w)?;
    Ok(len)
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SerializationType {
  Full = 0,
  NoWitness = 1,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
  pub version: u16,
  pub input: Vec<TxIn>,
  pub output: Vec<TxOut>,
  pub lock_time: u32,
  pub expiry: u32,
}

impl Transaction {
  /// Full serialization, prefix followed by witness.
  pub fn serialize(&self) -> Vec<u8> {
    let mut buffer = Vec::new();
    self
      .encode(SerializationType::Full, &mut buffer)
      .expect("in-memory writers don't error");
    buffer
  }

  pub fn serialize_size(&self) -> usize {
    self.serialize().len()
  }

  /// BLAKE-256 of the prefix serialization.
  pub fn txid(&self) -> Txid {
    let mut buffer = Vec::new();
    self
      .encode(SerializationType::NoWitness, &mut buffer)
      .expect("in-memory writers don't error");
    Txid(Blake256::digest(buffer.as_slice()).into())
  }

  fn encode<W: io::Write + ?Sized>(
    &self,
    serialization: SerializationType,
    w: &mut W,
  ) -> Result<usize, io::Error> {
    let version = u32::from(self.version) | (serialization as u32) << 16;
    let mut len = version.consensus_encode(w)?;

    len += VarInt::from(self.input.len()).consensus_encode(w)?;
    for input in &self.input {
      len += input.encode_prefix(w)?;
    }

    len += VarInt::from(self.output.len()).consensus_encode(w)?;
    for output in &self.output {
      len += output.consensus_encode(w)?;
    }

    len += self.lock_time.consensus_encode(w)?;
    len += self.expiry.consensus_encode(w)?;

    if serialization == SerializationType::Full {
      len += VarInt::from(self.input.len()).consensus_encode(w)?;
      for input in &self.input {
        len += input.encode_witness(w)?;
      }
    }

    Ok(len)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn txid(n: u8) -> Txid {
    Txid([n; 32])
  }

  #[test]
  fn txid_display_is_reversed() {
    let mut bytes = [0; 32];
    bytes[0] = 1;
    assert_eq!(
      Txid(bytes).to_string(),
      "0000000000000000000000000000000000000000000000000000000000000001"
    );
    assert_eq!(Txid(bytes).to_string().parse::<Txid>().unwrap(), Txid(bytes));
  }

  #[test]
  fn outpoint_from_str() {
    let outpoint = format!("{}:7", txid(3)).parse::<OutPoint>().unwrap();
    assert_eq!(
      outpoint,
      OutPoint {
        txid: txid(3),
        vout: 7,
        tree: Tree::Regular,
      }
    );

    assert!(matches!(
      "abc".parse::<OutPoint>(),
      Err(ParseOutPointError::Colon(_))
    ));
    assert!(matches!(
      "abcd:0".parse::<OutPoint>(),
      Err(ParseOutPointError::TxidLength(4))
    ));
    assert!(matches!(
      format!("{}:x", txid(1)).parse::<OutPoint>(),
      Err(ParseOutPointError::Vout(_))
    ));
  }

  #[test]
  fn empty_transaction_serialization() {
    let transaction = Transaction {
      version: TX_VERSION,
      input: Vec::new(),
      output: Vec::new(),
      lock_time: 0,
      expiry: 0,
    };

    assert_eq!(
      hex::encode(transaction.serialize()),
      "010000000000000000000000000000"
    );
  }

  #[test]
  fn serialization_layout() {
    let address = Address::new(Network::Mainnet, AddressKind::PubKeyHash, [5; 20]);

    let transaction = Transaction {
      version: TX_VERSION,
      input: vec![TxIn::new(
        OutPoint {
          txid: txid(1),
          vout: 2,
          tree: Tree::Regular,
        },
        Amount::from_atoms(1_000),
      )],
      output: vec![TxOut::new(Amount::from_atoms(900), &address)],
      lock_time: 0,
      expiry: 0,
    };

    let serialized = transaction.serialize();

    let prefix = 4 + 1 + (32 + 4 + 1 + 4) + 1 + transaction.output[0].serialize_size() + 4 + 4;
    let witness = 1 + (8 + 4 + 4 + 1);

    assert_eq!(serialized.len(), prefix + witness);
    assert_eq!(transaction.serialize_size(), serialized.len());
    assert_eq!(&serialized[..4], &[1, 0, 0, 0]);
    assert_eq!(&serialized[5..37], &[1; 32]);
    assert_eq!(&serialized[37..41], &[2, 0, 0, 0]);
    assert_eq!(serialized[41], 0);
    assert_eq!(&serialized[42..46], &[0xff; 4]);
  }

  #[test]
  fn txid_commits_to_prefix_only() {
    let mut transaction = Transaction {
      version: TX_VERSION,
      input: vec![TxIn::new(OutPoint::default(), Amount::from_atoms(1))],
      output: Vec::new(),
      lock_time: 0,
      expiry: 0,
    };

    let before = transaction.txid();
    transaction.input[0].signature_script = vec![0; 108];
    assert_eq!(transaction.txid(), before);

    transaction.lock_time = 1;
    assert_ne!(transaction.txid(), before);
  }

  #[test]
  fn tx_out_serialize_size() {
    let address = Address::new(Network::Mainnet, AddressKind::PubKeyHash, [5; 20]);
    let output = TxOut::new(Amount::from_atoms(1), &address);

    let mut buffer = Vec::new();
    let len = output.consensus_encode(&mut buffer).unwrap();

    assert_eq!(output.serialize_size(), 36);
    assert_eq!(len, 36);
    assert_eq!(buffer.len(), 36);
  }
}
