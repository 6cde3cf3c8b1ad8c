use {
  super::*,
  rand::{rngs::StdRng, SeedableRng},
};

#[derive(Debug, Parser)]
pub(crate) struct Author {
  #[arg(
    long = "input",
    required = true,
    value_name = "TXID:VOUT:ATOMS",
    help = "Spend <INPUT>. May be repeated."
  )]
  inputs: Vec<SelectedInput>,
  #[arg(
    long = "destination",
    required = true,
    value_name = "ADDRESS:ATOMS|ADDRESS:max",
    help = "Pay <DESTINATION>. At most one destination may be `max`."
  )]
  destinations: Vec<Destination>,
  #[arg(
    long = "change",
    value_name = "ADDRESS:ATOMS",
    help = "Send exactly <CHANGE> as change instead of using a change address."
  )]
  change: Vec<Destination>,
  #[arg(
    long = "change-address",
    value_name = "ADDRESS",
    help = "Send change to <CHANGE_ADDRESS>, overriding configured change addresses."
  )]
  change_addresses: Vec<String>,
  #[arg(long, default_value_t = 0, help = "Request change addresses for <ACCOUNT>.")]
  account: u32,
  #[arg(long, help = "Seed change output placement with <SEED>.")]
  seed: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub txid: Txid,
  pub transaction: String,
  pub total_input: Amount,
  pub fee: Amount,
  pub estimated_signed_size: usize,
  pub change: Vec<usize>,
  pub outputs: Vec<TxOut>,
}

impl Author {
  pub(crate) fn run(self, settings: &Settings) -> SubcommandResult {
    let change_addresses = if self.change_addresses.is_empty() {
      settings.change_addresses().to_vec()
    } else {
      self.change_addresses
    };

    let mut change_source = StaticChangeSource::new(change_addresses);

    let mut rng = match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    let authored = TransactionAuthor::new(
      self.inputs,
      self.destinations,
      self.change,
      self.account,
      settings.policy(),
    )
    .author(&mut change_source, &mut rng)?;

    Ok(Some(Box::new(Output {
      txid: authored.transaction.txid(),
      transaction: hex::encode(authored.transaction.serialize()),
      total_input: authored.total_input,
      fee: authored.fee(),
      estimated_signed_size: authored.estimated_signed_size,
      change: authored.change_indices,
      outputs: authored.transaction.output,
    })))
  }
}
