use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Address {
  #[arg(help = "Decode <ADDRESS>.")]
  address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Info {
  pub address: String,
  pub network: Network,
  pub kind: String,
  pub script: String,
  pub script_size: usize,
  pub dust_limit: Amount,
}

impl Address {
  pub(crate) fn run(self, settings: &Settings) -> SubcommandResult {
    let policy = settings.policy();

    let address = destination::decode_address(&self.address, policy.network)?;

    Ok(Some(Box::new(Info {
      address: address.to_string(),
      network: address.network(),
      kind: address.kind().to_string(),
      script: hex::encode(address.script_pubkey()),
      script_size: address.script_size(),
      dust_limit: policy.dust_limit(address.script_size()),
    })))
  }
}
