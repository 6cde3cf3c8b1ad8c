use {super::*, std::iter};

#[derive(Debug, Parser)]
pub(crate) struct Estimate {
  #[arg(long, default_value_t = 1, help = "Spend <INPUTS> P2PKH outputs.")]
  inputs: usize,
  #[arg(long, default_value_t = 0, help = "Spend <P2PK_INPUTS> P2PK outputs.")]
  p2pk_inputs: usize,
  #[arg(
    long = "output",
    value_name = "ADDRESS",
    help = "Pay <OUTPUT>. May be repeated."
  )]
  outputs: Vec<String>,
  #[arg(long, value_name = "ADDRESS", help = "Send change to <CHANGE>.")]
  change: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub size: usize,
  pub fee: Amount,
  pub fee_rate: FeeRate,
}

impl Estimate {
  pub(crate) fn run(self, settings: &Settings) -> SubcommandResult {
    let policy = settings.policy();

    let input_script_sizes = iter::repeat(SigScriptClass::P2pkh.size())
      .take(self.inputs)
      .chain(iter::repeat(SigScriptClass::P2pk.size()).take(self.p2pk_inputs))
      .collect::<Vec<usize>>();

    let outputs = self
      .outputs
      .iter()
      .map(|address| {
        Ok(TxOut::new(
          Amount::ZERO,
          &destination::decode_address(address, policy.network)?,
        ))
      })
      .collect::<Result<Vec<TxOut>, AuthorError>>()?;

    let change_script_size = self
      .change
      .map(|address| crate::estimate::change_script_size(&address, policy.network))
      .transpose()?;

    let size =
      crate::estimate::estimate_signed_size(&input_script_sizes, &outputs, change_script_size);

    Ok(Some(Box::new(Output {
      size,
      fee: policy.required_fee(size),
      fee_rate: policy.fee_rate,
    })))
  }
}
