use super::*;

#[derive(Clone, Default, Debug, Parser)]
#[command(group(
  ArgGroup::new("chains")
    .required(false)
    .args(&["chain_argument", "simnet", "regnet", "testnet"]),
))]
pub struct Options {
  #[arg(long = "chain", value_enum, help = "Use <CHAIN>. [default: mainnet]")]
  pub(crate) chain_argument: Option<Chain>,
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Load configuration from <CONFIG_DIR>.")]
  pub(crate) config_dir: Option<PathBuf>,
  #[arg(
    long,
    help = "Pay <FEE_RATE> atoms per kilobyte of signed transaction. [default: 10000]"
  )]
  pub(crate) fee_rate: Option<FeeRate>,
  #[arg(long, short, help = "Specify output format. [default: json]")]
  pub(crate) format: Option<OutputFormat>,
  #[arg(long, short, help = "Use regnet. Equivalent to `--chain regnet`.")]
  pub(crate) regnet: bool,
  #[arg(long, short, help = "Use simnet. Equivalent to `--chain simnet`.")]
  pub(crate) simnet: bool,
  #[arg(long, short, help = "Use testnet. Equivalent to `--chain testnet`.")]
  pub(crate) testnet: bool,
}
