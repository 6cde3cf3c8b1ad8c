use super::*;

pub mod address;
pub mod author;
pub mod estimate;
pub mod settings;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode an address and show its locking script")]
  Address(address::Address),
  #[command(about = "Author an unsigned transaction from selected inputs")]
  Author(author::Author),
  #[command(about = "Estimate the signed size and fee of a transaction")]
  Estimate(estimate::Estimate),
  #[command(about = "Display settings")]
  Settings,
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Address(address) => address.run(&settings),
      Self::Author(author) => author.run(&settings),
      Self::Estimate(estimate) => estimate.run(&settings),
      Self::Settings => settings::run(settings),
    }
  }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Minify,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    match format {
      OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), self).ok(),
      OutputFormat::Yaml => serde_yaml::to_writer(io::stdout(), self).ok(),
      OutputFormat::Minify => serde_json::to_writer(io::stdout(), self).ok(),
    };
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;
