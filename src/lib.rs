#![allow(clippy::result_large_err, clippy::too_many_arguments)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    config::Config,
    destination::ParsedDestinations,
    error::{OptionExt, ResultExt},
    options::Options,
    subcommand::{OutputFormat, Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, Context, Error},
  clap::{ArgGroup, Parser},
  dcrwire::{
    address, varint, Address, Amount, Network, OutPoint, Transaction, TxIn, TxOut, Txid,
  },
  rand::Rng,
  serde::{Deserialize, Serialize},
  snafu::{IntoError, Snafu},
  std::{
    collections::{BTreeMap, VecDeque},
    env,
    fmt::{self, Display, Formatter},
    fs::File,
    io,
    path::PathBuf,
    process,
    str::FromStr,
  },
};

pub use self::{
  author::{AuthoredTransaction, TransactionAuthor},
  chain::Chain,
  change_source::{BoxError, ChangeSource, StaticChangeSource},
  destination::Destination,
  error::AuthorError,
  fee_rate::FeeRate,
  input::{SelectedInput, SigScriptClass},
  policy::Policy,
  settings::Settings,
};

#[cfg(test)]
#[macro_use]
mod test;

#[cfg(test)]
use self::test::*;

mod arguments;
pub mod author;
pub mod chain;
pub mod change_source;
mod config;
pub mod destination;
mod error;
pub mod estimate;
mod fee_rate;
pub mod input;
pub mod options;
pub mod policy;
pub mod settings;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      for (i, err) in err.chain().skip(1).enumerate() {
        if i == 0 {
          eprintln!();
          eprintln!("because:");
        }

        eprintln!("- {err}");
      }

      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print(format.unwrap_or_default());
      }
    }
  }
}
