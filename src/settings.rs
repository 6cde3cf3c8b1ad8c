use super::*;

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
  chain: Chain,
  fee_rate: FeeRate,
  change_addresses: Vec<String>,
}

impl Settings {
  pub(crate) fn load(options: Options) -> Result<Self> {
    let mut env = BTreeMap::<String, String>::new();

    for (var, value) in env::vars_os() {
      let Some(var) = var.to_str() else {
        continue;
      };

      let Some(key) = var.strip_prefix("DCRAUTHOR_") else {
        continue;
      };

      env.insert(
        key.into(),
        value.into_string().map_err(|value| {
          anyhow!(
            "environment variable `{var}` not valid unicode: `{}`",
            value.to_string_lossy()
          )
        })?,
      );
    }

    Self::merge(options, env)
  }

  pub(crate) fn merge(options: Options, env: BTreeMap<String, String>) -> Result<Self> {
    let config = Self::config(&options)?;

    let chain = Self::setting_typed(
      options
        .simnet
        .then_some(Chain::Simnet)
        .or(options.regnet.then_some(Chain::Regnet))
        .or(options.testnet.then_some(Chain::Testnet))
        .or(options.chain_argument),
      &env,
      "CHAIN",
      config.chain,
      Chain::Mainnet,
    )?;

    let fee_rate = Self::setting_typed(
      options.fee_rate,
      &env,
      "FEE_RATE",
      config.fee_rate,
      FeeRate::DEFAULT_RELAY,
    )?;

    let change_addresses = match env.get("CHANGE_ADDRESSES") {
      Some(addresses) => addresses
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect(),
      None => config.change_addresses.unwrap_or_default(),
    };

    Ok(Self {
      chain,
      fee_rate,
      change_addresses,
    })
  }

  fn config(options: &Options) -> Result<Config> {
    let path = match (&options.config, &options.config_dir) {
      (Some(path), _) => path.clone(),
      (None, Some(dir)) if dir.join("dcrauthor.yaml").exists() => dir.join("dcrauthor.yaml"),
      _ => return Ok(Config::default()),
    };

    let file = File::open(&path)
      .with_context(|| format!("failed to open config file `{}`", path.display()))?;

    serde_yaml::from_reader(file)
      .with_context(|| format!("failed to deserialize config file `{}`", path.display()))
  }

  fn setting_typed<T: FromStr<Err = Error>>(
    arg_value: Option<T>,
    env: &BTreeMap<String, String>,
    env_key: &str,
    config_value: Option<T>,
    default_value: T,
  ) -> Result<T> {
    if let Some(arg_value) = arg_value {
      return Ok(arg_value);
    }

    if let Some(env_value) = env.get(env_key) {
      return env_value
        .parse()
        .with_context(|| anyhow!("failed to parse DCRAUTHOR_{env_key}"));
    }

    Ok(config_value.unwrap_or(default_value))
  }

  pub fn chain(&self) -> Chain {
    self.chain
  }

  pub fn fee_rate(&self) -> FeeRate {
    self.fee_rate
  }

  pub fn change_addresses(&self) -> &[String] {
    &self.change_addresses
  }

  pub fn policy(&self) -> Policy {
    Policy::new(self.chain.network()).with_fee_rate(self.fee_rate)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::fs, tempfile::TempDir};

  fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Settings> {
    let args = iter_args(args);
    Settings::merge(
      Options::try_parse_from(args).unwrap(),
      env
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect(),
    )
  }

  fn iter_args<'a>(args: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    std::iter::once("dcrauthor").chain(args.iter().copied())
  }

  #[test]
  fn defaults() {
    pretty_assert_eq!(
      parse(&[], &[]).unwrap(),
      Settings {
        chain: Chain::Mainnet,
        fee_rate: FeeRate::DEFAULT_RELAY,
        change_addresses: Vec::new(),
      }
    );
  }

  #[test]
  fn chain_flags() {
    assert_eq!(parse(&["--testnet"], &[]).unwrap().chain(), Chain::Testnet);
    assert_eq!(parse(&["-s"], &[]).unwrap().chain(), Chain::Simnet);
    assert_eq!(parse(&["--regnet"], &[]).unwrap().chain(), Chain::Regnet);
    assert_eq!(
      parse(&["--chain", "test"], &[]).unwrap().chain(),
      Chain::Testnet
    );
  }

  #[test]
  fn chain_flags_conflict() {
    assert!(Options::try_parse_from(iter_args(&["--testnet", "--simnet"])).is_err());
    assert!(Options::try_parse_from(iter_args(&["--chain", "simnet", "--regnet"])).is_err());
  }

  #[test]
  fn argument_beats_env() {
    assert_eq!(
      parse(&["--chain", "simnet"], &[("CHAIN", "regnet")])
        .unwrap()
        .chain(),
      Chain::Simnet
    );

    assert_eq!(
      parse(&[], &[("CHAIN", "regnet")]).unwrap().chain(),
      Chain::Regnet
    );
  }

  #[test]
  fn env_beats_config() {
    let tempdir = TempDir::new().unwrap();
    let config = tempdir.path().join("dcrauthor.yaml");
    fs::write(&config, "chain: simnet\nfee_rate: 1234").unwrap();
    let config = config.to_str().unwrap();

    let settings = parse(&["--config", config], &[("FEE_RATE", "5000")]).unwrap();
    assert_eq!(settings.chain(), Chain::Simnet);
    assert_eq!(settings.fee_rate(), FeeRate::try_from(5_000).unwrap());

    let settings = parse(&["--config", config], &[]).unwrap();
    assert_eq!(settings.fee_rate(), FeeRate::try_from(1_234).unwrap());
  }

  #[test]
  fn config_dir() {
    let tempdir = TempDir::new().unwrap();
    fs::write(
      tempdir.path().join("dcrauthor.yaml"),
      "change_addresses:\n- foo\n- bar",
    )
    .unwrap();

    assert_eq!(
      parse(&["--config-dir", tempdir.path().to_str().unwrap()], &[])
        .unwrap()
        .change_addresses(),
      ["foo", "bar"]
    );
  }

  #[test]
  fn missing_config_dir_file_is_ignored() {
    let tempdir = TempDir::new().unwrap();

    assert_eq!(
      parse(&["--config-dir", tempdir.path().to_str().unwrap()], &[]).unwrap(),
      Settings::default()
    );
  }

  #[test]
  fn missing_config_file_is_an_error() {
    let tempdir = TempDir::new().unwrap();
    let config = tempdir.path().join("dcrauthor.yaml");

    assert_eq!(
      parse(&["--config", config.to_str().unwrap()], &[])
        .unwrap_err()
        .to_string(),
      format!("failed to open config file `{}`", config.display())
    );
  }

  #[test]
  fn change_addresses_from_env() {
    assert_eq!(
      parse(&[], &[("CHANGE_ADDRESSES", "foo, bar baz")])
        .unwrap()
        .change_addresses(),
      ["foo", "bar", "baz"]
    );
  }

  #[test]
  fn invalid_env_value() {
    assert_eq!(
      parse(&[], &[("FEE_RATE", "-5")]).unwrap_err().to_string(),
      "failed to parse DCRAUTHOR_FEE_RATE"
    );
  }

  #[test]
  fn policy() {
    let policy = parse(&["--simnet", "--fee-rate", "20000"], &[])
      .unwrap()
      .policy();

    assert_eq!(policy.network, Network::Simnet);
    assert_eq!(policy.fee_rate, FeeRate::try_from(20_000).unwrap());
    assert_eq!(policy.dust_factor, 3);
  }

  #[test]
  fn serialize() {
    pretty_assert_eq!(
      serde_json::to_string(&Settings::default()).unwrap(),
      r#"{"chain":"mainnet","fee_rate":10000,"change_addresses":[]}"#
    );
  }
}
