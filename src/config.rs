use super::*;

#[derive(Deserialize, Default, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) chain: Option<Chain>,
  pub(crate) fee_rate: Option<FeeRate>,
  pub(crate) change_addresses: Option<Vec<String>>,
}
