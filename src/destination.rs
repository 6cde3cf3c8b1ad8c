use super::*;

/// A requested payment. `amount` is ignored when `send_max` is set, in which
/// case the recipient receives everything left after the other payments and
/// the fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
  pub address: String,
  #[serde(default)]
  pub amount: Amount,
  #[serde(default)]
  pub send_max: bool,
}

impl Destination {
  pub fn new(address: impl Into<String>, amount: Amount) -> Self {
    Self {
      address: address.into(),
      amount,
      send_max: false,
    }
  }

  pub fn send_max(address: impl Into<String>) -> Self {
    Self {
      address: address.into(),
      amount: Amount::ZERO,
      send_max: true,
    }
  }
}

/// `ADDRESS:ATOMS` or `ADDRESS:max`
impl FromStr for Destination {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (address, amount) = s
      .rsplit_once(':')
      .ok_or_else(|| anyhow!("destination `{s}` must be of the form ADDRESS:ATOMS or ADDRESS:max"))?;

    if amount == "max" {
      return Ok(Self::send_max(address));
    }

    Ok(Self::new(
      address,
      amount
        .parse()
        .with_context(|| format!("invalid amount in destination `{s}`"))?,
    ))
  }
}

impl Display for Destination {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.send_max {
      write!(f, "{}:max", self.address)
    } else {
      write!(f, "{}:{}", self.address, self.amount.to_atoms())
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDestinations {
  pub outputs: Vec<TxOut>,
  pub total_send: Amount,
  pub max_amount_address: Option<Address>,
}

pub fn decode_address(address: &str, network: Network) -> Result<Address, AuthorError> {
  Address::decode(address, network).map_err(|source| {
    if source.is_unsupported_type() {
      error::UnsupportedAddressType { address }.into_error(source)
    } else {
      error::InvalidAddress { address }.into_error(source)
    }
  })
}

pub(crate) fn check_amount(address: &str, amount: Amount) -> Result<(), AuthorError> {
  if !amount.is_positive() || amount > Amount::MAX {
    return error::InvalidAmount { address, amount }.fail();
  }

  Ok(())
}

/// Turns payment requests into outputs, setting aside the send-max recipient,
/// if any. Fails on the first invalid destination.
pub fn parse_outputs(
  destinations: &[Destination],
  policy: &Policy,
) -> Result<ParsedDestinations, AuthorError> {
  let mut outputs = Vec::with_capacity(destinations.len());
  let mut total_send = Amount::ZERO;
  let mut max_amount_address = None;

  for destination in destinations {
    if !destination.send_max {
      check_amount(&destination.address, destination.amount)?;
    } else if max_amount_address.is_some() {
      return error::MultipleMaxAmountRecipients.fail();
    }

    let address = decode_address(&destination.address, policy.network)?;

    if destination.send_max {
      max_amount_address = Some(address);
      continue;
    }

    if policy.is_dust(destination.amount, address.script_size()) {
      return error::Dust {
        address,
        value: destination.amount,
      }
      .fail();
    }

    total_send = total_send
      .checked_add(destination.amount)
      .snafu_context(error::ValueOverflow)?;

    outputs.push(TxOut::new(destination.amount, &address));
  }

  Ok(ParsedDestinations {
    outputs,
    total_send,
    max_amount_address,
  })
}
