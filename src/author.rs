//! Turns pre-selected inputs and payment requests into an unsigned
//! transaction.
//!
//! The size of the signed transaction is estimated with a change output
//! present, the fee is set from that size, and whatever remains after the
//! payments and the fee becomes change. Change too small to be worth spending
//! is left out and absorbed by the fee. Every change output is swapped into a
//! random position so that its index reveals nothing.

use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Change {
  Single(Address),
  Explicit(Vec<(Address, Amount)>),
}

impl Change {
  fn script_size(&self) -> usize {
    match self {
      Self::Single(address) => address.script_size(),
      Self::Explicit(destinations) => destinations
        .iter()
        .map(|(address, _)| address.script_size())
        .sum(),
    }
  }

  fn addresses(&self) -> Vec<&Address> {
    match self {
      Self::Single(address) => vec![address],
      Self::Explicit(destinations) => destinations.iter().map(|(address, _)| address).collect(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoredTransaction {
  pub transaction: Transaction,
  pub total_input: Amount,
  pub estimated_signed_size: usize,
  /// Positions of the change outputs in `transaction.output`, ascending.
  pub change_indices: Vec<usize>,
}

impl AuthoredTransaction {
  pub fn fee(&self) -> Amount {
    self.total_input
      - self
        .transaction
        .output
        .iter()
        .map(|output| output.value)
        .sum::<Amount>()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionAuthor {
  inputs: Vec<SelectedInput>,
  destinations: Vec<Destination>,
  change_destinations: Vec<Destination>,
  account: u32,
  policy: Policy,
}

impl TransactionAuthor {
  pub fn new(
    inputs: Vec<SelectedInput>,
    destinations: Vec<Destination>,
    change_destinations: Vec<Destination>,
    account: u32,
    policy: Policy,
  ) -> Self {
    Self {
      inputs,
      destinations,
      change_destinations,
      account,
      policy,
    }
  }

  pub fn author<S, R>(
    &self,
    change_source: &mut S,
    rng: &mut R,
  ) -> Result<AuthoredTransaction, AuthorError>
  where
    S: ChangeSource + ?Sized,
    R: Rng,
  {
    let ParsedDestinations {
      outputs,
      total_send,
      max_amount_address,
    } = destination::parse_outputs(&self.destinations, &self.policy)?;

    let change = self.change(max_amount_address, change_source)?;

    let input_script_sizes = self
      .inputs
      .iter()
      .map(|input| input.script_class.size())
      .collect::<Vec<usize>>();

    for input in &self.inputs {
      let value = input.value();
      if value.is_negative() || value > Amount::MAX {
        return error::InvalidInputValue {
          outpoint: input.tx_in.previous_output,
          value,
        }
        .fail();
      }
    }

    let total_input = self
      .inputs
      .iter()
      .try_fold(Amount::ZERO, |total, input| total.checked_add(input.value()))
      .snafu_context(error::ValueOverflow)?;

    // explicit change is estimated as a single slot holding every change script
    let change_script_size = change.script_size();

    let size_with_change =
      estimate::estimate_signed_size(&input_script_sizes, &outputs, Some(change_script_size));

    let fee = self.policy.required_fee(size_with_change);

    let change_amount = total_input
      .checked_sub(total_send)
      .and_then(|remaining| remaining.checked_sub(fee))
      .snafu_context(error::ValueOverflow)?;

    if change_amount.is_negative() {
      return error::InsufficientFunds {
        shortfall: Amount::ZERO
          .checked_sub(change_amount)
          .snafu_context(error::ValueOverflow)?,
      }
      .fail();
    }

    log::debug!(
      "{} inputs worth {total_input}, sending {total_send}, fee {fee} for {size_with_change} bytes, change {change_amount}",
      self.inputs.len(),
    );

    let mut outputs = outputs;
    let mut is_change = vec![false; outputs.len()];

    let estimated_signed_size = if change_amount == Amount::ZERO
      || self.policy.is_dust(change_amount, change_script_size)
    {
      log::debug!("dropping change of {change_amount}, absorbed by fee");
      estimate::estimate_signed_size(&input_script_sizes, &outputs, None)
    } else {
      for address in change.addresses() {
        if address.script_size() > self.policy.max_script_element_size {
          return error::ScriptTooLarge {
            address: *address,
            size: address.script_size(),
            max: self.policy.max_script_element_size,
          }
          .fail();
        }
      }

      let change_outputs = match change {
        Change::Single(address) => vec![TxOut::new(change_amount, &address)],
        Change::Explicit(destinations) => {
          let allocated = destinations
            .iter()
            .try_fold(Amount::ZERO, |total, (_, amount)| total.checked_add(*amount))
            .snafu_context(error::ValueOverflow)?;

          if allocated > change_amount {
            return error::ChangeAllocationExceedsAvailable {
              allocated,
              available: change_amount,
            }
            .fail();
          }

          for (address, amount) in &destinations {
            if self.policy.is_dust(*amount, address.script_size()) {
              return error::Dust {
                address: *address,
                value: *amount,
              }
              .fail();
            }
          }

          destinations
            .iter()
            .map(|(address, amount)| TxOut::new(*amount, address))
            .collect()
        }
      };

      for output in change_outputs {
        outputs.push(output);
        is_change.push(true);

        let last = outputs.len() - 1;
        let position = rng.gen_range(0..outputs.len());
        outputs.swap(position, last);
        is_change.swap(position, last);

        log::trace!("placed change output at index {position} of {}", outputs.len());
      }

      size_with_change
    };

    let change_indices = is_change
      .iter()
      .enumerate()
      .filter_map(|(i, is_change)| is_change.then_some(i))
      .collect();

    Ok(AuthoredTransaction {
      transaction: Transaction {
        version: dcrwire::TX_VERSION,
        input: self
          .inputs
          .iter()
          .map(|input| input.tx_in.clone())
          .collect(),
        output: outputs,
        lock_time: 0,
        expiry: 0,
      },
      total_input,
      estimated_signed_size,
      change_indices,
    })
  }

  fn change<S>(
    &self,
    max_amount_address: Option<Address>,
    change_source: &mut S,
  ) -> Result<Change, AuthorError>
  where
    S: ChangeSource + ?Sized,
  {
    if let Some(address) = max_amount_address {
      if !self.change_destinations.is_empty() {
        return error::ConflictingChangeSpecification.fail();
      }

      return Ok(Change::Single(address));
    }

    if self.change_destinations.is_empty() {
      let address = change_source
        .next_change_address(self.account)
        .snafu_context(error::ChangeAddressGenerationFailed {
          account: self.account,
        })?;

      log::trace!("using change address {address} for account {}", self.account);

      return Ok(Change::Single(destination::decode_address(
        &address,
        self.policy.network,
      )?));
    }

    self
      .change_destinations
      .iter()
      .map(|change| {
        destination::check_amount(&change.address, change.amount)?;
        Ok((
          destination::decode_address(&change.address, self.policy.network)?,
          change.amount,
        ))
      })
      .collect::<Result<Vec<(Address, Amount)>, AuthorError>>()
      .map(Change::Explicit)
  }
}
