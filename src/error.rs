use super::*;

/// Reasons an authoring call fails. No transaction is produced on failure.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum AuthorError {
  #[snafu(display("invalid amount {amount} for `{address}`"))]
  InvalidAmount { address: String, amount: Amount },
  #[snafu(display("invalid address `{address}`"))]
  InvalidAddress {
    address: String,
    source: address::Error,
  },
  #[snafu(display("unsupported address type `{address}`"))]
  UnsupportedAddressType {
    address: String,
    source: address::Error,
  },
  #[snafu(display("cannot send max amount to multiple recipients"))]
  MultipleMaxAmountRecipients,
  #[snafu(display(
    "no change is generated when sending max amount, change destinations must not be provided"
  ))]
  ConflictingChangeSpecification,
  #[snafu(display("error generating internal address to use as change for account {account}"))]
  ChangeAddressGenerationFailed { account: u32, source: BoxError },
  #[snafu(display(
    "total send amount plus tx fee is higher than the total input amount by {shortfall}"
  ))]
  InsufficientFunds { shortfall: Amount },
  #[snafu(display(
    "change script for `{address}` is {size} bytes, more than the {max} bytes pushable to the stack"
  ))]
  ScriptTooLarge {
    address: Address,
    size: usize,
    max: usize,
  },
  #[snafu(display(
    "total amount allocated to change addresses ({allocated}) is higher than actual change amount for transaction ({available})"
  ))]
  ChangeAllocationExceedsAvailable { allocated: Amount, available: Amount },
  #[snafu(display("output value for `{address}` is dust: {value}"))]
  Dust { address: Address, value: Amount },
  #[snafu(display("input {outpoint} has invalid value {value}"))]
  InvalidInputValue { outpoint: OutPoint, value: Amount },
  #[snafu(display("arithmetic overflow calculating value"))]
  ValueOverflow,
}

/// Gives access to `snafu::ResultExt::context`, which is otherwise shadowed by
/// `anyhow::Context::context`.
pub(crate) trait ResultExt<T, E>: Sized {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat,
  {
    snafu::ResultExt::context(self, context)
  }
}

/// Same as `ResultExt`, for `snafu::OptionExt::context`.
pub(crate) trait OptionExt<T>: Sized {
  fn snafu_context<C, E>(self, context: C) -> Result<T, E>
  where
    C: snafu::IntoError<E, Source = snafu::NoneError>,
    E: std::error::Error + snafu::ErrorCompat;
}

impl<T> OptionExt<T> for Option<T> {
  fn snafu_context<C, E>(self, context: C) -> Result<T, E>
  where
    C: snafu::IntoError<E, Source = snafu::NoneError>,
    E: std::error::Error + snafu::ErrorCompat,
  {
    snafu::OptionExt::context(self, context)
  }
}
