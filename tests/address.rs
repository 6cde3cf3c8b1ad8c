use super::*;

#[test]
fn p2pkh() {
  pretty_assert_eq!(
    CommandBuilder::new(format!("address {}", address(1)))
      .run_and_deserialize_output::<Info>(),
    Info {
      address: address(1).to_string(),
      network: Network::Mainnet,
      kind: "p2pkh".into(),
      script: format!("76a914{}88ac", "01".repeat(20)),
      script_size: 25,
      dust_limit: Amount::from_atoms(6_030),
    }
  );
}

#[test]
fn p2sh_on_simnet() {
  let address = Address::new(Network::Simnet, AddressKind::ScriptHash, [2; 20]);

  let info = CommandBuilder::new(format!("--simnet address {address}"))
    .run_and_deserialize_output::<Info>();

  assert_eq!(info.network, Network::Simnet);
  assert_eq!(info.kind, "p2sh");
  assert_eq!(info.script, format!("a914{}87", "02".repeat(20)));
  assert_eq!(info.script_size, 23);
}

#[test]
fn dust_limit_follows_fee_rate() {
  let info = CommandBuilder::new(format!("--fee-rate 1000 address {}", address(1)))
    .run_and_deserialize_output::<Info>();

  assert_eq!(info.dust_limit, Amount::from_atoms(603));
}

#[test]
fn invalid_address() {
  CommandBuilder::new("address foo0")
    .expected_stderr(
      "error: invalid address `foo0`

because:
- invalid base58 encoding
",
    )
    .expected_exit_code(1)
    .run_and_extract_stdout();
}
