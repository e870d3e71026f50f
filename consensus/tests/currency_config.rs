mod common;

use std::io::Write;

use common::{backend, builder, mainnet};
use consensus::currency::MAX_DIFFICULTY_TARGET;
use consensus::{AmountFormatError, ConfigError, Currency, CurrencyBuilder};
use consensus_core::config::CurrencyParams;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_currency_is_shareable() {
    assert_send_sync::<Currency>();
    assert_send_sync::<CurrencyBuilder>();
}

#[test]
fn test_accessors_expose_mainnet_defaults() {
    let currency = mainnet();
    let params = CurrencyParams::default();
    assert_eq!(currency.params(), &params);
    assert_eq!(currency.money_supply(), params.money_supply);
    assert_eq!(currency.emission_speed_factor(), params.emission_speed_factor);
    assert_eq!(currency.minimum_fee(), params.minimum_fee);
    assert_eq!(currency.difficulty_window_v1(), params.difficulty_window_v1);
    assert_eq!(currency.fusion_tx_min_in_out_count_ratio(), params.fusion_tx_min_in_out_count_ratio);
    assert_eq!(currency.coin(), 1_000_000);
    assert!(!currency.is_testnet());
}

#[test]
fn test_amount_text_with_two_places() {
    let currency = builder().number_of_decimal_places(2).unwrap().build().unwrap();
    assert_eq!(currency.coin(), 100);
    assert_eq!(currency.format_amount(12345), "123.45");
    assert_eq!(currency.format_amount(5), "0.05");
    assert_eq!(currency.format_signed_amount(-12345), "-123.45");
    assert_eq!(currency.parse_amount("123.450"), Ok(12345));
    assert_eq!(currency.parse_amount("123.456"), Err(AmountFormatError::TooManyDecimalPlaces(2)));
}

#[test]
fn test_validated_setters() {
    assert!(matches!(builder().emission_speed_factor(0), Err(ConfigError::InvalidValue { field: "emission_speed_factor", .. })));
    assert!(builder().emission_speed_factor(65).is_err());
    assert!(builder().emission_speed_factor(64).is_ok());
    assert!(builder().number_of_decimal_places(20).is_err());
    assert!(builder().number_of_decimal_places(19).is_ok());
    assert!(builder().difficulty_window(1).is_err());
    assert!(builder().upgrade_voting_threshold(0).is_err());
    assert!(builder().upgrade_voting_threshold(101).is_err());
    assert!(builder().upgrade_voting_threshold(100).is_ok());
    assert!(builder().upgrade_window(0).is_err());
    assert!(builder().deposit_max_term(u32::MAX / 100).is_err());
    assert!(builder().max_block_size_growth_speed_denominator(0).is_err());
}

#[test]
fn test_build_checks_parameter_relations() {
    let too_much_cut = builder().difficulty_window(10).unwrap().difficulty_cut(5);
    assert!(matches!(too_much_cut.build(), Err(ConfigError::Inconsistent(_))));
    assert!(builder().difficulty_window(10).unwrap().difficulty_cut(4).build().is_ok());

    let inverted_terms = builder().deposit_min_term(10).deposit_max_term(9).unwrap();
    assert!(matches!(inverted_terms.build(), Err(ConfigError::Inconsistent(_))));
}

#[test]
fn test_build_rejects_overflowing_difficulty_settings() {
    let huge_cut = builder().difficulty_cut(usize::MAX / 2 + 1);
    assert!(matches!(huge_cut.build(), Err(ConfigError::Inconsistent(_))));

    for target in [0, u64::MAX / 6 + 1, u64::MAX] {
        assert!(matches!(
            builder().difficulty_target(target).build(),
            Err(ConfigError::InvalidValue { field: "difficulty_target", .. })
        ));
    }
    assert!(builder().difficulty_target(MAX_DIFFICULTY_TARGET).build().is_ok());
}

#[test]
fn test_from_toml_str() {
    let text = r#"
        money_supply = 10000000
        emission_speed_factor = 2
        number_of_decimal_places = 2
    "#;
    let currency = CurrencyBuilder::from_toml_str(backend(), text).unwrap().build().unwrap();
    assert_eq!(currency.money_supply(), 10_000_000);
    assert_eq!(currency.coin(), 100);
    assert_eq!(currency.minimum_fee(), CurrencyParams::default().minimum_fee);

    let invalid = CurrencyBuilder::from_toml_str(backend(), "emission_speed_factor = 0");
    assert!(matches!(invalid, Err(ConfigError::InvalidValue { field: "emission_speed_factor", .. })));
    assert!(matches!(CurrencyBuilder::from_toml_str(backend(), "money_supply = \"lots\""), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_load_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = CurrencyBuilder::load(backend(), &dir.path().join("missing.toml")).unwrap();
    assert_eq!(missing.params(), &CurrencyParams::default());

    let path = dir.path().join("currency.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "testnet = true").unwrap();
    writeln!(file, "minimum_fee = 10").unwrap();
    drop(file);

    let currency = CurrencyBuilder::load(backend(), &path).unwrap().build().unwrap();
    assert!(currency.is_testnet());
    assert_eq!(currency.minimum_fee(), 10);
    assert_eq!(currency.tx_pool_file_name(), "testnet_poolstate.bin");
}

#[test]
fn test_params_round_trip_through_toml() {
    let mut params = CurrencyParams::default();
    params.difficulty_target = 60;
    params.public_address_base58_prefix = 0x1234;
    let text = toml::to_string(&params).unwrap();
    let currency = CurrencyBuilder::from_toml_str(backend(), &text).unwrap().build().unwrap();
    assert_eq!(currency.params(), &params);
}

#[test]
fn test_for_network() {
    assert!(!CurrencyBuilder::for_network(backend(), "mainnet").unwrap().params().testnet);
    assert!(CurrencyBuilder::for_network(backend(), "testnet").unwrap().params().testnet);
    assert!(matches!(CurrencyBuilder::for_network(backend(), "devnet"), Err(ConfigError::UnknownNetwork(_))));
}
