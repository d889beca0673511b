use std::fs;

use kinesis_promise::config::DOUBLE_SETTLEMENT_ENV;
use kinesis_promise::{DoubleSettlement, KinesisClient, KinesisPromiseConfig};

use crate::common::StubKinesis;

fn env_override_present() -> bool {
    std::env::var_os(DOUBLE_SETTLEMENT_ENV).is_some_and(|value| !value.is_empty())
}

#[test]
fn default_policy_is_warn() {
    let client = KinesisClient::new(StubKinesis::succeeding());
    assert_eq!(client.double_settlement(), DoubleSettlement::Warn);
}

#[test]
fn explicit_policy_is_kept() {
    let client =
        KinesisClient::with_double_settlement(StubKinesis::succeeding(), DoubleSettlement::Panic);
    assert_eq!(client.double_settlement(), DoubleSettlement::Panic);
}

#[test]
fn from_config_uses_file_policy() {
    if env_override_present() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[adapter]\ndouble_settlement = \"ignore\"\n").unwrap();

    let config = KinesisPromiseConfig::load_from(&path).unwrap();
    let client = KinesisClient::from_config(StubKinesis::succeeding(), &config).unwrap();

    assert_eq!(client.double_settlement(), DoubleSettlement::Ignore);
}

#[test]
fn from_config_without_adapter_section_uses_default() {
    if env_override_present() {
        return;
    }
    let config = KinesisPromiseConfig::from_toml_str("").unwrap();
    let client = KinesisClient::from_config(StubKinesis::succeeding(), &config).unwrap();

    assert_eq!(client.double_settlement(), DoubleSettlement::Warn);
}
