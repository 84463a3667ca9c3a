// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use archflow_sim::logging::{init_logging, str_to_level};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn parse_levels() {
    assert_eq!(str_to_level("warn").unwrap(), LevelFilter::Warn);
    assert_eq!(str_to_level("DEBUG").unwrap(), LevelFilter::Debug);
    assert_eq!(str_to_level("off").unwrap(), LevelFilter::Off);
    assert!(str_to_level("loud").unwrap_err().is_configuration());
}

#[test]
#[serial]
fn logger_installed_once() {
    assert!(init_logging("nonsense").is_err());
    assert!(init_logging("info").is_ok());
    assert_eq!(log::max_level(), LevelFilter::Info);
    log::info!("logger installed");

    let err = init_logging("debug").unwrap_err();
    assert!(err.is_configuration());
}
