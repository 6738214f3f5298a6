use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("EM_STORE_BASE_URL", "records.internal:3000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("base_url"));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("EM_STORE_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("timeout_secs"));
}

#[test]
#[serial]
fn given_https_url_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("EM_STORE_BASE_URL", "https://records.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
