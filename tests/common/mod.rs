//! Common test utilities for attribute codec testing.
//!
//! Provides assertion macros, fixtures, and one-time logger setup shared by
//! the unit and integration suites.

use std::sync::Once;


static INIT_LOGGER: Once = Once::new();

/// Install `env_logger` once so `RUST_LOG=admin_attrs=trace` shows codec
/// activity during a test run.
pub fn init_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
}

/// Assert that a result is an `InvalidRequest` error whose message contains
/// the given substring.
#[macro_export]
macro_rules! assert_invalid_request {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(admin_attrs::AttrError::InvalidRequest { message }) => assert!(
                message.contains($substring),
                "Error message '{}' does not contain '{}'",
                message,
                $substring
            ),
            Ok(value) => panic!(
                "Expected InvalidRequest containing '{}', got Ok({:?})",
                $substring, value
            ),
            Err(other) => panic!("Expected InvalidRequest, got {:?}", other),
        }
    };
}

/// Assert that a result is an `InvalidAttrType` error for the given key and
/// JSON type name.
#[macro_export]
macro_rules! assert_invalid_attr_type {
    ($result:expr, $key:expr, $actual:expr) => {
        match $result {
            Err(admin_attrs::AttrError::InvalidAttrType { attribute, actual }) => {
                assert_eq!(attribute, $key);
                assert_eq!(actual, $actual);
            }
            Ok(value) => panic!("Expected InvalidAttrType, got Ok({:?})", value),
            Err(other) => panic!("Expected InvalidAttrType, got {:?}", other),
        }
    };
}

/// Collect `(key, value)` views of a pair list for compact comparisons.
pub fn pairs(attrs: &[admin_attrs::Attr]) -> Vec<(&str, Option<&str>)> {
    attrs.iter().map(|attr| (attr.key(), attr.value())).collect()
}
