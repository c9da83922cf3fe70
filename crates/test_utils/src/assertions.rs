//! Custom Test Assertions
//!
//! Assertion helpers for envelopes that print the whole envelope on failure.

use std::fmt::Debug;

use core_kernel::Envelope;

/// Asserts a success envelope with `code` and `message`, returning its data
///
/// # Panics
///
/// Panics if the code or message differ, or if the envelope carries no data
pub fn assert_success_envelope<T: Debug>(envelope: Envelope<T>, code: u16, message: &str) -> T {
    assert_eq!(
        (envelope.code, envelope.message.as_str()),
        (code, message),
        "Unexpected envelope: {:?}",
        envelope
    );
    match envelope.data {
        Some(data) => data,
        None => panic!("Expected data in {} envelope, got none", code),
    }
}

/// Asserts a failure envelope: the given code and message and null data
pub fn assert_failure_envelope<T: Debug>(envelope: &Envelope<T>, code: u16, message: &str) {
    assert_eq!(envelope.code, code, "Unexpected envelope: {:?}", envelope);
    assert_eq!(envelope.message, message, "Unexpected envelope: {:?}", envelope);
    assert!(
        envelope.data.is_none(),
        "Expected null data in {} envelope, got {:?}",
        code,
        envelope.data
    );
}
