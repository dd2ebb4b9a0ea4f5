//! Unit tests for domain error types

use gollsync_domain::Error;

#[test]
fn test_config_error() {
    let error = Error::config("Missing required config");
    match error {
        Error::Config { message } => assert_eq!(message, "Missing required config"),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_write_failed_message() {
    assert_eq!(Error::WriteFailed.to_string(), "write to server failed");
}

#[test]
fn test_lock_errors_carry_key() {
    match Error::lock_not_obtained("ns.t.lock") {
        Error::LockNotObtained { key } => assert_eq!(key, "ns.t.lock"),
        _ => panic!("Expected LockNotObtained error"),
    }
    match Error::lock_already_expired("ns.t.lock") {
        Error::LockAlreadyExpired { key } => assert_eq!(key, "ns.t.lock"),
        _ => panic!("Expected LockAlreadyExpired error"),
    }
}

#[test]
fn test_infrastructure_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::infrastructure_with_source("Redis GET failed", io);

    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("refused"));
    assert!(error.to_string().contains("Redis GET failed"));
}

#[test]
fn test_context_errors_are_classified() {
    assert!(Error::Cancelled.is_context_error());
    assert!(Error::DeadlineExceeded.is_context_error());
    assert!(!Error::WriteFailed.is_context_error());
    assert!(!Error::internal("boom").is_context_error());
}
