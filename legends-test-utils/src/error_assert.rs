use legends::common::Error;

fn message(error: &Error) -> String {
    format!("{error:#}")
}

/// [`assert`]s that the result is an [`Error`] with the given message.
///
/// The message includes all context attached to the error.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, want: &str) {
    match result {
        Ok(_) => panic!("expected error \"{want}\", got Ok"),
        Err(error) => pretty_assertions::assert_eq!(message(&error), want),
    }
}

/// [`assert`]s that the result is an [`Error`] that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, want: &str) {
    assert!(result.is_err_and(|error| message(&error).contains(want)))
}
