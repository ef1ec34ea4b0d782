use std::fmt::Display;

use anyhow::Error;

use crate::error::context::ContextError;

/// Wraps an error into [`Error`], optionally providing additional context.
pub trait WrapError {
    /// Wraps the object into an [`Error`].
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Wraps the object into an [`Error`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap_error(self) -> Error {
        self.into()
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display,
    {
        Into::<Error>::into(self).context(ContextError::new(message))
    }
}

/// Wraps an object into a result producing an [`Error`], optionally providing additional
/// context.
pub trait WrapResultError<T> {
    /// Wraps the object into a [`Result<T, Error>`].
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    /// Wraps the object into a [`Result<T, Error>`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(|error| error.wrap_error())
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Ok(val) => Ok(val),
            Err(error) => Err(error.wrap_error_with_message(message)),
        }
    }
}

#[cfg(test)]
mod error_test {
    use crate::error::{
        ValidationError,
        WrapResultError,
        general_error,
    };

    #[test]
    fn wraps_error_with_context() {
        let result: Result<(), _> = Err(general_error("flee chance out of range"));
        let error = result
            .wrap_error_with_message("invalid battle options")
            .unwrap_err();
        assert_eq!(error.to_string(), "invalid battle options");
        assert_eq!(
            format!("{error:#}"),
            "invalid battle options: flee chance out of range"
        );
    }

    #[test]
    fn collects_validation_problems() {
        let mut error = ["missing seed", "bad chance"]
            .into_iter()
            .collect::<ValidationError>();
        error.add_problem("bad penalty");
        assert!(!error.is_empty());
        assert_eq!(
            error.problems().collect::<Vec<_>>(),
            ["missing seed", "bad chance", "bad penalty"]
        );
        assert_eq!(
            error.to_string(),
            "validation failed: missing seed; bad chance; bad penalty"
        );
    }
}
