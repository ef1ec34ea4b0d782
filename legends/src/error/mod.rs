mod action_error;
mod context;
mod error;
mod legends_error;
mod validation_error;

pub use action_error::ActionError;
pub use error::{
    WrapError,
    WrapResultError,
};
pub use legends_error::{
    GeneralError,
    general_error,
};
pub use validation_error::ValidationError;
