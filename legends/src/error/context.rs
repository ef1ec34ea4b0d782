use std::{
    fmt::{
        Debug,
        Display,
        Formatter,
    },
    panic::Location,
};

/// A message attached to an underlying error, tagged with the call site that attached it.
pub struct ContextError {
    message: String,
    file: &'static str,
    line: u32,
}

impl ContextError {
    #[track_caller]
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        let caller = Location::caller();
        Self {
            message: message.to_string(),
            file: caller.file(),
            line: caller.line(),
        }
    }
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}:{}]", self.message, self.file, self.line)
    }
}
