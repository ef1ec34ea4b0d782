mod maybe_owned;
mod numbers;
mod strings;
mod test_util;

pub use anyhow::Error;
pub use maybe_owned::{
    MaybeOwned,
    MaybeOwnedMut,
};
pub use numbers::{
    clamp_probability,
    round_to_tenth,
};
pub use strings::display_name;
#[cfg(test)]
pub use test_util::{
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
