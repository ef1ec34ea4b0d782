use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::Error,
    error::general_error,
};

/// The number of uses left on an item.
///
/// Serialized as a single integer, where `-1` means the item never wears out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Durability {
    /// The item never wears out.
    Unlimited,
    /// The item can be used this many more times.
    ///
    /// An item with no remaining uses is broken (equipment) or exhausted (consumables).
    Remaining(u32),
}

impl Durability {
    /// Can the item still be used?
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Remaining(uses) => *uses > 0,
        }
    }

    /// Consumes a single use of the item.
    ///
    /// Unlimited and already-exhausted items are unaffected.
    pub fn consume(&mut self) {
        if let Self::Remaining(uses) = self {
            *uses = uses.saturating_sub(1);
        }
    }
}

impl From<Durability> for i64 {
    fn from(value: Durability) -> Self {
        match value {
            Durability::Unlimited => -1,
            Durability::Remaining(uses) => uses as i64,
        }
    }
}

impl TryFrom<i64> for Durability {
    type Error = Error;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Unlimited),
            _ => u32::try_from(value)
                .map(Self::Remaining)
                .map_err(|_| general_error(format!("invalid durability: {value}"))),
        }
    }
}

#[cfg(test)]
mod durability_test {
    use crate::{
        common::{
            test_deserialization,
            test_serialization,
        },
        items::Durability,
    };

    #[test]
    fn consumes_exactly_one_use() {
        let mut durability = Durability::Remaining(2);
        durability.consume();
        assert_eq!(durability, Durability::Remaining(1));
        assert!(durability.is_usable());
        durability.consume();
        assert_eq!(durability, Durability::Remaining(0));
        assert!(!durability.is_usable());
        durability.consume();
        assert_eq!(durability, Durability::Remaining(0));
    }

    #[test]
    fn unlimited_never_wears_out() {
        let mut durability = Durability::Unlimited;
        for _ in 0..100 {
            durability.consume();
        }
        assert_eq!(durability, Durability::Unlimited);
        assert!(durability.is_usable());
    }

    #[test]
    fn serializes_as_integer() {
        test_serialization(Durability::Unlimited, -1);
        test_serialization(Durability::Remaining(0), 0);
        test_serialization(Durability::Remaining(15), 15);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(serde_json::from_str::<Durability>("-2").is_err());
        test_deserialization("25", Durability::Remaining(25));
    }
}
