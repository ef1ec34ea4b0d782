use std::ops::{
    Deref,
    DerefMut,
};

/// A value that may or may not be owned.
///
/// Owned values are boxed, so trait objects can be held either way.
pub enum MaybeOwned<'a, T: ?Sized> {
    Owned(Box<T>),
    Unowned(&'a T),
}

/// A mutable value that may or may not be owned.
pub enum MaybeOwnedMut<'a, T: ?Sized> {
    Owned(Box<T>),
    Unowned(&'a mut T),
}

impl<T: ?Sized> Deref for MaybeOwned<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(value) => value,
            Self::Unowned(value) => value,
        }
    }
}

impl<T: ?Sized> Deref for MaybeOwnedMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(value) => value,
            Self::Unowned(value) => value,
        }
    }
}

impl<T: ?Sized> DerefMut for MaybeOwnedMut<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::Owned(value) => value,
            Self::Unowned(value) => value,
        }
    }
}

impl<T: ?Sized> From<Box<T>> for MaybeOwned<'_, T> {
    fn from(value: Box<T>) -> Self {
        Self::Owned(value)
    }
}

impl<'a, T: ?Sized> From<&'a T> for MaybeOwned<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::Unowned(value)
    }
}

impl<T: ?Sized> From<Box<T>> for MaybeOwnedMut<'_, T> {
    fn from(value: Box<T>) -> Self {
        Self::Owned(value)
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for MaybeOwnedMut<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Self::Unowned(value)
    }
}

#[cfg(test)]
mod maybe_owned_test {
    use std::fmt::Display;

    use crate::common::{
        MaybeOwned,
        MaybeOwnedMut,
    };

    #[test]
    fn derefs_owned_and_unowned() {
        let owned: MaybeOwned<'_, dyn Display> = MaybeOwned::Owned(Box::new(12));
        assert_eq!(owned.to_string(), "12");
        let value = "abc";
        let unowned: MaybeOwned<'_, str> = MaybeOwned::from(value);
        assert_eq!(&*unowned, "abc");
    }

    #[test]
    fn mutates_through_unowned() {
        let mut value = vec![1, 2];
        {
            let mut unowned = MaybeOwnedMut::from(&mut value);
            unowned.push(3);
        }
        assert_eq!(value, vec![1, 2, 3]);
        let mut owned: MaybeOwnedMut<'_, Vec<u32>> = MaybeOwnedMut::Owned(Box::new(Vec::new()));
        owned.push(4);
        assert_eq!(*owned, vec![4]);
    }
}
