//! The element-presence value produced by every traversal step.

use inlay_common::{Result, error::Error};

/// Either the next element of a sequence, or the signal that the sequence is
/// exhausted.
///
/// A `Presence` is constructed fresh on every protocol step and is meant to be
/// consumed immediately: a caller that needs the element moves it out with
/// [`value`](Presence::value) (or [`into_option`](Presence::into_option)) and
/// never retains the `Presence` itself beyond the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    /// The next element.
    Present(T),
    /// The sequence is exhausted.
    Absent,
}

impl<T> Presence<T> {
    /// Wraps a value as a present element.
    #[inline]
    pub fn present(value: T) -> Presence<T> {
        Presence::Present(value)
    }

    /// Returns `true` if an element is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }

    /// Returns `true` if the sequence reported exhaustion.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    /// Moves the contained element out.
    ///
    /// Fails with an empty-access error when no element is present. That error
    /// is a caller bug: exhaustion must be checked (or the `Presence` matched)
    /// before extraction.
    #[inline]
    pub fn value(self) -> Result<T> {
        match self {
            Presence::Present(value) => Ok(value),
            Presence::Absent => Err(Error::empty_access()),
        }
    }

    /// Moves the contained element out, or returns `default` when absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Presence::Present(value) => value,
            Presence::Absent => default,
        }
    }

    /// Converts from `&Presence<T>` to `Presence<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Present(value) => Presence::Present(value),
            Presence::Absent => Presence::Absent,
        }
    }

    /// Maps a `Presence<T>` to a `Presence<U>` by applying `f` to a present
    /// element, leaving an absence untouched.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presence<U> {
        match self {
            Presence::Present(value) => Presence::Present(f(value)),
            Presence::Absent => Presence::Absent,
        }
    }

    /// Converts into a standard `Option`, losing nothing: `Present` maps to
    /// `Some` and `Absent` to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Present(value) => Some(value),
            Presence::Absent => None,
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Presence::Present(value),
            None => Presence::Absent,
        }
    }
}

impl<T> From<Presence<T>> for Option<T> {
    fn from(presence: Presence<T>) -> Self {
        presence.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlay_common::error::ErrorKind;

    #[test]
    fn test_present_value() {
        let presence = Presence::present(42);
        assert!(presence.is_present());
        assert!(!presence.is_absent());
        assert_eq!(presence.value().unwrap(), 42);
    }

    #[test]
    fn test_absent_value_fails() {
        let presence = Presence::<i32>::Absent;
        assert!(presence.is_absent());
        let err = presence.value().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyAccess));
    }

    #[test]
    fn test_value_or() {
        assert_eq!(Presence::present(1).value_or(9), 1);
        assert_eq!(Presence::<i32>::Absent.value_or(9), 9);
    }

    #[test]
    fn test_as_ref_and_map() {
        let presence = Presence::present(String::from("abc"));
        assert_eq!(presence.as_ref().map(|s| s.len()), Presence::Present(3));
        assert_eq!(presence.map(|s| s.to_uppercase()), Presence::Present(String::from("ABC")));

        let absent = Presence::<String>::Absent;
        assert_eq!(absent.map(|s| s.len()), Presence::Absent);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Presence::from(Some(5)), Presence::Present(5));
        assert_eq!(Presence::<i32>::from(None), Presence::Absent);
        assert_eq!(Presence::present(5).into_option(), Some(5));
        assert_eq!(Option::<i32>::from(Presence::Absent), None);
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(Presence::<u8>::default(), Presence::Absent);
    }
}
