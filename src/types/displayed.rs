use core::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// Payload wrapper that serializes through `Display`.
///
/// Lets an outcome whose value or error has no `Serialize` impl still produce
/// a dict: the payload is rendered as its display string.
///
/// # Examples
///
/// ```
/// use resokerr::{Displayed, Outcome, ToDict};
///
/// struct Port(u16);
/// impl std::fmt::Display for Port {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "port {}", self.0)
///     }
/// }
///
/// let outcome: Outcome<Displayed<Port>, ()> = Outcome::ok(Displayed(Port(8080)));
/// assert_eq!(outcome.to_dict().unwrap()["value"], "port 8080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Displayed<T>(pub T);

impl<T> Displayed<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Display> Serialize for Displayed<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<T: Display> Display for Displayed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
