use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Serialize;

/// A process-unique identifier of a page element.
///
/// It is displayed as an HTML element id, e.g. `vis-7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Id(u64);

impl Id {
    const PREFIX: &str = "vis-";

    pub fn next() -> Id {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_element_ids() {
        let first = Id::next();
        let second = Id::next();

        assert_ne!(first, second);
        assert!(first.to_string().starts_with("vis-"));
    }
}
