use std::fmt;

/// Session-local identifier for an Activity.
///
/// Assigned in append order. Used as a render key, never for ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(u64);

impl ActivityId {
    /// Creates a new `ActivityId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_the_type() {
        let id = ActivityId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{id:?}"), "ActivityId(42)");
    }

    #[test]
    fn next_increments() {
        assert_eq!(ActivityId::new(1).next().value(), 2);
    }
}
