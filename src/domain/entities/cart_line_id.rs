//! Cart line identity.

/// Session-unique identity of a cart line.
///
/// Two lines with identical contents still carry different IDs, so removal
/// always targets one specific instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CartLineId(pub u64);

impl CartLineId {
    /// Returns the identity that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
