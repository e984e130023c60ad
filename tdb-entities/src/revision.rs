pub type RevisionValue = u64;

/// Version stamp of an aggregate, incremented on every modification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Revision(RevisionValue);

impl Revision {
    pub const fn initial() -> Self {
        Self(0)
    }

    pub fn is_initial(self) -> bool {
        self == Self::initial()
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::initial()
    }
}

impl From<Revision> for RevisionValue {
    fn from(from: Revision) -> Self {
        from.0
    }
}

impl From<RevisionValue> for Revision {
    fn from(from: RevisionValue) -> Self {
        Self(from)
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
