//! Cached table state

/// What the session knows about one table
///
/// `Dirty` holds local changes that have not been written to the meter yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState<T> {
    NotLoaded,
    Loaded(T),
    Dirty(T),
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self::NotLoaded
    }
}

impl<T> TableState<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(value) | Self::Dirty(value) => Some(value),
        }
    }

    /// Mutable access that leaves the state unchanged
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(value) | Self::Dirty(value) => Some(value),
        }
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self, Self::NotLoaded)
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty(_))
    }

    /// Apply a local change, turning a loaded table dirty
    ///
    /// Returns `false` without calling `change` when nothing is loaded.
    pub fn modify(&mut self, change: impl FnOnce(&mut T)) -> bool {
        let mut value = match std::mem::replace(self, Self::NotLoaded) {
            Self::NotLoaded => return false,
            Self::Loaded(value) | Self::Dirty(value) => value,
        };
        change(&mut value);
        *self = Self::Dirty(value);
        true
    }

    /// Mark local changes as written
    pub fn mark_clean(&mut self) {
        *self = match std::mem::replace(self, Self::NotLoaded) {
            Self::Loaded(value) | Self::Dirty(value) => Self::Loaded(value),
            Self::NotLoaded => Self::NotLoaded,
        };
    }

    pub fn invalidate(&mut self) {
        *self = Self::NotLoaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut state: TableState<u8> = TableState::default();
        assert!(!state.is_loaded());
        assert!(!state.modify(|v| *v = 1));

        state = TableState::Loaded(3);
        assert_eq!(state.get(), Some(&3));
        assert!(state.modify(|v| *v += 1));
        assert!(state.is_dirty());
        assert_eq!(state.get(), Some(&4));

        state.mark_clean();
        assert_eq!(state, TableState::Loaded(4));
        state.mark_clean();
        assert_eq!(state, TableState::Loaded(4));

        state.invalidate();
        assert_eq!(state, TableState::NotLoaded);
    }
}
