// Identifier value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Positional item id: the Nth stored item has id N.
///
/// Signed so that zero and negative values coming from callers can be
/// represented and rejected as "not found" rather than failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn from_position(index: usize) -> Self {
        Self(i64::try_from(index).map_or(i64::MAX, |index| index.saturating_add(1)))
    }

    /// Zero-based index into the stored list, `None` when the id is not positive.
    pub fn index(self) -> Option<usize> {
        if self.0 <= 0 {
            return None;
        }
        usize::try_from(self.0 - 1).ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_have_no_index() {
        assert_eq!(ItemId(0).index(), None);
        assert_eq!(ItemId(-1).index(), None);
        assert_eq!(ItemId(1).index(), Some(0));
        assert_eq!(ItemId::from_position(2), ItemId(3));
    }
}
