use crate::model::{Module, UnitId};

/// The set of units a learner has finished within one role.
///
/// Keeps insertion order so the stored list stays stable across writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletedUnits {
    ids: Vec<UnitId>,
}

impl CompletedUnits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a possibly repetitive list, keeping first occurrences.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = UnitId>) -> Self {
        let mut completed = Self::new();
        for id in ids {
            completed.insert(id);
        }
        completed
    }

    #[must_use]
    pub fn contains(&self, id: &UnitId) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` if the id was not present before.
    pub fn insert(&mut self, id: UnitId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: &UnitId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitId> {
        self.ids.iter()
    }

    /// Number of the module's units that are in this set.
    #[must_use]
    pub fn count_in(&self, module: &Module) -> usize {
        module
            .units()
            .iter()
            .filter(|unit| self.contains(unit.id()))
            .count()
    }
}

/// `round(100 * completed / total)`, clamped to `0..=100`; `0` when `total` is `0`.
///
/// Halves round up.
#[must_use]
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let pct = (200 * completed + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_matches_rounded_ratio() {
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(3, 0), 0);
        assert_eq!(completion_percentage(0, 4), 0);
        assert_eq!(completion_percentage(1, 2), 50);
        assert_eq!(completion_percentage(2, 2), 100);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(5, 4), 100);
    }

    #[test]
    fn percentage_agrees_with_float_rounding() {
        for total in 1..=40_usize {
            for done in 0..=total {
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let expected = ((100.0 * done as f64) / total as f64).round() as u8;
                assert_eq!(completion_percentage(done, total), expected, "{done}/{total}");
            }
        }
    }

    #[test]
    fn insert_is_idempotent_and_ordered() {
        let mut set = CompletedUnits::new();
        assert!(set.insert(UnitId::new("b")));
        assert!(set.insert(UnitId::new("a")));
        assert!(!set.insert(UnitId::new("b")));
        let order: Vec<&str> = set.iter().map(UnitId::as_str).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = CompletedUnits::from_ids([UnitId::new("a"), UnitId::new("a")]);
        assert_eq!(set.len(), 1);
        assert!(set.remove(&UnitId::new("a")));
        assert!(!set.remove(&UnitId::new("a")));
        assert!(set.is_empty());
    }
}
