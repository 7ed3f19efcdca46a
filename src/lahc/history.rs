//! Fixed-size acceptance history ("the list").

use crate::error::LahcError;

/// Circular buffer of past tour lengths that LAHC compares candidates
/// against.
///
/// The size is fixed at construction; slots are only ever overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptanceHistory {
    slots: Vec<i64>,
}

impl AcceptanceHistory {
    /// Every slot holds `value`.
    ///
    /// # Errors
    /// [`LahcError::InvalidConfig`] if `size` is zero or cannot be
    /// allocated.
    pub fn filled(size: usize, value: i64) -> Result<Self, LahcError> {
        let mut slots = allocate(size)?;
        slots.resize(size, value);
        Ok(Self { slots })
    }

    /// Slots are filled by cycling through `seed`, then sorted from the
    /// longest length to the shortest.
    ///
    /// # Errors
    /// [`LahcError::InvalidConfig`] if `size` is zero or cannot be
    /// allocated, [`LahcError::EmptyHistory`] if `seed` is empty.
    pub fn seeded(size: usize, seed: &[i64]) -> Result<Self, LahcError> {
        if seed.is_empty() {
            return Err(LahcError::EmptyHistory);
        }
        let mut slots = allocate(size)?;
        slots.extend(seed.iter().copied().cycle().take(size));
        slots.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a history holds at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> i64 {
        self.slots[index]
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: i64) {
        self.slots[index] = value;
    }

    /// Arithmetic mean of the slots.
    pub fn average(&self) -> f64 {
        let sum: f64 = self.slots.iter().map(|&v| v as f64).sum();
        sum / self.slots.len() as f64
    }

    /// `true` iff every slot holds the same value.
    pub fn is_converged(&self) -> bool {
        self.slots.windows(2).all(|w| w[0] == w[1])
    }

    pub fn values(&self) -> &[i64] {
        &self.slots
    }
}

fn allocate(size: usize) -> Result<Vec<i64>, LahcError> {
    if size == 0 {
        return Err(LahcError::InvalidConfig("list_size must be at least 1".into()));
    }
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(size)
        .map_err(|e| LahcError::InvalidConfig(format!("list_size {size}: {e}")))?;
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let h = AcceptanceHistory::filled(4, 17).unwrap();
        assert_eq!(h.len(), 4);
        assert_eq!(h.values(), &[17, 17, 17, 17]);
        assert!(h.is_converged());
        assert!((h.average() - 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(AcceptanceHistory::filled(0, 1).is_err());
        assert!(AcceptanceHistory::seeded(0, &[1]).is_err());
    }

    #[test]
    fn test_unallocatable_size_rejected() {
        for size in [usize::MAX / 2, usize::MAX] {
            assert!(matches!(
                AcceptanceHistory::filled(size, 0),
                Err(LahcError::InvalidConfig(_))
            ));
            assert!(matches!(
                AcceptanceHistory::seeded(size, &[1, 2]),
                Err(LahcError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_seeded_cycles_and_sorts_descending() {
        let h = AcceptanceHistory::seeded(5, &[3, 9, 1]).unwrap();
        // 3 9 1 3 9 -> sorted descending
        assert_eq!(h.values(), &[9, 9, 3, 3, 1]);
        assert!((h.average() - 5.0).abs() < 1e-12);
        assert!(!h.is_converged());
    }

    #[test]
    fn test_seeded_truncates_long_seed() {
        let h = AcceptanceHistory::seeded(2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(h.values(), &[2, 1]);
    }

    #[test]
    fn test_seeded_empty_rejected() {
        assert_eq!(AcceptanceHistory::seeded(3, &[]), Err(LahcError::EmptyHistory));
    }

    #[test]
    fn test_set_keeps_size() {
        let mut h = AcceptanceHistory::filled(3, 10).unwrap();
        h.set(1, 4);
        assert_eq!(h.len(), 3);
        assert_eq!(h.get(1), 4);
        assert!(!h.is_converged());
        assert!((h.average() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_slot_is_converged() {
        let h = AcceptanceHistory::filled(1, 5).unwrap();
        assert!(h.is_converged());
    }
}
