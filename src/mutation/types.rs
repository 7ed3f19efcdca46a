//! Mutation descriptor.

/// The move a [`Mutation`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MutationKind {
    /// Reverse the segment `cuts[0]..cuts[1]`.
    #[default]
    DoubleBridge,
    /// Exchange the cities at `cuts[0]` and `cuts[1]`.
    Swap,
    /// Move the city at `cuts[0]` to just before the city at `cuts[1]`.
    Displacement,
}

/// A costed but not yet committed move.
///
/// Descriptors are transient: one is produced per iteration and either
/// applied once or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// Operator that produced this move.
    pub kind: MutationKind,
    /// Two tour positions, each `< n`. Their meaning depends on `kind`.
    pub cuts: [usize; 2],
    /// Tour length after the move is applied.
    pub length: i64,
}

impl Mutation {
    /// Commits the move into `tour` in place.
    ///
    /// Must be called on the same tour the descriptor was costed against,
    /// and at most once.
    pub fn apply(&self, tour: &mut [usize]) {
        let [c0, c1] = self.cuts;
        match self.kind {
            MutationKind::DoubleBridge => tour[c0..c1].reverse(),
            MutationKind::Swap => tour.swap(c0, c1),
            MutationKind::Displacement => {
                if c0 < c1 {
                    tour[c0..c1].rotate_left(1);
                } else {
                    tour[c1..=c0].rotate_right(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(kind: MutationKind, c0: usize, c1: usize) -> Mutation {
        Mutation {
            kind,
            cuts: [c0, c1],
            length: 0,
        }
    }

    #[test]
    fn test_apply_double_bridge_reverses_segment() {
        let mut t = vec![0, 1, 2, 3, 4, 5];
        mv(MutationKind::DoubleBridge, 1, 4).apply(&mut t);
        assert_eq!(t, vec![0, 3, 2, 1, 4, 5]);
    }

    #[test]
    fn test_apply_double_bridge_single_element_is_noop() {
        let mut t = vec![0, 1, 2, 3];
        mv(MutationKind::DoubleBridge, 2, 3).apply(&mut t);
        assert_eq!(t, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_apply_swap() {
        let mut t = vec![0, 1, 2, 3, 4];
        mv(MutationKind::Swap, 4, 0).apply(&mut t);
        assert_eq!(t, vec![4, 1, 2, 3, 0]);
    }

    #[test]
    fn test_apply_displacement_forward() {
        let mut t = vec![0, 1, 2, 3, 4, 5];
        // city at 1 goes right before the city at 4
        mv(MutationKind::Displacement, 1, 4).apply(&mut t);
        assert_eq!(t, vec![0, 2, 3, 1, 4, 5]);
    }

    #[test]
    fn test_apply_displacement_backward() {
        let mut t = vec![0, 1, 2, 3, 4, 5];
        // city at 4 goes right before the city at 1
        mv(MutationKind::Displacement, 4, 1).apply(&mut t);
        assert_eq!(t, vec![0, 4, 1, 2, 3, 5]);
    }

    #[test]
    fn test_default_kind_is_double_bridge() {
        assert_eq!(MutationKind::default(), MutationKind::DoubleBridge);
    }
}
