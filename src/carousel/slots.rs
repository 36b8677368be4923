use strum::Display;

/// Emphasis a slot carries in the arc layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SlotRole {
    Center,
    Adjacent,
    Normal,
}

/// Mapping from item index to angular slot in the arc layout. Identity at
/// startup; replaced wholesale when a rotation animation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    slots: Vec<usize>,
}

impl SlotAssignment {
    pub fn identity(count: usize) -> Self {
        Self {
            slots: (0..count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_of(&self, item: usize) -> usize {
        self.slots[item]
    }

    /// The emphasized slot at the middle of the arc.
    pub fn center_slot(&self) -> usize {
        self.slots.len() / 2
    }

    /// Which item currently occupies `slot`.
    pub fn item_in_slot(&self, slot: usize) -> Option<usize> {
        self.slots.iter().position(|&s| s == slot)
    }

    /// A copy with every item's slot advanced by `steps`, wrapping around
    /// the arc. Pure; callers commit the result once the animation lands.
    pub fn rotated(&self, steps: isize) -> Self {
        let count = self.slots.len() as isize;
        Self {
            slots: self
                .slots
                .iter()
                .map(|&slot| (slot as isize + steps).rem_euclid(count) as usize)
                .collect(),
        }
    }

    pub fn role_of(&self, slot: usize) -> SlotRole {
        let count = self.slots.len();
        let center = self.center_slot();
        if slot == center {
            SlotRole::Center
        } else if slot == (center + 1) % count || slot == (center + count - 1) % count {
            SlotRole::Adjacent
        } else {
            SlotRole::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_items_to_their_own_slot() {
        let slots = SlotAssignment::identity(5);
        for i in 0..5 {
            assert_eq!(slots.slot_of(i), i);
            assert_eq!(slots.item_in_slot(i), Some(i));
        }
        assert_eq!(slots.center_slot(), 2);
    }

    #[test]
    fn rotation_is_a_group_action() {
        let slots = SlotAssignment::identity(5);
        assert_eq!(slots.rotated(0), slots);
        assert_eq!(slots.rotated(2).rotated(3), slots.rotated(5));
        assert_eq!(slots.rotated(5), slots);
        assert_eq!(slots.rotated(-2), slots.rotated(3));
    }

    #[test]
    fn rotation_wraps_around_the_arc() {
        let slots = SlotAssignment::identity(5).rotated(-2);
        assert_eq!(slots.slot_of(0), 3);
        assert_eq!(slots.slot_of(1), 4);
        assert_eq!(slots.slot_of(2), 0);
        assert_eq!(slots.slot_of(3), 1);
        assert_eq!(slots.slot_of(4), 2);
    }

    #[test]
    fn rotation_stays_a_permutation() {
        let slots = SlotAssignment::identity(7).rotated(3);
        let mut seen: Vec<usize> = (0..7).map(|i| slots.slot_of(i)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn exactly_one_center_slot() {
        for count in 3..=8 {
            let slots = SlotAssignment::identity(count);
            let centers = (0..count)
                .filter(|&s| slots.role_of(s) == SlotRole::Center)
                .count();
            assert_eq!(centers, 1, "count {count}");
        }
    }

    #[test]
    fn roles_around_the_center() {
        let slots = SlotAssignment::identity(5);
        assert_eq!(slots.role_of(2), SlotRole::Center);
        assert_eq!(slots.role_of(1), SlotRole::Adjacent);
        assert_eq!(slots.role_of(3), SlotRole::Adjacent);
        assert_eq!(slots.role_of(0), SlotRole::Normal);
        assert_eq!(slots.role_of(4), SlotRole::Normal);
    }

    #[test]
    fn adjacency_wraps_for_three_items() {
        // center is slot 1, so both other slots are adjacent
        let slots = SlotAssignment::identity(3);
        assert_eq!(slots.role_of(1), SlotRole::Center);
        assert_eq!(slots.role_of(0), SlotRole::Adjacent);
        assert_eq!(slots.role_of(2), SlotRole::Adjacent);
    }
}
