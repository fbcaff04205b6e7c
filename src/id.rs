/// Identity of one virtual slot on the rail.
///
/// Rendered elements are keyed by the virtual index, never by the item index,
/// so repeated copies of the same item stay independently addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SlotId(pub i64);

impl SlotId {
    #[inline]
    pub fn virt_index(self) -> i64 {
        self.0
    }

    /// The item this slot shows, or `None` when there are no items.
    #[inline]
    pub fn data_index(self, total: usize) -> Option<usize> {
        data_index(self.0, total)
    }
}

impl From<i64> for SlotId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for SlotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Non-negative modulo mapping a virtual index onto `0..total`.
#[inline]
pub fn data_index(virt_index: i64, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some(virt_index.rem_euclid(total as i64) as usize)
}
