/// Predicate on `order_number` selecting which siblings a bulk shift touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRange {
    /// `order_number >= position`. Opens a slot for an insert.
    AtOrAfter(u32),
    /// `order_number > position`. Closes the slot left by a delete.
    After(u32),
    /// `from <= order_number <= to`, used by moves inside one group.
    Between { from: u32, to: u32 },
}

impl ShiftRange {
    #[must_use]
    pub fn contains(self, order_number: u32) -> bool {
        match self {
            ShiftRange::AtOrAfter(position) => order_number >= position,
            ShiftRange::After(position) => order_number > position,
            ShiftRange::Between { from, to } => (from..=to).contains(&order_number),
        }
    }
}

/// Apply a signed shift to a position. Positions never drop below zero.
#[must_use]
pub fn shifted(order_number: u32, delta: i32) -> u32 {
    order_number.saturating_add_signed(delta)
}
