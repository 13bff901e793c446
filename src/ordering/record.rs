/// Store-assigned identifier of a record.
pub type RecordId = u64;

/// Identifier of the parent group a record is ordered in.
pub type GroupId = u64;

/// A record that occupies a 1-based position inside a group.
///
/// Stores only need these accessors and mutators; every other field is
/// opaque to the ordering logic.
pub trait OrderedRecord: Clone + Send + Sync + 'static {
    /// Caller-supplied fields for a new record, including its placement.
    type New: Send + Sync + 'static;
    /// Partial update applied without touching the ordering.
    type Patch: Send + Sync + 'static;

    fn id(&self) -> RecordId;

    fn group_id(&self) -> GroupId;

    fn order_number(&self) -> u32;

    /// Group and position requested by a creation payload.
    fn placement(new: &Self::New) -> (GroupId, u32);

    /// Build the stored record once the store has assigned an id.
    fn create(id: RecordId, new: Self::New, now: &str) -> Self;

    /// Put the record at `order_number` inside `group_id`.
    fn place(&mut self, group_id: GroupId, order_number: u32, now: &str);

    /// Group and position a patch would write, if it carries them.
    fn patch_placement(patch: &Self::Patch) -> (Option<GroupId>, Option<u32>);

    /// Apply a patch verbatim. Group or position changes carried by the
    /// patch are written as-is; siblings are not shifted.
    fn apply(&mut self, patch: Self::Patch, now: &str);
}
