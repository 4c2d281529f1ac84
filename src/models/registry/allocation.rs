use crate::models::AddressBlockRecord;

/// All address blocks allocated together with one AS number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationGroup {
    pub number: String,
    pub blocks: Vec<AddressBlockRecord>,
}

impl AllocationGroup {
    /// CIDR strings in block order.
    pub fn cidrs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.cidr.as_str())
    }
}

/// Outcome of joining the grouping indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Groups handed to the sink.
    pub emitted: usize,
    /// AS numbers without any address block under their opaque id.
    pub orphan_numbers: usize,
    /// Opaque ids that carry address blocks but no AS number.
    pub orphan_block_groups: usize,
}
