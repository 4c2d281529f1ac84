/*!
Grouping of feed records by opaque allocation id, and the join that turns the two indexes into
[AllocationGroup]s.
*/
use crate::models::*;
use crate::sink::AllocationSink;
use log::debug;
use std::collections::HashMap;

/// Two indexes keyed by opaque allocation id, filled while the feed is read.
///
/// - AS numbers: one per id, a later record replaces an earlier one.
/// - Address blocks: all blocks per id, in feed order.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    numbers: HashMap<String, String>,
    blocks: HashMap<String, Vec<AddressBlockRecord>>,
}

impl GroupIndex {
    pub fn new() -> GroupIndex {
        GroupIndex::default()
    }

    /// Build an index from a stream of records.
    pub fn from_records<I: IntoIterator<Item = RegistryRecord>>(records: I) -> GroupIndex {
        let mut index = GroupIndex::new();
        index.extend(records);
        index
    }

    pub fn insert(&mut self, record: RegistryRecord) {
        match record {
            RegistryRecord::ResourceNumber(entry) => self.insert_number(entry),
            RegistryRecord::AddressBlock { opaque_id, block } => self.push_block(opaque_id, block),
        }
    }

    pub fn insert_number(&mut self, entry: ResourceNumberEntry) {
        self.numbers.insert(entry.opaque_id, entry.number);
    }

    pub fn push_block(&mut self, opaque_id: String, block: AddressBlockRecord) {
        self.blocks.entry(opaque_id).or_default().push(block);
    }

    /// AS number filed under the given opaque id.
    pub fn number(&self, opaque_id: &str) -> Option<&str> {
        self.numbers.get(opaque_id).map(|n| n.as_str())
    }

    /// Address blocks filed under the given opaque id, in feed order.
    pub fn blocks(&self, opaque_id: &str) -> &[AddressBlockRecord] {
        self.blocks
            .get(opaque_id)
            .map(|b| b.as_slice())
            .unwrap_or_default()
    }

    /// Number of opaque ids with an AS number.
    pub fn numbers_len(&self) -> usize {
        self.numbers.len()
    }

    /// Number of opaque ids with at least one address block.
    pub fn block_groups_len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.blocks.is_empty()
    }

    /// Join the indexes on opaque id and hand every resulting group to `sink`.
    ///
    /// A group is emitted for each opaque id that has an AS number and at least one address
    /// block. Ids missing either side are dropped silently and only counted in the returned
    /// [EmitSummary]. Groups are emitted in no particular order. The first sink error stops the
    /// join and is returned.
    pub fn emit<S: AllocationSink>(self, sink: &mut S) -> Result<EmitSummary, S::Error> {
        let GroupIndex { numbers, mut blocks } = self;
        let mut summary = EmitSummary::default();

        for (opaque_id, number) in numbers {
            match blocks.remove(&opaque_id) {
                Some(blocks) if !blocks.is_empty() => {
                    sink.emit(AllocationGroup { number, blocks })?;
                    summary.emitted += 1;
                }
                _ => summary.orphan_numbers += 1,
            }
        }
        summary.orphan_block_groups = blocks.len();

        debug!(
            "emitted {} groups, skipped {} AS numbers without blocks and {} block groups without AS number",
            summary.emitted, summary.orphan_numbers, summary.orphan_block_groups
        );
        Ok(summary)
    }

    /// Join the indexes like [GroupIndex::emit], yielding the groups instead.
    pub fn into_groups(self) -> impl Iterator<Item = AllocationGroup> {
        let GroupIndex { numbers, mut blocks } = self;
        numbers.into_iter().filter_map(move |(opaque_id, number)| {
            blocks
                .remove(&opaque_id)
                .filter(|blocks| !blocks.is_empty())
                .map(|blocks| AllocationGroup { number, blocks })
        })
    }
}

impl Extend<RegistryRecord> for GroupIndex {
    fn extend<T: IntoIterator<Item = RegistryRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<RegistryRecord> for GroupIndex {
    fn from_iter<T: IntoIterator<Item = RegistryRecord>>(iter: T) -> Self {
        GroupIndex::from_records(iter)
    }
}
