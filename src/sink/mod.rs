/*!
Destinations for joined allocation groups.

[AllocationSink] is the seam between the grouping engine and wherever groups end up. A
`Vec<AllocationGroup>` collects them in memory; [files::FileSink] writes the per-ASN artifacts.
*/
use crate::models::AllocationGroup;
use std::convert::Infallible;

#[cfg(feature = "serde")]
pub mod files;

#[cfg(feature = "serde")]
pub use files::{read_blocks, FileSink, SinkError};

/// Receives every [AllocationGroup] produced by [GroupIndex::emit](crate::GroupIndex::emit).
pub trait AllocationSink {
    type Error;

    fn emit(&mut self, group: AllocationGroup) -> Result<(), Self::Error>;
}

impl AllocationSink for Vec<AllocationGroup> {
    type Error = Infallible;

    fn emit(&mut self, group: AllocationGroup) -> Result<(), Infallible> {
        self.push(group);
        Ok(())
    }
}
