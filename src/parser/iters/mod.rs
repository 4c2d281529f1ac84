/*!
Iterator implementations for netmirror.

- `default`: [RecordIterator] stops at the first read error after logging it
- `fallible`: [FallibleRecordIterator] returns read errors to the caller
*/
pub mod default;
pub mod fallible;

pub use default::RecordIterator;
pub use fallible::FallibleRecordIterator;

use crate::models::RegistryRecord;
use crate::parser::RegistryParser;
use std::io::Read;

/// Use [RecordIterator] as the default iterator.
impl<R: Read> IntoIterator for RegistryParser<R> {
    type Item = RegistryRecord;
    type IntoIter = RecordIterator<R>;

    fn into_iter(self) -> Self::IntoIter {
        RecordIterator::new(self)
    }
}

impl<R> RegistryParser<R> {
    pub fn into_record_iter(self) -> RecordIterator<R> {
        RecordIterator::new(self)
    }

    pub fn into_fallible_record_iter(self) -> FallibleRecordIterator<R> {
        FallibleRecordIterator::new(self)
    }
}
