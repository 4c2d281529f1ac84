/*!
Parsing of registry statistics feeds.

[RegistryParser] reads a feed line by line and turns each line into a [RegistryRecord] using
[parse_line]. Records can be consumed one at a time through the iterators in [iters], or
collected straight into a [GroupIndex] that joins AS numbers with their address blocks.
*/
use std::io::{BufRead, BufReader, Read};

pub mod grouping;
pub mod iters;
pub mod prefix;
pub mod record;

pub use grouping::GroupIndex;
pub use iters::{FallibleRecordIterator, RecordIterator};
pub use prefix::calculate_prefix;
pub use record::{parse_line, RawLine};

pub use crate::error::ParserError;
use crate::io::get_feed_reader;
use crate::models::RegistryRecord;
use log::info;

/// Line counters kept while a feed is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines read from the feed.
    pub lines: u64,
    /// Lines that produced a record.
    pub records: u64,
    /// Comments, blank lines and lines that were not usable.
    pub skipped: u64,
}

pub struct RegistryParser<R> {
    reader: BufReader<R>,
    line: Vec<u8>,
    stats: ParseStats,
}

impl RegistryParser<Box<dyn Read>> {
    /// Creating a new parser from a path to a feed, located locally or remotely.
    pub fn new(path: &str) -> Result<Self, ParserError> {
        let reader = get_feed_reader(path)?;
        Ok(RegistryParser::from_reader(reader))
    }
}

impl<R: Read> RegistryParser<R> {
    /// Creating a new parser from a object that implements [Read] trait.
    pub fn from_reader(reader: R) -> Self {
        RegistryParser {
            reader: BufReader::new(reader),
            line: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    /// Read lines until one produces a record. Returns `Ok(None)` at the end of the feed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`; only errors of the underlying
    /// reader are returned.
    pub fn next_record(&mut self) -> Result<Option<RegistryRecord>, ParserError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.stats.lines += 1;

            let bytes = self.line.strip_suffix(b"\n").unwrap_or(&self.line);
            let line = String::from_utf8_lossy(bytes);
            match parse_line(&line) {
                Some(record) => {
                    self.stats.records += 1;
                    return Ok(Some(record));
                }
                None => self.stats.skipped += 1,
            }
        }
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Read the whole feed into a [GroupIndex].
    ///
    /// The first read error aborts the run; nothing read so far is returned in that case.
    pub fn into_group_index(mut self) -> Result<GroupIndex, ParserError> {
        let mut index = GroupIndex::new();
        while let Some(record) = self.next_record()? {
            index.insert(record);
        }
        info!(
            "read {} lines: {} records, {} skipped; {} AS numbers, {} block groups",
            self.stats.lines,
            self.stats.records,
            self.stats.skipped,
            index.numbers_len(),
            index.block_groups_len()
        );
        Ok(index)
    }
}
