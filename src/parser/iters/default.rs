/*!
Default iterator over feed records. Read errors end the iteration and are logged.
*/
use crate::models::RegistryRecord;
use crate::parser::{ParseStats, RegistryParser};
use log::error;
use std::io::Read;

pub struct RecordIterator<R> {
    parser: RegistryParser<R>,
    done: bool,
}

impl<R> RecordIterator<R> {
    pub(crate) fn new(parser: RegistryParser<R>) -> Self {
        RecordIterator {
            parser,
            done: false,
        }
    }

    pub fn stats(&self) -> ParseStats {
        self.parser.stats
    }
}

impl<R: Read> Iterator for RecordIterator<R> {
    type Item = RegistryRecord;

    fn next(&mut self) -> Option<RegistryRecord> {
        if self.done {
            return None;
        }
        match self.parser.next_record() {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                // when reaching IO error, stop iterating
                error!("stop reading feed after {} lines: {}", self.parser.stats.lines, e);
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::RegistryRecord;
    use crate::parser::tests::FailingReader;
    use crate::parser::{GroupIndex, RegistryParser};
    use std::io::{Cursor, Read};

    #[test]
    fn test_record_iter() {
        let feed = "\
# header
nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1
nro-ext|US|ipv4|192.0.2.0|256|20200101|allocated|OPAQUE1
";
        let records = RegistryParser::from_reader(Cursor::new(feed))
            .into_record_iter()
            .collect::<Vec<_>>();
        assert_eq!(records.len(), 2);
        assert!(matches!(records[1], RegistryRecord::AddressBlock { .. }));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped_not_fatal() {
        let mut feed = b"nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1\n".to_vec();
        feed.extend_from_slice(&[0xc3, 0x28, b'\n']);
        feed.extend_from_slice(b"nro-ext|US|ipv4|192.0.2.0|256|20200101|allocated|OPAQUE1\n");

        let mut iter = RegistryParser::from_reader(Cursor::new(feed)).into_iter();
        let index: GroupIndex = iter.by_ref().collect();
        assert_eq!(iter.stats().records, 2);
        assert_eq!(iter.stats().skipped, 1);

        let groups = index.into_groups().collect::<Vec<_>>();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].cidrs().collect::<Vec<_>>(), vec!["192.0.2.0/24"]);
    }

    #[test]
    fn test_stops_at_reader_error() {
        let reader = Cursor::new(b"nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1\n".to_vec())
            .chain(FailingReader);

        let mut iter = RegistryParser::from_reader(reader).into_iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.stats().records, 1);
    }

    #[test]
    fn test_collect_into_index() {
        let feed = "\
nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1
nro-ext|US|ipv6|2001:db8::|32|20200101|allocated|OPAQUE1
";
        let index: GroupIndex = RegistryParser::from_reader(Cursor::new(feed))
            .into_iter()
            .collect();
        assert_eq!(index.into_groups().count(), 1);
    }
}
