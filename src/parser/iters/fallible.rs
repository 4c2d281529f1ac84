/*!
Fallible iterator over feed records, exposing read errors to users.

Unlike [RecordIterator](super::RecordIterator), which logs a read error and ends, this iterator
yields `Result<RegistryRecord, ParserError>` and ends right after returning the error.
*/
use crate::error::ParserError;
use crate::models::RegistryRecord;
use crate::parser::{ParseStats, RegistryParser};
use std::io::Read;

pub struct FallibleRecordIterator<R> {
    parser: RegistryParser<R>,
    done: bool,
}

impl<R> FallibleRecordIterator<R> {
    pub(crate) fn new(parser: RegistryParser<R>) -> Self {
        FallibleRecordIterator {
            parser,
            done: false,
        }
    }

    pub fn stats(&self) -> ParseStats {
        self.parser.stats
    }
}

impl<R: Read> Iterator for FallibleRecordIterator<R> {
    type Item = Result<RegistryRecord, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
