/*!
error module defines the error types used in netmirror.

Parsing and grouping never fail: lines that cannot be interpreted are skipped and malformed
numeric fields degrade to zero. Only reading the feed can go wrong.
*/
use oneio::OneIoError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// A general IO error triggered by the internal reader.
    ///
    /// ## Occurs during:
    ///  - Reading a line from the feed (including lines that are not valid UTF-8)
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// The feed could not be opened.
    ///
    /// ## Occurs during:
    ///  - Fetching a remote feed
    ///  - Opening a local file or setting up its decompression
    #[error(transparent)]
    OneIoError(#[from] OneIoError),
}
