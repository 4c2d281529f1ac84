use crate::ParserError;
use log::info;
use std::io::Read;

/// Latest NRO combined delegated extended statistics, as mirrored by the RIPE NCC.
pub const DEFAULT_FEED_URL: &str =
    "https://ftp.ripe.net/pub/stats/ripencc/nro-stats/latest/combined-stat";

/// Open a registry statistics feed located locally or remotely.
///
/// Remote paths are fetched over HTTP(S); `.gz` and `.bz2` files are decompressed on the fly.
pub fn get_feed_reader(path: &str) -> Result<Box<dyn Read>, ParserError> {
    info!("opening registry feed {}", path);
    let reader: Box<dyn Read> = oneio::get_reader(path)?;
    Ok(reader)
}
