/*!
Per-ASN artifacts on disk.

For every group two files are written into the output directory, both named after the AS
number:

- `<asn>.json`: JSON array of the group's [AddressBlockRecord]s
- `<asn>.txt`: one CIDR per line, in block order
*/
use crate::models::{AddressBlockRecord, AllocationGroup};
use crate::sink::AllocationSink;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// AS numbers are used as file names and must not point outside the output directory.
    #[error("invalid AS number for a file name: {0:?}")]
    InvalidFileName(String),
}

/// Writes `<asn>.json` and `<asn>.txt` for each emitted group.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Write into `dir`, creating it if needed. Existing files are overwritten per AS number.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<FileSink, SinkError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(FileSink { dir })
    }

    /// Remove `dir` with everything in it, then start over with an empty directory.
    pub fn recreate<P: AsRef<Path>>(dir: P) -> Result<FileSink, SinkError> {
        let dir = dir.as_ref();
        if dir.exists() {
            info!("removing previous output in {}", dir.display());
            std::fs::remove_dir_all(dir)?;
        }
        FileSink::new(dir)
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    pub fn json_path(&self, number: &str) -> Result<PathBuf, SinkError> {
        artifact_path(&self.dir, number, "json")
    }

    pub fn txt_path(&self, number: &str) -> Result<PathBuf, SinkError> {
        artifact_path(&self.dir, number, "txt")
    }
}

impl AllocationSink for FileSink {
    type Error = SinkError;

    fn emit(&mut self, group: AllocationGroup) -> Result<(), SinkError> {
        let mut writer = BufWriter::new(File::create(self.json_path(&group.number)?)?);
        serde_json::to_writer(&mut writer, &group.blocks)?;
        writeln!(writer)?;
        writer.flush()?;

        let mut writer = BufWriter::new(File::create(self.txt_path(&group.number)?)?);
        for cidr in group.cidrs() {
            writeln!(writer, "{}", cidr)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Read the blocks of one AS number back from a directory written by [FileSink].
pub fn read_blocks<P: AsRef<Path>>(
    dir: P,
    number: &str,
) -> Result<Vec<AddressBlockRecord>, SinkError> {
    let path = artifact_path(dir.as_ref(), number, "json")?;
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn artifact_path(dir: &Path, number: &str, extension: &str) -> Result<PathBuf, SinkError> {
    if number.is_empty()
        || number == "."
        || number == ".."
        || number.contains(['/', '\\'])
    {
        return Err(SinkError::InvalidFileName(number.to_string()));
    }
    Ok(dir.join(format!("{}.{}", number, extension)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Afi;

    fn group() -> AllocationGroup {
        AllocationGroup {
            number: "64512".to_string(),
            blocks: vec![
                AddressBlockRecord::new("nro-ext", Afi::Ipv4, "192.0.2.0", 24, "US", "20200101"),
                AddressBlockRecord::new("nro-ext", Afi::Ipv6, "2001:db8::", 32, "US", "20200101"),
            ],
        }
    }

    #[test]
    fn test_writes_json_and_txt() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path()).unwrap();
        sink.emit(group()).unwrap();

        let txt = std::fs::read_to_string(dir.path().join("64512.txt")).unwrap();
        assert_eq!(txt, "192.0.2.0/24\n2001:db8::/32\n");

        let json = std::fs::read_to_string(dir.path().join("64512.json")).unwrap();
        assert!(json.ends_with("]\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["cidr"], "192.0.2.0/24");
        assert_eq!(value[0]["type"], "ipv4");
        assert_eq!(value[1]["prefix"], 32);

        assert_eq!(read_blocks(dir.path(), "64512").unwrap(), group().blocks);
    }

    #[test]
    fn test_recreate_clears_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("api").join("asn");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("stale.txt"), "10.0.0.0/8\n").unwrap();

        let sink = FileSink::recreate(&out).unwrap();
        assert_eq!(sink.dir(), out.as_path());
        assert!(out.is_dir());
        assert!(!out.join("stale.txt").exists());
    }

    #[test]
    fn test_rejects_path_like_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path()).unwrap();
        for number in ["", "..", "../etc", "a\\b"] {
            let mut bad = group();
            bad.number = number.to_string();
            assert!(matches!(
                sink.emit(bad),
                Err(SinkError::InvalidFileName(_))
            ));
        }
        assert!(read_blocks(dir.path(), "64512").is_err());
    }
}
