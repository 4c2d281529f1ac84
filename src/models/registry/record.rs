use crate::models::Afi;
use ipnet::{AddrParseError, IpNet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An allocated autonomous system number, keyed by the opaque id of its allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceNumberEntry {
    pub opaque_id: String,
    /// The AS number exactly as it appears in the feed.
    pub number: String,
}

/// An allocated IPv4 or IPv6 address block.
///
/// `cidr` is always `start` and `prefix` joined by a `/`; use [AddressBlockRecord::new] to keep
/// the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressBlockRecord {
    pub registry: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub afi: Afi,
    pub start: String,
    pub prefix: u8,
    pub cidr: String,
    pub cc: String,
    pub date: String,
}

impl AddressBlockRecord {
    pub fn new(
        registry: impl Into<String>,
        afi: Afi,
        start: impl Into<String>,
        prefix: u8,
        cc: impl Into<String>,
        date: impl Into<String>,
    ) -> AddressBlockRecord {
        let start = start.into();
        let cidr = format!("{}/{}", start, prefix);
        AddressBlockRecord {
            registry: registry.into(),
            afi,
            start,
            prefix,
            cidr,
            cc: cc.into(),
            date: date.into(),
        }
    }

    /// Parse the CIDR string into an [IpNet].
    ///
    /// Fails for blocks whose start address is garbled or whose prefix was degraded to a value
    /// outside the family's range.
    pub fn to_ipnet(&self) -> Result<IpNet, AddrParseError> {
        IpNet::from_str(self.cidr.as_str())
    }
}

impl Display for AddressBlockRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cidr)
    }
}

/// A typed record produced from one feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryRecord {
    ResourceNumber(ResourceNumberEntry),
    AddressBlock {
        opaque_id: String,
        block: AddressBlockRecord,
    },
}
