use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// AFI -- Address Family Identifier
///
/// Registry feeds name the family in the resource type field (`ipv4` or `ipv6`), and the same
/// lowercase strings are used when a block is serialized.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Afi {
    Ipv4,
    Ipv6,
}

impl Afi {
    /// Resource type string as it appears in the feed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Afi::Ipv4 => "ipv4",
            Afi::Ipv6 => "ipv6",
        }
    }

    /// Length of an address of this family in bits, which is also the longest valid prefix.
    pub const fn max_prefix_len(&self) -> u8 {
        match self {
            Afi::Ipv4 => 32,
            Afi::Ipv6 => 128,
        }
    }
}

impl FromStr for Afi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" => Ok(Afi::Ipv4),
            "ipv6" => Ok(Afi::Ipv6),
            _ => Err(format!("unknown address family: {}", s)),
        }
    }
}

impl Display for Afi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
