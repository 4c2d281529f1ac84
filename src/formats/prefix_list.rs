/*!
Router prefix lists built from per-ASN address blocks.

Each vendor gets one line per CIDR. Lines are numbered in steps of five so entries can be
inserted by hand later; Cisco sequences start at 5 and Huawei indexes at 10.

```
use netmirror::formats::{format_prefix_lists, AsnBlocks, PrefixListOptions, Vendor};
use netmirror::models::{AddressBlockRecord, Afi};

let blocks = vec![AddressBlockRecord::new("arin", Afi::Ipv4, "192.0.2.0", 24, "US", "20200101")];
let options = PrefixListOptions { vendor: Vendor::Cisco, merge: false, ..Default::default() };
let output = format_prefix_lists(&[AsnBlocks::found("64512", blocks)], &options);
assert_eq!(
    output,
    "! --- ASN 64512 (1 prefixes) ---\nip prefix-list AS64512 seq 5 permit 192.0.2.0/24\n\n"
);
```
*/
use crate::models::{AddressBlockRecord, Afi};
use itertools::Itertools;
use log::warn;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// List name used when all ASNs are merged into one list.
pub const MERGED_LIST_NAME: &str = "NETMIRROR_LIST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vendor {
    #[default]
    Cisco,
    Huawei,
    Juniper,
    /// Firewall address list.
    Mikrotik,
    /// Routing filter rule.
    MikrotikRoute,
    Bird,
    /// Bare CIDRs.
    Plain,
}

impl Vendor {
    pub const ALL: [Vendor; 7] = [
        Vendor::Cisco,
        Vendor::Huawei,
        Vendor::Juniper,
        Vendor::Mikrotik,
        Vendor::MikrotikRoute,
        Vendor::Bird,
        Vendor::Plain,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Vendor::Cisco => "cisco",
            Vendor::Huawei => "huawei",
            Vendor::Juniper => "juniper",
            Vendor::Mikrotik => "mikrotik",
            Vendor::MikrotikRoute => "mikrotik_route",
            Vendor::Bird => "bird",
            Vendor::Plain => "plain",
        }
    }

    /// Configuration line for one CIDR at position `index` of list `list_name`.
    pub fn format_line(&self, cidr: &str, index: usize, list_name: &str) -> String {
        match self {
            Vendor::Cisco => format!(
                "ip prefix-list {} seq {} permit {}",
                list_name,
                index + 5,
                cidr
            ),
            Vendor::Huawei => format!(
                "ip ip-prefix {} index {} permit {}",
                list_name,
                index + 10,
                cidr
            ),
            Vendor::Juniper => format!("set policy-options prefix-list {} {}", list_name, cidr),
            Vendor::Mikrotik => format!(
                "/ip firewall address-list add list={} address={}",
                list_name, cidr
            ),
            Vendor::MikrotikRoute => format!(
                "/routing filter rule add chain={} rule=\"if (dst in {}) {{ accept }}\"",
                list_name, cidr
            ),
            Vendor::Bird => format!("route {} via \"bgp_uplink\";", cidr),
            Vendor::Plain => cidr.to_string(),
        }
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown vendor {}, expected one of: {}",
                    s,
                    Vendor::ALL.iter().map(|v| v.as_str()).join(", ")
                )
            })
    }
}

impl Display for Vendor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixListOptions {
    pub vendor: Vendor,
    /// One list for all ASNs instead of one list per ASN.
    pub merge: bool,
    pub ipv4: bool,
    pub ipv6: bool,
}

impl Default for PrefixListOptions {
    fn default() -> Self {
        PrefixListOptions {
            vendor: Vendor::default(),
            merge: true,
            ipv4: true,
            ipv6: true,
        }
    }
}

impl PrefixListOptions {
    fn includes(&self, afi: Afi) -> bool {
        match afi {
            Afi::Ipv4 => self.ipv4,
            Afi::Ipv6 => self.ipv6,
        }
    }
}

/// Address blocks looked up for one ASN. `blocks` is `None` when the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnBlocks {
    pub asn: String,
    pub blocks: Option<Vec<AddressBlockRecord>>,
}

impl AsnBlocks {
    pub fn found(asn: impl Into<String>, blocks: Vec<AddressBlockRecord>) -> AsnBlocks {
        AsnBlocks {
            asn: asn.into(),
            blocks: Some(blocks),
        }
    }

    pub fn missing(asn: impl Into<String>) -> AsnBlocks {
        AsnBlocks {
            asn: asn.into(),
            blocks: None,
        }
    }
}

/// Counters over a set of looked up ASNs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixListStats {
    pub found: usize,
    pub missing: usize,
    pub ipv4: usize,
    pub ipv6: usize,
}

impl PrefixListStats {
    pub fn from_results(results: &[AsnBlocks]) -> PrefixListStats {
        let mut stats = PrefixListStats::default();
        for result in results {
            match &result.blocks {
                None => stats.missing += 1,
                Some(blocks) => {
                    stats.found += 1;
                    for block in blocks {
                        match block.afi {
                            Afi::Ipv4 => stats.ipv4 += 1,
                            Afi::Ipv6 => stats.ipv6 += 1,
                        }
                    }
                }
            }
        }
        stats
    }
}

/// Split user input on whitespace and commas, keeping unique all-digit tokens in input order.
///
/// ```
/// use netmirror::formats::parse_asn_list;
///
/// assert_eq!(parse_asn_list("64512, AS64513\n64514 64512"), vec!["64512", "64514"]);
/// ```
pub fn parse_asn_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .unique()
        .map(|token| token.to_string())
        .collect()
}

/// Blocks of the enabled families whose CIDR is a valid network.
fn selected_cidrs<'a>(
    blocks: &'a [AddressBlockRecord],
    options: &'a PrefixListOptions,
) -> impl Iterator<Item = &'a str> + 'a {
    blocks
        .iter()
        .filter(|block| options.includes(block.afi))
        .filter(|block| match block.to_ipnet() {
            Ok(_) => true,
            Err(e) => {
                warn!("skipping invalid network {}: {}", block.cidr, e);
                false
            }
        })
        .map(|block| block.cidr.as_str())
}

/// Render prefix lists for the looked up ASNs.
///
/// Merged output has a single header and list; otherwise every found ASN with at least one
/// selected block gets its own section, and failed lookups are reported inline.
pub fn format_prefix_lists(results: &[AsnBlocks], options: &PrefixListOptions) -> String {
    if results.is_empty() {
        return String::new();
    }
    let vendor = options.vendor;
    let mut lines: Vec<String> = vec![];

    if options.merge {
        let found = results.iter().filter(|r| r.blocks.is_some()).count();
        lines.push(format!("! --- NETMIRROR: {} ASNs MERGED ---", found));
        let cidrs = results
            .iter()
            .filter_map(|r| r.blocks.as_deref())
            .flat_map(|blocks| selected_cidrs(blocks, options));
        for (idx, cidr) in cidrs.enumerate() {
            lines.push(vendor.format_line(cidr, idx * 5, MERGED_LIST_NAME));
        }
    } else {
        for result in results {
            let Some(blocks) = result.blocks.as_deref() else {
                lines.push(format!("! ERROR: ASN {} not found", result.asn));
                continue;
            };
            let cidrs = selected_cidrs(blocks, options).collect::<Vec<_>>();
            if cidrs.is_empty() {
                continue;
            }
            let list_name = format!("AS{}", result.asn);
            lines.push(format!("! --- ASN {} ({} prefixes) ---", result.asn, cidrs.len()));
            for (idx, cidr) in cidrs.into_iter().enumerate() {
                lines.push(vendor.format_line(cidr, idx * 5, list_name.as_str()));
            }
            lines.push(String::new());
        }
    }

    lines.into_iter().map(|line| line + "\n").collect()
}
