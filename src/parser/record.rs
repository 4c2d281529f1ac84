/*!
Line-level parsing of registry statistics feeds.

Data lines have the layout

```text
registry|cc|type|start|value|date|status|opaque-id
```

where the opaque id is only present on extended feeds. Comment lines start with `#`. Version
and summary lines (`2|nro|...`, `nro|*|ipv4|*|...`) either have too few fields or a resource
type that is not `asn`, `ipv4` or `ipv6`, and are skipped like any other unknown line.
*/
use crate::models::*;
use crate::parser::calculate_prefix;

pub const FIELD_SEPARATOR: char = '|';
pub const COMMENT_PREFIX: char = '#';

/// Number of fields every data line carries, not counting the opaque id.
const MIN_FIELDS: usize = 7;

/// Fields of one data line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub registry: &'a str,
    pub cc: &'a str,
    pub resource_type: &'a str,
    pub start: &'a str,
    pub value: &'a str,
    pub date: &'a str,
    pub opaque_id: Option<&'a str>,
}

impl<'a> RawLine<'a> {
    /// Split a line into its fields.
    ///
    /// Returns `None` for blank lines, comments and lines with fewer than seven fields.
    pub fn split(line: &'a str) -> Option<RawLine<'a>> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return None;
        }

        let mut fields = line.split(FIELD_SEPARATOR);
        let mut head = [""; MIN_FIELDS];
        for slot in head.iter_mut() {
            *slot = fields.next()?;
        }
        let [registry, cc, resource_type, start, value, date, _status] = head;

        Some(RawLine {
            registry,
            cc,
            resource_type,
            start,
            value,
            date,
            opaque_id: fields.next(),
        })
    }

    /// The opaque id if present and non-empty.
    fn allocation_id(&self) -> Option<&'a str> {
        self.opaque_id.filter(|id| !id.is_empty())
    }
}

/// Parse one feed line into a [RegistryRecord].
///
/// Returns `None` when the line should be skipped: blank lines, comments, lines with fewer than
/// seven fields, resource types other than `asn`, `ipv4` and `ipv6`, and records without an
/// opaque allocation id.
///
/// ```
/// use netmirror::models::RegistryRecord;
/// use netmirror::parser::parse_line;
///
/// let record = parse_line("nro-ext|US|ipv4|192.0.2.0|256|20200101|allocated|OPAQUE1").unwrap();
/// match record {
///     RegistryRecord::AddressBlock { opaque_id, block } => {
///         assert_eq!(opaque_id, "OPAQUE1");
///         assert_eq!(block.cidr, "192.0.2.0/24");
///     }
///     _ => unreachable!(),
/// }
/// assert!(parse_line("# comment").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<RegistryRecord> {
    let raw = RawLine::split(line)?;

    match raw.resource_type {
        "asn" => {
            let opaque_id = raw.allocation_id()?;
            Some(RegistryRecord::ResourceNumber(ResourceNumberEntry {
                opaque_id: opaque_id.to_string(),
                number: raw.start.to_string(),
            }))
        }
        "ipv4" | "ipv6" => {
            let opaque_id = raw.allocation_id()?;
            let afi = raw.resource_type.parse::<Afi>().ok()?;
            let prefix = calculate_prefix(afi, raw.value);
            Some(RegistryRecord::AddressBlock {
                opaque_id: opaque_id.to_string(),
                block: AddressBlockRecord::new(
                    raw.registry,
                    afi,
                    raw.start,
                    prefix,
                    raw.cc,
                    raw.date,
                ),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_of(record: Option<RegistryRecord>) -> (String, AddressBlockRecord) {
        match record {
            Some(RegistryRecord::AddressBlock { opaque_id, block }) => (opaque_id, block),
            other => panic!("expected address block, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_comments_and_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("\r"), None);
        assert_eq!(parse_line("# nro-ext|ZZ|asn|64512|1|20200101|allocated|A"), None);
        assert_eq!(parse_line("#"), None);
    }

    #[test]
    fn test_skip_short_lines() {
        assert_eq!(parse_line("2|nro|20240101|1000|19830705|20240101|+0000"), None);
        assert_eq!(parse_line("nro|*|asn|*|91234|summary"), None);
        assert_eq!(parse_line("nro-ext|US|ipv4|192.0.2.0|256|20200101"), None);
    }

    #[test]
    fn test_skip_unknown_types() {
        assert_eq!(
            parse_line("nro-ext|ZZ|asn16|64512|1|20200101|allocated|OPAQUE1"),
            None
        );
        assert_eq!(
            parse_line("nro-ext|ZZ|*|64512|1|20200101|allocated|OPAQUE1"),
            None
        );
        assert_eq!(
            parse_line("nro-ext|ZZ|IPV4|192.0.2.0|256|20200101|allocated|OPAQUE1"),
            None
        );
    }

    #[test]
    fn test_asn_record() {
        assert_eq!(
            parse_line("nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1"),
            Some(RegistryRecord::ResourceNumber(ResourceNumberEntry {
                opaque_id: "OPAQUE1".to_string(),
                number: "64512".to_string(),
            }))
        );
    }

    #[test]
    fn test_missing_or_empty_opaque_id() {
        assert_eq!(parse_line("foo|ZZ|asn|64513|1|20200101|allocated"), None);
        assert_eq!(parse_line("foo|ZZ|asn|64513|1|20200101|allocated|"), None);
        assert_eq!(
            parse_line("foo|US|ipv4|192.0.2.0|256|20200101|allocated"),
            None
        );
        assert_eq!(
            parse_line("foo|US|ipv6|2001:db8::|32|20200101|allocated|"),
            None
        );
    }

    #[test]
    fn test_ipv4_record() {
        let (opaque_id, block) =
            block_of(parse_line("arin|US|ipv4|192.0.2.0|256|20200101|allocated|OPAQUE1"));
        assert_eq!(opaque_id, "OPAQUE1");
        assert_eq!(
            block,
            AddressBlockRecord {
                registry: "arin".to_string(),
                afi: Afi::Ipv4,
                start: "192.0.2.0".to_string(),
                prefix: 24,
                cidr: "192.0.2.0/24".to_string(),
                cc: "US".to_string(),
                date: "20200101".to_string(),
            }
        );
    }

    #[test]
    fn test_ipv6_record() {
        let (_, block) =
            block_of(parse_line("ripencc|NL|ipv6|2001:db8::|48|20200101|assigned|X9"));
        assert_eq!(block.afi, Afi::Ipv6);
        assert_eq!(block.prefix, 48);
        assert_eq!(block.cidr, "2001:db8::/48");
    }

    #[test]
    fn test_malformed_size_degrades() {
        let (_, block) =
            block_of(parse_line("arin|US|ipv4|192.0.2.0|lots|20200101|allocated|OPAQUE1"));
        assert_eq!(block.prefix, 32);
        assert_eq!(block.cidr, "192.0.2.0/32");

        let (_, block) =
            block_of(parse_line("arin|US|ipv6|2001:db8::||20200101|allocated|OPAQUE1"));
        assert_eq!(block.prefix, 0);
        assert_eq!(block.cidr, "2001:db8::/0");
    }

    #[test]
    fn test_crlf_and_extra_fields() {
        let (opaque_id, block) = block_of(parse_line(
            "apnic|AU|ipv4|198.51.100.0|1024|20200101|allocated|OPAQUE2|e-stats\r",
        ));
        assert_eq!(opaque_id, "OPAQUE2");
        assert_eq!(block.cidr, "198.51.100.0/22");

        let raw = RawLine::split("apnic|AU|asn|1|1|20200101|allocated|OPAQUE2\r").unwrap();
        assert_eq!(raw.opaque_id, Some("OPAQUE2"));
        assert_eq!(raw.date, "20200101");
    }

    #[test]
    fn test_cidr_matches_start_and_prefix() {
        let lines = [
            "lacnic|BR|ipv4|200.0.0.0|65536|20200101|allocated|L1",
            "afrinic|ZA|ipv4|196.0.0.0|4096|20200101|allocated|F1",
            "ripencc|DE|ipv6|2a00::|29|20200101|allocated|R1",
        ];
        for line in lines {
            let (_, block) = block_of(parse_line(line));
            assert_eq!(block.cidr, format!("{}/{}", block.start, block.prefix));
        }
    }
}
