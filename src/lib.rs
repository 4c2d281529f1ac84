/*!
netmirror regroups a registry statistics feed by allocation so that, for every autonomous system,
all IP blocks allocated with it can be looked up at once.

The NRO publishes a combined "delegated extended" statistics file listing every allocated AS
number and IPv4/IPv6 block of the five regional registries. Each line carries an opaque
allocation id; AS numbers and address blocks that share an id were allocated together.

# Examples

## Group a feed in memory

```
use netmirror::{AllocationGroup, RegistryParser};
use std::io::Cursor;

let feed = "\
nro-ext|ZZ|asn|64512|1|20200101|allocated|OPAQUE1
nro-ext|US|ipv4|192.0.2.0|256|20200101|allocated|OPAQUE1
nro-ext|US|ipv6|2001:db8::|32|20200101|allocated|OPAQUE1
";

let index = RegistryParser::from_reader(Cursor::new(feed)).into_group_index().unwrap();
let mut groups: Vec<AllocationGroup> = vec![];
let summary = index.emit(&mut groups).unwrap();

assert_eq!(summary.emitted, 1);
assert_eq!(groups[0].number, "64512");
assert_eq!(groups[0].cidrs().collect::<Vec<_>>(), vec!["192.0.2.0/24", "2001:db8::/32"]);
```

## Write per-ASN files from the latest NRO feed

```no_run
use netmirror::io::DEFAULT_FEED_URL;
use netmirror::{FileSink, RegistryParser};

let index = RegistryParser::new(DEFAULT_FEED_URL).unwrap().into_group_index().unwrap();
let mut sink = FileSink::recreate("public/api/asn").unwrap();
let summary = index.emit(&mut sink).unwrap();
println!("processed {} ASNs", summary.emitted);
```
*/

pub mod error;
pub mod formats;
pub mod io;
pub mod models;
pub mod parser;
pub mod sink;

pub use error::ParserError;
pub use models::{AddressBlockRecord, Afi, AllocationGroup, EmitSummary, RegistryRecord};
pub use parser::{GroupIndex, RegistryParser};
pub use sink::AllocationSink;
#[cfg(feature = "serde")]
pub use sink::{FileSink, SinkError};
