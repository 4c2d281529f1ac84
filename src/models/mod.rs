/*!
Data structures for registry statistics feeds.

- [network]: address family and other network-level building blocks
- [registry]: typed feed records, allocation groups
*/
mod network;
mod registry;

pub use network::*;
pub use registry::*;
