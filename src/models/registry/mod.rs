//! Registry statistics feed records and the allocation groups built from them.

mod allocation;
mod record;

pub use allocation::*;
pub use record::*;
