#![no_main]
use libfuzzer_sys::fuzz_target;
use netmirror::{AllocationGroup, RegistryParser};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(index) = RegistryParser::from_reader(Cursor::new(data)).into_group_index() {
        let mut groups: Vec<AllocationGroup> = vec![];
        let summary = index.emit(&mut groups).unwrap();
        assert_eq!(summary.emitted, groups.len());
        assert!(groups.iter().all(|g| !g.blocks.is_empty()));
    }
});
