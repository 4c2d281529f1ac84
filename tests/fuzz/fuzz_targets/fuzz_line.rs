#![no_main]
use libfuzzer_sys::fuzz_target;
use netmirror::models::RegistryRecord;
use netmirror::parser::parse_line;

fuzz_target!(|line: &str| {
    if let Some(RegistryRecord::AddressBlock { block, .. }) = parse_line(line) {
        assert!(block.prefix <= block.afi.max_prefix_len());
        assert_eq!(block.cidr, format!("{}/{}", block.start, block.prefix));
    }
});
