/*!
Prefix length derivation for address block records.

The feed encodes the size of a block differently per family: IPv4 lines carry the number of
addresses in the block, IPv6 lines carry the prefix length itself.
*/
use crate::models::Afi;
use std::str::FromStr;

/// Derive the prefix length of an address block from the feed's size field.
///
/// - IPv4: `32 - log2(count)`. Counts that are not a power of two use the floor of `log2`;
///   counts above 2^32 give `/0`.
/// - IPv6: the value is already the prefix length and is passed through, clamped to `0..=128`.
///
/// Non-numeric values never fail: they are read as `0`, which yields `/32` for IPv4 (`log2(0)`
/// is taken as `0`) and `/0` for IPv6.
///
/// ```
/// use netmirror::models::Afi;
/// use netmirror::parser::calculate_prefix;
///
/// assert_eq!(calculate_prefix(Afi::Ipv4, "256"), 24);
/// assert_eq!(calculate_prefix(Afi::Ipv6, "32"), 32);
/// assert_eq!(calculate_prefix(Afi::Ipv4, "n/a"), 32);
/// ```
pub fn calculate_prefix(afi: Afi, value: &str) -> u8 {
    match afi {
        Afi::Ipv4 => {
            let count = u64::from_str(value).unwrap_or(0);
            let bits = count.checked_ilog2().unwrap_or(0);
            32u32.saturating_sub(bits) as u8
        }
        Afi::Ipv6 => {
            let len = i64::from_str(value).unwrap_or(0);
            len.clamp(0, Afi::Ipv6.max_prefix_len() as i64) as u8
        }
    }
}
