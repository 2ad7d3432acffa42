// ── Row ordering ──
//
// Rows with a parseable IPv4 address sort numerically by that address;
// everything else keeps its relative order after them.

use std::net::{Ipv4Addr, SocketAddrV4};

use crate::model::Row;

/// Numeric sort key for an address, ignoring any `:port` suffix.
pub fn ipv4_key(address: &str) -> Option<u32> {
    address
        .parse::<Ipv4Addr>()
        .or_else(|_| address.parse::<SocketAddrV4>().map(|sa| *sa.ip()))
        .ok()
        .map(u32::from)
}

/// Stable sort: valid IPv4 ascending, then the rest in input order.
pub fn sort_rows(mut rows: Vec<Row>) -> Vec<Row> {
    rows.sort_by_key(|row| match ipv4_key(&row.address) {
        Some(ip) => (0u8, ip),
        None => (1, 0),
    });
    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{MacAddress, RowKind, RowOrigin};

    fn row(address: &str, name: &str) -> Row {
        Row {
            mac: MacAddress::new("aa:bb:cc:00:00:01"),
            address: address.into(),
            display_name: name.into(),
            kind: RowKind::Station,
            origin: RowOrigin::Dhcp,
            signal: String::new(),
            rx_bytes: String::new(),
            tx_bytes: String::new(),
            uptime: String::new(),
            kickable: true,
        }
    }

    fn addresses(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.address.as_str()).collect()
    }

    #[test]
    fn orders_numerically_not_lexically() {
        let sorted = sort_rows(vec![
            row("10.0.0.10", "a"),
            row("10.0.0.9", "b"),
            row("9.255.0.1", "c"),
        ]);
        assert_eq!(addresses(&sorted), vec!["9.255.0.1", "10.0.0.9", "10.0.0.10"]);
    }

    #[test]
    fn unparseable_addresses_trail_in_input_order() {
        let sorted = sort_rows(vec![
            row("-", "first"),
            row("10.0.0.2", "ip"),
            row("plug.lan", "second"),
            row("-", "third"),
        ]);
        let names: Vec<&str> = sorted.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["ip", "first", "second", "third"]);
    }

    #[test]
    fn port_suffix_uses_host_for_ordering() {
        let sorted = sort_rows(vec![
            row("10.0.0.7", "next"),
            row("10.0.0.5:2", "sub"),
            row("10.0.0.5", "parent"),
        ]);
        let names: Vec<&str> = sorted.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["sub", "parent", "next"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = sort_rows(vec![
            row("10.0.0.3", "a"),
            row("-", "b"),
            row("10.0.0.1", "c"),
            row("10.0.0.1:80", "d"),
        ]);
        let twice = sort_rows(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn key_rejects_non_ipv4() {
        assert_eq!(ipv4_key("10.0.0.1"), Some(0x0a00_0001));
        assert_eq!(ipv4_key("10.0.0.1:8080"), Some(0x0a00_0001));
        assert_eq!(ipv4_key("-"), None);
        assert_eq!(ipv4_key("fe80::1"), None);
        assert_eq!(ipv4_key("10.0.0.256"), None);
    }
}
