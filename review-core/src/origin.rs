//! Originating address resolution
//!
//! Best effort only: a request whose origin cannot be determined is still
//! served, with no address recorded.

use std::net::{IpAddr, SocketAddr};

/// Header carrying the proxy chain, client first
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Resolve the caller's address from the forwarding chain or the peer
///
/// The first entry of `forwarded_for` that parses as an address wins
/// (entries may carry a port). Falls back to the direct peer address.
pub fn resolve_client_ip(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> Option<IpAddr> {
    forwarded_for
        .and_then(|chain| chain.split(',').find_map(parse_forwarded_entry))
        .or(peer)
}

fn parse_forwarded_entry(entry: &str) -> Option<IpAddr> {
    let entry = entry.trim();
    entry
        .parse::<IpAddr>()
        .ok()
        .or_else(|| entry.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_forwarded_chain_takes_first_client() {
        assert_eq!(
            resolve_client_ip(Some("203.0.113.7, 10.0.0.2, 10.0.0.1"), Some(ip("10.0.0.1"))),
            Some(ip("203.0.113.7"))
        );
    }

    #[test]
    fn test_forwarded_entries_with_ports() {
        assert_eq!(resolve_client_ip(Some("198.51.100.4:5123"), None), Some(ip("198.51.100.4")));
        assert_eq!(resolve_client_ip(Some("[2001:db8::1]:443"), None), Some(ip("2001:db8::1")));
    }

    #[test]
    fn test_skips_garbage_entries() {
        assert_eq!(
            resolve_client_ip(Some("unknown, 192.0.2.9"), None),
            Some(ip("192.0.2.9"))
        );
    }

    #[test]
    fn test_falls_back_to_peer() {
        assert_eq!(resolve_client_ip(None, Some(ip("127.0.0.1"))), Some(ip("127.0.0.1")));
        assert_eq!(resolve_client_ip(Some("nonsense"), Some(ip("::1"))), Some(ip("::1")));
    }

    #[test]
    fn test_absent_when_nothing_known() {
        assert_eq!(resolve_client_ip(None, None), None);
        assert_eq!(resolve_client_ip(Some(""), None), None);
    }
}
