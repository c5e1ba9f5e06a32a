use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

/// Sentinel address reported when a hostname could not be resolved.
pub const UNRESOLVED_ADDR: f64 = 0.0;

/// Encodes an IPv4 address into the collector's double-precision wire value.
///
/// The four octets are interpreted as a big-endian 32-bit integer and
/// widened to `f64`, which represents every IPv4 address exactly.
#[must_use]
pub fn encode_addr(addr: Ipv4Addr) -> f64 {
    f64::from(u32::from(addr))
}

/// Name-resolution collaborator.
///
/// The contract is deliberately narrow: a hostname either resolves to an
/// IPv4 address or it does not. Sessions inject a deterministic
/// implementation in tests; production code uses [`SystemResolver`].
pub trait ResolveHost {
    /// Resolves `host` to an IPv4 address, or `None` on failure.
    fn resolve(&self, host: &str) -> Option<Ipv4Addr>;
}

/// [`ResolveHost`] implementation backed by the operating system resolver.
///
/// Delegates to [`ToSocketAddrs`] and returns the first IPv4 candidate.
/// The telemetry address encoding only fits IPv4, so names that resolve
/// exclusively to IPv6 addresses count as unresolved.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl ResolveHost for SystemResolver {
    fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        if host.is_empty() {
            return None;
        }

        let candidates = (host, 0u16).to_socket_addrs().ok()?;
        candidates
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
            .next()
    }
}

/// Resolves `host` to its telemetry wire value, degrading on failure.
///
/// Resolution failures are logged at debug level and reported as
/// [`UNRESOLVED_ADDR`]; they never propagate. Address telemetry is
/// best-effort and must not abort session initialization.
#[must_use]
pub fn resolve_addr<R: ResolveHost + ?Sized>(resolver: &R, host: &str) -> f64 {
    match resolver.resolve(host) {
        Some(addr) => encode_addr(addr),
        None => {
            tracing::debug!(host, "hostname did not resolve; reporting unresolved address");
            UNRESOLVED_ADDR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(Option<Ipv4Addr>);

    impl ResolveHost for FixedResolver {
        fn resolve(&self, _host: &str) -> Option<Ipv4Addr> {
            self.0
        }
    }

    #[test]
    fn encode_is_big_endian_u32() {
        assert_eq!(encode_addr(Ipv4Addr::new(0, 0, 0, 1)), 1.0);
        assert_eq!(encode_addr(Ipv4Addr::new(1, 0, 0, 0)), f64::from(1u32 << 24));
        assert_eq!(
            encode_addr(Ipv4Addr::new(192, 168, 0, 1)),
            f64::from(0xc0a8_0001u32),
        );
    }

    #[test]
    fn resolution_success_is_encoded() {
        let resolver = FixedResolver(Some(Ipv4Addr::new(10, 0, 0, 2)));
        assert_eq!(resolve_addr(&resolver, "node.example"), f64::from(0x0a00_0002u32));
    }

    #[test]
    fn resolution_failure_degrades_to_unresolved() {
        let resolver = FixedResolver(None);
        assert_eq!(resolve_addr(&resolver, "no.such.host"), UNRESOLVED_ADDR);
    }

    #[test]
    fn system_resolver_rejects_empty_host() {
        assert_eq!(SystemResolver.resolve(""), None);
    }

    #[test]
    fn system_resolver_handles_localhost() {
        // 127.0.0.1 resolution works without external name service access.
        if let Some(addr) = SystemResolver.resolve("localhost") {
            assert!(addr.is_loopback());
        }
    }
}
