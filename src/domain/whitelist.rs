//! Short-link host whitelist.
//!
//! A single predicate decides whether a hostname may be dereferenced. Two
//! matching modes exist because the service and its web client historically
//! disagreed: the service accepted any host *containing* a whitelisted domain,
//! while the client required an exact match or a `.domain` suffix. The service
//! keeps the permissive behaviour by default; [`HostMatch::Suffix`] opts into
//! the strict one.

use std::fmt;
use std::str::FromStr;

/// Hosts that serve short links or canonical product pages.
pub const SHORT_LINK_DOMAINS: &[&str] = &["shope.ee", "shopee.vn", "shp.ee"];

/// How a hostname is compared against a whitelisted domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostMatch {
    /// Exact match, or the domain appears anywhere in the hostname.
    #[default]
    Contains,
    /// Exact match, or the hostname ends with `.` followed by the domain.
    Suffix,
}

impl FromStr for HostMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" => Ok(Self::Contains),
            "suffix" => Ok(Self::Suffix),
            other => Err(format!(
                "unknown host match mode '{other}', expected 'contains' or 'suffix'"
            )),
        }
    }
}

impl fmt::Display for HostMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains => f.write_str("contains"),
            Self::Suffix => f.write_str("suffix"),
        }
    }
}

/// Read-only set of whitelisted domains with a fixed matching mode.
#[derive(Debug, Clone)]
pub struct DomainWhitelist {
    domains: &'static [&'static str],
    mode: HostMatch,
}

impl DomainWhitelist {
    pub const fn new(domains: &'static [&'static str], mode: HostMatch) -> Self {
        Self { domains, mode }
    }

    /// Whitelist of the supported marketplace's short-link hosts.
    pub const fn short_links(mode: HostMatch) -> Self {
        Self::new(SHORT_LINK_DOMAINS, mode)
    }

    /// Returns whether `host` is allowed. The comparison is case-insensitive.
    pub fn matches(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();

        self.domains.iter().any(|domain| {
            if host == *domain {
                return true;
            }

            match self.mode {
                HostMatch::Contains => host.contains(domain),
                HostMatch::Suffix => host
                    .strip_suffix(domain)
                    .is_some_and(|prefix| prefix.ends_with('.')),
            }
        })
    }
}

impl Default for DomainWhitelist {
    fn default() -> Self {
        Self::short_links(HostMatch::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_domains_match_in_both_modes() {
        for mode in [HostMatch::Contains, HostMatch::Suffix] {
            let whitelist = DomainWhitelist::short_links(mode);
            assert!(whitelist.matches("shope.ee"));
            assert!(whitelist.matches("shopee.vn"));
            assert!(whitelist.matches("shp.ee"));
        }
    }

    #[test]
    fn test_subdomains_match_in_both_modes() {
        for mode in [HostMatch::Contains, HostMatch::Suffix] {
            let whitelist = DomainWhitelist::short_links(mode);
            assert!(whitelist.matches("s.shopee.vn"));
            assert!(whitelist.matches("vn.shp.ee"));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let whitelist = DomainWhitelist::default();
        assert!(whitelist.matches("S.SHOPEE.VN"));
    }

    #[test]
    fn test_contains_mode_is_permissive() {
        let whitelist = DomainWhitelist::short_links(HostMatch::Contains);
        assert!(whitelist.matches("shopee.vn.evil.com"));
        assert!(whitelist.matches("notshopee.vn"));
    }

    #[test]
    fn test_suffix_mode_requires_label_boundary() {
        let whitelist = DomainWhitelist::short_links(HostMatch::Suffix);
        assert!(!whitelist.matches("shopee.vn.evil.com"));
        assert!(!whitelist.matches("notshopee.vn"));
    }

    #[test]
    fn test_unrelated_hosts_rejected() {
        for mode in [HostMatch::Contains, HostMatch::Suffix] {
            let whitelist = DomainWhitelist::short_links(mode);
            assert!(!whitelist.matches("example.com"));
            assert!(!whitelist.matches("shopee.com"));
            assert!(!whitelist.matches(""));
        }
    }

    #[test]
    fn test_parse_host_match() {
        assert_eq!("contains".parse::<HostMatch>().unwrap(), HostMatch::Contains);
        assert_eq!(" SUFFIX ".parse::<HostMatch>().unwrap(), HostMatch::Suffix);
        assert!("prefix".parse::<HostMatch>().is_err());
    }
}
