//! Syntactic host decomposition.
//!
//! No DNS and no public-suffix knowledge: once a host has two or more
//! labels, label 0 is the subdomain. `momantza.com` therefore yields the
//! subdomain `momantza` on base `com`.

/// A lower-cased host split into its subdomain and remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    pub subdomain: Option<String>,
    pub remainder_domain: String,
}

impl HostParts {
    pub fn parse(host: &str) -> Self {
        let host = host.to_lowercase();
        match host.split_once('.') {
            Some((first, rest)) => Self {
                subdomain: Some(first.to_string()),
                remainder_domain: rest.to_string(),
            },
            None => Self {
                subdomain: None,
                remainder_domain: host,
            },
        }
    }

    /// The subdomain, if present and non-empty.
    pub fn lookup_subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_labels() {
        let parts = HostParts::parse("Appointza.Momantza.com");
        assert_eq!(parts.subdomain.as_deref(), Some("appointza"));
        assert_eq!(parts.remainder_domain, "momantza.com");
    }

    #[test]
    fn localhost_with_port_keeps_port_in_remainder() {
        let parts = HostParts::parse("jk.localhost:5000");
        assert_eq!(parts.subdomain.as_deref(), Some("jk"));
        assert_eq!(parts.remainder_domain, "localhost:5000");
    }

    #[test]
    fn single_label_has_no_subdomain() {
        let parts = HostParts::parse("localhost:5000");
        assert_eq!(parts.subdomain, None);
        assert_eq!(parts.remainder_domain, "localhost:5000");
        assert_eq!(parts.lookup_subdomain(), None);
    }

    #[test]
    fn apex_domain_is_treated_as_subdomain() {
        let parts = HostParts::parse("momantza.com");
        assert_eq!(parts.subdomain.as_deref(), Some("momantza"));
        assert_eq!(parts.remainder_domain, "com");
    }

    #[test]
    fn leading_dot_yields_empty_subdomain_that_is_never_looked_up() {
        let parts = HostParts::parse(".example.com");
        assert_eq!(parts.subdomain.as_deref(), Some(""));
        assert_eq!(parts.lookup_subdomain(), None);
    }

    #[test]
    fn remainder_joins_all_remaining_labels() {
        for (host, labels) in [
            ("a.b", vec!["a", "b"]),
            ("a.b.c.d", vec!["a", "b", "c", "d"]),
            ("x.localhost", vec!["x", "localhost"]),
        ] {
            let parts = HostParts::parse(host);
            assert_eq!(parts.subdomain.as_deref(), Some(labels[0]));
            assert_eq!(parts.remainder_domain, labels[1..].join("."));
        }
    }
}
