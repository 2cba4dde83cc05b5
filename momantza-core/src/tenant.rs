//! Core multi-tenant types for Momantza.

use std::fmt;

use uuid::Uuid;

/// A tenant (organization) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TenantId(pub Uuid);

impl TenantId {
    /// Parse any syntactically valid UUID: hyphenated, 32 hex digits,
    /// braced (`{...}`) or `urn:uuid:` prefixed. Returns `None` otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(TenantId)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // hyphenated, lower-case
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        TenantId(id)
    }
}

/// The resolved tenant for a single request.
///
/// Built fresh by the resolver for every inbound request and dropped
/// with it. Nothing caches or shares it across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: TenantId,
    /// Registered domain of the matched record: its custom domain if it has
    /// one, else its default domain. Not the host or path segment that
    /// matched. Diagnostics only.
    pub domain_hint: String,
}

impl TenantContext {
    pub fn new<S: Into<String>>(tenant_id: impl Into<TenantId>, domain_hint: S) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            domain_hint: domain_hint.into(),
        }
    }

    pub(crate) fn from_record(record: &TenantRecord) -> Self {
        Self::new(record.id, record.domain())
    }
}

/// A tenant as returned by a [`TenantLookup`](crate::TenantLookup).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenantRecord {
    pub id: Uuid,
    pub name: String,
    pub default_domain: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub custom_domain: Option<String>,
}

impl TenantRecord {
    pub fn new(id: Uuid, name: impl Into<String>, default_domain: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            default_domain: default_domain.into(),
            custom_domain: None,
        }
    }

    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.custom_domain = Some(domain.into());
        self
    }

    /// Custom domain if one is registered, default domain otherwise.
    pub fn domain(&self) -> &str {
        self.custom_domain.as_deref().unwrap_or(&self.default_domain)
    }

    /// Case-insensitive prefix match against either registered domain.
    pub fn matches_domain_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        std::iter::once(self.default_domain.as_str())
            .chain(self.custom_domain.as_deref())
            .any(|d| d.to_lowercase().starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_is_case_insensitive_and_checks_both_domains() {
        let rec = TenantRecord::new(Uuid::nil(), "ABC", "abc.example.com")
            .with_custom_domain("Bookings.ABC.io");

        assert!(rec.matches_domain_prefix("AB"));
        assert!(rec.matches_domain_prefix("bookings"));
        assert!(!rec.matches_domain_prefix("abd"));
        assert_eq!(rec.domain(), "Bookings.ABC.io");
    }

    #[test]
    fn tenant_id_displays_canonical_form() {
        let id = TenantId::parse("11111111-1111-1111-1111-111111111111").unwrap();
        assert_eq!(id.to_string(), "11111111-1111-1111-1111-111111111111");
        assert!(TenantId::parse("not-a-uuid").is_none());
    }

    #[test]
    fn tenant_id_accepts_every_uuid_notation() {
        let want = TenantId::parse("11111111-1111-1111-1111-111111111111");
        for raw in [
            "11111111111111111111111111111111",
            "{11111111-1111-1111-1111-111111111111}",
            "urn:uuid:11111111-1111-1111-1111-111111111111",
        ] {
            assert_eq!(TenantId::parse(raw), want, "{raw}");
        }
        assert!(TenantId::parse("1111111-1111-1111-1111-111111111111").is_none());
    }

    #[test]
    fn context_hint_is_the_record_domain() {
        let id = Uuid::from_u128(7);
        let plain = TenantRecord::new(id, "JK", "jk.momantza.com");
        assert_eq!(TenantContext::from_record(&plain).domain_hint, "jk.momantza.com");

        let custom = plain.with_custom_domain("halls.jk.in");
        let ctx = TenantContext::from_record(&custom);
        assert_eq!(ctx.domain_hint, "halls.jk.in");
        assert_eq!(ctx.tenant_id, TenantId(id));
    }
}
