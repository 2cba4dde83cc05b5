//! Tenant identifiers carried in the URL path.

use crate::tenant::TenantId;

/// Where a path candidate was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathHint {
    /// `/org/{value}[/...]`. `value` is kept verbatim and may not be a UUID.
    Org(String),
    /// A bare `/{uuid}` with no further segments. Always parses, in any of
    /// the notations [`TenantId::parse`] accepts.
    Root(String),
}

impl PathHint {
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let first = segments.next()?;
        let second = segments.next();

        match second {
            Some(value) if first == "org" => Some(PathHint::Org(value.to_string())),
            None => TenantId::parse(first).map(|_| PathHint::Root(first.to_string())),
            Some(_) => None,
        }
    }

    /// The raw identifier string as it appeared in the path.
    pub fn raw(&self) -> &str {
        match self {
            PathHint::Org(value) | PathHint::Root(value) => value,
        }
    }

    /// The identifier to look up, if it is a well-formed UUID.
    pub fn tenant_id(&self) -> Option<TenantId> {
        TenantId::parse(self.raw())
    }
}
