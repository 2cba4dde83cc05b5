use axum::http::uri::Authority;
use axum::http::{header, HeaderMap, Uri};

/// The two pieces of a request tenant resolution looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTarget {
    pub host: String,
    pub path: String,
}

impl RequestTarget {
    /// `Host` header first, then the URI authority (HTTP/2 and absolute-form requests).
    pub fn from_parts(headers: &HeaderMap, uri: &Uri) -> Self {
        let host = match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
            Some(host) => host.to_string(),
            None => uri.authority().map(host_and_port).unwrap_or_default(),
        };

        Self {
            host,
            path: uri.path().to_string(),
        }
    }
}

/// `host[:port]` without any `user@` userinfo.
fn host_and_port(authority: &Authority) -> String {
    match authority.port_u16() {
        Some(port) => format!("{}:{port}", authority.host()),
        None => authority.host().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn host_header_wins_over_authority() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("jk.localhost:5000"));
        let uri: Uri = "http://other.example.com/org/x?y=1".parse().unwrap();

        let target = RequestTarget::from_parts(&headers, &uri);
        assert_eq!(target.host, "jk.localhost:5000");
        assert_eq!(target.path, "/org/x");
    }

    #[test]
    fn falls_back_to_authority_then_empty() {
        let uri: Uri = "http://acme.example.com/".parse().unwrap();
        let target = RequestTarget::from_parts(&HeaderMap::new(), &uri);
        assert_eq!(target.host, "acme.example.com");

        let uri: Uri = "/halls".parse().unwrap();
        let target = RequestTarget::from_parts(&HeaderMap::new(), &uri);
        assert_eq!(target.host, "");
        assert_eq!(target.path, "/halls");
    }

    #[test]
    fn authority_userinfo_is_not_part_of_the_host() {
        let uri: Uri = "http://u@acme.example.com:8080/halls".parse().unwrap();
        let target = RequestTarget::from_parts(&HeaderMap::new(), &uri);
        assert_eq!(target.host, "acme.example.com:8080");

        let uri: Uri = "http://user:pw@jk.localhost/".parse().unwrap();
        let target = RequestTarget::from_parts(&HeaderMap::new(), &uri);
        assert_eq!(target.host, "jk.localhost");
    }
}
