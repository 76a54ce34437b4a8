use crate::error::Error;
use std::{fmt, str::FromStr};
use url::Url;

/// Base URL of a builder.
///
/// Always carries an explicit scheme and a non-empty host. Any path, query or
/// fragment is stripped during resolution; per-call paths are attached with
/// [`Endpoint::join`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Resolves either a full URL (`https://example.com:3500`) or a bare
    /// `host:port` pair (`example.com:3500`), defaulting the latter to `http`.
    pub fn resolve(host: &str) -> Result<Self, Error> {
        let host = host.trim();

        if let Ok(url) = Url::parse(host) {
            if url.host_str().is_some_and(|h| !h.is_empty()) {
                return Ok(Self::from_url(url))
            }
        }

        let (hostname, port) =
            split_host_port(host).ok_or_else(|| Error::InvalidEndpoint(host.to_string()))?;
        let url = Url::parse(&format!("http://{}", join_host_port(hostname, port)))
            .map_err(|_| Error::InvalidEndpoint(host.to_string()))?;
        Ok(Self { url })
    }

    fn from_url(mut url: Url) -> Self {
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            tracing::warn!(%url, "ignoring path, query and fragment of builder endpoint");
        }
        url.set_path("");
        url.set_query(None);
        url.set_fragment(None);
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    /// Appends an absolute `path` (e.g. `/eth/v1/builder/status`) to the base URL.
    pub fn join(&self, path: &str) -> Result<Url, Error> {
        Ok(self.url.join(path)?)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

// `host:port` where an IPv6 host must be bracketed and the port is a non-empty `u16`.
fn split_host_port(input: &str) -> Option<(&str, u16)> {
    let (host, port) = if let Some(rest) = input.strip_prefix('[') {
        let (host, rest) = rest.split_once(']')?;
        (host, rest.strip_prefix(':')?)
    } else {
        let (host, port) = input.split_once(':')?;
        if host.contains(':') || port.contains(':') {
            return None
        }
        (host, port)
    };

    if host.is_empty() || host.contains(['/', '[', ']', '@', ' ']) {
        return None
    }
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None
    }
    let port = port.parse().ok()?;
    Some((host, port))
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
