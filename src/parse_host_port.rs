use super::{
    character_classes::{run_length, DIGIT, HOST_NAME, IPV6_LITERAL},
    error::Error,
    host::Host,
};

// "[::]" is the shortest IPv6 literal, and 45 characters is the longest
// textual form (IPv4-mapped, with zone index allowance).
const IPV6_MIN: usize = 2;
const IPV6_MAX: usize = 45;

/// Split a host section on `,` and parse each token.  Tokens yielding neither
/// name nor port are dropped; an invalid port fails the whole section.
pub fn parse_hosts(section: &str) -> Result<Option<Vec<Host>>, Error> {
    let mut hosts = Vec::new();
    for token in section.split(',') {
        match parse_host_port(token)? {
            Some(host) => hosts.push(host),
            None => tracing::debug!(token, "dropping host token without name or port"),
        }
    }
    Ok(if hosts.is_empty() { None } else { Some(hosts) })
}

/// Parse one host token, either `[ipv6]:port` or `name:port`, where both
/// halves are optional.
pub fn parse_host_port(token: &str) -> Result<Option<Host>, Error> {
    let (name, rest) = if token.starts_with('[') {
        match find_ipv6(token) {
            Some(found) => found,
            None => return Ok(None),
        }
    } else {
        token.split_at(run_length(token, &HOST_NAME))
    };
    let port = match rest.strip_prefix(':') {
        Some(port_string) if port_string.starts_with(|c: char| DIGIT.contains(&c)) => {
            Some(parse_port(port_string)?)
        }
        _ => None,
    };
    let host = Host {
        name: Some(name.to_string()).filter(|name| !name.is_empty()),
        port,
    };
    Ok(if host.is_empty() { None } else { Some(host) })
}

// The bracketed form may be found at any `[` of the token; the first one
// enclosing a well-formed literal wins.
fn find_ipv6(token: &str) -> Option<(&str, &str)> {
    token.match_indices('[').find_map(|(open, _)| {
        let inner = &token[open + 1..];
        let length = run_length(inner, &IPV6_LITERAL);
        if (IPV6_MIN..=IPV6_MAX).contains(&length) {
            inner[length..]
                .strip_prefix(']')
                .map(|rest| (&inner[..length], rest))
        } else {
            None
        }
    })
}

// The port text must be exactly the decimal form of a number in 1..=65535:
// no sign, no leading zero, nothing trailing.
fn parse_port(port_string: &str) -> Result<u16, Error> {
    port_string
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0 && port.to_string() == port_string)
        .ok_or_else(|| {
            tracing::debug!(port = port_string, "rejecting invalid port");
            Error::InvalidPort(port_string.to_string())
        })
}
