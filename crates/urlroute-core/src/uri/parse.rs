//! Reference parsing: `[scheme:][//authority]path[?query][#fragment]`.

use super::{Uri, UriError};

pub(super) fn parse_reference(input: &str) -> Result<Uri, UriError> {
    let mut uri = Uri::default();

    let (rest, fragment) = match input.split_once('#') {
        Some((head, frag)) => (head, frag),
        None => (input, ""),
    };
    uri.fragment = fragment.to_string();

    let (rest, query) = match rest.split_once('?') {
        Some((head, q)) => (head, q),
        None => (rest, ""),
    };
    // Markup-escaped separators count as plain ones.
    uri.query = query.replace("&amp;", "&");

    if rest.starts_with("://") {
        return Err(UriError::EmptyScheme(input.to_string()));
    }

    let rest = match scheme_len(rest) {
        Some(n) => {
            uri.scheme = rest[..n].to_string();
            &rest[n + 1..]
        }
        None => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            parse_authority(&after[..end], input, &mut uri)?;
            &after[end..]
        }
        None => rest,
    };
    uri.path = path.to_string();

    Ok(uri)
}

/// Length of a leading `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"` scheme.
fn scheme_len(s: &str) -> Option<usize> {
    let colon = s.find(':')?;
    let candidate = &s[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(colon)
    } else {
        None
    }
}

fn parse_authority(authority: &str, input: &str, uri: &mut Uri) -> Result<(), UriError> {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, hp)) => {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    uri.user = user.to_string();
                    uri.pass = pass.to_string();
                }
                None => uri.user = userinfo.to_string(),
            }
            hp
        }
        None => authority,
    };

    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        // IPv6 literal: keep the brackets on the host.
        match bracketed.split_once(']') {
            Some((addr, tail)) => (format!("[{addr}]"), tail.strip_prefix(':')),
            None => (host_port.to_string(), None),
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((h, p)) => (h.to_string(), Some(p)),
            None => (host_port.to_string(), None),
        }
    };
    uri.host = host;

    uri.port = match port {
        None | Some("") => None,
        Some(p) => Some(p.parse::<u16>().map_err(|_| UriError::InvalidPort {
            input: input.to_string(),
            port: p.to_string(),
        })?),
    };
    Ok(())
}
