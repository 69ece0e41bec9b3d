//! Query-string splitting and joining. Values are kept as written (no
//! percent-decoding) so a round trip never changes the caller's encoding.

/// Splits `a=1&b&c=3` into ordered pairs; a bare key gets an empty value.
pub fn split_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Joins pairs into `k=v&k2=v2`.
pub fn join_query<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skips_empty_segments() {
        let pairs = split_query("&a=1&&b&c=x=y");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), String::new()),
                ("c".to_string(), "x=y".to_string()),
            ]
        );
    }

    #[test]
    fn join_keeps_encoding() {
        assert_eq!(join_query(&[("q", "a%20b"), ("p", "2")]), "q=a%20b&p=2");
        assert_eq!(join_query::<&str, &str>(&[]), "");
    }
}
