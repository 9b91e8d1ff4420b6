//! URL encoding and fragment parameter utilities.
//!
//! Navigation state is mirrored into the URL fragment as
//! `#dir=<path>&page=<n>`. These helpers are pure so they behave the same in
//! the browser and in native tests.

use crate::config::fragment;

/// Percent-encode a string the way `encodeURIComponent` does.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Characters `encodeURIComponent` leaves untouched.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Decode percent escapes; malformed escapes are kept literally.
pub fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
        {
            out.push(hi << 4 | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Build a `k=v&k=v` query string with encoded values.
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Fragment link that opens `path` at `page`.
pub fn directory_href(path: &str, page: u32) -> String {
    let mut params = FragmentParams::default();
    params.set(fragment::DIR, path);
    params.set(fragment::PAGE, &page.to_string());
    params.to_hash()
}

/// Ordered `key=value` pairs parsed from a URL fragment.
///
/// Setting a key keeps the position of an existing key and appends new
/// ones, so unrelated fragment parameters survive a rewrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentParams {
    pairs: Vec<(String, String)>,
}

impl FragmentParams {
    /// Parse a fragment with or without the leading `#`.
    pub fn parse(hash: &str) -> Self {
        let pairs = hash
            .trim_start_matches('#')
            .split(['&', ';'])
            .filter(|part| !part.is_empty())
            .filter_map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                if key.is_empty() {
                    return None;
                }
                Some((decode_component(key), decode_component(value)))
            })
            .fold(Vec::<(String, String)>::new(), |mut acc, (key, value)| {
                match acc.iter_mut().find(|(k, _)| *k == key) {
                    Some(existing) => existing.1 = value,
                    None => acc.push((key, value)),
                }
                acc
            });
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize to `#k=v&k=v`; an empty set serializes to `#`.
    pub fn to_hash(&self) -> String {
        let body = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("#{body}")
    }
}
