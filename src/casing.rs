//! Key casing for the wire format.
//!
//! The API speaks snake_case; the crate's domain types are serialized and
//! deserialized through camelCase keys. Outbound payloads go through
//! [`snake_case_keys`], inbound bodies through [`camel_case_keys`].

use serde_json::{Map, Value};

/// Keys whose object values hold caller data; their inner keys are kept verbatim.
pub const OPAQUE_KEYS: &[&str] = &["meta"];

/// Split an identifier into lowercase words.
///
/// Words break on any non-alphanumeric character, where an uppercase letter
/// follows a lowercase letter or digit, and before the last capital of an
/// acronym run (`HTTPServer` gives `http`, `server`). Digits stay with the
/// word before them.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();

    for segment in input.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = segment.chars().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let prev = chars[i - 1];
            let cur = chars[i];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());

            let boundary = cur.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_numeric()
                    || (prev.is_uppercase() && next_is_lower));

            if boundary {
                words.push(chars[start..i].iter().collect::<String>().to_lowercase());
                start = i;
            }
        }

        if start < chars.len() {
            words.push(chars[start..].iter().collect::<String>().to_lowercase());
        }
    }

    words
}

/// Convert an identifier to snake_case: `documentHash` becomes `document_hash`.
pub fn to_snake_case(input: &str) -> String {
    split_words(input).join("_")
}

/// Convert an identifier to camelCase: `document_hash` becomes `documentHash`.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, word) in split_words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Recursively rename every object key to snake_case.
pub fn snake_case_keys(value: Value) -> Value {
    map_keys(value, &to_snake_case)
}

/// Recursively rename every object key to camelCase.
pub fn camel_case_keys(value: Value) -> Value {
    map_keys(value, &to_camel_case)
}

fn map_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                let mut renamed = convert(&key);
                if renamed.is_empty() {
                    renamed = key;
                }
                let inner = if OPAQUE_KEYS.contains(&renamed.as_str()) {
                    inner
                } else {
                    map_keys(inner, convert)
                };
                out.insert(renamed, inner);
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| map_keys(v, convert)).collect())
        }
        other => other,
    }
}
