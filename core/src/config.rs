//! Request option mappings and the merge that layers them.
//!
//! # Design
//! Options travel as an open JSON mapping rather than a typed struct: the
//! host transport decides which keys it understands (`timeout`, `headers`,
//! `body`, `cookies`, ...), and the builder itself only ever writes the
//! `method` and `body` keys. [`merge_distinct`] is the one nontrivial
//! operation — wrapper clients layer per-call options over stored defaults
//! with it, so its replace-don't-concatenate semantics are pinned by the
//! tests here and by the vectors under `test-vectors/`.

use serde_json::{Map, Value};

/// The bag of request parameters handed to the transport.
///
/// Keys are unique option names; values are scalars or nested mappings.
pub type RequestConfig = Map<String, Value>;

/// Recursive associative merge of two option mappings.
///
/// Keys where both sides hold mappings merge recursively; for every other
/// key present in `overlay`, the overlay value fully replaces the base
/// value (arrays are replaced wholesale, never concatenated). Keys only in
/// `base` are preserved unchanged. Neither input is mutated.
pub fn merge_distinct(base: &RequestConfig, overlay: &RequestConfig) -> RequestConfig {
    let mut merged = base.clone();
    for (key, value) in overlay {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(current)), Value::Object(incoming)) => {
                let combined = merge_distinct(current, incoming);
                *current = combined;
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}
