//! Rewrites upstream catalog addresses to a caller-facing base address.
//!
//! Records carry their own `url` plus cross-reference lists of absolute
//! upstream addresses at arbitrary nesting depth, so the rewrite is a
//! structural walk over the JSON tree rather than per-field handling.
//! Only string values that *start with* the upstream base are touched;
//! prose fields that merely mention the upstream host are left alone.

use serde_json::Value;

/// Rewrite every address under `upstream_base` to `target_base`, in place.
///
/// Matches both the `http` and `https` form of the upstream base, since
/// upstream payloads mix schemes across cross-references. Trailing slashes
/// on either base are ignored. An empty `target_base` is a no-op.
pub fn rewrite_urls(value: &mut Value, upstream_base: &str, target_base: &str) {
    let target = target_base.trim_end_matches('/');
    if target.is_empty() {
        return;
    }

    let prefixes = scheme_variants(upstream_base.trim_end_matches('/'));
    walk(value, &prefixes, target);
}

/// The upstream base under both schemes, canonical form first.
fn scheme_variants(base: &str) -> Vec<String> {
    if let Some(rest) = base.strip_prefix("https://") {
        vec![base.to_string(), format!("http://{rest}")]
    } else if let Some(rest) = base.strip_prefix("http://") {
        vec![base.to_string(), format!("https://{rest}")]
    } else {
        vec![base.to_string()]
    }
}

fn walk(value: &mut Value, prefixes: &[String], target: &str) {
    match value {
        Value::String(s) => {
            for prefix in prefixes {
                if let Some(rest) = s.strip_prefix(prefix.as_str()) {
                    *s = format!("{target}{rest}");
                    break;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, prefixes, target);
            }
        }
        Value::Object(map) => {
            for (_, field) in map.iter_mut() {
                walk(field, prefixes, target);
            }
        }
        _ => {}
    }
}
