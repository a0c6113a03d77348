//! Serialization tags.
//!
//! Raw tags follow the `key:"value" key2:"value2"` convention. Only the `json` key drives emission:
//!
//! - `json:"-"` skips the field,
//! - `json:"name"` sets the wire name (an empty name keeps the raw field name),
//! - the `omitempty` option makes the field optional on input and omitted on output when empty.

/// Interpreted `json` tag of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonTag<'t> {
    /// Explicit wire name, `None` when absent or empty
    pub name: Option<&'t str>,
    pub skip: bool,
    pub omit_empty: bool,
}

/// Look up the value stored under `key` in a raw tag.
///
/// Returns `None` when the key is missing or the tag is malformed from that point on. The value is returned
/// as written (escapes are not interpreted).
pub fn lookup_tag<'t>(tag: &'t str, key: &str) -> Option<&'t str> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let colon = rest.find([':', ' ', '"'])?;
        if colon == 0 || !rest[colon..].starts_with(':') {
            return None;
        }
        let name = &rest[..colon];
        let body = rest[colon + 1..].strip_prefix('"')?;

        let mut end = None;
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '"' => {
                    end = Some(i);
                    break;
                }
                _ => {}
            }
        }
        let end = end?;

        if name == key {
            return Some(&body[..end]);
        }
        rest = &body[end + 1..];
    }
}

/// Interpret the `json` entry of a raw tag.
pub fn parse_json_tag(tag: &str) -> JsonTag<'_> {
    let Some(value) = lookup_tag(tag, "json") else {
        return JsonTag::default();
    };
    if value == "-" {
        return JsonTag {
            skip: true,
            ..JsonTag::default()
        };
    }

    let mut parts = value.split(',');
    let name = parts.next().filter(|n| !n.is_empty());
    let omit_empty = parts.any(|opt| opt == "omitempty");
    JsonTag {
        name,
        skip: false,
        omit_empty,
    }
}
