//! Parsing of `svnlook proplist --verbose`

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Property name to value for one path
pub type PropertyList = BTreeMap<String, String>;

static PROP_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^  (\S+) : ").expect("proplist header pattern is valid")
});

/// Parse a verbose property listing.
///
/// Entries look like `  NAME : VALUE`; a value runs until the next entry and
/// may span lines. Text before the first entry is discarded. Newer svnlook
/// releases print the name and an indented value on separate lines instead,
/// which is handled as a fallback.
pub fn parse_proplist(text: &str) -> PropertyList {
    let headers: Vec<_> = PROP_HEADER.captures_iter(text).collect();
    if headers.is_empty() {
        return parse_indented(text);
    }

    let mut props = PropertyList::new();
    for (i, caps) in headers.iter().enumerate() {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        let value = &text[whole.end..end];
        let value = value.strip_suffix('\n').unwrap_or(value);
        props.insert(caps[1].to_string(), value.to_string());
    }
    props
}

/// Parse the two-line layout:
///
/// ```text
///   svn:mime-type
///     text/plain
/// ```
fn parse_indented(text: &str) -> PropertyList {
    let mut props = PropertyList::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(value) = line.strip_prefix("    ") {
            if let Some((_, ref mut values)) = current {
                values.push(value);
            }
        } else if let Some(name) = line.strip_prefix("  ") {
            if let Some((name, values)) = current.take() {
                props.insert(name, values.join("\n"));
            }
            current = Some((name.trim_end().to_string(), Vec::new()));
        }
    }

    if let Some((name, values)) = current {
        props.insert(name, values.join("\n"));
    }
    props
}
