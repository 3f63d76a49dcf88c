use compact_str::CompactString;

/// Escapes backslash, newline, carriage return, tab and double quote so a
/// literal fits on one line of a token stream.
pub fn escape(text: &str) -> CompactString {
    let mut escaped = CompactString::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Inverse of [`escape`]. Unknown sequences are kept as written.
pub fn unescape(text: &str) -> CompactString {
    let mut unescaped = CompactString::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => unescaped.push('\\'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some('"') => unescaped.push('"'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

/// Replaces every `{name}` placeholder for which `lookup` yields a value.
///
/// Placeholders that do not resolve are copied verbatim, braces included. A
/// `{` without a later `}` is copied as is.
pub fn interpolate<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            result.push('{');
            rest = after_open;
            continue;
        };
        let name = after_open[..close].trim();
        match lookup(name) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }
    result.push_str(rest);
    result
}
