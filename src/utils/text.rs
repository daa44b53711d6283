use std::borrow::Cow;

/// Escapes text for inclusion in an HTML fragment.
///
/// Every user-controlled substring (commit messages, titles, names, URLs)
/// must pass through here before being embedded in chat markup.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return text.into();
    }
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped.into()
}

/// Truncates a commit message to its first line, appending an ellipsis
/// when content was dropped.
pub fn first_line(message: &str) -> Cow<'_, str> {
    let line = message.lines().next().unwrap_or("");
    if line == message {
        line.into()
    } else {
        format!("{line}…").into()
    }
}
