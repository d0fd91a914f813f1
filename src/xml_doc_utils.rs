//! Helpers for working with raw XML documentation fragments
//!
//! Lookups return fragments as authored; these helpers answer the small
//! questions callers keep asking about them: is this fragment just an
//! inheritdoc redirect, what does it point at, and what does its summary say
//! as plain text.

use regex::Regex;

/// Whether a fragment is nothing but a single self-closing inheritdoc tag
///
/// Fragments with an inheritdoc nested inside other tags, or with content
/// next to the tag, are not redirects and are returned as-is.
pub fn is_bare_inheritdoc(xml_doc: &str) -> bool {
    let trimmed = xml_doc.trim();
    trimmed.starts_with("<inheritdoc") && trimmed.ends_with("/>") && !trimmed.contains('\n')
}

/// Extract the cref attribute from a bare inheritdoc fragment
pub fn extract_cref(xml_doc: &str) -> Option<String> {
    let re = Regex::new("<inheritdoc\\s+cref\\s*=\\s*[\"']([^\"']+)[\"']\\s*/>")
        .expect("Failed to compile inheritdoc cref regex");
    re.captures(xml_doc.trim())
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the inner content of the first occurrence of a tag
pub fn extract_tag_content(xml_doc: &str, tag_name: &str) -> Option<String> {
    let open_re = Regex::new(&format!(r"<{}[^>]*>", regex::escape(tag_name)))
        .expect("Failed to compile tag content regex");
    let close_tag = format!("</{}>", tag_name);

    let open_match = open_re.find(xml_doc)?;
    let content_start = open_match.end();
    let close_pos = xml_doc[content_start..].find(&close_tag)?;
    Some(xml_doc[content_start..content_start + close_pos].trim().to_string())
}

/// Plain text of a fragment's `<summary>` tag
///
/// Nested tags (e.g. `<see cref="..."/>`) are stripped and whitespace is
/// collapsed to single spaces. Returns `None` when there is no summary or it
/// is empty.
pub fn summary_text(xml_doc: &str) -> Option<String> {
    let summary = extract_tag_content(xml_doc, "summary")?;
    let tag_re = Regex::new(r"<[^>]+>").expect("Failed to compile tag strip regex");
    let stripped = tag_re.replace_all(&summary, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
