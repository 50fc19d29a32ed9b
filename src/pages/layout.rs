//! Page wrapper shared by every origin.

/// Wrap a title, extra head markup and a body fragment into a full document.
///
/// `head` is inserted after the standard metadata and before `<title>`, which
/// is where the referrer meta tag must sit.
pub fn document(title: &str, head: &str, body: &str) -> String {
    let mut html = String::with_capacity(256 + head.len() + body.len());
    html.push_str("<!doctype html>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<meta name=\"color-scheme\" content=\"dark light\">\n");
    if !head.is_empty() {
        html.push_str(head);
        html.push('\n');
    }
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(body);
    html.push('\n');
    html
}
