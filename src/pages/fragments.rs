//! HTML fragments composed into origin pages.

use std::time::Duration;

use crate::policy::{ReferrerPolicy, QUERY_PARAM};

/// Placeholder shown when a request carries no `Referer` header.
pub const REFERER_NOT_SET: &str = "not set";

/// Render the inbound `Referer` as a label/value pair.
///
/// The value is emitted verbatim unless `escape` is set.
pub fn referer(value: Option<&str>, escape: bool) -> String {
    let shown = match value {
        Some(v) if escape => v_htmlescape::escape(v).to_string(),
        Some(v) => v.to_string(),
        None => REFERER_NOT_SET.to_string(),
    };
    format!("<dl><dt>Referer</dt> <dd>{shown}</dd></dl>")
}

/// The referrer meta tag, or nothing when no allow-listed policy was asked for.
pub fn policy_meta(policy: Option<ReferrerPolicy>) -> String {
    match policy {
        Some(policy) => format!("<meta name=\"referrer\" content=\"{policy}\">"),
        None => String::new(),
    }
}

/// A script replacing the current window location after `delay`.
pub fn delayed_navigation(destination: &str, delay: Duration) -> String {
    format!(
        "<script>\n  setTimeout(() => {{\n    window.open(\"{destination}\", \"_self\");\n  }}, {});\n</script>",
        delay.as_millis()
    )
}

/// The policy `<select>`, with `current` (or the default) selected.
pub fn policy_select(current: Option<ReferrerPolicy>) -> String {
    let selected = current.unwrap_or(ReferrerPolicy::DEFAULT);
    let mut html = format!("<select name=\"{QUERY_PARAM}\">\n");
    for policy in ReferrerPolicy::ALL {
        let marker = if policy == selected { " selected" } else { "" };
        html.push_str(&format!("  <option{marker}>{policy}</option>\n"));
    }
    html.push_str("</select>");
    html
}

/// A link to another origin.
pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{href}\">{text}</a>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referer_present_and_missing() {
        assert_eq!(
            referer(Some("https://0.0.0.0:4020/"), false),
            "<dl><dt>Referer</dt> <dd>https://0.0.0.0:4020/</dd></dl>"
        );
        assert_eq!(referer(None, false), "<dl><dt>Referer</dt> <dd>not set</dd></dl>");
    }

    #[test]
    fn test_referer_escaping_is_opt_in() {
        let raw = "https://x/?q=<b>";
        assert!(referer(Some(raw), false).contains("<b>"));

        let escaped = referer(Some(raw), true);
        assert!(!escaped.contains("<b>"));
        assert!(escaped.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_policy_meta() {
        assert_eq!(
            policy_meta(Some(ReferrerPolicy::NoReferrer)),
            "<meta name=\"referrer\" content=\"no-referrer\">"
        );
        assert_eq!(policy_meta(None), "");
    }

    #[test]
    fn test_delayed_navigation() {
        let script = delayed_navigation("http://0.0.0.0:4022", Duration::from_secs(1));
        assert!(script.contains("window.open(\"http://0.0.0.0:4022\", \"_self\");"));
        assert!(script.contains("}, 1000);"));
    }

    #[test]
    fn test_policy_select_single_selection() {
        let html = policy_select(None);
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains("<option selected>strict-origin-when-cross-origin</option>"));
        assert_eq!(html.matches("<option").count(), 8);

        let html = policy_select(Some(ReferrerPolicy::Origin));
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains("<option selected>origin</option>"));
        assert!(html.contains("<option>strict-origin-when-cross-origin</option>"));
    }
}
