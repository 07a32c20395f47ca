//! In-pane navigation policy.
//!
//! Two policies exist:
//! - chrome panes (title bar, canvas, toolbar) only ever load bundled
//!   assets, so they are pinned to the `meetdeck://` protocol;
//! - destination panes follow Google sign-in redirects across many
//!   hosts, so they may navigate to any `https://` URL. Script, file,
//!   and data URIs are blocked either way.
//!
//! New-window requests are a separate mechanism: they are always
//! cancelled and routed by the shell (see `PaneEvent::NewWindowRequested`).

/// Allowed URL prefixes for chrome-pane navigation.
///
/// - `meetdeck://` — custom protocol for bundled chrome assets
/// - On Windows, WebView2 rewrites custom protocols:
///   `meetdeck://localhost/…` → `http://meetdeck.localhost/…`
/// - `about:blank` — default empty page
pub const CHROME_NAV_PREFIXES: &[&str] = &[
    "meetdeck://",
    "http://meetdeck.localhost",
    "about:blank",
];

/// Check whether a chrome pane may navigate to `url`.
pub fn is_chrome_navigation_allowed(url: &str) -> bool {
    CHROME_NAV_PREFIXES.iter().any(|p| url.starts_with(p))
}

/// Check whether a destination pane may navigate to `url`.
pub fn is_destination_navigation_allowed(url: &str) -> bool {
    url.starts_with("https://") || url == "about:blank"
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Chrome panes --

    #[test]
    fn chrome_allows_meetdeck_protocol() {
        assert!(is_chrome_navigation_allowed(
            "meetdeck://localhost/titlebar/index.html"
        ));
        assert!(is_chrome_navigation_allowed(
            "meetdeck://localhost/toolbar/index.html"
        ));
    }

    #[test]
    fn chrome_allows_webview2_rewritten_protocol() {
        assert!(is_chrome_navigation_allowed(
            "http://meetdeck.localhost/canvas/index.html"
        ));
    }

    #[test]
    fn chrome_allows_about_blank() {
        assert!(is_chrome_navigation_allowed("about:blank"));
    }

    #[test]
    fn chrome_blocks_remote_and_local_schemes() {
        assert!(!is_chrome_navigation_allowed("https://meet.google.com/"));
        assert!(!is_chrome_navigation_allowed("https://evil.com"));
        assert!(!is_chrome_navigation_allowed("http://localhost:8080"));
        assert!(!is_chrome_navigation_allowed("file:///etc/passwd"));
        assert!(!is_chrome_navigation_allowed("javascript:alert(1)"));
    }

    // -- Destination panes --

    #[test]
    fn destination_allows_https() {
        assert!(is_destination_navigation_allowed("https://meet.google.com/"));
        assert!(is_destination_navigation_allowed(
            "https://accounts.google.com/signin/v2/identifier?service=wise"
        ));
        // Sign-in can bounce through non-Google hosts (SSO providers)
        assert!(is_destination_navigation_allowed("https://sso.example.com/"));
    }

    #[test]
    fn destination_allows_about_blank() {
        assert!(is_destination_navigation_allowed("about:blank"));
    }

    #[test]
    fn destination_blocks_non_https_schemes() {
        assert!(!is_destination_navigation_allowed("http://meet.google.com/"));
        assert!(!is_destination_navigation_allowed("file:///etc/passwd"));
        assert!(!is_destination_navigation_allowed("javascript:void(0)"));
        assert!(!is_destination_navigation_allowed(
            "data:text/html,<h1>x</h1>"
        ));
        assert!(!is_destination_navigation_allowed(""));
        assert!(!is_destination_navigation_allowed("not-a-url"));
    }
}
