/// Which navigation policy a pane runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Bundled chrome assets only (`meetdeck://`).
    Chrome,
    /// Remote `https://` content (the destination panes).
    Destination,
}

/// Configuration for creating a pane webview.
#[derive(Debug, Clone)]
pub struct PaneOptions {
    /// Initial URL to load.
    pub url: String,
    /// Whether the webview background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Navigation policy for in-pane navigation.
    pub policy: NavigationPolicy,
    /// Cancel and surface new-window requests instead of letting the
    /// platform webview spawn popups.
    pub intercept_new_windows: bool,
}

impl PaneOptions {
    /// Options for an embedded destination pane.
    pub fn destination(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(user_agent.into()),
            policy: NavigationPolicy::Destination,
            intercept_new_windows: true,
        }
    }

    /// Options for a bundled chrome pane (title bar, canvas, toolbar).
    pub fn chrome(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transparent: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            policy: NavigationPolicy::Chrome,
            intercept_new_windows: false,
        }
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_options_intercept_new_windows() {
        let opts = PaneOptions::destination("https://meet.google.com/", "UA");
        assert_eq!(opts.policy, NavigationPolicy::Destination);
        assert!(opts.intercept_new_windows);
        assert!(!opts.transparent);
        assert_eq!(opts.user_agent.as_deref(), Some("UA"));
    }

    #[test]
    fn chrome_options_are_transparent_and_local() {
        let opts = PaneOptions::chrome("meetdeck://localhost/titlebar/index.html");
        assert_eq!(opts.policy, NavigationPolicy::Chrome);
        assert!(!opts.intercept_new_windows);
        assert!(opts.transparent);
        assert!(opts.user_agent.is_none());
    }
}
