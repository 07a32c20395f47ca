use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical-coordinate rectangle within a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One of the three embedded Google destinations.
///
/// Static configuration: each destination has a fixed base URL and a
/// fixed pane. Nothing about a destination changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Meet,
    Chat,
    Currents,
}

impl Destination {
    pub const ALL: [Destination; 3] = [
        Destination::Meet,
        Destination::Chat,
        Destination::Currents,
    ];

    /// The URL loaded into this destination's pane at startup.
    pub fn base_url(self) -> &'static str {
        match self {
            Destination::Meet => "https://meet.google.com/",
            Destination::Chat => "https://chat.google.com/",
            Destination::Currents => "https://currents.google.com/",
        }
    }

    /// Short identifier used in IPC payloads and log fields.
    pub fn id(self) -> &'static str {
        match self {
            Destination::Meet => "meet",
            Destination::Chat => "chat",
            Destination::Currents => "currents",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Destination::Meet => "Meet",
            Destination::Chat => "Chat",
            Destination::Currents => "Currents",
        }
    }

    /// Classify a URL against the known destination domains.
    ///
    /// Returns the destination whose domain the URL belongs to, or
    /// `None` for URLs that should be handed to the OS browser.
    pub fn for_url(url: &str) -> Option<Destination> {
        if url.contains("meet.google.") {
            Some(Destination::Meet)
        } else if url.contains("chat.google.") {
            Some(Destination::Chat)
        } else if url.contains("currents.google.") {
            Some(Destination::Currents)
        } else {
            None
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identity of a managed webview pane.
///
/// Three destination panes plus the title-bar strip share the main
/// window; the canvas and toolbar panes each fill an overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneId {
    TitleBar,
    Meet,
    Chat,
    Currents,
    Canvas,
    Toolbar,
}

impl PaneId {
    /// The destination shown in this pane, if it is a destination pane.
    pub fn destination(self) -> Option<Destination> {
        match self {
            PaneId::Meet => Some(Destination::Meet),
            PaneId::Chat => Some(Destination::Chat),
            PaneId::Currents => Some(Destination::Currents),
            _ => None,
        }
    }
}

impl From<Destination> for PaneId {
    fn from(d: Destination) -> Self {
        match d {
            Destination::Meet => PaneId::Meet,
            Destination::Chat => PaneId::Chat,
            Destination::Currents => PaneId::Currents,
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaneId::TitleBar => "titlebar",
            PaneId::Meet => "meet",
            PaneId::Chat => "chat",
            PaneId::Currents => "currents",
            PaneId::Canvas => "canvas",
            PaneId::Toolbar => "toolbar",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_urls_are_https_google() {
        for d in Destination::ALL {
            let url = d.base_url();
            assert!(url.starts_with("https://"), "{d} base URL must be https");
            assert!(url.contains(".google.com/"), "{d} base URL must be Google");
        }
    }

    #[test]
    fn for_url_matches_known_domains() {
        assert_eq!(
            Destination::for_url("https://meet.google.com/abc-defg-hij"),
            Some(Destination::Meet)
        );
        assert_eq!(
            Destination::for_url("https://chat.google.com/room/AAAA"),
            Some(Destination::Chat)
        );
        assert_eq!(
            Destination::for_url("https://currents.google.com/communities"),
            Some(Destination::Currents)
        );
    }

    #[test]
    fn for_url_rejects_everything_else() {
        assert_eq!(Destination::for_url("https://example.com"), None);
        assert_eq!(Destination::for_url("https://accounts.google.com"), None);
        assert_eq!(Destination::for_url("https://docs.google.com/doc"), None);
        assert_eq!(Destination::for_url(""), None);
    }

    #[test]
    fn pane_id_round_trips_destination() {
        for d in Destination::ALL {
            let pane: PaneId = d.into();
            assert_eq!(pane.destination(), Some(d));
        }
        assert_eq!(PaneId::TitleBar.destination(), None);
        assert_eq!(PaneId::Canvas.destination(), None);
        assert_eq!(PaneId::Toolbar.destination(), None);
    }

    #[test]
    fn display_ids_are_lowercase() {
        assert_eq!(PaneId::TitleBar.to_string(), "titlebar");
        assert_eq!(Destination::Currents.to_string(), "currents");
    }
}
