//! Local content serving via custom protocol.
//!
//! Registers a `meetdeck://` custom protocol so the chrome webviews
//! (title bar, canvas, toolbar) can load bundled HTML/JS/CSS without a
//! local HTTP server.

use std::path::{Path, PathBuf};

/// Serves local files from a base directory via custom protocol.
///
/// When a webview requests `meetdeck://localhost/titlebar/index.html`,
/// the provider resolves it to `{base_dir}/titlebar/index.html` and
/// returns the file contents with the appropriate MIME type.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path.trim_start_matches('/');
        let file_path = self.base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        // Canonicalize both paths to resolve symlinks, `..`, etc.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&file_path), data))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path to the chrome assets directory at the workspace root.
    fn chrome_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent() // crates/
            .unwrap()
            .parent() // workspace root
            .unwrap()
            .join("assets")
            .join("chrome")
    }

    #[test]
    fn resolve_titlebar_page() {
        let cp = ContentProvider::new(chrome_dir());
        let (mime, data) = cp.resolve("titlebar/index.html").expect("titlebar resolves");
        assert_eq!(mime, "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("window.meetdeck.ipc"), "titlebar uses the IPC bridge");
        assert!(html.contains("window.minimize"), "titlebar wires window controls");
    }

    #[test]
    fn resolve_canvas_and_toolbar_pages() {
        let cp = ContentProvider::new(chrome_dir());
        for page in ["canvas/index.html", "toolbar/index.html"] {
            let (mime, _) = cp.resolve(page).unwrap_or_else(|| panic!("{page} resolves"));
            assert_eq!(mime, "text/html");
        }
    }

    #[test]
    fn resolve_with_leading_slash() {
        let cp = ContentProvider::new(chrome_dir());
        assert!(cp.resolve("/titlebar/index.html").is_some());
    }

    #[test]
    fn traversal_is_blocked() {
        let cp = ContentProvider::new(chrome_dir());
        assert!(cp.resolve("../../etc/passwd").is_none());
        assert!(cp.resolve("/etc/passwd").is_none());
        assert!(cp.resolve("titlebar/../../../etc/passwd").is_none());
    }

    #[test]
    fn nonexistent_file_returns_none() {
        let cp = ContentProvider::new(chrome_dir());
        assert!(cp.resolve("titlebar/missing.html").is_none());
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.css")), "text/css");
        assert_eq!(
            mime_from_extension(Path::new("a.js")),
            "application/javascript"
        );
        assert_eq!(
            mime_from_extension(Path::new("a.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn toolbar_page_sends_stop_signal() {
        let cp = ContentProvider::new(chrome_dir());
        let (_, data) = cp.resolve("toolbar/index.html").unwrap();
        let html = String::from_utf8_lossy(&data);
        assert!(
            html.contains("screenshare.stop"),
            "toolbar must wire the stop button"
        );
    }
}
