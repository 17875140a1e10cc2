use serde::{Deserialize, Serialize};

const FALLBACK_TITLE: &str = "Preview";

/// How a media item is presented inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Image,
    #[serde(alias = "pdf")]
    Document,
    #[serde(alias = "external")]
    ExternalLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            kind: MediaKind::Image,
            alt: alt.into(),
            caption: None,
            description: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sidebar heading: caption, then alt text, then a generic label.
    pub fn title(&self) -> &str {
        match self.caption.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ if !self.alt.is_empty() => &self.alt,
            _ => FALLBACK_TITLE,
        }
    }
}

/// Key bindings understood while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Previous,
    Next,
    Ignored,
}

impl From<&str> for KeyAction {
    fn from(value: &str) -> Self {
        match value {
            "Escape" => Self::Close,
            "ArrowLeft" => Self::Previous,
            "ArrowRight" => Self::Next,
            _ => Self::Ignored,
        }
    }
}

/// Presentation state of the media preview overlay.
///
/// Items and index survive a close so the last gallery can be reopened
/// cheaply; while closed, navigation is inert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    open: bool,
    items: Vec<MediaItem>,
    index: usize,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `items` starting at `start`, clamped to the last item.
    ///
    /// An empty list never opens the overlay. Returns whether it is open
    /// afterwards.
    pub fn open(&mut self, items: Vec<MediaItem>, start: usize) -> bool {
        if items.is_empty() {
            return false;
        }
        self.index = start.min(items.len() - 1);
        self.items = items;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn has_next(&self) -> bool {
        self.open && self.index + 1 < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.open && self.index > 0
    }

    /// Applies a key binding, returning whether anything changed.
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        if !self.open {
            return false;
        }
        match action {
            KeyAction::Close => {
                self.close();
                true
            }
            KeyAction::Previous => self.previous(),
            KeyAction::Next => self.next(),
            KeyAction::Ignored => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&MediaItem> {
        if self.open {
            self.items.get(self.index)
        } else {
            None
        }
    }

    /// One-based position indicator, e.g. `2 / 3`; `0 / 0` with no items.
    pub fn position(&self) -> String {
        if self.items.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::image(format!("img_{i}.jpg"), format!("Image {i}")))
            .collect()
    }

    #[test]
    fn test_starts_closed() {
        let state = OverlayState::new();
        assert!(!state.is_open());
        assert!(state.is_empty());
        assert!(state.current().is_none());
        assert_eq!(state.position(), "0 / 0");
    }

    #[test]
    fn test_open_clamps_start_index() {
        for len in 1..5 {
            for start in 0..8 {
                let mut state = OverlayState::new();
                assert!(state.open(gallery(len), start));
                assert_eq!(state.current_index(), start.min(len - 1));
            }
        }
    }

    #[test]
    fn test_open_past_end_shows_last() {
        let mut state = OverlayState::new();
        state.open(gallery(3), 5);
        assert!(state.is_open());
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.current().map(|i| i.src.as_str()), Some("img_2.jpg"));
        assert_eq!(state.position(), "3 / 3");
    }

    #[test]
    fn test_open_empty_stays_closed() {
        let mut state = OverlayState::new();
        assert!(!state.open(Vec::new(), 3));
        assert!(!state.is_open());

        // a previous gallery is left alone
        state.open(gallery(2), 1);
        state.close();
        assert!(!state.open(Vec::new(), 0));
        assert!(!state.is_open());
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_open_while_open_replaces() {
        let mut state = OverlayState::new();
        state.open(gallery(4), 3);
        state.open(gallery(2), 0);
        assert!(state.is_open());
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_next_saturates_at_end() {
        let mut state = OverlayState::new();
        state.open(gallery(3), 0);
        assert!(state.next());
        assert!(state.next());
        for _ in 0..5 {
            assert!(!state.next());
            assert_eq!(state.current_index(), 2);
        }
        assert!(!state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn test_previous_saturates_at_start() {
        let mut state = OverlayState::new();
        state.open(gallery(3), 1);
        assert!(state.previous());
        for _ in 0..5 {
            assert!(!state.previous());
            assert_eq!(state.current_index(), 0);
        }
        assert!(!state.has_previous());
        assert!(state.has_next());
    }

    #[test]
    fn test_single_item_disables_both_controls() {
        let mut state = OverlayState::new();
        state.open(gallery(1), 0);
        state.next();
        assert_eq!(state.current_index(), 0);
        assert!(!state.has_next());
        assert!(!state.has_previous());
        assert_eq!(state.position(), "1 / 1");
    }

    #[test]
    fn test_close_then_reopen_resets_index() {
        let items = gallery(3);
        let mut state = OverlayState::new();
        state.open(items.clone(), 2);
        state.close();
        // closing twice is fine
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.len(), 3);

        state.open(items, 0);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut state = OverlayState::new();
        state.open(gallery(3), 1);
        state.close();
        let before = state.clone();
        for key in ["Escape", "ArrowLeft", "ArrowRight"] {
            assert!(!state.handle_key(KeyAction::from(key)));
        }
        assert_eq!(state, before);
        assert!(!state.next());
        assert!(!state.previous());
        assert_eq!(state, before);
    }

    #[test]
    fn test_key_bindings_while_open() {
        let mut state = OverlayState::new();
        state.open(gallery(3), 1);

        assert!(state.handle_key(KeyAction::from("ArrowRight")));
        assert_eq!(state.current_index(), 2);
        assert!(state.handle_key(KeyAction::from("ArrowLeft")));
        assert_eq!(state.current_index(), 1);
        assert!(!state.handle_key(KeyAction::from("Enter")));
        assert!(state.handle_key(KeyAction::from("Escape")));
        assert!(!state.is_open());
    }

    #[test]
    fn test_title_fallbacks() {
        let item = MediaItem::image("a.png", "Alt text").with_caption("Caption");
        assert_eq!(item.title(), "Caption");

        let item = MediaItem::image("a.png", "Alt text");
        assert_eq!(item.title(), "Alt text");

        let item = MediaItem::image("a.png", "").with_caption("");
        assert_eq!(item.title(), "Preview");
    }

    #[test]
    fn test_kind_names() {
        let item: MediaItem =
            serde_json::from_str(r#"{"src": "cv.pdf", "type": "pdf"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::Document);
        assert_eq!(item.alt, "");

        let item: MediaItem =
            serde_json::from_str(r#"{"src": "https://x.y", "type": "external-link"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::ExternalLink);

        let item: MediaItem =
            serde_json::from_str(r#"{"src": "https://x.y", "type": "external"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::ExternalLink);
    }
}
