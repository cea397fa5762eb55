//! In-memory playlist with a circular cursor
//!
//! The cursor always names the item `get_next_item` will return next. After
//! the last item it wraps to index 0, so the list cycles indefinitely.
//! Nothing here is persisted.

use mediadeck_common::Console;

pub const HEADER: &str = "=== Current playlist ===";
pub const FOOTER: &str = "===================================";

/// Marker placed in front of the most recently returned item
pub const CURRENT_MARKER: &str = "→ ";
const NO_MARKER: &str = "  ";

#[derive(Debug, Clone)]
pub struct PlaylistManager {
    items: Vec<String>,
    cursor: usize,
    console: Console,
}

impl PlaylistManager {
    pub fn new(console: Console) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            console,
        }
    }

    /// Discard the current contents and rewind the cursor
    pub fn create_playlist(&mut self) {
        self.items.clear();
        self.cursor = 0;
        tracing::debug!("playlist reset");
        self.console.line("Playlist created");
    }

    /// Append an item. Duplicates are kept.
    pub fn add_to_playlist(&mut self, source: impl Into<String>) {
        let source = source.into();
        self.console.line(format!("Added to playlist: {}", source));
        self.items.push(source);
        tracing::debug!(len = self.items.len(), "playlist item added");
    }

    /// Return the item under the cursor and advance it, wrapping at the end.
    /// An empty playlist yields `None` and leaves the cursor alone.
    pub fn get_next_item(&mut self) -> Option<String> {
        // Length is read on every call since items may be added in between
        let len = self.items.len();
        if len == 0 {
            return None;
        }

        let item = self.items[self.cursor].clone();
        self.cursor = (self.cursor + 1) % len;
        tracing::debug!(cursor = self.cursor, "playlist advanced");
        self.console.line(format!("Next playlist item: {}", item));
        Some(item)
    }

    /// Index of the item most recently returned by `get_next_item`.
    ///
    /// A cursor of 0 means the last item was returned (or nothing was yet),
    /// so the last item is reported in that case.
    pub fn last_returned_index(&self) -> Option<usize> {
        match self.items.len() {
            0 => None,
            len if self.cursor == 0 => Some(len - 1),
            _ => Some(self.cursor - 1),
        }
    }

    /// Numbered listing framed by header and footer lines
    pub fn render(&self) -> Vec<String> {
        let marked = self.last_returned_index();
        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(HEADER.to_string());
        for (i, item) in self.items.iter().enumerate() {
            let prefix = if Some(i) == marked {
                CURRENT_MARKER
            } else {
                NO_MARKER
            };
            lines.push(format!("{}{}. {}", prefix, i + 1, item));
        }
        lines.push(FOOTER.to_string());
        lines
    }

    /// Write the listing to the console
    pub fn display(&self) {
        for line in self.render() {
            self.console.line(line);
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(items: &[&str]) -> (PlaylistManager, Console) {
        let console = Console::buffered();
        let mut list = PlaylistManager::new(console.clone());
        list.create_playlist();
        for item in items {
            list.add_to_playlist(*item);
        }
        console.take_lines();
        (list, console)
    }

    #[test]
    fn next_item_cycles_in_insertion_order() {
        let items = ["a.mp3", "b.mp4", "c.mp3", "a.mp3"];
        let (mut list, _) = playlist(&items);

        for expected in items {
            assert_eq!(list.get_next_item().as_deref(), Some(expected));
        }
        // N+1-th call wraps to the first item
        assert_eq!(list.get_next_item().as_deref(), Some("a.mp3"));
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn empty_playlist_yields_nothing() {
        let (mut list, console) = playlist(&[]);
        assert_eq!(list.get_next_item(), None);
        assert_eq!(list.cursor(), 0);
        assert!(console.lines().is_empty(), "no notice for an empty list");
        assert_eq!(list.last_returned_index(), None);
        assert_eq!(list.render(), vec![HEADER, FOOTER]);
    }

    #[test]
    fn next_item_reports_on_console() {
        let (mut list, console) = playlist(&["a.mp3"]);
        list.get_next_item();
        assert_eq!(console.lines(), vec!["Next playlist item: a.mp3"]);
    }

    #[test]
    fn display_marks_most_recently_returned() {
        let (mut list, _) = playlist(&["a.mp3", "b.mp4", "c.mp3"]);
        assert_eq!(list.get_next_item().as_deref(), Some("a.mp3"));
        assert_eq!(list.cursor(), 1);
        assert_eq!(
            list.render(),
            vec![HEADER, "→ 1. a.mp3", "  2. b.mp4", "  3. c.mp3", FOOTER]
        );
    }

    #[test]
    fn display_marks_last_item_before_any_retrieval() {
        let (list, _) = playlist(&["a.mp3", "b.mp4", "c.mp3"]);
        assert_eq!(list.last_returned_index(), Some(2));
        assert_eq!(
            list.render(),
            vec![HEADER, "  1. a.mp3", "  2. b.mp4", "→ 3. c.mp3", FOOTER]
        );
    }

    #[test]
    fn display_marks_last_item_after_wraparound() {
        let (mut list, _) = playlist(&["a.mp3", "b.mp4"]);
        list.get_next_item();
        list.get_next_item();
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.last_returned_index(), Some(1));
    }

    #[test]
    fn growing_list_uses_current_length() {
        let (mut list, _) = playlist(&["a.mp3", "b.mp3"]);
        list.get_next_item();
        list.get_next_item();
        // Cursor wrapped to 0 with length 2; a third item is reached later
        list.add_to_playlist("c.mp3");
        assert_eq!(list.get_next_item().as_deref(), Some("a.mp3"));
        assert_eq!(list.get_next_item().as_deref(), Some("b.mp3"));
        assert_eq!(list.get_next_item().as_deref(), Some("c.mp3"));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn create_playlist_discards_contents_and_rewinds() {
        let (mut list, console) = playlist(&["a.mp3", "b.mp3"]);
        list.get_next_item();
        list.create_playlist();
        assert!(list.is_empty());
        assert_eq!(list.cursor(), 0);
        assert_eq!(console.lines().last().map(String::as_str), Some("Playlist created"));
    }

    #[test]
    fn add_reports_on_console() {
        let console = Console::buffered();
        let mut list = PlaylistManager::new(console.clone());
        list.add_to_playlist("x.ogg");
        list.add_to_playlist("y.mp4");
        list.add_to_playlist("x.ogg");
        assert_eq!(list.len(), 3);
        // Duplicates are kept, in insertion order
        assert_eq!(list.items(), ["x.ogg", "y.mp4", "x.ogg"]);
        assert_eq!(
            console.lines(),
            vec![
                "Added to playlist: x.ogg",
                "Added to playlist: y.mp4",
                "Added to playlist: x.ogg",
            ]
        );
    }
}
