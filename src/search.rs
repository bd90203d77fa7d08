//! Search Utilities
//!
//! Title filtering, category suggestions with keyboard navigation, and
//! input debouncing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::models::{Category, Item};

/// Max suggestions shown under the category input
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Items whose title contains `term`, ignoring case. Empty term keeps all.
pub fn filter_by_title(items: &[Item], term: &str) -> Vec<Item> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Category names starting with `input`, ignoring case, at most `max`
pub fn category_suggestions(categories: &[Category], input: &str, max: usize) -> Vec<String> {
    let prefix = input.trim().to_lowercase();
    if prefix.is_empty() {
        return vec![];
    }
    categories
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&prefix))
        .take(max)
        .map(|c| c.name.clone())
        .collect()
}

/// Keys the suggestion list reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::Down),
            "ArrowUp" => Some(NavKey::Up),
            "Enter" => Some(NavKey::Enter),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// What the input should do after a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAction {
    /// Nothing beyond the cursor's own state change
    Nothing,
    /// Take the suggestion at this index
    Select(usize),
    /// Submit the raw input text
    Submit,
}

/// Open/closed state and highlighted row of a suggestion dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuggestionCursor {
    open: bool,
    active: Option<usize>,
}

impl SuggestionCursor {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Typing reopens the list and clears the highlight
    pub fn on_input(&mut self) {
        self.open = true;
        self.active = None;
    }

    pub fn hover(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    /// Handle a key with `len` suggestions currently listed
    pub fn on_key(&mut self, key: NavKey, len: usize) -> CursorAction {
        if !self.open {
            return match key {
                NavKey::Down | NavKey::Up => {
                    self.open = true;
                    CursorAction::Nothing
                }
                NavKey::Enter => CursorAction::Submit,
                NavKey::Escape => CursorAction::Nothing,
            };
        }

        match key {
            NavKey::Down if len > 0 => {
                self.active = Some(self.active.map_or(0, |i| (i + 1) % len));
                CursorAction::Nothing
            }
            NavKey::Up if len > 0 => {
                self.active = Some(self.active.map_or(len - 1, |i| (i + len - 1) % len));
                CursorAction::Nothing
            }
            NavKey::Down | NavKey::Up => CursorAction::Nothing,
            NavKey::Enter => match self.active {
                Some(i) if i < len => {
                    self.close();
                    CursorAction::Select(i)
                }
                _ => CursorAction::Submit,
            },
            NavKey::Escape => {
                self.close();
                CursorAction::Nothing
            }
        }
    }
}

/// Runs only the last of a burst of calls, after `delay_ms` of quiet
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `f`, cancelling whatever was pending
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        // Dropping the previous Timeout clears it
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_item;

    fn categories(names: &[&str]) -> Vec<Category> {
        names
            .iter()
            .map(|n| Category { name: n.to_string(), icon_key: None })
            .collect()
    }

    #[test]
    fn test_filter_by_title() {
        let items = vec![
            make_item(1, "Vintage Camera", "1", "2024-01-01T00:00:00"),
            make_item(2, "camera bag", "1", "2024-01-01T00:00:00"),
            make_item(3, "Tripod", "1", "2024-01-01T00:00:00"),
        ];
        let ids: Vec<u32> = filter_by_title(&items, "CAMERA").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(filter_by_title(&items, "  ").len(), 3);
    }

    #[test]
    fn test_category_suggestions() {
        let cats = categories(&["Animal", "Anime", "Antiques", "Books", "an"]);
        assert_eq!(category_suggestions(&cats, " an", 8), vec!["Animal", "Anime", "Antiques", "an"]);
        assert_eq!(category_suggestions(&cats, "ANI", 1), vec!["Animal"]);
        assert!(category_suggestions(&cats, "", 8).is_empty());
        assert!(category_suggestions(&cats, "nim", 8).is_empty());
    }

    #[test]
    fn test_cursor_opens_on_arrow() {
        let mut cursor = SuggestionCursor::default();
        assert_eq!(cursor.on_key(NavKey::Down, 3), CursorAction::Nothing);
        assert!(cursor.is_open());
        assert_eq!(cursor.active(), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = SuggestionCursor::default();
        cursor.on_input();

        cursor.on_key(NavKey::Down, 3);
        assert_eq!(cursor.active(), Some(0));
        cursor.on_key(NavKey::Down, 3);
        cursor.on_key(NavKey::Down, 3);
        cursor.on_key(NavKey::Down, 3);
        assert_eq!(cursor.active(), Some(0));
        cursor.on_key(NavKey::Up, 3);
        assert_eq!(cursor.active(), Some(2));
    }

    #[test]
    fn test_cursor_up_from_nothing_goes_to_last() {
        let mut cursor = SuggestionCursor::default();
        cursor.on_input();
        cursor.on_key(NavKey::Up, 4);
        assert_eq!(cursor.active(), Some(3));
    }

    #[test]
    fn test_enter_selects_or_submits() {
        let mut cursor = SuggestionCursor::default();
        assert_eq!(cursor.on_key(NavKey::Enter, 2), CursorAction::Submit);

        cursor.on_input();
        assert_eq!(cursor.on_key(NavKey::Enter, 2), CursorAction::Submit);

        cursor.on_key(NavKey::Down, 2);
        cursor.on_key(NavKey::Down, 2);
        assert_eq!(cursor.on_key(NavKey::Enter, 2), CursorAction::Select(1));
        assert!(!cursor.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut cursor = SuggestionCursor::default();
        cursor.on_input();
        cursor.hover(1);
        cursor.on_key(NavKey::Escape, 2);
        assert_eq!(cursor, SuggestionCursor::default());
    }

    #[test]
    fn test_empty_list_navigation() {
        let mut cursor = SuggestionCursor::default();
        cursor.on_input();
        assert_eq!(cursor.on_key(NavKey::Down, 0), CursorAction::Nothing);
        assert_eq!(cursor.active(), None);
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key("Tab"), None);
    }
}
