use super::mode::Mode;
use crate::ui::theme::Theme;
use item_tui::config::snap_page_size;
use item_tui::item::{sort_items, Item, SortOrder};
use item_tui::pagination::{self, PAGE_SIZE_OPTIONS};
use item_tui::store::ItemStore;
use item_tui::utils::unicode::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

/// Which screen is active. The items screen is the home view; About is a
/// static page whose only job is to exercise the reload-on-return path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Items,
    About,
}

/// A durable mutation waiting to be applied to the store. Submissions are
/// applied to the displayed list synchronously and committed through this
/// queue afterwards, so UI responsiveness never waits on persistence.
#[derive(Debug, Clone)]
pub enum StoreCommand {
    Add(Item),
}

/// View controller for the item list: owns transient view state (draft
/// text, current page, items per page, the displayed list) and mediates
/// between the store and the pagination math.
pub struct AppState {
    pub store: ItemStore,
    pub mode: Mode,
    pub route: Route,
    pub theme: Theme,
    pub draft_text: String,
    pub draft_cursor: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    /// Local rendering source, seeded from the store on activation and
    /// updated optimistically on submit.
    pub displayed_items: Vec<Item>,
    commit_queue: VecDeque<StoreCommand>,
    pub list_state: ListState,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(store: ItemStore, theme: Theme, items_per_page: usize) -> Self {
        let mut state = Self {
            store,
            mode: Mode::Navigate,
            route: Route::Items,
            theme,
            draft_text: String::new(),
            draft_cursor: 0,
            current_page: 1,
            items_per_page: snap_page_size(items_per_page),
            displayed_items: Vec::new(),
            commit_queue: VecDeque::new(),
            list_state: ListState::default(),
            should_quit: false,
            show_help: false,
            status_message: None,
        };
        state.on_view_activated(Route::Items);
        state
    }

    /// Called when a view becomes active. The home (items) view always
    /// re-fetches from the store; any other view only triggers a fetch if
    /// the session's initial load has not happened yet. Together with the
    /// store latch this guarantees exactly one authoritative load per
    /// session even if views are revisited.
    pub fn on_view_activated(&mut self, route: Route) {
        self.route = route;
        if route == Route::Items || !self.store.has_initially_loaded() {
            self.displayed_items = self.store.all_items();
            self.store.set_has_initially_loaded(true);
            let max_page = self.total_pages().max(1);
            self.current_page = self.current_page.min(max_page);
            debug!(count = self.displayed_items.len(), "view refreshed from store");
        }
    }

    // --- submit -----------------------------------------------------------

    /// Submit the draft as a new item. A draft that is empty after trimming
    /// is silently rejected: no item, no state change, draft untouched.
    ///
    /// Otherwise this is a two-phase write: the new item lands in
    /// `displayed_items` synchronously at its sorted position, and the
    /// durable commit is queued for [`drain_commit_queue`](Self::drain_commit_queue).
    pub fn submit_draft(&mut self) {
        if self.draft_text.trim().is_empty() {
            return;
        }

        let item = Item::new(self.draft_text.clone());
        let index = match self.store.sort_order() {
            SortOrder::Ascending => self
                .displayed_items
                .partition_point(|i| i.created_date <= item.created_date),
            SortOrder::Descending => self
                .displayed_items
                .partition_point(|i| i.created_date >= item.created_date),
        };
        self.displayed_items.insert(index, item.clone());
        self.commit_queue.push_back(StoreCommand::Add(item));

        self.draft_text.clear();
        self.draft_cursor = 0;
        self.change_page(1);
    }

    /// Apply every queued durable mutation to the store. The event loop
    /// calls this after each input event is handled, so commits run strictly
    /// after the optimistic update but before the next user-visible event.
    pub fn drain_commit_queue(&mut self) {
        while let Some(command) = self.commit_queue.pop_front() {
            match command {
                StoreCommand::Add(item) => self.store.add_item(item),
            }
        }
    }

    pub fn pending_commits(&self) -> usize {
        self.commit_queue.len()
    }

    // --- sort & pagination ------------------------------------------------

    /// Flip the sort order: push the new order to the store (which re-sorts
    /// and persists) and re-sort the displayed list locally right away
    /// rather than waiting for a store round-trip.
    pub fn toggle_sort(&mut self) {
        let order = self.store.sort_order().toggled();
        self.store.set_sort_order(order);
        sort_items(&mut self.displayed_items, order);
    }

    /// Jump to `page`, clamped to the valid range, and scroll the list
    /// viewport back to the top.
    pub fn change_page(&mut self, page: usize) {
        let max_page = self.total_pages().max(1);
        self.current_page = page.clamp(1, max_page);
        self.list_state = ListState::default();
    }

    pub fn previous_page(&mut self) {
        self.change_page(self.current_page.saturating_sub(1).max(1));
    }

    pub fn next_page(&mut self) {
        self.change_page(self.current_page + 1);
    }

    /// Switch to a new page size. Values outside the offered options are
    /// ignored. If the current page falls past the new page count it is
    /// clamped down to the last page, never below 1.
    pub fn change_items_per_page(&mut self, items_per_page: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&items_per_page) {
            return;
        }
        self.items_per_page = items_per_page;
        let max_page = self.total_pages().max(1);
        if self.current_page > max_page {
            self.change_page(max_page);
        }
    }

    pub fn grow_items_per_page(&mut self) {
        if let Some(pos) = PAGE_SIZE_OPTIONS.iter().position(|&o| o == self.items_per_page)
            && pos + 1 < PAGE_SIZE_OPTIONS.len()
        {
            self.change_items_per_page(PAGE_SIZE_OPTIONS[pos + 1]);
        }
    }

    pub fn shrink_items_per_page(&mut self) {
        if let Some(pos) = PAGE_SIZE_OPTIONS.iter().position(|&o| o == self.items_per_page)
            && pos > 0
        {
            self.change_items_per_page(PAGE_SIZE_OPTIONS[pos - 1]);
        }
    }

    pub fn total_items(&self) -> usize {
        self.displayed_items.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.displayed_items.len(), self.items_per_page)
    }

    /// The slice of the displayed list shown on the current page.
    pub fn current_items(&self) -> &[Item] {
        pagination::slice_for_page(&self.displayed_items, self.current_page, self.items_per_page)
    }

    // --- draft editing ----------------------------------------------------

    pub fn insert_draft_char(&mut self, c: char) {
        self.draft_text.insert(self.draft_cursor, c);
        self.draft_cursor += c.len_utf8();
    }

    pub fn delete_draft_char_back(&mut self) {
        if self.draft_cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.draft_text, self.draft_cursor);
        self.draft_text.replace_range(prev..self.draft_cursor, "");
        self.draft_cursor = prev;
    }

    pub fn delete_draft_char_forward(&mut self) {
        if self.draft_cursor >= self.draft_text.len() {
            return;
        }
        let next = next_char_boundary(&self.draft_text, self.draft_cursor);
        self.draft_text.replace_range(self.draft_cursor..next, "");
    }

    pub fn move_draft_cursor_left(&mut self) {
        self.draft_cursor = prev_char_boundary(&self.draft_text, self.draft_cursor);
    }

    pub fn move_draft_cursor_right(&mut self) {
        self.draft_cursor = next_char_boundary(&self.draft_text, self.draft_cursor);
    }

    pub fn move_draft_cursor_word_left(&mut self) {
        self.draft_cursor = prev_word_boundary(&self.draft_text, self.draft_cursor);
    }

    pub fn move_draft_cursor_word_right(&mut self) {
        self.draft_cursor = next_word_boundary(&self.draft_text, self.draft_cursor);
    }

    pub fn move_draft_cursor_home(&mut self) {
        self.draft_cursor = 0;
    }

    pub fn move_draft_cursor_end(&mut self) {
        self.draft_cursor = self.draft_text.len();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }
}
