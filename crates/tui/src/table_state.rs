//! State of the data tables page.
//!
//! The table keeps only the query; the visible rows are recomputed from the
//! full user list on every render with [`snvl_protocol::view`].

use std::num::NonZeroUsize;

use snvl_protocol::{
    Filter, Record, RecordView, Role, SortSpec, User, UserField, UserStatus, ViewQuery, view,
};

/// Query, selection and input mode of the user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Search, filters, sort and page of the table.
    pub query: ViewQuery<UserField>,
    /// Whether typed characters edit the search text.
    pub searching: bool,
    /// Index of the highlighted row within the current page.
    pub selected_row: usize,
    /// Whether the details of the highlighted user are shown.
    pub detail_visible: bool,
}

impl TableState {
    /// Creates a table sorted by name, showing the first page.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use snvl_protocol::UserField;
    /// use snvl_tui::TableState;
    ///
    /// let table = TableState::new(NonZeroUsize::new(5).unwrap());
    /// assert_eq!(table.query.sort.field, UserField::Name);
    /// assert_eq!(table.query.page_number, 1);
    /// ```
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            query: ViewQuery::new(SortSpec::ascending(UserField::Name), page_size),
            searching: false,
            selected_row: 0,
            detail_visible: false,
        }
    }

    /// Applies the query to `users`.
    #[must_use]
    pub fn view<'a>(&self, users: &'a [User]) -> RecordView<'a, User> {
        view(users, &self.query)
    }

    /// Returns the highlighted user, if the current page has one.
    #[must_use]
    pub fn selected_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        self.view(users).page.get(self.selected_row).copied()
    }

    /// Enters search mode.
    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// Leaves search mode, keeping the search text.
    pub fn end_search(&mut self) {
        self.searching = false;
    }

    /// Appends `ch` to the search text.
    pub fn push_search(&mut self, ch: char) {
        self.query.search_text.push(ch);
        self.restart();
    }

    /// Removes the last character of the search text.
    pub fn pop_search(&mut self) {
        if self.query.search_text.pop().is_some() {
            self.restart();
        }
    }

    /// Returns the status the table is filtered on, if any.
    #[must_use]
    pub fn status_filter(&self) -> Option<UserStatus> {
        let value = self.filter_value(UserField::Status)?;
        UserStatus::all().into_iter().find(|s| s.as_str() == value)
    }

    /// Returns the role the table is filtered on, if any.
    #[must_use]
    pub fn role_filter(&self) -> Option<Role> {
        let value = self.filter_value(UserField::Role)?;
        Role::all().into_iter().find(|r| r.as_str() == value)
    }

    /// Advances the status filter: all, active, inactive, pending, all.
    pub fn cycle_status_filter(&mut self) {
        let next = cycle(self.status_filter(), &UserStatus::all());
        self.set_filter(UserField::Status, next.map(UserStatus::as_str));
        tracing::debug!(status = ?next, "status filter changed");
    }

    /// Advances the role filter: all, Admin, Editor, User, all.
    pub fn cycle_role_filter(&mut self) {
        let next = cycle(self.role_filter(), &Role::all());
        self.set_filter(UserField::Role, next.map(Role::as_str));
        tracing::debug!(role = ?next, "role filter changed");
    }

    /// Sorts by `field`, flipping the direction if it is already the sort
    /// field. The current page is kept.
    ///
    /// The highlight follows the highlighted user when the new order leaves
    /// them on this page, and returns to the first row otherwise.
    pub fn sort_by(&mut self, field: UserField, users: &[User]) {
        let highlighted = self.selected_user(users).map(Record::id);
        self.query.sort.toggle(field);
        self.selected_row = highlighted
            .and_then(|id| self.view(users).page.iter().position(|user| user.id() == id))
            .unwrap_or(0);
        tracing::debug!(?field, direction = ?self.query.sort.direction, "sort changed");
    }

    /// Clears the search text and every filter.
    pub fn clear_filters(&mut self) {
        self.query.search_text.clear();
        self.query.filters.clear();
        self.restart();
    }

    /// Moves to the previous page, stopping at the first.
    pub fn previous_page(&mut self) {
        if self.query.page_number > 1 {
            self.query.page_number -= 1;
            self.selected_row = 0;
        }
    }

    /// Moves to the next page, stopping at the last page of `users`.
    pub fn next_page(&mut self, users: &[User]) {
        let last = self.view(users).total_pages.max(1);
        if self.query.page_number < last {
            self.query.page_number += 1;
            self.selected_row = 0;
        }
    }

    /// Highlights the previous row of the page.
    pub fn select_previous(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Highlights the next row of the page.
    pub fn select_next(&mut self, users: &[User]) {
        let rows = self.view(users).page.len();
        if self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    /// Shows the details of the highlighted user, if there is one.
    pub fn open_detail(&mut self, users: &[User]) {
        self.detail_visible = self.selected_user(users).is_some();
    }

    /// Hides the user details.
    pub fn close_detail(&mut self) {
        self.detail_visible = false;
    }

    fn filter_value(&self, field: UserField) -> Option<&str> {
        match self.query.filters.get(&field)? {
            Filter::Any => None,
            Filter::Only(value) => Some(value.as_str()),
        }
    }

    fn set_filter(&mut self, field: UserField, value: Option<&str>) {
        match value {
            Some(value) => {
                self.query.filters.insert(field, Filter::only(value));
            }
            None => {
                self.query.filters.remove(&field);
            }
        }
        self.restart();
    }

    /// Returns to the first page after the matching set changed.
    fn restart(&mut self) {
        self.query.page_number = 1;
        self.selected_row = 0;
        self.detail_visible = false;
    }
}

/// Returns the value after `current` in `values`, `None` standing for "all"
/// before the first value and after the last.
fn cycle<T: Copy + PartialEq>(current: Option<T>, values: &[T]) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(current) => values
            .iter()
            .position(|v| *v == current)
            .and_then(|i| values.get(i + 1))
            .copied(),
    }
}
