//! The record view engine.
//!
//! Given a fixed collection of records and a [`ViewQuery`], [`view`]
//! applies a case-insensitive text search, categorical filters, a stable
//! single-key sort and fixed-size pagination. The collection itself is never
//! touched; the result borrows from it.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//! use snvl_protocol::dummy::mock_users;
//! use snvl_protocol::{Filter, SortSpec, UserField, ViewQuery, view};
//!
//! let users = mock_users();
//! let query = ViewQuery::new(SortSpec::ascending(UserField::Name), NonZeroUsize::MIN)
//!     .with_search("jo")
//!     .with_filter(UserField::Status, Filter::only("active"));
//!
//! let result = view(&users, &query);
//! assert_eq!(result.total_matches, 1);
//! assert_eq!(result.page[0].name, "John Doe");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::SortDirection;
    ///
    /// assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison outcome.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the arrow shown next to a sorted column header.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// The active sort: one field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec<F> {
    /// The field whose values are compared.
    pub field: F,
    /// The direction of the comparison.
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortSpec<F> {
    /// Creates an ascending sort on `field`.
    #[must_use]
    pub const fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Reacts to a click on a column header.
    ///
    /// Selecting the active field flips the direction; selecting another
    /// field sorts by it ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::{SortDirection, SortSpec, UserField};
    ///
    /// let mut sort = SortSpec::ascending(UserField::Name);
    /// sort.toggle(UserField::Name);
    /// assert_eq!(sort.direction, SortDirection::Descending);
    ///
    /// sort.toggle(UserField::Email);
    /// assert_eq!(sort, SortSpec::ascending(UserField::Email));
    /// ```
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// A categorical filter on one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// The wildcard: every value is accepted.
    #[default]
    Any,
    /// Only records whose field value equals this text exactly.
    Only(String),
}

impl Filter {
    /// Creates a filter accepting exactly `value`.
    #[must_use]
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Returns `true` if this filter is the wildcard.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns `true` if `value` passes this filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::{FieldValue, Filter};
    ///
    /// assert!(Filter::Any.accepts(&FieldValue::Text("pending")));
    /// assert!(Filter::only("active").accepts(&FieldValue::Text("active")));
    /// assert!(!Filter::only("active").accepts(&FieldValue::Text("Active")));
    /// ```
    #[must_use]
    pub fn accepts(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(accepted) => match value {
                FieldValue::Text(text) => text == accepted,
                FieldValue::Date(_) => value.to_string() == *accepted,
            },
        }
    }
}

/// Everything the engine needs to compute one visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery<F> {
    /// Case-insensitive search term; empty matches every record.
    pub search_text: String,
    /// Categorical filters, combined with logical AND.
    pub filters: BTreeMap<F, Filter>,
    /// The active sort.
    pub sort: SortSpec<F>,
    /// Number of records per page.
    pub page_size: NonZeroUsize,
    /// The requested page, 1-indexed.
    pub page_number: usize,
}

impl<F: Copy + Ord> ViewQuery<F> {
    /// Creates a query for the first page with no search and no filters.
    #[must_use]
    pub fn new(sort: SortSpec<F>, page_size: NonZeroUsize) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort,
            page_size,
            page_number: 1,
        }
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the filter for one field.
    #[must_use]
    pub fn with_filter(mut self, field: F, filter: Filter) -> Self {
        self.filters.insert(field, filter);
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// The visible slice of a collection together with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView<'a, R> {
    /// Records on the requested page, in sorted order.
    pub page: Vec<&'a R>,
    /// `ceil(total_matches / page_size)`.
    pub total_pages: usize,
    /// Number of records matching the search and every filter.
    pub total_matches: usize,
    /// The page this view was computed for.
    pub page_number: usize,
    /// The page size this view was computed with.
    pub page_size: usize,
}

impl<R> RecordView<'_, R> {
    /// Returns the 1-based inclusive range of matches shown on this page.
    ///
    /// Returns `None` when the page is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use snvl_protocol::dummy::mock_users;
    /// use snvl_protocol::{SortSpec, UserField, ViewQuery, view};
    ///
    /// let users = mock_users();
    /// let size = NonZeroUsize::new(5).unwrap();
    /// let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size).with_page(2);
    ///
    /// assert_eq!(view(&users, &query).showing_range(), Some((6, 8)));
    /// ```
    #[must_use]
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.page.is_empty() {
            return None;
        }
        let first = (self.page_number - 1) * self.page_size + 1;
        Some((first, first + self.page.len() - 1))
    }

    /// Returns `true` if a page exists before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    /// Returns `true` if a page exists after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Returns `true` if `record` matches the lowercase search `needle`.
fn matches_search<R: Record>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .searchable_text()
            .any(|text| text.to_lowercase().contains(needle))
}

/// Returns `true` if `record` passes every filter.
fn matches_filters<R: Record>(record: &R, filters: &BTreeMap<R::Field, Filter>) -> bool {
    filters
        .iter()
        .all(|(field, filter)| filter.accepts(&record.value(*field)))
}

/// Returns `true` if `record` is included by the search and filters of `query`.
///
/// Pagination and sorting play no part in inclusion.
#[must_use]
pub fn matches<R: Record>(record: &R, query: &ViewQuery<R::Field>) -> bool {
    matches_search(record, &query.search_text.to_lowercase())
        && matches_filters(record, &query.filters)
}

/// Computes the visible page of `records` for `query`.
///
/// The sort is stable: records whose sort values compare equal keep their
/// original relative order in either direction. A page number of zero or
/// past the last page yields an empty page.
#[must_use]
pub fn view<'a, R: Record>(records: &'a [R], query: &ViewQuery<R::Field>) -> RecordView<'a, R> {
    let needle = query.search_text.to_lowercase();
    let mut matched: Vec<&R> = records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| matches_filters(*record, &query.filters))
        .collect();

    let SortSpec { field, direction } = query.sort;
    matched.sort_by(|a, b| direction.apply(a.value(field).compare(&b.value(field))));

    let total_matches = matched.len();
    let page_size = query.page_size.get();
    let total_pages = total_matches.div_ceil(page_size);

    let page = match query.page_number.checked_sub(1) {
        Some(index) => matched
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        None => Vec::new(),
    };

    RecordView {
        page,
        total_pages,
        total_matches,
        page_number: query.page_number,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::mock_users;
    use crate::user::{User, UserField};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn names<'a>(page: &[&'a User]) -> Vec<&'a str> {
        page.iter().map(|user| user.name.as_str()).collect()
    }

    #[test]
    fn default_query_returns_first_page_sorted_by_name() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(5));

        let result = view(&users, &query);

        assert_eq!(result.total_matches, 8);
        assert_eq!(result.total_pages, 2);
        insta::assert_debug_snapshot!(names(&result.page), @r#"
        [
            "Alice Brown",
            "Bob Johnson",
            "Charlie Wilson",
            "Diana Miller",
            "Edward Davis",
        ]
        "#);
    }

    #[test]
    fn search_and_status_filter_combine() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(5))
            .with_search("jo")
            .with_filter(UserField::Status, Filter::only("active"));

        let result = view(&users, &query);

        // "Bob Johnson" matches the search but is inactive.
        assert_eq!(names(&result.page), vec!["John Doe"]);
        assert_eq!(result.total_matches, 1);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_email() {
        let users = mock_users();
        let query =
            ViewQuery::new(SortSpec::ascending(UserField::Name), size(10)).with_search("FIONA@");

        let result = view(&users, &query);

        assert_eq!(names(&result.page), vec!["Fiona Garcia"]);
    }

    #[test]
    fn wildcard_filters_match_everything() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(10))
            .with_filter(UserField::Status, Filter::Any)
            .with_filter(UserField::Role, Filter::Any);

        assert_eq!(view(&users, &query).total_matches, users.len());
    }

    #[test]
    fn filters_combine_with_and() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(10))
            .with_filter(UserField::Status, Filter::only("active"))
            .with_filter(UserField::Role, Filter::only("User"));

        let result = view(&users, &query);

        assert_eq!(names(&result.page), vec!["Fiona Garcia", "Jane Smith"]);
    }

    #[test]
    fn descending_join_date() {
        let users = mock_users();
        let mut sort = SortSpec::ascending(UserField::JoinDate);
        sort.toggle(UserField::JoinDate);
        let query = ViewQuery::new(sort, size(3));

        let result = view(&users, &query);

        insta::assert_debug_snapshot!(names(&result.page), @r#"
        [
            "Alice Brown",
            "Fiona Garcia",
            "Diana Miller",
        ]
        "#);
    }

    #[test]
    fn stable_sort_keeps_original_order_for_ties() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Role), size(10));

        let ascending = view(&users, &query);
        let role_users: Vec<_> = ascending
            .page
            .iter()
            .filter(|user| user.role.as_str() == "User")
            .map(|user| user.id)
            .collect();
        assert_eq!(role_users, vec![2, 4, 7, 8]);

        let mut reversed = query.clone();
        reversed.sort.direction = SortDirection::Descending;
        let descending = view(&users, &reversed);
        let role_users: Vec<_> = descending
            .page
            .iter()
            .filter(|user| user.role.as_str() == "User")
            .map(|user| user.id)
            .collect();
        assert_eq!(role_users, vec![2, 4, 7, 8]);
    }

    #[test]
    fn last_login_never_sorts_last_ascending() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::LastLogin), size(10));

        let result = view(&users, &query);

        assert_eq!(result.page.last().map(|user| user.id), Some(4));
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let users = mock_users();
        let base = ViewQuery::new(SortSpec::ascending(UserField::Name), size(5));

        let zero = view(&users, &base.clone().with_page(0));
        assert!(zero.page.is_empty());
        assert_eq!(zero.total_pages, 2);
        assert_eq!(zero.showing_range(), None);

        let past = view(&users, &base.with_page(3));
        assert!(past.page.is_empty());
        assert_eq!(past.total_matches, 8);
    }

    #[test]
    fn no_matches_means_zero_pages() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(5))
            .with_search("nobody-by-that-name");

        let result = view(&users, &query);

        assert_eq!(result.total_matches, 0);
        assert_eq!(result.total_pages, 0);
        assert!(!result.has_next());
        assert!(!result.has_previous());
    }

    #[test]
    fn page_navigation_flags() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(3)).with_page(2);

        let result = view(&users, &query);

        assert_eq!(result.total_pages, 3);
        assert!(result.has_previous());
        assert!(result.has_next());
        assert_eq!(result.showing_range(), Some((4, 6)));
    }

    #[test]
    fn view_does_not_mutate_collection() {
        let users = mock_users();
        let before = users.clone();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Email), size(2))
            .with_search("e")
            .with_page(2);

        let _ = view(&users, &query);

        assert_eq!(users, before);
    }

    #[test]
    fn matches_ignores_pagination() {
        let users = mock_users();
        let query = ViewQuery::new(SortSpec::ascending(UserField::Name), size(1))
            .with_page(99)
            .with_filter(UserField::Role, Filter::only("Admin"));

        let count = users.iter().filter(|user| matches(*user, &query)).count();

        assert_eq!(count, 2);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::user::{Role, User, UserField, UserStatus};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn arb_field() -> impl Strategy<Value = UserField> {
        prop_oneof![
            Just(UserField::Name),
            Just(UserField::Email),
            Just(UserField::Role),
            Just(UserField::Status),
            Just(UserField::JoinDate),
            Just(UserField::LastLogin),
        ]
    }

    fn arb_filter(values: &'static [&'static str]) -> impl Strategy<Value = Filter> {
        prop_oneof![
            Just(Filter::Any),
            proptest::sample::select(values).prop_map(|value| Filter::only(value)),
        ]
    }

    prop_compose! {
        fn arb_user()(
            id in 1u32..1000,
            name in "[A-Za-z]{1,6} [A-Za-z]{1,6}",
            role in prop_oneof![Just(Role::Admin), Just(Role::Editor), Just(Role::User)],
            status in prop_oneof![
                Just(UserStatus::Active),
                Just(UserStatus::Inactive),
                Just(UserStatus::Pending),
            ],
            join_offset in 0i64..60,
            last_login in proptest::option::of(0i64..60),
        ) -> User {
            let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            User {
                id,
                email: format!("{}@example.com", name.replace(' ', ".").to_lowercase()),
                name,
                role,
                status,
                join_date: base + chrono::Days::new(join_offset as u64),
                last_login: last_login.map(|offset| base + chrono::Days::new(offset as u64)),
            }
        }
    }

    prop_compose! {
        fn arb_query()(
            search in "[a-zA-Z]{0,2}",
            status in arb_filter(&["active", "inactive", "pending"]),
            role in arb_filter(&["Admin", "Editor", "User"]),
            field in arb_field(),
            descending in any::<bool>(),
            page_size in 1usize..6,
            page_number in 0usize..8,
        ) -> ViewQuery<UserField> {
            let mut sort = SortSpec::ascending(field);
            if descending {
                sort.direction = SortDirection::Descending;
            }
            ViewQuery::new(sort, NonZeroUsize::new(page_size).unwrap())
                .with_search(search)
                .with_filter(UserField::Status, status)
                .with_filter(UserField::Role, role)
                .with_page(page_number)
        }
    }

    /// Independent restatement of the inclusion predicate.
    fn independently_included(user: &User, query: &ViewQuery<UserField>) -> bool {
        let needle = query.search_text.to_lowercase();
        let searched = needle.is_empty()
            || user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);
        let status_ok = match query.filters.get(&UserField::Status) {
            Some(Filter::Only(value)) => user.status.as_str() == value,
            _ => true,
        };
        let role_ok = match query.filters.get(&UserField::Role) {
            Some(Filter::Only(value)) => user.role.as_str() == value,
            _ => true,
        };
        searched && status_ok && role_ok
    }

    proptest! {
        /// The match count equals an independently computed count.
        #[test]
        fn total_matches_counts_predicate(
            users in proptest::collection::vec(arb_user(), 0..20),
            query in arb_query(),
        ) {
            let expected = users.iter().filter(|user| independently_included(user, &query)).count();
            prop_assert_eq!(view(&users, &query).total_matches, expected);
        }

        /// Concatenating every page reconstructs the full sorted, filtered sequence.
        #[test]
        fn pages_cover_matches_exactly_once(
            users in proptest::collection::vec(arb_user(), 0..20),
            query in arb_query(),
        ) {
            let whole = NonZeroUsize::new(users.len().max(1)).unwrap();
            let everything = view(&users, &query.clone().with_page(1).with_page_size(whole));
            let first = view(&users, &query.clone().with_page(1));

            let mut concatenated = Vec::new();
            for page in 1..=first.total_pages {
                concatenated.extend(view(&users, &query.clone().with_page(page)).page);
            }

            prop_assert_eq!(concatenated.len(), first.total_matches);
            prop_assert_eq!(concatenated, everything.page);
        }

        /// Flipping the direction twice restores the original output.
        #[test]
        fn double_reversal_is_identity(
            users in proptest::collection::vec(arb_user(), 0..20),
            query in arb_query(),
        ) {
            let original = view(&users, &query);
            let mut flipped = query.clone();
            flipped.sort.direction = flipped.sort.direction.reversed().reversed();
            prop_assert_eq!(view(&users, &flipped).page, original.page);
        }

        /// Equal sort keys keep their original relative order in both directions.
        #[test]
        fn ties_keep_collection_order(
            users in proptest::collection::vec(arb_user(), 0..20),
            query in arb_query(),
        ) {
            let whole = NonZeroUsize::new(users.len().max(1)).unwrap();
            let full = query.clone().with_page(1).with_page_size(whole);
            let result = view(&users, &full);
            let position = |user: &User| users.iter().position(|u| std::ptr::eq(u, user));

            for pair in result.page.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let field = query.sort.field;
                if a.value(field).compare(&b.value(field)) == Ordering::Equal {
                    prop_assert!(position(a) < position(b));
                }
            }
        }
    }
}
