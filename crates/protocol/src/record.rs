//! The record abstraction shared by every list-like page.
//!
//! A [`Record`] is a row of structured mock data (a user, a task or an
//! event). Records describe themselves to the view engine through an integer
//! identity, a set of searchable text fields and a typed value per field.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use chrono::NaiveDate;

/// Unique integer identifier of a record.
pub type RecordId = u32;

/// The display text used for a missing date.
pub const NEVER: &str = "Never";

/// The value of one record field, typed by its semantic kind.
///
/// The kind decides the default ordering used when sorting:
/// lexicographic for text, chronological for dates.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use snvl_protocol::FieldValue;
///
/// let a = FieldValue::Text("Alice");
/// let b = FieldValue::Text("Bob");
/// assert_eq!(a.compare(&b), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free or enumerated text, compared lexicographically.
    Text(&'a str),
    /// A calendar date, compared chronologically. `None` stands for "Never"
    /// and sorts after every present date in ascending order.
    Date(Option<NaiveDate>),
}

impl FieldValue<'_> {
    /// Compares two values of the same field using their default ordering.
    ///
    /// Values of different kinds never come from the same field and compare
    /// as equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use chrono::NaiveDate;
    /// use snvl_protocol::FieldValue;
    ///
    /// let early = FieldValue::Date(NaiveDate::from_ymd_opt(2023, 1, 15));
    /// let never = FieldValue::Date(None);
    /// assert_eq!(early.compare(&never), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(Some(a)), Self::Date(Some(b))) => a.cmp(b),
            (Self::Date(Some(_)), Self::Date(None)) => Ordering::Less,
            (Self::Date(None), Self::Date(Some(_))) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Date(Some(date)) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Date(None) => f.write_str(NEVER),
        }
    }
}

/// A row of structured data that the view engine can search, filter and sort.
///
/// # Examples
///
/// ```
/// use snvl_protocol::{FieldValue, Record, RecordId};
///
/// struct Fruit {
///     id: RecordId,
///     name: String,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum FruitField {
///     Name,
/// }
///
/// impl Record for Fruit {
///     type Field = FruitField;
///
///     fn id(&self) -> RecordId {
///         self.id
///     }
///
///     fn searchable_text(&self) -> impl Iterator<Item = &str> {
///         std::iter::once(self.name.as_str())
///     }
///
///     fn value(&self, field: FruitField) -> FieldValue<'_> {
///         match field {
///             FruitField::Name => FieldValue::Text(&self.name),
///         }
///     }
/// }
///
/// let fruit = Fruit { id: 1, name: "Pear".to_string() };
/// assert_eq!(fruit.value(FruitField::Name).to_string(), "Pear");
/// ```
pub trait Record {
    /// The named fields of this record kind.
    type Field: Copy + Ord + Debug;

    /// Returns the unique identifier of this record.
    fn id(&self) -> RecordId;

    /// Returns the text fields a search term is matched against.
    fn searchable_text(&self) -> impl Iterator<Item = &str>;

    /// Returns the typed value of the given field.
    fn value(&self, field: Self::Field) -> FieldValue<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_compares_lexicographically() {
        assert_eq!(
            FieldValue::Text("Admin").compare(&FieldValue::Text("Editor")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("User").compare(&FieldValue::Text("User")),
            Ordering::Equal
        );
    }

    #[test]
    fn dates_compare_chronologically() {
        let a = FieldValue::Date(Some(date(2022, 11, 30)));
        let b = FieldValue::Date(Some(date(2023, 1, 15)));
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
    }

    #[test]
    fn missing_date_sorts_last() {
        let present = FieldValue::Date(Some(date(2024, 1, 10)));
        let never = FieldValue::Date(None);
        assert_eq!(present.compare(&never), Ordering::Less);
        assert_eq!(never.compare(&present), Ordering::Greater);
        assert_eq!(never.compare(&never), Ordering::Equal);
    }

    #[test]
    fn mixed_kinds_compare_equal() {
        let text = FieldValue::Text("x");
        let never = FieldValue::Date(None);
        assert_eq!(text.compare(&never), Ordering::Equal);
    }

    #[test]
    fn display_formats() {
        assert_eq!(FieldValue::Text("active").to_string(), "active");
        assert_eq!(
            FieldValue::Date(Some(date(2023, 3, 20))).to_string(),
            "2023-03-20"
        );
        assert_eq!(FieldValue::Date(None).to_string(), "Never");
    }
}
