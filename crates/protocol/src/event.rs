//! Calendar events.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::Dated;
use crate::record::{FieldValue, Record, RecordId};

/// What sort of entry an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A meeting with other people.
    Meeting,
    /// Something due on that day.
    Deadline,
    /// A general event.
    Event,
    /// A note to self.
    Reminder,
}

impl EventKind {
    /// Returns the badge text for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Reminder => "reminder",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: RecordId,
    /// Short title shown in the grid.
    pub title: String,
    /// Longer description shown in the day panel.
    pub description: String,
    /// The day the event happens on.
    pub date: NaiveDate,
    /// The starting time of the event.
    pub time: NaiveTime,
    /// What sort of entry this is.
    pub kind: EventKind,
    /// Where the event takes place, if anywhere in particular.
    pub location: Option<String>,
}

/// The named fields of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    /// The title.
    Title,
    /// The kind.
    Kind,
    /// The date.
    Date,
}

impl Record for Event {
    type Field = EventField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.location.as_deref())
    }

    fn value(&self, field: EventField) -> FieldValue<'_> {
        match field {
            EventField::Title => FieldValue::Text(&self.title),
            EventField::Kind => FieldValue::Text(self.kind.as_str()),
            EventField::Date => FieldValue::Date(Some(self.date)),
        }
    }
}

impl Dated for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
