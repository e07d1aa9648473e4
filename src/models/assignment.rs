//! Session assignment model.
//!
//! A session assignment is one scheduled class occurrence: a subject
//! taught by a professor to a group, in a room, at a day and hour of
//! the weekly grid. Assignments are produced by the external solver
//! and are read-only here.

use serde::{Deserialize, Deserializer, Serialize};

use super::Weekday;

/// Room value meaning "no room assigned". Never triggers a room conflict.
pub const UNASSIGNED_ROOM: &str = "N/A";

/// One scheduled class occurrence.
///
/// Also reads the backend's schedule payload, which uses Spanish field
/// names and numeric IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionAssignment {
    /// Unique assignment identifier.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Course name.
    #[serde(alias = "materia")]
    pub subject: String,
    /// Professor name; exclusivity key for professor conflicts.
    #[serde(alias = "maestro")]
    pub professor: String,
    /// Student group label (e.g. "1A").
    #[serde(alias = "grupo")]
    pub group: String,
    /// Room identifier, or [`UNASSIGNED_ROOM`].
    #[serde(alias = "aula")]
    pub room: String,
    /// Teaching day.
    #[serde(alias = "dia")]
    pub day: Weekday,
    /// Grid start hour; exclusivity key for slot equality.
    #[serde(alias = "hora_inicio")]
    pub start_hour: u8,
    /// Grid end hour.
    #[serde(alias = "hora_fin")]
    pub end_hour: u8,
}

/// Accepts an identifier given either as a string or as an integer.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

impl SessionAssignment {
    /// Creates a one-hour assignment with no room and empty labels.
    pub fn new(id: impl Into<String>, day: Weekday, start_hour: u8) -> Self {
        Self {
            id: id.into(),
            subject: String::new(),
            professor: String::new(),
            group: String::new(),
            room: UNASSIGNED_ROOM.to_string(),
            day,
            start_hour,
            end_hour: start_hour.saturating_add(1),
        }
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the professor.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }

    /// Sets the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the end hour.
    pub fn with_end_hour(mut self, end_hour: u8) -> Self {
        self.end_hour = end_hour;
        self
    }

    /// Whether a real room is assigned.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.room != UNASSIGNED_ROOM
    }

    /// Whether both assignments occupy the same `(day, start_hour)` slot.
    #[inline]
    pub fn same_slot(&self, other: &SessionAssignment) -> bool {
        self.day == other.day && self.start_hour == other.start_hour
    }
}
