//! Room record and roster models

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{Extra, RoomStatus};

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomRecord {
    /// Room number
    pub room: String,
    #[serde(default)]
    pub status: RoomStatus,
    /// Guest count as typed; only rendered when the room is occupied
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    #[schema(value_type = Vec<Extra>)]
    pub extras: BTreeSet<Extra>,
}

impl RoomRecord {
    /// Fresh record with no status, guests or extras
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            status: RoomStatus::Unset,
            guests: String::new(),
            extras: BTreeSet::new(),
        }
    }

    pub fn has_extra(&self, extra: Extra) -> bool {
        self.extras.contains(&extra)
    }

    /// Add the extra if absent, remove it if present.
    /// Returns whether the room carries the extra afterwards.
    pub fn toggle_extra(&mut self, extra: Extra) -> bool {
        if self.extras.remove(&extra) {
            false
        } else {
            self.extras.insert(extra);
            true
        }
    }

    /// Value written after `<room>- ` in the report, `None` when the room is left out
    pub fn report_value(&self) -> Option<String> {
        match self.status {
            RoomStatus::Unset => None,
            RoomStatus::Occupied if !self.guests.is_empty() => {
                Some(format!("{} {}", RoomStatus::Occupied.code(), self.guests))
            }
            status => Some(status.code().to_string()),
        }
    }
}

/// Ordered room records keyed by room number.
///
/// Insertion order is the display and report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    rooms: IndexMap<String, RoomRecord>,
}

impl Roster {
    /// Blank roster for the given room numbers; repeated numbers keep their first position
    pub fn new<I, S>(room_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rooms = room_numbers
            .into_iter()
            .map(|room| {
                let room: String = room.into();
                (room.clone(), RoomRecord::new(room))
            })
            .collect();
        Self { rooms }
    }

    /// Build a roster from complete records, failing on the first repeated room number
    pub fn from_records(records: Vec<RoomRecord>) -> Result<Self, String> {
        let mut rooms: IndexMap<String, RoomRecord> = IndexMap::with_capacity(records.len());
        for record in records {
            if rooms.contains_key(&record.room) {
                return Err(format!("room {} is listed more than once", record.room));
            }
            rooms.insert(record.room.clone(), record);
        }
        Ok(Self { rooms })
    }

    pub fn get(&self, room: &str) -> Option<&RoomRecord> {
        self.rooms.get(room)
    }

    /// Apply `f` to the record for `room`, returning the updated record
    pub fn update<F>(&mut self, room: &str, f: F) -> Option<&RoomRecord>
    where
        F: FnOnce(&mut RoomRecord),
    {
        let record = self.rooms.get_mut(room)?;
        f(record);
        Some(&*record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomRecord> {
        self.rooms.values()
    }

    /// Room numbers carrying `extra`, in roster order
    pub fn rooms_with(&self, extra: Extra) -> Vec<&str> {
        self.iter()
            .filter(|record| record.has_extra(extra))
            .map(|record| record.room.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Serialize for Roster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rooms.values())
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<RoomRecord>::deserialize(deserializer)?;
        Roster::from_records(records).map_err(serde::de::Error::custom)
    }
}

/// Update room request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRoom {
    pub status: Option<RoomStatus>,
    /// Guest count as typed (the form offers 1-10)
    #[validate(length(max = 16, message = "Guest count must be at most 16 characters"))]
    pub guests: Option<String>,
}

/// Toggle extra request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleExtra {
    pub extra: Extra,
}
