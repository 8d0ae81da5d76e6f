//! Room status and extras codes used on the wire and in the report

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Housekeeping status of a room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RoomStatus {
    /// Nothing selected yet; the room is left out of the report
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "occ")]
    Occupied,
    #[serde(rename = "VC")]
    VacantClean,
    #[serde(rename = "DND")]
    DoNotDisturb,
    #[serde(rename = "S/O")]
    StayOver,
    #[serde(rename = "VD")]
    VacantDirty,
}

impl RoomStatus {
    /// Statuses offered in the selector, in display order
    pub const SELECTABLE: [RoomStatus; 5] = [
        RoomStatus::Occupied,
        RoomStatus::VacantClean,
        RoomStatus::DoNotDisturb,
        RoomStatus::StayOver,
        RoomStatus::VacantDirty,
    ];

    /// Short code written into the report
    pub fn code(self) -> &'static str {
        match self {
            RoomStatus::Unset => "",
            RoomStatus::Occupied => "occ",
            RoomStatus::VacantClean => "VC",
            RoomStatus::DoNotDisturb => "DND",
            RoomStatus::StayOver => "S/O",
            RoomStatus::VacantDirty => "VD",
        }
    }

    pub fn is_set(self) -> bool {
        self != RoomStatus::Unset
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Extra
// ---------------------------------------------------------------------------

/// Add-on service attached to a room independently of its status.
///
/// Variant order is the order extras are listed in a room record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Extra {
    #[serde(rename = "Babycot")]
    Babycot,
    #[serde(rename = "Extra Bed")]
    ExtraBed,
}

impl Extra {
    /// Report summary order
    pub const ALL: [Extra; 2] = [Extra::Babycot, Extra::ExtraBed];

    /// Label used for the summary line of the report
    pub fn label(self) -> &'static str {
        match self {
            Extra::Babycot => "Babycot",
            Extra::ExtraBed => "Extra Bed",
        }
    }
}

impl std::fmt::Display for Extra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
