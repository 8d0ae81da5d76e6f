//! Editing session and report context models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::room::Roster;

/// Header data of the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportContext {
    /// Report date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    /// Attendant name, free text
    #[serde(default)]
    pub attendant: String,
}

impl ReportContext {
    /// Sharing is only offered once an attendant name was entered
    pub fn can_share(&self) -> bool {
        !self.attendant.is_empty()
    }
}

/// One in-memory editing session
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Session {
    pub id: Uuid,
    pub context: ReportContext,
    #[schema(value_type = Vec<crate::models::RoomRecord>)]
    pub rooms: Roster,
}

/// Create session request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateSession {
    /// Report date (YYYY-MM-DD), defaults to today
    pub date: Option<NaiveDate>,
    #[validate(length(max = 100, message = "Attendant name must be at most 100 characters"))]
    pub attendant: Option<String>,
}

/// Update report header request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateContext {
    /// Report date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    /// Remove the report date
    #[serde(default)]
    pub clear_date: bool,
    #[validate(length(max = 100, message = "Attendant name must be at most 100 characters"))]
    pub attendant: Option<String>,
}
