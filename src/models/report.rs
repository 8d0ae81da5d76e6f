//! Report request and response bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::room::Roster;

/// Share-via-link availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShareStatus {
    /// False while the attendant name is empty
    pub enabled: bool,
    /// Messaging link carrying the encoded report, present when enabled
    pub url: Option<String>,
}

/// Generated report
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Plain-text report, ready for the clipboard
    pub text: String,
    pub share: ShareStatus,
}

/// Stateless report request carrying its own roster
#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatReportRequest {
    /// Report date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub attendant: String,
    /// Room records in report order; room numbers must be unique
    #[serde(default)]
    #[schema(value_type = Vec<crate::models::RoomRecord>)]
    pub rooms: Roster,
}
