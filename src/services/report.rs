//! Report formatting and share link service

use std::fmt::Write;

use chrono::NaiveDate;

use crate::{
    config::ShareConfig,
    models::{Extra, ReportContext, ReportResponse, Roster, ShareStatus},
};

pub const REPORT_TITLE: &str = "Occupancy - Morning";

/// `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Render the plain-text report.
///
/// Header, one line per room with a status, then one summary line per extra
/// that at least one room carries.
pub fn format_report(context: &ReportContext, roster: &Roster) -> String {
    let date = context.date.map(format_date).unwrap_or_default();

    let mut message = format!(
        "{}\nDate: {}\nAttendant: {}\n\n",
        REPORT_TITLE, date, context.attendant
    );

    for record in roster.iter() {
        if let Some(value) = record.report_value() {
            // Writing to a String cannot fail
            let _ = writeln!(message, "{}- {}", record.room, value);
        }
    }

    for extra in Extra::ALL {
        let rooms = roster.rooms_with(extra);
        if !rooms.is_empty() {
            let _ = write!(message, "\n{}: {}", extra.label(), rooms.join(", "));
        }
    }

    message
}

#[derive(Clone)]
pub struct ReportService {
    share: ShareConfig,
}

impl ReportService {
    pub fn new(share: ShareConfig) -> Self {
        Self { share }
    }

    /// Messaging link pre-populated with the encoded report
    pub fn share_url(&self, text: &str) -> String {
        format!("{}{}", self.share.base_url, urlencoding::encode(text))
    }

    /// Build the report and its share status
    pub fn build(&self, context: &ReportContext, roster: &Roster) -> ReportResponse {
        let text = format_report(context, roster);
        let share = if context.can_share() {
            ShareStatus {
                enabled: true,
                url: Some(self.share_url(&text)),
            }
        } else {
            ShareStatus {
                enabled: false,
                url: None,
            }
        };

        tracing::debug!(
            rooms = roster.len(),
            share_enabled = share.enabled,
            "Generated report"
        );

        ReportResponse { text, share }
    }
}
