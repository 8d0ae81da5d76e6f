//! Data models for the occupancy tracker

pub mod enums;
pub mod report;
pub mod room;
pub mod session;

// Re-export commonly used types
pub use enums::{Extra, RoomStatus};
pub use report::{ReportResponse, ShareStatus};
pub use room::{RoomRecord, Roster};
pub use session::{ReportContext, Session};
