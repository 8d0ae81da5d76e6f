//! Business logic services

pub mod clock;
pub mod report;
pub mod sessions;

use std::sync::Arc;

use crate::{
    config::{RosterConfig, ShareConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub sessions: sessions::SessionsService,
    pub report: report::ReportService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        roster_config: RosterConfig,
        share_config: ShareConfig,
        clock: Arc<dyn clock::Clock>,
    ) -> Self {
        Self {
            sessions: sessions::SessionsService::new(repository, roster_config, clock),
            report: report::ReportService::new(share_config),
        }
    }
}
