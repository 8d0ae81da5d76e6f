//! Session lifecycle and roster mutations

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::RosterConfig,
    error::{AppError, AppResult},
    models::{
        room::{UpdateRoom, ToggleExtra},
        session::{CreateSession, UpdateContext},
        ReportContext, RoomRecord, Roster, Session,
    },
    repository::Repository,
};

use super::clock::Clock;

const MIN_GUESTS: u8 = 1;
const MAX_GUESTS: u8 = 10;

#[derive(Clone)]
pub struct SessionsService {
    repository: Repository,
    roster: RosterConfig,
    clock: Arc<dyn Clock>,
}

impl SessionsService {
    pub fn new(repository: Repository, roster: RosterConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            roster,
            clock,
        }
    }

    /// Configured room numbers in report order
    pub fn rooms(&self) -> &[String] {
        &self.roster.rooms
    }

    /// Start a session with every room unset
    pub async fn create(&self, data: CreateSession) -> AppResult<Session> {
        data.validate()?;

        let session = Session {
            id: Uuid::new_v4(),
            context: ReportContext {
                date: Some(data.date.unwrap_or_else(|| self.clock.today())),
                attendant: data.attendant.unwrap_or_default(),
            },
            rooms: Roster::new(self.roster.rooms.iter().cloned()),
        };

        let session = self.repository.sessions.insert(session).await;
        tracing::info!(session_id = %session.id, rooms = session.rooms.len(), "Created session");
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Session> {
        self.repository.sessions.get(id).await
    }

    /// Number of live sessions
    pub async fn count(&self) -> usize {
        self.repository.sessions.count().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.sessions.delete(id).await?;
        tracing::info!(session_id = %id, "Deleted session");
        Ok(())
    }

    /// Update the report date and attendant name
    pub async fn update_context(&self, id: Uuid, data: UpdateContext) -> AppResult<ReportContext> {
        data.validate()?;

        self.repository
            .sessions
            .update(id, |session| {
                if data.clear_date {
                    session.context.date = None;
                } else if let Some(date) = data.date {
                    session.context.date = Some(date);
                }
                if let Some(attendant) = data.attendant {
                    session.context.attendant = attendant;
                }
                Ok(session.context.clone())
            })
            .await
    }

    /// Set status and/or guest count of one room
    pub async fn update_room(&self, id: Uuid, room: &str, data: UpdateRoom) -> AppResult<RoomRecord> {
        data.validate()?;
        if let Some(guests) = &data.guests {
            self.check_guests(guests)?;
        }

        let record = self
            .repository
            .sessions
            .update(id, |session| {
                session
                    .rooms
                    .update(room, |record| {
                        if let Some(status) = data.status {
                            record.status = status;
                        }
                        if let Some(guests) = data.guests {
                            record.guests = guests;
                        }
                    })
                    .cloned()
                    .ok_or_else(|| AppError::RoomNotFound(format!("Room {} not found", room)))
            })
            .await?;

        tracing::debug!(session_id = %id, room, status = %record.status, guests = %record.guests, "Updated room");
        Ok(record)
    }

    /// Flip one extra on a room
    pub async fn toggle_extra(&self, id: Uuid, room: &str, data: ToggleExtra) -> AppResult<RoomRecord> {
        let record = self
            .repository
            .sessions
            .update(id, |session| {
                session
                    .rooms
                    .update(room, |record| {
                        record.toggle_extra(data.extra);
                    })
                    .cloned()
                    .ok_or_else(|| AppError::RoomNotFound(format!("Room {} not found", room)))
            })
            .await?;

        tracing::debug!(
            session_id = %id,
            room,
            extra = %data.extra,
            present = record.has_extra(data.extra),
            "Toggled extra"
        );
        Ok(record)
    }

    /// Guest counts are kept as typed unless strict mode is on.
    /// An empty value always clears the count.
    fn check_guests(&self, guests: &str) -> AppResult<()> {
        if !self.roster.strict_guests || guests.is_empty() {
            return Ok(());
        }

        match guests.parse::<u8>() {
            Ok(n) if (MIN_GUESTS..=MAX_GUESTS).contains(&n) => Ok(()),
            _ => Err(AppError::Validation(format!(
                "Guest count must be a number between {} and {}",
                MIN_GUESTS, MAX_GUESTS
            ))),
        }
    }
}
