//! User use-case service.
//!
//! # Invariants
//! - `User.username` is unique; checked and written under one collection lock.

use crate::model::user::{NewUser, User, UserPatch};
use crate::repo::collection::UpdateOutcome;
use crate::repo::memory_store::MemoryStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    UsernameTaken(String),
    UserNotFound(String),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameTaken(username) => write!(f, "username already in use: `{username}`"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for UserServiceError {}

pub struct UserService<'a> {
    store: &'a MemoryStore,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    pub fn create_user(&self, new: NewUser) -> Result<User, UserServiceError> {
        let username = new.username.clone();
        let created = self
            .store
            .users()
            .create_unless(new, |existing| existing.username == username)
            .ok_or_else(|| UserServiceError::UsernameTaken(username.clone()))?;
        // Usernames and credentials stay out of logs.
        info!(
            "event=user_create module=service status=ok id={}",
            created.id
        );
        Ok(created)
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, UserServiceError> {
        let requested = patch.username.clone();
        match self
            .store
            .users()
            .update_unless(id, patch, |updated, other| updated.username == other.username)
        {
            UpdateOutcome::Updated(user) => Ok(user),
            UpdateOutcome::NotFound => Err(UserServiceError::UserNotFound(id.to_string())),
            UpdateOutcome::Conflict => Err(UserServiceError::UsernameTaken(
                requested.unwrap_or_default(),
            )),
        }
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.store.user_by_username(username)
    }
}
