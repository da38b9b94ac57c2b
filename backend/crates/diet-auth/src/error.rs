use diet_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing session {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("User not found {location}")]
    IdentityNotFound { location: ErrorLocation },

    #[error("User already exists: {reason} {location}")]
    DuplicateIdentity {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_not_found() -> Self {
        Self::IdentityNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate<S: Into<String>>(reason: S) -> Self {
        Self::DuplicateIdentity {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        if source.is_unique_violation() {
            return Self::duplicate("email or session already registered");
        }

        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
