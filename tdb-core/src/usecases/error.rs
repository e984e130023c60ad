use crate::{entities::*, ordering::OrderingError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid day number")]
    DayNumber,
    #[error("Invalid position")]
    Position,
    #[error("Empty title")]
    EmptyTitle,
    #[error("Empty name")]
    EmptyName,
    #[error("Empty city")]
    EmptyCity,
    #[error("Invalid language code")]
    LanguageCode,
    #[error("The tour does not exist")]
    TourNotFound,
    #[error("The location does not exist")]
    LocationNotFound,
    #[error("The stop does not exist")]
    StopNotFound,
    #[error("The user does not exist")]
    UserNotFound,
    #[error("The rating does not exist")]
    RatingNotFound,
    #[error("Multiple stops at {0}")]
    SlotConflict(Slot),
    #[error("Expected version {expected} but found {actual}")]
    VersionConflict {
        expected: Revision,
        actual: Revision,
    },
    #[error("Missing the expected version")]
    MissingVersion,
    #[error("The location is visited by {0} stop(s)")]
    LocationInUse(usize),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of errors for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    Conflict,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use repositories::Error as RepoError;
        match self {
            Self::TourNotFound
            | Self::LocationNotFound
            | Self::StopNotFound
            | Self::UserNotFound
            | Self::RatingNotFound
            | Self::Repo(RepoError::NotFound) => ErrorKind::NotFound,
            Self::RatingValue
            | Self::DayNumber
            | Self::Position
            | Self::EmptyTitle
            | Self::EmptyName
            | Self::EmptyCity
            | Self::LanguageCode
            | Self::MissingVersion => ErrorKind::ValidationFailed,
            Self::SlotConflict(_)
            | Self::VersionConflict { .. }
            | Self::LocationInUse(_)
            | Self::Repo(RepoError::AlreadyExists) => ErrorKind::Conflict,
            Self::Repo(RepoError::Other(_)) => ErrorKind::Internal,
        }
    }
}

impl From<OrderingError> for Error {
    fn from(err: OrderingError) -> Self {
        match err {
            OrderingError::DayNumber => Self::DayNumber,
            OrderingError::Position => Self::Position,
            OrderingError::StopNotFound(_) => Self::StopNotFound,
            OrderingError::SlotConflict(slot) => Self::SlotConflict(slot),
            OrderingError::VersionConflict { expected, actual } => {
                Self::VersionConflict { expected, actual }
            }
            OrderingError::MissingVersion => Self::MissingVersion,
        }
    }
}

impl From<LanguageCodeParseError> for Error {
    fn from(_: LanguageCodeParseError) -> Self {
        Self::LanguageCode
    }
}

impl From<RatingValueParseError> for Error {
    fn from(_: RatingValueParseError) -> Self {
        Self::RatingValue
    }
}
