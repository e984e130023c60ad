use std::io;

use thiserror::Error;

use tdb_core::{
    repositories::Error as RepoError,
    usecases::{Error as UsecaseError, ErrorKind},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    // Reading input files
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(err.into())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Business(err) => err.kind(),
            Self::Io(_) | Self::Other(_) => ErrorKind::Internal,
        }
    }
}
