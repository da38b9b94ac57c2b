use crate::{CliClientResult, ClientError};

use std::path::PathBuf;

/// Session token persisted between CLI runs
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Stored token, or `None` when nothing has been saved yet
    pub fn load(&self) -> CliClientResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ClientError::Session {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn save(&self, token: &str) -> CliClientResult<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, token)
        };

        write().map_err(|source| ClientError::Session {
            path: self.path.clone(),
            source,
        })
    }
}
