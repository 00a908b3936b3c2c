use db_infra::db::{DbKind, RuntimeEnv};
use tracing::info;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for AppState, shared by `main` and the integration tests.
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Connect and apply pending migrations when a database was requested.
    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            Some(kind) => {
                let conn = db_infra::bootstrap_db(self.env, kind).await?;
                info!(env = ?self.env, db = ?kind, "state.db_ready");
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::new_without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
