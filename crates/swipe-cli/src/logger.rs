//! StdoutLogger - 判定ログを JSON 行で標準出力へ
//!
//! Stands in for the `/api/interactions/log` endpoint: one line per decided
//! item, carrying the same `{ item, viewed, liked }` body plus whether the
//! session is authenticated.

use std::io::Write;

use async_trait::async_trait;
use serde::Serialize;
use swipe_core::domain::DeckItem;
use swipe_core::ports::{InteractionLog, InteractionLogger, SinkError};

/// Credentials for the logging endpoint. Never printed.
#[derive(Clone, Default)]
pub struct SessionContext {
    access_token: Option<String>,
}

impl SessionContext {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct LogLine<'a, T> {
    #[serde(flatten)]
    entry: &'a InteractionLog<T>,
    authenticated: bool,
}

#[derive(Debug)]
pub struct StdoutLogger {
    session: SessionContext,
}

impl StdoutLogger {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    fn line<T: DeckItem + Serialize>(
        &self,
        entry: &InteractionLog<T>,
    ) -> Result<String, SinkError> {
        let line = LogLine {
            entry,
            authenticated: self.session.is_authenticated(),
        };
        serde_json::to_string(&line).map_err(|e| SinkError::Rejected {
            item: entry.item.key(),
            reason: format!("json encode: {e}"),
        })
    }
}

#[async_trait]
impl<T: DeckItem + Serialize + Send + Sync + 'static> InteractionLogger<T> for StdoutLogger {
    async fn log(&self, entry: InteractionLog<T>) -> Result<(), SinkError> {
        let line = self.line(&entry)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").map_err(|e| SinkError::Other(format!("stdout: {e}")))
    }
}
