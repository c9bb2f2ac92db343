//! Application context for the Calories CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config file so
//! handlers resolve store, goals and "today" the same way.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use once_cell::unsync::OnceCell;
use tracing::debug;

use nutrition_core::{Goal, Session, SnapshotStore};

use crate::cli::Cli;
use crate::config::{read_config, CaloriesConfig, StoreBackend};
use crate::ui::UiContext;

use super::resolver::{open_store, resolve_backend, resolve_config_path, resolve_store_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<CaloriesConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// UI context for this command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&CaloriesConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    fn explicit_store_path(&self) -> Option<&Path> {
        self.cli
            .store
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(Path::new)
    }

    pub fn backend(&self) -> anyhow::Result<StoreBackend> {
        let configured = self.config()?.map(|c| c.store.backend);
        resolve_backend(
            self.cli.backend.as_deref(),
            self.explicit_store_path(),
            configured,
        )
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        let backend = self.backend()?;
        let configured = self.config()?.map(|c| c.store.path.as_str());
        resolve_store_path(self.explicit_store_path(), configured, backend)
    }

    /// Load the meal store into a session.
    pub fn open_session(&self) -> anyhow::Result<Session<Box<dyn SnapshotStore>>> {
        let backend = self.backend()?;
        let path = self.store_path()?;
        debug!(backend = %backend, path = %path.display(), "opening store");
        let store = open_store(backend, &path)?;
        Ok(Session::open(store)?)
    }

    /// Daily goals from the config file, or the defaults.
    pub fn goal(&self) -> anyhow::Result<Goal> {
        Ok(self.config()?.map(|c| c.goals).unwrap_or_default())
    }

    /// Today's date in the configured timezone (system zone if unset).
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        let timezone = self.config()?.and_then(|c| c.ui.timezone.as_deref());
        match timezone {
            Some(name) => {
                let tz = name
                    .parse::<chrono_tz::Tz>()
                    .map_err(|_| anyhow::anyhow!("Invalid timezone in config: {}", name))?;
                Ok(Utc::now().with_timezone(&tz).date_naive())
            }
            None => Ok(Local::now().date_naive()),
        }
    }
}
