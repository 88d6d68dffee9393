//! CommandExecutor: the only way commands leave the plugin
//!
//! Executors are fire-and-forget: `execute` returns as soon as the spawn request
//! has been handed over, never waiting for the command itself.

mod dry_run;
mod hyprland;
mod shell;

pub use dry_run::DryRunExecutor;
pub use hyprland::HyprlandDispatcher;
pub use shell::ShellExecutor;

use crate::config::Config;
use crate::error::Result;
use std::fmt;

/// Результат отправки команды хосту
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub success: bool,
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl fmt::Display for DispatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "ok"),
            Some(error) => write!(f, "error: {}", error),
        }
    }
}

/// Capability to run a shell command asynchronously on the host
pub trait CommandExecutor {
    fn execute(&self, command: &str) -> DispatchResult;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
    fn execute(&self, command: &str) -> DispatchResult {
        (**self).execute(command)
    }
}

pub type BoxedExecutor = Box<dyn CommandExecutor + Send>;

/// Factory function to create the executor selected in the config
pub fn create_executor(config: &Config, dry_run: bool) -> Result<BoxedExecutor> {
    if dry_run {
        return Ok(Box::new(DryRunExecutor::new()));
    }

    match config.executor.mode.as_str() {
        "hyprland" => Ok(Box::new(HyprlandDispatcher)),
        "shell" => Ok(Box::new(ShellExecutor::with_shell(config.executor.shell.as_str()))),
        other => Err(crate::hedge_error!(internal, "Неизвестный режим запуска команд: {}", other)),
    }
}
