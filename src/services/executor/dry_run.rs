use super::{CommandExecutor, DispatchResult};
use tracing::info;

pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        info!("Dry-run режим - команды только логируются");
        Self
    }
}

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &str) -> DispatchResult {
        info!("[DRY RUN] exec: {}", command);
        DispatchResult::ok()
    }
}
