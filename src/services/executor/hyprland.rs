use super::{CommandExecutor, DispatchResult};
use crate::debug_if_enabled;
use hyprland::dispatch::{Dispatch, DispatchType};

/// Запускает команды диспетчером `exec` композитора, как это делает бинд `exec`
pub struct HyprlandDispatcher;

impl CommandExecutor for HyprlandDispatcher {
    fn execute(&self, command: &str) -> DispatchResult {
        debug_if_enabled!("dispatch exec {}", command);
        match Dispatch::call(DispatchType::Exec(command)) {
            Ok(()) => DispatchResult::ok(),
            Err(e) => DispatchResult::failed(e.to_string()),
        }
    }
}
