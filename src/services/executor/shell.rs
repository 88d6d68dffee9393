use super::{CommandExecutor, DispatchResult};
use crate::debug_if_enabled;
use std::process::{Command, Stdio};

/// Запускает команду через `<shell> -c` напрямую, минуя композитор
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &str) -> DispatchResult {
        let spawned = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug_if_enabled!("Запущен процесс {} для '{}'", child.id(), command);
                // Процесс дожидается отдельный поток, tick не блокируется
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                DispatchResult::ok()
            }
            Err(e) => DispatchResult::failed(format!("{}: {}", self.shell, e)),
        }
    }
}
