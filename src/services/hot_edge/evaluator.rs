use super::zones::{resolve_zones, window_intersects};
use super::EdgeEntry;
use crate::services::executor::CommandExecutor;
use crate::services::host::CompositorHost;
use crate::{debug_if_enabled, trace_if_enabled};
use tracing::{info, warn};

/// Переход состояния края за один проход
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activated,
    Deactivated,
}

/// Проверить один край и, если нужно, переключить его состояние.
///
/// Край пропускается молча, если его монитор не найден, курсор находится на
/// другом мониторе или хост не отдал позицию курсора.
pub(super) fn evaluate_edge<E>(
    entry: &mut EdgeEntry,
    host: &dyn CompositorHost,
    executor: &E,
) -> Option<Transition>
where
    E: CommandExecutor + ?Sized,
{
    let edge = &entry.definition;

    let monitor = host.monitor_by_name(&edge.monitor_name)?;
    if host.monitor_under_cursor()?.name != monitor.name {
        return None;
    }

    let cursor = host.cursor_position()?;
    let zones = resolve_zones(edge, monitor.position(), monitor.size());
    let in_activation_zone = zones.activation.contains_point(cursor);
    let in_deactivation_zone = zones.deactivation.contains_point(cursor);

    let mut is_fullscreen = false;
    let mut windows_in_zone = false;
    if edge.dodge_window {
        if let Some(workspace) = monitor.active_workspace {
            is_fullscreen = host.is_workspace_fullscreen(workspace);
            if !is_fullscreen {
                windows_in_zone = window_intersects(&zones.deactivation, workspace, host.windows());
            }
        }
    }

    trace_if_enabled!(
        "Край {}: курсор {}, активация={}, деактивация={}, окна={}, fullscreen={}",
        edge,
        cursor,
        in_activation_zone,
        in_deactivation_zone,
        windows_in_zone,
        is_fullscreen
    );

    // Полноэкранный режим подавляет оба перехода
    if is_fullscreen {
        return None;
    }

    let transition = if !entry.state.activated
        && (in_activation_zone || (edge.dodge_window && !windows_in_zone))
    {
        Transition::Activated
    } else if entry.state.activated
        && !in_deactivation_zone
        && (!edge.dodge_window || windows_in_zone)
    {
        Transition::Deactivated
    } else {
        return None;
    };

    let command = match transition {
        Transition::Activated => &edge.activate_command,
        Transition::Deactivated => &edge.deactivate_command,
    };
    info!("Край {} -> {:?}", edge, transition);
    run_command(executor, command);

    entry.state.activated = transition == Transition::Activated;
    Some(transition)
}

fn run_command<E: CommandExecutor + ?Sized>(executor: &E, command: &str) {
    if command.is_empty() {
        debug_if_enabled!("Пустая команда, запуск пропущен");
        return;
    }

    let result = executor.execute(command);
    if !result.success {
        warn!(
            "Не удалось запустить команду '{}': {}",
            command,
            result.error.as_deref().unwrap_or("неизвестная ошибка")
        );
    }
}
