use super::hyprland_data;
use super::r#trait::{monitor_at, CompositorHost};
use crate::debug_if_enabled;
use crate::events::{MonitorInfo, Point, WindowInfo, WorkspaceId};
use once_cell::unsync::OnceCell;

/// Снимок состояния Hyprland на один тик.
///
/// Каждый запрос к сокету выполняется не больше одного раза и только если
/// плагин действительно спросил; ошибки IPC превращаются в промахи поиска.
#[derive(Default)]
pub struct HyprlandSnapshot {
    monitors: OnceCell<Vec<MonitorInfo>>,
    cursor: OnceCell<Option<Point>>,
    windows: OnceCell<Vec<WindowInfo>>,
    fullscreen_workspaces: OnceCell<Vec<WorkspaceId>>,
}

impl HyprlandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn monitors(&self) -> &[MonitorInfo] {
        self.monitors.get_or_init(|| {
            hyprland_data::monitors().unwrap_or_else(|e| {
                debug_if_enabled!("Не удалось получить мониторы: {}", e);
                Vec::new()
            })
        })
    }

    /// Один запрос `clients` заполняет и список окон, и полноэкранные рабочие столы
    fn load_clients(&self) {
        if self.windows.get().is_some() {
            return;
        }

        let clients = hyprland_data::clients().unwrap_or_else(|e| {
            debug_if_enabled!("Не удалось получить окна: {}", e);
            Vec::new()
        });

        let fullscreen = clients
            .iter()
            .filter(|(_, fullscreen)| *fullscreen)
            .map(|(window, _)| window.workspace_id)
            .collect();
        let windows = clients.into_iter().map(|(window, _)| window).collect();

        let _ = self.fullscreen_workspaces.set(fullscreen);
        let _ = self.windows.set(windows);
    }
}

impl CompositorHost for HyprlandSnapshot {
    fn monitor_by_name(&self, name: &str) -> Option<&MonitorInfo> {
        self.monitors().iter().find(|m| m.name == name)
    }

    fn monitor_under_cursor(&self) -> Option<&MonitorInfo> {
        monitor_at(self.monitors(), self.cursor_position()?)
    }

    fn cursor_position(&self) -> Option<Point> {
        *self.cursor.get_or_init(|| match hyprland_data::cursor_position() {
            Ok(position) => Some(position),
            Err(e) => {
                debug_if_enabled!("Не удалось получить позицию курсора: {}", e);
                None
            }
        })
    }

    fn windows(&self) -> &[WindowInfo] {
        self.load_clients();
        self.windows.get().map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_workspace_fullscreen(&self, workspace: WorkspaceId) -> bool {
        self.load_clients();
        self.fullscreen_workspaces
            .get()
            .is_some_and(|workspaces| workspaces.contains(&workspace))
    }
}
