//! Подделки хоста и исполнителя команд для тестов

use super::{EdgeDefinition, Side};
use crate::events::{MonitorInfo, Point, Rect, WindowInfo, WorkspaceId};
use crate::services::executor::{CommandExecutor, DispatchResult};
use crate::services::host::{monitor_at, CompositorHost};
use std::cell::RefCell;
use std::collections::HashSet;

pub fn edge(side: Side, activate: i32, deactivate: i32, dodge_window: bool) -> EdgeDefinition {
    EdgeDefinition {
        monitor_name: "DP-1".to_string(),
        side,
        activate_zone_size: activate,
        deactivate_zone_size: deactivate,
        activate_command: "activate".to_string(),
        deactivate_command: "deactivate".to_string(),
        dodge_window,
    }
}

pub fn top_edge(dodge_window: bool) -> EdgeDefinition {
    edge(Side::Top, 10, 50, dodge_window)
}

#[derive(Debug, Default, Clone)]
pub struct FakeHost {
    monitors: Vec<MonitorInfo>,
    cursor: Option<Point>,
    windows: Vec<WindowInfo>,
    fullscreen: HashSet<WorkspaceId>,
}

impl FakeHost {
    /// Монитор DP-1 1920x1080 в начале координат с рабочим столом 1
    pub fn single_monitor() -> Self {
        Self::default().with_monitor("DP-1", Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }

    pub fn with_monitor(mut self, name: &str, geometry: Rect) -> Self {
        let id = self.monitors.len() as i64;
        let monitor = MonitorInfo::new(name, geometry)
            .with_id(id)
            .with_active_workspace(id + 1);
        self.monitors.push(monitor);
        self
    }

    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_window(mut self, window: WindowInfo) -> Self {
        self.windows.push(window);
        self
    }

    pub fn with_fullscreen(mut self, workspace: WorkspaceId) -> Self {
        self.fullscreen.insert(workspace);
        self
    }
}

impl CompositorHost for FakeHost {
    fn monitor_by_name(&self, name: &str) -> Option<&MonitorInfo> {
        self.monitors.iter().find(|m| m.name == name)
    }

    fn monitor_under_cursor(&self) -> Option<&MonitorInfo> {
        monitor_at(&self.monitors, self.cursor?)
    }

    fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    fn windows(&self) -> &[WindowInfo] {
        &self.windows
    }

    fn is_workspace_fullscreen(&self, workspace: WorkspaceId) -> bool {
        self.fullscreen.contains(&workspace)
    }
}

/// Запоминает команды вместо запуска
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingExecutor {
    pub fn failing() -> Self {
        Self {
            calls: RefCell::default(),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &str) -> DispatchResult {
        if self.fail {
            return DispatchResult::failed("exec refused");
        }
        self.calls.borrow_mut().push(command.to_string());
        DispatchResult::ok()
    }
}
