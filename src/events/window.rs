use super::geometry::{Point, Rect};
use std::fmt;

pub type WorkspaceId = i64;

/// Снимок окна композитора, действителен только в пределах одного тика
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    pub address: String,
    pub title: String,
    pub workspace_id: WorkspaceId,
    pub geometry: Rect,
}

impl WindowInfo {
    pub fn new(workspace_id: WorkspaceId, position: Point, size: Point) -> Self {
        Self {
            address: String::new(),
            title: String::new(),
            workspace_id,
            geometry: Rect::from_origin_size(position, size),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

impl fmt::Display for WindowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{} @ {} (ws {})", self.address, self.geometry, self.workspace_id)
        } else {
            write!(f, "\"{}\" @ {} (ws {})", self.title, self.geometry, self.workspace_id)
        }
    }
}

/// Снимок монитора
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    pub id: i64,
    pub name: String,
    /// Логическая геометрия в координатах композитора
    pub geometry: Rect,
    pub active_workspace: Option<WorkspaceId>,
}

impl MonitorInfo {
    pub fn new(name: impl Into<String>, geometry: Rect) -> Self {
        Self {
            id: 0,
            name: name.into(),
            geometry,
            active_workspace: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_active_workspace(mut self, workspace: WorkspaceId) -> Self {
        self.active_workspace = Some(workspace);
        self
    }

    pub fn position(&self) -> Point {
        self.geometry.origin()
    }

    pub fn size(&self) -> Point {
        Point::new(self.geometry.width, self.geometry.height)
    }
}

impl fmt::Display for MonitorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_info_creation() {
        let window = WindowInfo::new(3, Point::new(10.0, 20.0), Point::new(300.0, 200.0))
            .with_title("kitty")
            .with_address("0xdeadbeef");

        assert_eq!(window.workspace_id, 3);
        assert_eq!(window.geometry, Rect::new(10.0, 20.0, 300.0, 200.0));
        assert_eq!(window.to_string(), "\"kitty\" @ 300x200+10+20 (ws 3)");
    }

    #[test]
    fn test_monitor_position_and_size() {
        let monitor = MonitorInfo::new("DP-1", Rect::new(1920.0, 0.0, 2560.0, 1440.0))
            .with_active_workspace(2);

        assert_eq!(monitor.position(), Point::new(1920.0, 0.0));
        assert_eq!(monitor.size(), Point::new(2560.0, 1440.0));
        assert_eq!(monitor.active_workspace, Some(2));
    }
}
