pub mod geometry;
pub mod window;

pub use geometry::{Point, Rect};
pub use window::{MonitorInfo, WindowInfo, WorkspaceId};

use std::fmt;

/// Обратные вызовы жизненного цикла, которые хост доставляет плагину
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Периодический тик хоста
    Tick,
    /// Смещение указателя с прошлого события
    MouseMove(Point),
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Tick => write!(f, "tick"),
            HostEvent::MouseMove(delta) => write!(f, "mouseMove {}", delta),
        }
    }
}
