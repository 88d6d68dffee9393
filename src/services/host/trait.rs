use crate::config::Config;
use crate::error::Result;
use crate::events::{MonitorInfo, Point, WindowInfo, WorkspaceId};
use crate::services::directive_source::DirectiveSource;
use std::sync::Arc;

/// Read-only view of the compositor, valid for a single tick.
///
/// Lookup misses are `None`/empty, never errors.
pub trait CompositorHost {
    fn monitor_by_name(&self, name: &str) -> Option<&MonitorInfo>;

    /// Monitor the pointer currently resides on
    fn monitor_under_cursor(&self) -> Option<&MonitorInfo>;

    /// Pointer position in compositor coordinates
    fn cursor_position(&self) -> Option<Point>;

    fn windows(&self) -> &[WindowInfo];

    fn is_workspace_fullscreen(&self, workspace: WorkspaceId) -> bool;
}

/// Монитор под курсором так, как его выбирает Hyprland: левая и верхняя
/// границы входят в монитор, правая и нижняя нет. Вне всех мониторов
/// берётся ближайший.
pub fn monitor_at(monitors: &[MonitorInfo], cursor: Point) -> Option<&MonitorInfo> {
    monitors
        .iter()
        .find(|m| m.geometry.covers_point(cursor))
        .or_else(|| {
            monitors.iter().min_by(|a, b| {
                a.geometry
                    .distance_to(cursor)
                    .total_cmp(&b.geometry.distance_to(cursor))
            })
        })
}

/// Trait for host drivers that can run in different modes
#[async_trait::async_trait]
pub trait HostDriverTrait {
    /// Run the driver until the task is aborted
    async fn run(self: Box<Self>) -> Result<()>;
}

/// Factory function to create an appropriate host driver based on the dry_run flag
pub fn create_host_driver(
    config: Arc<Config>,
    sources: DirectiveSource,
    dry_run: bool,
) -> Result<Box<dyn HostDriverTrait + Send>> {
    if dry_run || config.host.backend == "dry-run" {
        Ok(Box::new(super::dry_run::DryRunDriver::new(config, sources)))
    } else {
        Ok(Box::new(super::hyprland_driver::HyprlandDriver::new(config, sources)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Rect;

    fn side_by_side() -> Vec<MonitorInfo> {
        vec![
            MonitorInfo::new("DP-1", Rect::new(0.0, 0.0, 1920.0, 1080.0)),
            MonitorInfo::new("HDMI-A-1", Rect::new(1920.0, 0.0, 1920.0, 1080.0)),
        ]
    }

    fn name_at(monitors: &[MonitorInfo], x: f64, y: f64) -> Option<&str> {
        monitor_at(monitors, Point::new(x, y)).map(|m| m.name.as_str())
    }

    #[test]
    fn shared_column_belongs_to_right_monitor() {
        let monitors = side_by_side();

        assert_eq!(name_at(&monitors, 1919.0, 500.0), Some("DP-1"));
        assert_eq!(name_at(&monitors, 1920.0, 500.0), Some("HDMI-A-1"));
        assert_eq!(name_at(&monitors, 0.0, 0.0), Some("DP-1"));
    }

    #[test]
    fn outside_all_monitors_picks_nearest() {
        let monitors = side_by_side();

        assert_eq!(name_at(&monitors, 3840.0, 1080.0), Some("HDMI-A-1"));
        assert_eq!(name_at(&monitors, -50.0, 200.0), Some("DP-1"));
        assert_eq!(name_at(&[], 10.0, 10.0), None);
    }
}
