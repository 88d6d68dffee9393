use super::{EdgeDefinition, Side};
use crate::events::{Point, Rect, WindowInfo, WorkspaceId};

/// Зоны активации и деактивации края
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeZones {
    pub activation: Rect,
    pub deactivation: Rect,
}

/// Построить зоны края для монитора с заданными позицией и размером.
///
/// Полоса прижата к стороне `side` и тянется на всю ширину (top/bottom) или
/// высоту (left/right) монитора.
pub fn resolve_zones(
    edge: &EdgeDefinition,
    monitor_position: Point,
    monitor_size: Point,
) -> EdgeZones {
    EdgeZones {
        activation: strip(edge.side, edge.activate_zone_size, monitor_position, monitor_size),
        deactivation: strip(edge.side, edge.deactivate_zone_size, monitor_position, monitor_size),
    }
}

fn strip(side: Side, thickness: i32, pos: Point, size: Point) -> Rect {
    let t = f64::from(thickness);
    match side {
        Side::Top => Rect::new(pos.x, pos.y, size.x, t),
        Side::Bottom => Rect::new(pos.x, pos.y + size.y - t, size.x, t),
        Side::Left => Rect::new(pos.x, pos.y, t, size.y),
        Side::Right => Rect::new(pos.x + size.x - t, pos.y, t, size.y),
    }
}

/// Есть ли на рабочем столе `workspace` окно, перекрывающее `zone`.
/// Останавливается на первом совпадении.
pub fn window_intersects(zone: &Rect, workspace: WorkspaceId, windows: &[WindowInfo]) -> bool {
    windows
        .iter()
        .filter(|window| window.workspace_id == workspace)
        .any(|window| window.geometry.intersects(zone))
}
