use crate::error::{HedgeError, Result};
use crate::events::{MonitorInfo, Point, Rect, WindowInfo, WorkspaceId};
use crate::hedge_error;
use hyprland::ctl::{notify, Color};
use hyprland::data::{Client, Clients, CursorPosition, Monitor, Monitors};
use hyprland::shared::HyprData;
use std::time::Duration;

/// Переменная окружения, по которой клиент находит сокеты запущенного Hyprland
const INSTANCE_SIGNATURE_VAR: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Бит настоящего полноэкранного режима в `fullscreen` клиента (1 это maximize)
const FULLSCREEN_BIT: u8 = 2;

/// Проверить, что процесс запущен внутри сессии Hyprland
pub fn ensure_instance() -> Result<()> {
    match std::env::var_os(INSTANCE_SIGNATURE_VAR) {
        Some(signature) if !signature.is_empty() => Ok(()),
        _ => HedgeError::service_unavailable(format!(
            "{} не задана, Hyprland не запущен?",
            INSTANCE_SIGNATURE_VAR
        )),
    }
}

pub fn monitors() -> Result<Vec<MonitorInfo>> {
    let monitors = Monitors::get().map_err(|e| hedge_error!(ipc, "monitors: {}", e))?;
    Ok(monitors.into_iter().map(monitor_info).collect())
}

/// Видимые окна вместе с признаком настоящего полноэкранного режима
pub fn clients() -> Result<Vec<(WindowInfo, bool)>> {
    let clients = Clients::get().map_err(|e| hedge_error!(ipc, "clients: {}", e))?;
    Ok(clients
        .into_iter()
        .filter(|c| c.mapped && !c.hidden)
        .map(|c| {
            let fullscreen = is_true_fullscreen(c.fullscreen.clone() as u8);
            (window_info(&c), fullscreen)
        })
        .collect())
}

pub fn cursor_position() -> Result<Point> {
    let cursor = CursorPosition::get().map_err(|e| hedge_error!(ipc, "cursorpos: {}", e))?;
    Ok(Point::new(cursor.x as f64, cursor.y as f64))
}

/// Показать ошибку уведомлением в углу экрана композитора
pub fn notify_error(time: Duration, message: &str) -> Result<()> {
    notify::call(
        notify::Icon::Error,
        time,
        Color::new(255, 85, 85, 255),
        message.to_string(),
    )
    .map_err(|e| hedge_error!(ipc, "notify: {}", e))
}

fn monitor_info(monitor: Monitor) -> MonitorInfo {
    let transform = monitor.transform as u8;
    let size = logical_size(
        f64::from(monitor.width),
        f64::from(monitor.height),
        f64::from(monitor.scale),
        transform,
    );
    let origin = Point::new(f64::from(monitor.x), f64::from(monitor.y));

    let info = MonitorInfo::new(monitor.name, Rect::from_origin_size(origin, size))
        .with_id(monitor.id as i64);
    match assigned_workspace(monitor.active_workspace.id as WorkspaceId) {
        Some(workspace) => info.with_active_workspace(workspace),
        None => info,
    }
}

fn window_info(client: &Client) -> WindowInfo {
    WindowInfo::new(
        client.workspace.id as WorkspaceId,
        Point::new(f64::from(client.at.0), f64::from(client.at.1)),
        Point::new(f64::from(client.size.0), f64::from(client.size.1)),
    )
    .with_address(client.address.to_string())
    .with_title(client.title.clone())
}

/// Логический размер: пиксели делятся на масштаб, при повороте на 90/270 оси меняются местами
fn logical_size(width: f64, height: f64, scale: f64, transform: u8) -> Point {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    let (width, height) = (width / scale, height / scale);
    if transform % 2 == 1 {
        Point::new(height, width)
    } else {
        Point::new(width, height)
    }
}

// Hyprland отдаёт id -1, пока рабочий стол не назначен
fn assigned_workspace(id: WorkspaceId) -> Option<WorkspaceId> {
    (id != -1).then_some(id)
}

fn is_true_fullscreen(mode: u8) -> bool {
    mode & FULLSCREEN_BIT != 0
}
