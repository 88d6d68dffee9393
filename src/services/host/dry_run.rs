use super::r#trait::{monitor_at, CompositorHost, HostDriverTrait};
use super::session::PluginSession;
use crate::config::Config;
use crate::error::Result;
use crate::events::{MonitorInfo, Point, Rect, WindowInfo, WorkspaceId};
use crate::services::directive_source::DirectiveSource;
use crate::services::executor::{BoxedExecutor, DryRunExecutor};
use crate::services::hot_edge::HotEdgePlugin;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::info;

/// Имя эмулируемого монитора
pub const DRY_RUN_MONITOR: &str = "DRY-1";

/// Шаг курсора за тик в пикселях
const CURSOR_STEP: f64 = 0.5;

/// Эмулируемый композитор: один монитор без окон, курсор ходит сверху вниз
pub struct DryRunHost {
    monitor: MonitorInfo,
    cursor: Point,
}

impl DryRunHost {
    pub fn new() -> Self {
        let monitor = MonitorInfo::new(DRY_RUN_MONITOR, Rect::new(0.0, 0.0, 1920.0, 1080.0))
            .with_active_workspace(1);
        let cursor = Point::new(monitor.geometry.width / 2.0, 0.0);
        Self { monitor, cursor }
    }

    /// Сдвинуть курсор; у нижнего края он возвращается наверх
    pub fn advance(&mut self) {
        let next = self.cursor.y + CURSOR_STEP;
        self.cursor.y = if next > self.monitor.geometry.bottom() {
            self.monitor.geometry.y
        } else {
            next
        };
    }
}

impl CompositorHost for DryRunHost {
    fn monitor_by_name(&self, name: &str) -> Option<&MonitorInfo> {
        (self.monitor.name == name).then_some(&self.monitor)
    }

    fn monitor_under_cursor(&self) -> Option<&MonitorInfo> {
        monitor_at(std::slice::from_ref(&self.monitor), self.cursor)
    }

    fn cursor_position(&self) -> Option<Point> {
        Some(self.cursor)
    }

    fn windows(&self) -> &[WindowInfo] {
        &[]
    }

    fn is_workspace_fullscreen(&self, _workspace: WorkspaceId) -> bool {
        false
    }
}

pub struct DryRunDriver {
    config: Arc<Config>,
    session: PluginSession<BoxedExecutor>,
    host: DryRunHost,
}

impl DryRunDriver {
    pub fn new(config: Arc<Config>, sources: DirectiveSource) -> Self {
        info!("Инициализация DryRunDriver (монитор {})", DRY_RUN_MONITOR);

        let executor: BoxedExecutor = Box::new(DryRunExecutor::new());
        let plugin = HotEdgePlugin::new(executor).with_tick_period(config.host.tick_period);

        Self {
            session: PluginSession::new(plugin, sources),
            host: DryRunHost::new(),
            config,
        }
    }

    async fn run_impl(mut self) -> Result<()> {
        info!("Dry-run режим - композитор эмулируется");
        self.session.reload();

        let mut ticks = interval(Duration::from_millis(self.config.host.tick_interval_ms));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut hangup = signal(SignalKind::hangup())?;

        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    self.host.advance();
                    self.session.tick(&self.host);
                }
                _ = hangup.recv() => {
                    info!("Получен SIGHUP, перечитываем директивы");
                    self.session.reload();
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl HostDriverTrait for DryRunDriver {
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}
