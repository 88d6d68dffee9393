use super::event_listener::ReloadListener;
use super::hyprland_data;
use super::hyprland_host::HyprlandSnapshot;
use super::r#trait::HostDriverTrait;
use super::session::PluginSession;
use crate::config::Config;
use crate::error::Result;
use crate::services::directive_source::{ConfigIssue, DirectiveSource};
use crate::services::executor::{create_executor, BoxedExecutor};
use crate::services::hot_edge::HotEdgePlugin;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info, warn};

/// Сколько держать уведомление об ошибке конфигурации
const NOTIFY_TIME: Duration = Duration::from_secs(5);

pub struct HyprlandDriver {
    config: Arc<Config>,
    session: PluginSession<BoxedExecutor>,
}

impl HyprlandDriver {
    pub fn new(config: Arc<Config>, sources: DirectiveSource) -> Result<Self> {
        info!("Инициализация HyprlandDriver");

        hyprland_data::ensure_instance()?;

        let executor = create_executor(&config, false)?;
        let plugin = HotEdgePlugin::new(executor).with_tick_period(config.host.tick_period);

        Ok(Self {
            session: PluginSession::new(plugin, sources),
            config,
        })
    }

    async fn run_impl(mut self) -> Result<()> {
        info!(
            "HyprlandDriver запущен: тик {}мс, пересчёт каждые {} тиков",
            self.config.host.tick_interval_ms, self.config.host.tick_period
        );

        self.reload();

        let (reload_tx, mut reload_rx) = mpsc::channel(1);
        let listener_handle = tokio::spawn(async move {
            if let Err(e) = ReloadListener::new(reload_tx).run().await {
                warn!("Слушатель событий Hyprland остановлен: {}", e);
            }
        });

        let mut ticks = interval(Duration::from_millis(self.config.host.tick_interval_ms));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut hangup = signal(SignalKind::hangup())?;

        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    let snapshot = HyprlandSnapshot::new();
                    self.session.tick(&snapshot);
                }
                Some(()) = reload_rx.recv() => {
                    info!("Hyprland перечитал конфигурацию, перечитываем директивы");
                    self.reload();
                }
                _ = hangup.recv() => {
                    info!("Получен SIGHUP, перечитываем директивы");
                    self.reload();
                }
                else => break,
            }
        }

        listener_handle.abort();
        Ok(())
    }

    fn reload(&mut self) {
        let issues = self.session.reload();
        self.report_issues(&issues);
    }

    fn report_issues(&self, issues: &[ConfigIssue]) {
        if !self.config.host.notify_errors {
            return;
        }

        for issue in issues {
            if let Err(e) = hyprland_data::notify_error(NOTIFY_TIME, &issue.to_string()) {
                error!("Не удалось показать уведомление в Hyprland: {}", e);
                break;
            }
        }
    }
}

impl Drop for HyprlandDriver {
    fn drop(&mut self) {
        info!("HyprlandDriver завершает работу");
    }
}

#[async_trait::async_trait]
impl HostDriverTrait for HyprlandDriver {
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}
