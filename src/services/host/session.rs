use super::r#trait::CompositorHost;
use crate::events::{HostEvent, Point};
use crate::services::directive_source::{ConfigIssue, DirectiveSource};
use crate::services::executor::CommandExecutor;
use crate::services::hot_edge::HotEdgePlugin;
use tracing::{info, warn};

/// Связывает плагин с источниками директив и превращает опрос хоста в
/// обратные вызовы жизненного цикла
pub struct PluginSession<E> {
    plugin: HotEdgePlugin<E>,
    sources: DirectiveSource,
    last_cursor: Option<Point>,
}

impl<E: CommandExecutor> PluginSession<E> {
    pub fn new(plugin: HotEdgePlugin<E>, sources: DirectiveSource) -> Self {
        Self {
            plugin,
            sources,
            last_cursor: None,
        }
    }

    /// preConfigReload, затем повторный разбор всех директив
    pub fn reload(&mut self) -> Vec<ConfigIssue> {
        self.plugin.on_pre_config_reload();
        self.last_cursor = None;

        let plugin = &mut self.plugin;
        let issues = self
            .sources
            .load(|keyword, value| plugin.handle_keyword(keyword, value));

        for issue in &issues {
            warn!("Ошибка конфигурации: {}", issue);
        }
        if self.plugin.registry().is_empty() {
            warn!("Не найдено ни одной директивы hotedge");
        } else {
            info!("Активно краёв: {}", self.plugin.registry().len());
        }

        issues
    }

    /// Один тик хоста. Перед проходом пересчёта доставляется смещение курсора
    /// с прошлого прохода.
    pub fn tick(&mut self, host: &dyn CompositorHost) {
        if self.plugin.is_evaluation_tick() {
            if let Some(cursor) = host.cursor_position() {
                if let Some(previous) = self.last_cursor {
                    self.plugin
                        .handle_event(HostEvent::MouseMove(cursor.delta_from(previous)), host);
                }
                self.last_cursor = Some(cursor);
            }
        }

        self.plugin.handle_event(HostEvent::Tick, host);
    }

    #[cfg(test)]
    pub fn plugin(&self) -> &HotEdgePlugin<E> {
        &self.plugin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::hot_edge::test_support::{FakeHost, RecordingExecutor};

    fn session(inline: &[&str]) -> PluginSession<RecordingExecutor> {
        let plugin = HotEdgePlugin::new(RecordingExecutor::default()).with_tick_period(1);
        let inline = inline.iter().map(|s| s.to_string()).collect();
        let sources = DirectiveSource::new(Vec::new(), inline);
        PluginSession::new(plugin, sources)
    }

    #[test]
    fn test_reload_rebuilds_registry_from_sources() {
        let mut session = session(&["DP-1,top,10,50,on,off,0", "DP-1,top,10"]);

        let issues = session.reload();
        assert_eq!(issues.len(), 1);
        assert_eq!(session.plugin().registry().len(), 1);

        let host = FakeHost::single_monitor().with_cursor(Point::new(100.0, 2.0));
        session.tick(&host);
        assert_eq!(session.plugin().registry().active_count(), 1);

        // Повторная загрузка не накапливает края и сбрасывает состояние
        session.reload();
        assert_eq!(session.plugin().registry().len(), 1);
        assert_eq!(session.plugin().registry().active_count(), 0);
    }

    #[test]
    fn test_cursor_is_sampled_only_on_evaluation_ticks() {
        let plugin = HotEdgePlugin::new(RecordingExecutor::default()).with_tick_period(2);
        let mut session = PluginSession::new(plugin, DirectiveSource::default());
        session.reload();

        let host = FakeHost::single_monitor().with_cursor(Point::new(100.0, 100.0));
        session.tick(&host);
        assert_eq!(session.last_cursor, Some(Point::new(100.0, 100.0)));

        let host = host.with_cursor(Point::new(140.0, 100.0));
        session.tick(&host);
        assert_eq!(session.last_cursor, Some(Point::new(100.0, 100.0)));

        session.tick(&host);
        assert_eq!(session.last_cursor, Some(Point::new(140.0, 100.0)));
        assert!(!session.plugin().mouse_moved());
    }
}
