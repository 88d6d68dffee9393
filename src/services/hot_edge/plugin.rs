use super::directive::{parse_directive, DirectiveError};
use super::evaluator::evaluate_edge;
use super::EdgeRegistry;
use crate::events::{HostEvent, Point};
use crate::services::executor::CommandExecutor;
use crate::services::host::CompositorHost;
use crate::{debug_if_enabled, trace_if_enabled};
use tracing::{info, warn};

/// Раз во сколько тиков хоста пересчитывать состояние краёв
pub const DEFAULT_TICK_PERIOD: u64 = 20;

/// Смещения меньше этого считаются дрожанием, а не движением
const MOUSE_MOVE_THRESHOLD: f64 = 0.5;

/// Описание плагина, которое хост показывает в списке плагинов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

/// Контекст плагина: реестр краёв, счётчик тиков и исполнитель команд.
///
/// Все обратные вызовы приходят последовательно из одного потока хоста.
pub struct HotEdgePlugin<E> {
    registry: EdgeRegistry,
    executor: E,
    tick_period: u64,
    tick_counter: u64,
    // Выставляется в on_mouse_move, но пересчёт от него не зависит
    mouse_moved: bool,
}

impl<E: CommandExecutor> HotEdgePlugin<E> {
    pub fn new(executor: E) -> Self {
        Self {
            registry: EdgeRegistry::new(),
            executor,
            tick_period: DEFAULT_TICK_PERIOD,
            tick_counter: 0,
            mouse_moved: false,
        }
    }

    pub fn with_tick_period(mut self, tick_period: u64) -> Self {
        self.tick_period = tick_period.max(1);
        self
    }

    pub fn info() -> PluginInfo {
        PluginInfo {
            name: "Hedge",
            description: "Hyprland hot edge",
            author: "KZdkm",
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Обработчик ключевого слова `hotedge`. Имя ключевого слова не используется.
    pub fn handle_keyword(&mut self, _keyword: &str, value: &str) -> Result<(), DirectiveError> {
        let definition = parse_directive(value)?;

        if definition.deactivate_zone_size < definition.activate_zone_size {
            warn!("Край {}: зона деактивации тоньше зоны активации", definition);
        }

        info!("Зарегистрирован край {}", definition);
        self.registry.register(definition);
        Ok(())
    }

    /// Хост собирается перечитать конфиг: все края и их состояния сбрасываются
    pub fn on_pre_config_reload(&mut self) {
        info!("Перезагрузка конфигурации: сброс {} краёв", self.registry.len());
        self.registry.clear();
    }

    pub fn on_mouse_move(&mut self, delta: Point) {
        if delta.distance(Point::default()) > MOUSE_MOVE_THRESHOLD {
            self.mouse_moved = true;
        }
    }

    /// Будет ли следующий тик проходом пересчёта
    pub fn is_evaluation_tick(&self) -> bool {
        self.tick_counter % self.tick_period == 0
    }

    pub fn on_tick(&mut self, host: &dyn CompositorHost) {
        if self.is_evaluation_tick() {
            trace_if_enabled!(
                "Пересчёт краёв #{} (мышь двигалась: {})",
                self.tick_counter / self.tick_period,
                self.mouse_moved
            );

            for entry in self.registry.entries_mut() {
                if let Some(transition) = evaluate_edge(entry, host, &self.executor) {
                    debug_if_enabled!("Край {} переключён: {:?}", entry.definition, transition);
                }
            }

            self.mouse_moved = false;
        }

        self.tick_counter = self.tick_counter.wrapping_add(1);
    }

    pub fn handle_event(&mut self, event: HostEvent, host: &dyn CompositorHost) {
        match event {
            HostEvent::Tick => self.on_tick(host),
            HostEvent::MouseMove(delta) => self.on_mouse_move(delta),
        }
    }

    pub fn registry(&self) -> &EdgeRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn mouse_moved(&self) -> bool {
        self.mouse_moved
    }

    #[cfg(test)]
    pub fn tick_period(&self) -> u64 {
        self.tick_period
    }

    #[cfg(test)]
    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }
}
