//! Hot edge core: responsibility and boundaries
//!
//! This module owns the edge registry and the edge-zone state machine. It knows
//! nothing about Hyprland: the compositor is reached only through
//! [`CompositorHost`](crate::services::host::CompositorHost) snapshots and
//! commands leave only through
//! [`CommandExecutor`](crate::services::executor::CommandExecutor).

mod directive;
mod evaluator;
mod plugin;
mod zones;

#[cfg(test)]
pub(crate) mod test_support;

pub use directive::{parse_directive, DirectiveError, HOTEDGE_KEYWORD};
pub use plugin::{HotEdgePlugin, DEFAULT_TICK_PERIOD};

use std::fmt;
use std::str::FromStr;

/// Сторона монитора, к которой привязан край
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl FromStr for Side {
    type Err = DirectiveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(DirectiveError::InvalidSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// Описание края из директивы `hotedge`; после разбора не меняется
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDefinition {
    pub monitor_name: String,
    pub side: Side,
    /// Толщина полосы активации в пикселях
    pub activate_zone_size: i32,
    /// Толщина полосы деактивации (ожидается не меньше полосы активации)
    pub deactivate_zone_size: i32,
    pub activate_command: String,
    pub deactivate_command: String,
    pub dodge_window: bool,
}

impl fmt::Display for EdgeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({}/{}px{})",
            self.monitor_name,
            self.side,
            self.activate_zone_size,
            self.deactivate_zone_size,
            if self.dodge_window { ", dodge" } else { "" }
        )
    }
}

/// Состояние края во время работы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeState {
    pub activated: bool,
}

/// Описание края вместе с его состоянием; пара никогда не разделяется
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntry {
    pub definition: EdgeDefinition,
    pub state: EdgeState,
}

impl EdgeEntry {
    pub fn new(definition: EdgeDefinition) -> Self {
        Self {
            definition,
            state: EdgeState::default(),
        }
    }
}

/// Упорядоченный список краёв в порядке появления директив
#[derive(Debug, Default)]
pub struct EdgeRegistry {
    entries: Vec<EdgeEntry>,
}

impl EdgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: EdgeDefinition) {
        self.entries.push(EdgeEntry::new(definition));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[EdgeEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut EdgeEntry> {
        self.entries.iter_mut()
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.state.activated).count()
    }
}
