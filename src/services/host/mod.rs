//! Host adapters: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for talking to the
//! compositor (or emulating it) and turning timers, signals and compositor events
//! into plugin lifecycle callbacks. Edge state decisions belong to `hot_edge`.

mod dry_run;
mod event_listener;
mod hyprland_driver;
mod hyprland_data;
mod hyprland_host;
mod session;
mod r#trait;

pub use self::r#trait::{create_host_driver, CompositorHost};

#[cfg(test)]
pub use self::r#trait::monitor_at;
