use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::services::hot_edge::DEFAULT_TICK_PERIOD;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub executor: ExecutorConfig,
    #[serde(default)]
    pub edges: EdgesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostConfig {
    /// `hyprland` или `dry-run`
    pub backend: String,
    /// Период тика хоста
    pub tick_interval_ms: u64,
    /// Пересчёт краёв выполняется раз в столько тиков
    pub tick_period: u64,
    /// Показывать ошибки директив уведомлением композитора
    pub notify_errors: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutorConfig {
    /// `hyprland` (dispatch exec) или `shell` (`<shell> -c`)
    pub mode: String,
    /// Оболочка для режима `shell`
    pub shell: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EdgesConfig {
    /// Файлы в формате hyprland.conf, из которых читаются директивы `hotedge`;
    /// по умолчанию `~/.config/hypr/hedge.conf`
    #[serde(default)]
    pub sources: Vec<String>,
    /// Значения `hotedge` прямо в этом файле
    #[serde(default)]
    pub directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            backend: "hyprland".to_string(),
            tick_interval_ms: 10,
            tick_period: DEFAULT_TICK_PERIOD,
            notify_errors: true,
        }
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            mode: "hyprland".to_string(),
            shell: "/bin/sh".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        // Отсутствующий файл не ошибка: остаются значения по умолчанию
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("HEDGE_").split("__"));

        Self::from_figment(figment)
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        match self.host.backend.as_str() {
            "hyprland" | "dry-run" => {}
            _ => anyhow::bail!("Неизвестный хост: {}", self.host.backend),
        }

        if self.host.tick_interval_ms == 0 {
            anyhow::bail!("tick_interval_ms должно быть больше 0");
        }

        if self.host.tick_period == 0 {
            anyhow::bail!("tick_period должно быть больше 0");
        }

        match self.executor.mode.as_str() {
            "hyprland" | "shell" => {}
            _ => anyhow::bail!("Неверный режим запуска команд: {}", self.executor.mode),
        }

        if self.executor.shell.is_empty() {
            anyhow::bail!("executor.shell не может быть пустым");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::from_figment(
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(toml)),
        )
    }

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.host.tick_period, 20);
        assert_eq!(config.executor.shell, "/bin/sh");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [host]
            tick_period = 5

            [edges]
            directives = ["DP-1,top,10,50,a,b,0"]
            "#,
        )
        .unwrap();

        assert_eq!(config.host.tick_period, 5);
        assert_eq!(config.host.tick_interval_ms, 10);
        assert_eq!(config.host.backend, "hyprland");
        assert_eq!(config.edges.directives.len(), 1);
        assert!(config.edges.sources.is_empty());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(from_toml("[host]\ntick_period = 0").is_err());
        assert!(from_toml("[host]\nbackend = \"sway\"").is_err());
        assert!(from_toml("[executor]\nmode = \"systemd\"").is_err());
        assert!(from_toml("[logging]\nlevel = \"loud\"").is_err());
        assert!(from_toml("[executor]\nshell = \"\"").is_err());
    }
}
