use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::{info, error, warn};
use std::sync::Arc;
mod config;
mod error;
mod events;
mod services;
mod utils;

use config::Config;
use services::{
    create_host_driver,
    hot_edge::{parse_directive, HotEdgePlugin},
    DirectiveSource,
};

#[derive(Parser, Debug)]
#[command(name = "hedge")]
#[command(about = "Горячие края мониторов для Hyprland: команды при упоре курсора в край")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "hedge.toml")]
    config: String,

    /// Режим сухого запуска (эмулированный хост, команды только логируются)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (перекрывает logging.level)
    #[arg(long)]
    log_level: Option<String>,

    /// Только проверить директивы hotedge и выйти
    #[arg(long)]
    check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let config = Arc::new(Config::load(&args.config)?);

    // Инициализация системы логирования
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format)?;

    let plugin_info = HotEdgePlugin::<services::executor::BoxedExecutor>::info();
    info!(
        "Запуск {} v{} ({}, автор {})",
        plugin_info.name, plugin_info.version, plugin_info.description, plugin_info.author
    );
    info!("Конфигурация загружена из: {}", args.config);

    let sources = DirectiveSource::from_config(&config.edges);

    if args.check {
        return check_directives(&sources);
    }

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    let host_driver = create_host_driver(config.clone(), sources, args.dry_run)?;

    info!("Все компоненты инициализированы");

    let host_handle = tokio::spawn(async move {
        if let Err(e) = host_driver.run().await {
            error!("Ошибка в HostDriver: {}", e);
        }
    });

    info!("Все сервисы запущены");

    // Ожидание сигнала завершения
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Получен сигнал завершения (Ctrl+C)");
        }
        Err(err) => {
            error!("Ошибка при ожидании сигнала завершения: {}", err);
        }
    }

    info!("Завершение работы...");

    host_handle.abort();

    // Ожидаем завершения задач (с таймаутом)
    let shutdown_timeout = tokio::time::Duration::from_secs(5);
    let shutdown_result = tokio::time::timeout(shutdown_timeout, async {
        let _ = host_handle.await;
    }).await;

    match shutdown_result {
        Ok(_) => info!("Все сервисы завершили работу корректно"),
        Err(_) => warn!("Таймаут при завершении сервисов"),
    }

    info!("Hedge завершил работу");
    Ok(())
}

fn check_directives(sources: &DirectiveSource) -> Result<()> {
    let mut valid = 0usize;
    let issues = sources.load(|_, value| {
        parse_directive(value)?;
        valid += 1;
        Ok(())
    });

    for file in sources.files() {
        println!("источник: {}", file.display());
    }
    for issue in &issues {
        println!("{}", issue);
    }
    println!("корректных директив: {}, ошибок: {}", valid, issues.len());

    if !issues.is_empty() {
        anyhow::bail!("В директивах hotedge найдено ошибок: {}", issues.len());
    }
    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if format == "full" {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }

    Ok(())
}
