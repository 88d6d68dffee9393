use crate::error::Result;
use crate::hedge_error;
use hyprland::event_listener::EventListener;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

/// Слушает сокет событий Hyprland в отдельном блокирующем потоке и сообщает
/// драйверу о `configreloaded`
pub struct ReloadListener {
    reload_tx: mpsc::Sender<()>,
}

impl ReloadListener {
    pub fn new(reload_tx: mpsc::Sender<()>) -> Self {
        Self { reload_tx }
    }

    pub async fn run(self) -> Result<()> {
        let reload_tx = self.reload_tx;
        let (done_tx, done_rx) = oneshot::channel();

        // Поток не присоединяется: слушатель блокирующий и живёт до выхода процесса
        std::thread::Builder::new()
            .name("hyprland-events".to_string())
            .spawn(move || {
                let mut listener = EventListener::new();
                listener.add_config_reloaded_handler(move || {
                    notify_reload(&reload_tx);
                });

                info!("Подключено к сокету событий Hyprland");
                let result = listener
                    .start_listener()
                    .map_err(|e| hedge_error!(ipc, "сокет событий: {}", e));
                let _ = done_tx.send(result);
            })?;

        done_rx
            .await
            .map_err(|_| hedge_error!(internal, "поток слушателя событий завершился аварийно"))??;

        warn!("Сокет событий Hyprland закрыт");
        Ok(())
    }
}

/// Несколько перезагрузок подряд схлопываются в одну
fn notify_reload(reload_tx: &mpsc::Sender<()>) -> bool {
    match reload_tx.try_send(()) {
        Ok(()) | Err(mpsc::error::TrySendError::Full(())) => true,
        Err(mpsc::error::TrySendError::Closed(())) => false,
    }
}
