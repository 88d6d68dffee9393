use thiserror::Error;

#[derive(Error, Debug)]
pub enum HedgeError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка IPC Hyprland: {0}")]
    Ipc(String),

    #[error("Сервис недоступен: {0}")]
    ServiceUnavailable(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl HedgeError {
    pub fn service_unavailable<T>(msg: impl Into<String>) -> Result<T> {
        Err(HedgeError::ServiceUnavailable(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, HedgeError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! hedge_error {
    (ipc, $($arg:tt)*) => {
        $crate::error::HedgeError::Ipc(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::HedgeError::Internal(format!($($arg)*))
    };
}
