use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего слоя (загрузка слипа, CLI).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Файл не читается.
    #[error("Не удалось прочитать {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Битый YAML.
    #[error("Некорректный YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Битый JSON.
    #[error("Некорректный JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Для такого формата файла нет парсера.
    #[error("Нет парсера для формата '{0}'")]
    UnsupportedFormat(String),

    /// Нет тарифа выплат с таким именем.
    #[error("Неизвестный тариф выплат '{0}'")]
    UnknownPayoutRate(String),

    /// Ошибка движка (билет, конфиг).
    #[error(transparent)]
    Engine(#[from] EngineError),
}
