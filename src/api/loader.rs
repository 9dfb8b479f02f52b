use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::domain::config::GameConfig;
use crate::domain::paytable::PayoutTable;
use crate::domain::ticket::{Ticket, TicketInput};

/// Формат файла слипа / правил. Выбирается по расширению, без угадывания
/// по содержимому.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlipFormat {
    Yaml,
    Json,
}

impl SlipFormat {
    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "yml" | "yaml" => Ok(SlipFormat::Yaml),
            "json" => Ok(SlipFormat::Json),
            _ => Err(ApiError::UnsupportedFormat(ext)),
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ApiError> {
        match self {
            SlipFormat::Yaml => Ok(serde_yaml::from_str(text)?),
            SlipFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }
}

/// Слип из YAML-текста. Семантическую проверку делает движок, не загрузчик.
pub fn parse_ticket_yaml(text: &str) -> Result<Ticket, ApiError> {
    SlipFormat::Yaml.parse::<TicketInput>(text).map(Ticket::from)
}

pub fn parse_ticket_json(text: &str) -> Result<Ticket, ApiError> {
    SlipFormat::Json.parse::<TicketInput>(text).map(Ticket::from)
}

/// Загрузить слип игрока с диска.
pub fn load_ticket(path: impl AsRef<Path>) -> Result<Ticket, ApiError> {
    load_as::<TicketInput>(path.as_ref()).map(Ticket::from)
}

/// Загрузить правила игры (частичный файл дополняется значениями по умолчанию).
pub fn load_rules(path: impl AsRef<Path>) -> Result<GameConfig, ApiError> {
    load_as(path.as_ref())
}

/// Тариф выплат по имени.
pub fn payout_rate(name: &str) -> Result<PayoutTable, ApiError> {
    PayoutTable::preset(name).ok_or_else(|| ApiError::UnknownPayoutRate(name.to_string()))
}

fn load_as<T: DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let format = SlipFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, "loaded file");
    format.parse(&text)
}
