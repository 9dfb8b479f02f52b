//! Внешний слой вокруг движка кено.
//!
//! Здесь описываются:
//! - загрузка слипа и правил из файлов (loader.rs);
//! - консольное представление: валюта, строки слипа и итогов (format.rs);
//! - ошибки (errors.rs) — то, что видит пользователь CLI.

pub mod errors;
pub mod format;
pub mod loader;

pub use errors::*;
pub use format::*;
pub use loader::*;
