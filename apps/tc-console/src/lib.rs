//! ТУ 管理控制台：会话、容量看板、技术条件列表与导出、后台维护。

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod messages;
pub mod render;

pub use cli::Cli;
pub use console::Console;
pub use error::ConsoleError;
