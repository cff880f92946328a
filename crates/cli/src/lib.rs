//! `phonestock-cli`
//!
//! **Responsibility:** the interactive console in front of the inventory.
//!
//! This crate provides:
//! - Line-based field prompts with numeric validation and re-prompting
//! - The five-choice menu loop dispatching to [`InventoryManager`]
//! - Command-line configuration for the `phonestock` binary
//!
//! [`InventoryManager`]: phonestock_inventory::InventoryManager

pub mod config;
pub mod console;
pub mod error;
pub mod menu;

pub use config::Cli;
pub use console::Console;
pub use error::{CliError, CliResult};
pub use menu::{MenuChoice, Session};
