//! Main menu loop.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use phonestock_core::DomainError;
use phonestock_inventory::{CellPhone, InventoryManager};

use crate::console::Console;
use crate::error::{CliError, CliResult};

pub const BANNER: &str = "\n--- Cell Phone Inventory Management System ---";
pub const SEPARATOR: &str = "----------------------------------------";

/// Top-level menu entries, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPhone,
    RemovePhone,
    SearchPhone,
    ViewInventory,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddPhone,
        MenuChoice::RemovePhone,
        MenuChoice::SearchPhone,
        MenuChoice::ViewInventory,
        MenuChoice::Exit,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::AddPhone),
            "2" => Some(MenuChoice::RemovePhone),
            "3" => Some(MenuChoice::SearchPhone),
            "4" => Some(MenuChoice::ViewInventory),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddPhone => "Add phone",
            MenuChoice::RemovePhone => "Remove phone",
            MenuChoice::SearchPhone => "Search phone by IMEI",
            MenuChoice::ViewInventory => "View inventory",
            MenuChoice::Exit => "Exit",
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One interactive run: a console plus the inventory it edits.
pub struct Session<R, W> {
    console: Console<R, W>,
    manager: InventoryManager,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            manager: InventoryManager::new(),
            today: local_today,
        }
    }

    /// Replace the import-date source (tests pin it).
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn manager(&self) -> &InventoryManager {
        &self.manager
    }

    pub fn into_parts(self) -> (InventoryManager, W) {
        (self.manager, self.console.into_output())
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CliError::InputClosed) => {
                    tracing::info!("input closed; ending session");
                    self.console.say("\nExiting system.")?;
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> CliResult<Flow> {
        self.show_menu()?;
        let answer = self.console.prompt("Enter your choice: ")?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            self.console.say("Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddPhone => self.add_phone()?,
            MenuChoice::RemovePhone => self.remove_phone()?,
            MenuChoice::SearchPhone => self.search_phone()?,
            MenuChoice::ViewInventory => self.view_inventory()?,
            MenuChoice::Exit => {
                self.console.say("Exiting system.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> CliResult<()> {
        self.console.say(BANNER)?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, choice.label()))?;
        }
        Ok(())
    }

    fn add_phone(&mut self) -> CliResult<()> {
        let details = self.console.collect_phone_details((self.today)())?;

        let outcome = CellPhone::register(details).and_then(|phone| self.manager.add(phone));
        match outcome {
            Ok(()) => self.console.say("Phone added successfully."),
            Err(DomainError::Conflict(_)) => {
                self.console.say("Phone with this IMEI already exists.")
            }
            Err(err) => self.console.say(format!("Phone not added: {err}")),
        }
    }

    fn remove_phone(&mut self) -> CliResult<()> {
        let imei = self.console.prompt("Enter IMEI to remove: ")?;
        match self.manager.remove(&imei) {
            Ok(_) => self.console.say("Phone removed successfully."),
            Err(_) => self.console.say("IMEI not found."),
        }
    }

    fn search_phone(&mut self) -> CliResult<()> {
        let imei = self.console.prompt("Enter IMEI to search: ")?;
        match self.manager.find(&imei) {
            Some(phone) => self.console.say(phone),
            None => self.console.say("Phone not found."),
        }
    }

    fn view_inventory(&mut self) -> CliResult<()> {
        if self.manager.is_empty() {
            return self.console.say("Inventory is empty.");
        }
        for phone in self.manager.list_all() {
            self.console.say(phone)?;
            self.console.say(SEPARATOR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddPhone));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::ViewInventory));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn menu_numbers_match_positions() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(MenuChoice::parse(&(i + 1).to_string()), Some(*choice));
        }
    }

    #[test]
    fn separator_is_forty_dashes() {
        assert_eq!(SEPARATOR, "-".repeat(40));
    }
}
