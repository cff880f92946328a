//! Line-based prompts over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use phonestock_inventory::{
    Condition, PhoneDetails, Price, STANDARD_SPEC_ATTRIBUTES, Specifications, split_list,
};

use crate::error::{CliError, CliResult};

pub const INVALID_PRICE: &str = "Invalid input. Enter numbers only (e.g. 250000 or 250,000).";
pub const INVALID_WHOLE_NUMBER: &str = "Invalid input. Enter a whole number only.";
pub const BLANK_IMEI: &str = "IMEI cannot be empty.";

/// Accepts ASCII digits only (no sign), within `u32` range.
pub fn parse_whole_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl core::fmt::Display) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show `label` and read one answer, trimmed.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled answer is rejected
    /// by the field's own validation instead of ending the session.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    pub fn prompt_price(&mut self, label: &str) -> CliResult<Price> {
        loop {
            let raw = self.prompt(label)?;
            match raw.parse::<Price>() {
                Ok(price) => return Ok(price),
                Err(err) => {
                    tracing::debug!(input = %raw, error = %err, "rejected price input");
                    self.say(INVALID_PRICE)?;
                }
            }
        }
    }

    pub fn prompt_whole_number(&mut self, label: &str) -> CliResult<u32> {
        loop {
            let raw = self.prompt(label)?;
            match parse_whole_number(&raw) {
                Some(n) => return Ok(n),
                None => {
                    tracing::debug!(input = %raw, "rejected whole-number input");
                    self.say(INVALID_WHOLE_NUMBER)?;
                }
            }
        }
    }

    pub fn prompt_imei(&mut self, label: &str) -> CliResult<String> {
        loop {
            let raw = self.prompt(label)?;
            if !raw.is_empty() {
                return Ok(raw);
            }
            self.say(BLANK_IMEI)?;
        }
    }

    pub fn prompt_condition(&mut self) -> CliResult<Condition> {
        self.say("\nCondition:")?;
        for (i, condition) in Condition::ALL.iter().enumerate() {
            self.say(format!("{} - {}", i + 1, condition))?;
        }
        let choice = self.prompt("Choose condition: ")?;
        Ok(Condition::from_menu_choice(&choice))
    }

    pub fn prompt_specifications(&mut self) -> CliResult<Specifications> {
        let mut specs = Specifications::new();
        for name in STANDARD_SPEC_ATTRIBUTES {
            let value = self.prompt(&format!("{name}: "))?;
            specs.insert(name, value);
        }
        Ok(specs)
    }

    pub fn prompt_list(&mut self, label: &str) -> CliResult<Vec<String>> {
        Ok(split_list(&self.prompt(label)?))
    }

    /// Walk the operator through every field of a new phone.
    pub fn collect_phone_details(&mut self, import_date: NaiveDate) -> CliResult<PhoneDetails> {
        self.say("\nEnter phone details step by step\n")?;

        let brand = self.prompt("Brand: ")?;
        let model = self.prompt("Model: ")?;
        let imei = self.prompt_imei("IMEI: ")?;
        let serial_number = self.prompt("Serial Number: ")?;
        let supplier = self.prompt("Supplier: ")?;

        let purchase_price = self.prompt_price("Purchase Price: ")?;
        let retail_price = self.prompt_price("Retail Price: ")?;
        let stock_quantity = self.prompt_whole_number("Stock Quantity: ")?;
        let condition = self.prompt_condition()?;
        let specifications = self.prompt_specifications()?;
        let warranty_months = self.prompt_whole_number("Warranty Months: ")?;

        let features = self.prompt_list("Features (comma separated): ")?;
        let marketing_tags = self.prompt_list("Marketing Tags (comma separated): ")?;
        let notes = self.prompt("Additional Notes: ")?;

        Ok(PhoneDetails {
            brand,
            model,
            imei,
            serial_number,
            import_date,
            supplier,
            purchase_price,
            retail_price,
            stock_quantity,
            condition,
            specifications,
            warranty_months,
            features,
            marketing_tags,
            notes,
        })
    }
}
