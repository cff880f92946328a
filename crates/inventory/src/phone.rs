use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use phonestock_core::DomainResult;

use crate::imei::Imei;
use crate::price::Price;

/// Attributes captured for every phone, in display order.
pub const STANDARD_SPEC_ATTRIBUTES: [&str; 6] = [
    "CPU",
    "RAM (GB)",
    "Storage (GB)",
    "Operating System",
    "Battery (mAh)",
    "Camera (MP)",
];

/// Physical condition of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Refurbished,
    Used,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::Refurbished, Condition::Used];

    /// Maps a condition sub-menu answer; anything but `1` or `2` means used.
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Condition::New,
            "2" => Condition::Refurbished,
            _ => Condition::Used,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Refurbished => "Refurbished",
            Condition::Used => "Used",
        }
    }
}

impl core::fmt::Display for Condition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named technical attributes, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifications(Vec<(String, String)>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`; an existing entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Specifications::new();
        for (name, value) in iter {
            specs.insert(name, value);
        }
        specs
    }
}

impl core::fmt::Display for Specifications {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

/// Splits comma-separated console text into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Field values collected for a new phone, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDetails {
    pub brand: String,
    pub model: String,
    pub imei: String,
    pub serial_number: String,
    pub import_date: NaiveDate,
    pub supplier: String,
    pub purchase_price: Price,
    pub retail_price: Price,
    pub stock_quantity: u32,
    pub condition: Condition,
    pub specifications: Specifications,
    pub warranty_months: u32,
    pub features: Vec<String>,
    pub marketing_tags: Vec<String>,
    pub notes: String,
}

/// A stocked phone unit. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPhone {
    brand: String,
    model: String,
    imei: Imei,
    serial_number: String,
    import_date: NaiveDate,
    supplier: String,
    purchase_price: Price,
    retail_price: Price,
    stock_quantity: u32,
    condition: Condition,
    specifications: Specifications,
    warranty_months: u32,
    features: Vec<String>,
    marketing_tags: Vec<String>,
    notes: String,
}

impl CellPhone {
    /// Validate captured details and build the record.
    pub fn register(details: PhoneDetails) -> DomainResult<Self> {
        let imei = Imei::parse(&details.imei)?;

        Ok(Self {
            brand: details.brand,
            model: details.model,
            imei,
            serial_number: details.serial_number,
            import_date: details.import_date,
            supplier: details.supplier,
            purchase_price: details.purchase_price,
            retail_price: details.retail_price,
            stock_quantity: details.stock_quantity,
            condition: details.condition,
            specifications: details.specifications,
            warranty_months: details.warranty_months,
            features: normalize_entries(details.features),
            marketing_tags: normalize_entries(details.marketing_tags),
            notes: details.notes,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn imei(&self) -> &Imei {
        &self.imei
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn import_date(&self) -> NaiveDate {
        self.import_date
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn purchase_price(&self) -> Price {
        self.purchase_price
    }

    pub fn retail_price(&self) -> Price {
        self.retail_price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn specifications(&self) -> &Specifications {
        &self.specifications
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn marketing_tags(&self) -> &[String] {
        &self.marketing_tags
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

impl core::fmt::Display for CellPhone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Brand: {}", self.brand)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "IMEI: {}", self.imei)?;
        writeln!(f, "Serial Number: {}", self.serial_number)?;
        writeln!(f, "Import Date: {}", self.import_date.format("%Y-%m-%d"))?;
        writeln!(f, "Supplier: {}", self.supplier)?;
        writeln!(f, "Purchase Price: {}", self.purchase_price)?;
        writeln!(f, "Retail Price: {}", self.retail_price)?;
        writeln!(f, "Stock Quantity: {}", self.stock_quantity)?;
        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f, "Specifications: {}", self.specifications)?;
        writeln!(f, "Warranty (Months): {}", self.warranty_months)?;
        writeln!(f, "Features: {}", self.features.join(", "))?;
        writeln!(f, "Marketing Tags: {}", self.marketing_tags.join(", "))?;
        writeln!(f, "Notes: {}", self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonestock_core::DomainError;

    fn test_details(imei: &str) -> PhoneDetails {
        PhoneDetails {
            brand: "Samsung".to_string(),
            model: "Galaxy S24".to_string(),
            imei: imei.to_string(),
            serial_number: "R5CX10ABCDE".to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            supplier: "Metro Distribution".to_string(),
            purchase_price: "250,000".parse().unwrap(),
            retail_price: "299999.5".parse().unwrap(),
            stock_quantity: 12,
            condition: Condition::New,
            specifications: STANDARD_SPEC_ATTRIBUTES
                .iter()
                .zip(["Exynos 2400", "8", "256", "Android 14", "4000", "50"])
                .map(|(n, v)| (*n, v))
                .collect(),
            warranty_months: 24,
            features: vec!["5G".to_string(), " NFC ".to_string(), "".to_string()],
            marketing_tags: split_list("flagship, new arrival,"),
            notes: "Display unit".to_string(),
        }
    }

    #[test]
    fn register_builds_record_from_details() {
        let phone = CellPhone::register(test_details(" 356938035643809 ")).unwrap();

        assert_eq!(phone.imei().as_str(), "356938035643809");
        assert_eq!(phone.brand(), "Samsung");
        assert_eq!(phone.stock_quantity(), 12);
        assert_eq!(phone.condition(), Condition::New);
        assert_eq!(phone.specifications().get("RAM (GB)"), Some("8"));
        assert_eq!(phone.features(), ["5G", "NFC"]);
        assert_eq!(phone.marketing_tags(), ["flagship", "new arrival"]);
    }

    #[test]
    fn register_rejects_blank_imei() {
        let err = CellPhone::register(test_details("  ")).unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for blank IMEI"),
        }
    }

    #[test]
    fn condition_menu_choice_defaults_to_used() {
        assert_eq!(Condition::from_menu_choice("1"), Condition::New);
        assert_eq!(Condition::from_menu_choice(" 2 "), Condition::Refurbished);
        assert_eq!(Condition::from_menu_choice("3"), Condition::Used);
        assert_eq!(Condition::from_menu_choice("x"), Condition::Used);
        assert_eq!(Condition::from_menu_choice(""), Condition::Used);
    }

    #[test]
    fn specifications_keep_insertion_order_and_replace_in_place() {
        let mut specs = Specifications::new();
        specs.insert("CPU", "A17");
        specs.insert("RAM (GB)", "6");
        specs.insert("CPU", "A17 Pro");

        assert_eq!(specs.len(), 2);
        assert_eq!(specs.to_string(), "CPU: A17 Pro, RAM (GB): 6");
    }

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(split_list(" a ,b,, c "), ["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn display_renders_one_field_per_line() {
        let phone = CellPhone::register(test_details("356938035643809")).unwrap();
        let rendered = phone.to_string();

        let expected = "\
Brand: Samsung
Model: Galaxy S24
IMEI: 356938035643809
Serial Number: R5CX10ABCDE
Import Date: 2024-03-15
Supplier: Metro Distribution
Purchase Price: 250,000.00
Retail Price: 299,999.50
Stock Quantity: 12
Condition: New
Specifications: CPU: Exynos 2400, RAM (GB): 8, Storage (GB): 256, Operating System: Android 14, Battery (mAh): 4000, Camera (MP): 50
Warranty (Months): 24
Features: 5G, NFC
Marketing Tags: flagship, new arrival
Notes: Display unit
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn serializes_condition_lowercase() {
        let phone = CellPhone::register(test_details("356938035643809")).unwrap();
        let json = serde_json::to_value(&phone).unwrap();
        assert_eq!(json["condition"], "new");
        assert_eq!(json["imei"], "356938035643809");
    }
}
