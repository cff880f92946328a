//! IMEI-keyed record store.

use std::collections::HashMap;

use phonestock_core::{DomainError, DomainResult};

use crate::imei::Imei;
use crate::phone::CellPhone;

/// In-memory inventory: one record per IMEI, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InventoryManager {
    phones: HashMap<Imei, CellPhone>,
    order: Vec<Imei>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a phone. Fails without touching the store if its IMEI is taken.
    pub fn add(&mut self, phone: CellPhone) -> DomainResult<()> {
        let imei = phone.imei().clone();
        if self.phones.contains_key(&imei) {
            tracing::warn!(imei = %imei, "rejected phone with duplicate IMEI");
            return Err(DomainError::conflict(format!(
                "phone with IMEI {imei} already exists"
            )));
        }

        self.order.push(imei.clone());
        self.phones.insert(imei.clone(), phone);
        tracing::info!(imei = %imei, total = self.phones.len(), "phone added");
        Ok(())
    }

    /// Remove and return the phone stored under `imei`.
    pub fn remove(&mut self, imei: &str) -> DomainResult<CellPhone> {
        let Some(phone) = self.phones.remove(imei) else {
            tracing::warn!(imei, "remove requested for unknown IMEI");
            return Err(DomainError::not_found(format!("IMEI {imei}")));
        };

        self.order.retain(|k| k.as_str() != imei);
        tracing::info!(imei, total = self.phones.len(), "phone removed");
        Ok(phone)
    }

    pub fn find(&self, imei: &str) -> Option<&CellPhone> {
        self.phones.get(imei)
    }

    pub fn contains(&self, imei: &str) -> bool {
        self.phones.contains_key(imei)
    }

    /// All phones, oldest insertion first.
    pub fn list_all(&self) -> impl Iterator<Item = &CellPhone> + '_ {
        self.order.iter().filter_map(|imei| self.phones.get(imei))
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
