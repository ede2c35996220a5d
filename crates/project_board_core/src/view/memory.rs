//! In-memory hosts.
//!
//! Keep field values, alerts and rendered items in plain collections. The
//! terminal shell and the FFI bridge render from them.

use crate::view::component::InsertPosition;
use crate::view::host::{FormField, FormHost, ListHost};
use std::collections::HashMap;

/// Form host holding field text and raised alerts.
#[derive(Debug, Default, Clone)]
pub struct MemoryForm {
    fields: HashMap<FormField, String>,
    alerts: Vec<String>,
    attached: Option<(String, InsertPosition)>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Types `value` into `field`, replacing its content.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Removes and returns alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn attached(&self) -> Option<(&str, InsertPosition)> {
        self.attached
            .as_ref()
            .map(|(id, position)| (id.as_str(), *position))
    }
}

impl FormHost for MemoryForm {
    fn attach(&mut self, element_id: &str, position: InsertPosition) {
        self.attached = Some((element_id.to_string(), position));
    }

    fn field_value(&self, field: FormField) -> String {
        self.value(field).to_string()
    }

    fn set_field_value(&mut self, field: FormField, value: &str) {
        self.set(field, value);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// List host holding rendered item text.
#[derive(Debug, Default, Clone)]
pub struct MemoryList {
    attached: Option<(String, InsertPosition)>,
    list_id: Option<String>,
    heading: Option<String>,
    items: Vec<String>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached(&self) -> Option<(&str, InsertPosition)> {
        self.attached
            .as_ref()
            .map(|(id, position)| (id.as_str(), *position))
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl ListHost for MemoryList {
    fn attach(&mut self, element_id: &str, position: InsertPosition) {
        self.attached = Some((element_id.to_string(), position));
    }

    fn set_list_id(&mut self, list_id: &str) {
        self.list_id = Some(list_id.to_string());
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = Some(heading.to_string());
    }

    fn clear_items(&mut self) {
        self.items.clear();
    }

    fn append_item(&mut self, text: &str) {
        self.items.push(text.to_string());
    }
}
