//! Customer Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::non_empty;

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(id: String, data: CustomerCreate) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
        }
    }

    pub fn apply_update(&mut self, data: CustomerUpdate) {
        if let Some(name) = non_empty(data.name) {
            self.name = name;
        }
        if let Some(email) = non_empty(data.email) {
            self.email = email;
        }
        if let Some(phone) = non_empty(data.phone) {
            self.phone = phone;
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}
