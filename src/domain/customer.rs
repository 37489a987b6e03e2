use serde::{Deserialize, Serialize};

/// Identity of the person placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}
