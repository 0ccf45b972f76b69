//! JSON conversion for Person
//!
//! The stored age travels with the record. Decoding keeps it as written and
//! does not derive it again from the current year.

use crate::error::Result;
use crate::models::core::person::Person;

impl Person {
    /// Encode this person as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a person from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
