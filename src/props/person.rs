use crate::foundation::error::{CardError, CardResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pronoun used when the caller omits one.
pub const DEFAULT_PRONOUN: &str = "Their";

/// Sole hobby used when the caller omits the list.
pub const DEFAULT_HOBBY: &str = "coding";

pub(crate) fn default_hobbies() -> Vec<String> {
    vec![DEFAULT_HOBBY.to_string()]
}

pub(crate) fn default_pronoun() -> String {
    DEFAULT_PRONOUN.to_string()
}

/// Postal address embedded in a [`Person`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    /// House number on the street.
    pub house_number: u32,
    /// Street name.
    pub street: String,
    /// City name.
    pub city: String,
}

impl Address {
    /// Create an address from its three parts.
    pub fn new(house_number: u32, street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            house_number,
            street: street.into(),
            city: city.into(),
        }
    }
}

/// Typed props of a person card.
///
/// Values are immutable once built. Optional fields are resolved to [`DEFAULT_HOBBY`] and
/// [`DEFAULT_PRONOUN`] at construction, either by [`PersonBuilder`](crate::PersonBuilder) or by
/// serde when decoding JSON. Every construction path runs [`Person::validate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    name: String,
    age: u32,
    address: Address,
    hobbies: Vec<String>,
    pronoun: String,
}

/// Wire shape of [`Person`] before invariants are checked.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPerson {
    name: String,
    age: u32,
    address: Address,
    #[serde(default = "default_hobbies")]
    hobbies: Vec<String>,
    #[serde(default = "default_pronoun")]
    pronoun: String,
}

impl TryFrom<RawPerson> for Person {
    type Error = CardError;

    fn try_from(raw: RawPerson) -> CardResult<Self> {
        Person::from_parts(raw.name, raw.age, raw.address, raw.hobbies, raw.pronoun)
    }
}

impl Person {
    pub(crate) fn from_parts(
        name: String,
        age: u32,
        address: Address,
        hobbies: Vec<String>,
        pronoun: String,
    ) -> CardResult<Self> {
        let person = Self {
            name,
            age,
            address,
            hobbies,
            pronoun,
        };
        person.validate()?;
        Ok(person)
    }

    /// Parse and validate a person from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardError::validation(format!("parse person JSON: {e}")))
    }

    /// Parse and validate a person from a JSON string.
    pub fn from_json(s: &str) -> CardResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a person from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardError::validation(format!("open person JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check invariants that the type system does not carry.
    pub fn validate(&self) -> CardResult<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::validation("name must be non-empty"));
        }
        if self.address.street.trim().is_empty() {
            return Err(CardError::validation("address.street must be non-empty"));
        }
        if self.address.city.trim().is_empty() {
            return Err(CardError::validation("address.city must be non-empty"));
        }
        Ok(())
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Hobbies in caller order.
    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    /// Pronoun that starts the second clause of the sentence.
    pub fn pronoun(&self) -> &str {
        &self.pronoun
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/person.rs"]
mod tests;
