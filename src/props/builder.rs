use crate::{
    foundation::error::CardResult,
    props::person::{Address, Person, default_hobbies, default_pronoun},
};

/// Builder for [`Person`](crate::Person).
///
/// Required fields are taken up front; `hobbies` and `pronoun` fall back to their declared
/// defaults when never set.
#[derive(Clone, Debug)]
pub struct PersonBuilder {
    name: String,
    age: u32,
    address: Address,
    hobbies: Option<Vec<String>>,
    pronoun: Option<String>,
}

impl PersonBuilder {
    /// Create a builder with the required props.
    pub fn new(name: impl Into<String>, age: u32, address: Address) -> Self {
        Self {
            name: name.into(),
            age,
            address,
            hobbies: None,
            pronoun: None,
        }
    }

    /// Replace the hobby list. Order is kept as given.
    pub fn hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = Some(hobbies.into_iter().map(Into::into).collect());
        self
    }

    /// Append one hobby, starting from an empty list rather than the default.
    pub fn hobby(mut self, hobby: impl Into<String>) -> Self {
        self.hobbies.get_or_insert_with(Vec::new).push(hobby.into());
        self
    }

    /// Set the pronoun.
    pub fn pronoun(mut self, pronoun: impl Into<String>) -> Self {
        self.pronoun = Some(pronoun.into());
        self
    }

    /// Resolve defaults and validate the final [`Person`](crate::Person).
    pub fn build(self) -> CardResult<Person> {
        Person::from_parts(
            self.name,
            self.age,
            self.address,
            self.hobbies.unwrap_or_else(default_hobbies),
            self.pronoun.unwrap_or_else(default_pronoun),
        )
    }
}

impl Person {
    /// Start building a person from the required props.
    pub fn builder(name: impl Into<String>, age: u32, address: Address) -> PersonBuilder {
        PersonBuilder::new(name, age, address)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/builder.rs"]
mod tests;
