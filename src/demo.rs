//! The two cards shown on the demo page.

use crate::foundation::error::CardResult;
use crate::mount::root::Root;
use crate::props::person::{Address, Person};

/// Johnny and Mem, in page order.
pub fn people() -> CardResult<Vec<Person>> {
    Ok(vec![
        Person::builder(
            "Johnny",
            27,
            Address::new(1, "Zuckerberg Avenue", "San Francisco"),
        )
        .hobbies(["playing piano", "cooking", "knitting"])
        .pronoun("He")
        .build()?,
        Person::builder("Mem", 33, Address::new(22, "weinheimerstr", "Bock"))
            .pronoun("Mr")
            .hobbies(["reading", "learning", "travelling"])
            .build()?,
    ])
}

/// A page root holding both demo cards.
pub fn page() -> CardResult<Root> {
    Ok(people()?.iter().fold(Root::new(), Root::person))
}

#[cfg(test)]
#[path = "../tests/unit/demo.rs"]
mod tests;
