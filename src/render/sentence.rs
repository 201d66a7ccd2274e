use crate::foundation::error::{CardError, CardResult};
use crate::props::person::{Address, Person};
use crate::render::node::DisplayNode;
use crate::schema::resolved::{ResolvedProps, join_items, stringify};
use crate::schema::validate::kind_of;
use serde_json::Value;

const HOBBY_SEPARATOR: &str = ", ";

/// `"{houseNumber} {street}, {city}"`.
pub fn formatted_address(address: &Address) -> String {
    format!("{} {}, {}", address.house_number, address.street, address.city)
}

/// Hobbies joined with `", "` in the given order.
pub fn hobby_list(hobbies: &[String]) -> String {
    hobbies.join(HOBBY_SEPARATOR)
}

fn sentence(name: &str, age: &str, address: &str, pronoun: &str, hobbies: &str) -> String {
    format!("{name} (aged {age}) lives at {address}. {pronoun} likes to {hobbies}. What a person!")
}

/// The card sentence for a typed person.
pub fn describe(person: &Person) -> String {
    sentence(
        person.name(),
        &person.age().to_string(),
        &formatted_address(person.address()),
        person.pronoun(),
        &hobby_list(person.hobbies()),
    )
}

/// Wrap a sentence in the card markup: `div.person > p > text`.
pub fn card_node(sentence: String) -> DisplayNode {
    DisplayNode::element(
        "div",
        vec![DisplayNode::element("p", vec![DisplayNode::text(sentence)])],
    )
    .with_class("person")
}

/// Render a typed person into a display node.
#[tracing::instrument(skip_all, fields(name = person.name()))]
pub fn render(person: &Person) -> DisplayNode {
    card_node(describe(person))
}

/// The card sentence for loose props that went through the shape check.
///
/// Absent props, including address parts, print as `undefined`. Fails only when `hobbies` is
/// present but not an array, or `address` is not an object.
pub fn describe_resolved(props: &ResolvedProps) -> CardResult<String> {
    let address = match props.get("address") {
        Some(Value::Object(obj)) => format!(
            "{} {}, {}",
            stringify(obj.get("houseNumber")),
            stringify(obj.get("street")),
            stringify(obj.get("city")),
        ),
        Some(other) => {
            return Err(CardError::render(format!(
                "cannot read address fields of {}",
                kind_of(other)
            )));
        }
        None => return Err(CardError::render("cannot read address fields of undefined")),
    };

    let hobbies = match props.get("hobbies") {
        Some(Value::Array(items)) => join_items(items, HOBBY_SEPARATOR),
        Some(other) => {
            return Err(CardError::render(format!(
                "hobbies must be a sequence to join, found {}",
                kind_of(other)
            )));
        }
        None => {
            return Err(CardError::render(
                "hobbies must be a sequence to join, found undefined",
            ));
        }
    };

    Ok(sentence(
        &stringify(props.get("name")),
        &stringify(props.get("age")),
        &address,
        &stringify(props.get("pronoun")),
        &hobbies,
    ))
}

/// Render loose props into a display node.
#[tracing::instrument(skip_all)]
pub fn render_resolved(props: &ResolvedProps) -> CardResult<DisplayNode> {
    describe_resolved(props).map(card_node)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sentence.rs"]
mod tests;
