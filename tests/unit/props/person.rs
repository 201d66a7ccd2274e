use super::*;

const JOHNNY: &str = r#"{
  "name": "Johnny",
  "age": 27,
  "address": { "street": "Zuckerberg Avenue", "houseNumber": 1, "city": "San Francisco" },
  "hobbies": ["playing piano", "cooking", "knitting"],
  "pronoun": "He"
}"#;

#[test]
fn json_uses_camel_case_address_fields() {
    let p = Person::from_json(JOHNNY).unwrap();
    assert_eq!(p.address().house_number, 1);
    assert_eq!(p.address().street, "Zuckerberg Avenue");
    assert_eq!(p.hobbies(), ["playing piano", "cooking", "knitting"]);

    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["address"]["houseNumber"], 1);
}

#[test]
fn omitted_optionals_resolve_to_defaults() {
    let p = Person::from_json(
        r#"{"name":"Ada","age":36,"address":{"houseNumber":12,"street":"St James Square","city":"London"}}"#,
    )
    .unwrap();
    assert_eq!(p.hobbies(), [DEFAULT_HOBBY]);
    assert_eq!(p.pronoun(), DEFAULT_PRONOUN);
}

#[test]
fn misspelled_prop_names_are_rejected() {
    let err = Person::from_json(
        r#"{"name":"Ada","age":36,"adress":{"houseNumber":12,"street":"x","city":"y"}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("adress"));

    let err = Person::from_json(
        r#"{"name":"Ada","age":36,"address":{"houseNumber":12,"street":"x","city":"y"},"pronouns":"She"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("pronouns"));
}

#[test]
fn validate_rejects_blank_name() {
    let err = Person::from_json(
        r#"{"name":"  ","age":1,"address":{"houseNumber":1,"street":"a","city":"b"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn missing_address_part_is_a_parse_error() {
    let err =
        Person::from_json(r#"{"name":"A","age":1,"address":{"houseNumber":1,"street":"a"}}"#)
            .unwrap_err();
    assert!(err.to_string().contains("city"));
}

#[test]
fn serde_decoding_enforces_invariants() {
    let blank_name = serde_json::from_str::<Person>(
        r#"{"name":"","age":1,"address":{"houseNumber":1,"street":"a","city":"b"}}"#,
    );
    assert!(blank_name.unwrap_err().to_string().contains("name must be non-empty"));

    let blank_address = serde_json::from_value::<Person>(serde_json::json!({
        "name": "Ada",
        "age": 1,
        "address": { "houseNumber": 1, "street": "", "city": "" }
    }));
    assert!(blank_address.is_err());
}

#[test]
fn serialized_person_decodes_back_with_resolved_defaults() {
    let p = Person::from_json(
        r#"{"name":"Ada","age":36,"address":{"houseNumber":12,"street":"St James Square","city":"London"}}"#,
    )
    .unwrap();
    let back: Person = serde_json::from_value(serde_json::to_value(&p).unwrap()).unwrap();
    assert_eq!(back, p);
}
