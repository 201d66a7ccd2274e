use super::*;
use serde_json::json;

fn johnny() -> Value {
    json!({
        "name": "Johnny",
        "age": 27,
        "address": { "street": "Zuckerberg Avenue", "houseNumber": 1, "city": "San Francisco" },
        "hobbies": ["playing piano", "cooking", "knitting"],
        "pronoun": "He"
    })
}

fn paths(report: &PropsReport) -> Vec<String> {
    report.warnings.iter().map(|w| w.path_string()).collect()
}

#[test]
fn well_formed_props_are_clean() {
    let report = PropsSchema::person().check(&johnny());
    assert!(report.is_clean(), "{:?}", report.warnings);
    assert_eq!(report.props.get("pronoun"), Some(&json!("He")));
}

#[test]
fn omitted_optionals_get_defaults_without_warnings() {
    let mut props = johnny();
    let obj = props.as_object_mut().unwrap();
    obj.remove("hobbies");
    obj.remove("pronoun");

    let report = PropsSchema::person().check(&props);
    assert!(report.is_clean());
    assert_eq!(report.props.get("hobbies"), Some(&json!(["coding"])));
    assert_eq!(report.props.get("pronoun"), Some(&json!("Their")));
}

#[test]
fn missing_required_props_warn_but_resolve() {
    let report = PropsSchema::person().check(&json!({ "age": 27 }));
    assert_eq!(paths(&report), ["$.name", "$.address"]);
    assert!(report.warnings[0].message.contains("missing"));
    // Defaults still apply alongside the warnings.
    assert_eq!(report.props.get("pronoun"), Some(&json!("Their")));
}

#[test]
fn wrong_kinds_are_reported_with_paths() {
    let report = PropsSchema::person().check(&json!({
        "name": "Johnny",
        "age": "27",
        "address": { "street": "Zuckerberg Avenue", "houseNumber": 1.5 },
        "hobbies": ["cooking", 3]
    }));
    assert_eq!(
        paths(&report),
        [
            "$.age",
            "$.address.houseNumber",
            "$.address.city",
            "$.hobbies[1]"
        ]
    );
    assert_eq!(
        report.warnings[0].to_string(),
        "$.age: expected integer, found string"
    );
    // The offending value is kept as given.
    assert_eq!(report.props.get("age"), Some(&json!("27")));
}

#[test]
fn misspelled_names_are_unrelated_props() {
    let report = PropsSchema::person().check(&json!({
        "name": "Johnny",
        "age": 27,
        "adress": { "street": "Zuckerberg Avenue", "houseNumber": 1, "city": "San Francisco" },
        "pronouns": "He"
    }));
    assert_eq!(paths(&report), ["$.address", "$.adress", "$.pronouns"]);
    // `pronouns` does not satisfy `pronoun`, so the default still wins.
    assert_eq!(report.props.get("pronoun"), Some(&json!("Their")));
}

#[test]
fn non_object_props_are_treated_as_empty() {
    let report = PropsSchema::person().check(&json!([1, 2]));
    assert_eq!(report.warnings[0].path_string(), "$");
    assert!(report.warnings[0].message.contains("found array"));
    assert_eq!(report.props.get("hobbies"), Some(&json!(["coding"])));
}

#[test]
fn null_optional_is_not_replaced_by_default() {
    let mut props = johnny();
    props["hobbies"] = Value::Null;
    let report = PropsSchema::person().check(&props);
    assert!(report.is_clean());
    assert_eq!(report.props.get("hobbies"), Some(&Value::Null));
}

#[test]
fn strict_mode_turns_warnings_into_errors() {
    let report = PropsSchema::person().check(&json!({ "name": "Johnny" }));
    let err = report.into_strict().unwrap_err();
    assert!(err.to_string().contains("$.age: required prop is missing"));

    let ok = PropsSchema::person().check(&johnny()).into_strict();
    assert!(ok.is_ok());
}

#[test]
fn resolved_props_convert_to_person() {
    let mut props = johnny();
    props["nickname"] = json!("J");
    let person = PropsSchema::person().check(&props).props.into_person().unwrap();
    assert_eq!(person.name(), "Johnny");
    assert_eq!(person.address().house_number, 1);

    let broken = PropsSchema::person().check(&json!({ "name": "Johnny" }));
    assert!(broken.props.into_person().is_err());
}

#[test]
fn unknown_props_survive_resolution() {
    let mut props = johnny();
    props["nickname"] = json!("J");
    let report = PropsSchema::person().check(&props);
    let map = report.props.as_map();
    assert_eq!(map.get("nickname"), Some(&json!("J")));
    assert_eq!(map.len(), 6);
}
