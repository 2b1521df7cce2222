use json_utils_path::{get, get_all, set, PathError, MAX_LIST_PADDING};
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "name": "James Butt",
        "age": 25,
        "friends": [
            {
                "name": "Josephine Darakjy",
                "age": 22,
                "associatedAddresses": [
                    {"street": "25 E 75th St #69", "city": "Los Angeles", "state": "CA", "zip": "90034"}
                ]
            },
            {
                "name": "Lenna Paprocki",
                "age": 30,
                "associatedAddresses": [
                    {"street": "639 Main St", "city": "Anchorage", "state": "AK", "zip": "99501"},
                    {"street": "618 W Yakima Ave", "city": "Irving", "state": "TX", "zip": "75062"},
                    {"street": "8 W Cerritos Ave", "city": "Dallas", "state": "TX", "zip": "75201"}
                ]
            }
        ],
        "primaryAddress": {"street": "6649 N Blue Gum St", "city": "New Orleans", "state": "LA", "zip": "70116"}
    })
}

#[test]
fn set_into_empty_document_matrix() {
    let cases = [
        ("associatedAddresses[]", json!("San Ramon"), json!({"associatedAddresses": ["San Ramon"]})),
        (
            "associatedAddresses[].city",
            json!("San Ramon"),
            json!({"associatedAddresses": [{"city": "San Ramon"}]}),
        ),
        (
            "associatedAddresses[5].city",
            json!("San Ramon"),
            json!({"associatedAddresses": [null, null, null, null, null, {"city": "San Ramon"}]}),
        ),
        (
            "friends[].address.state.zip",
            json!("94599"),
            json!({"friends": [{"address": {"state": {"zip": "94599"}}}]}),
        ),
        (
            "friends[0].associatedAddresses[5].city",
            json!("San Ramon"),
            json!({"friends": [{"associatedAddresses": [null, null, null, null, null, {"city": "San Ramon"}]}]}),
        ),
        (
            "friends[2].associatedAddresses[5].city",
            json!("San Ramon"),
            json!({"friends": [null, null, {"associatedAddresses": [null, null, null, null, null, {"city": "San Ramon"}]}]}),
        ),
    ];

    for (path, value, expected) in cases {
        let mut doc = json!({});
        assert_eq!(set(path, &mut doc, value).unwrap(), 1, "{path}");
        assert_eq!(doc, expected, "{path}");
    }
}

#[test]
fn index_write_pads_with_nulls() {
    let mut doc = json!({});
    set("a[5]", &mut doc, json!("X")).unwrap();
    let list = doc["a"].as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[5], json!("X"));
    assert!(list[..5].iter().all(Value::is_null));
}

#[test]
fn oversized_index_writes_fail_without_mutation() {
    let original = json!({"keep": 1, "b": [0]});
    let past_bound = format!("b[{}]", MAX_LIST_PADDING + 2);
    let paths = [
        format!("a[{}]", usize::MAX),
        "a[1152921504606846976]".to_string(),
        format!("a[{}]", MAX_LIST_PADDING + 1),
        format!("keep2[{}].x", usize::MAX),
        past_bound,
    ];
    for path in &paths {
        let mut doc = original.clone();
        let err = set(path, &mut doc, json!(1)).unwrap_err();
        assert!(matches!(err, PathError::InvalidTargetPath { .. }), "{path}: {err:?}");
        assert_eq!(doc, original, "{path}");
    }
}

#[test]
fn index_write_pads_up_to_the_bound() {
    let mut doc = json!({"b": [0]});
    let path = format!("b[{}]", MAX_LIST_PADDING + 1);
    assert_eq!(set(&path, &mut doc, json!("X")).unwrap(), 1);
    let list = doc["b"].as_array().unwrap();
    assert_eq!(list.len(), MAX_LIST_PADDING + 2);
    assert_eq!(list[MAX_LIST_PADDING + 1], json!("X"));

    let mut doc = json!({"a": [1, 2, 3]});
    set(&format!("a[{}]", usize::MAX), &mut doc, json!(0)).unwrap_err();
    assert_eq!(get("a[2]", &doc).unwrap(), Some(&json!(3)));
}

#[test]
fn index_write_overwrites_existing_element() {
    let mut doc = json!({"a": [1, 2, 3]});
    set("a[1]", &mut doc, json!({"b": true})).unwrap();
    assert_eq!(doc, json!({"a": [1, {"b": true}, 3]}));
}

#[test]
fn append_writes_accumulate() {
    let mut doc = json!({});
    set("a[]", &mut doc, json!("X")).unwrap();
    set("a[]", &mut doc, json!({"y": 1})).unwrap();
    assert_eq!(doc, json!({"a": ["X", {"y": 1}]}));

    set("a[].z", &mut doc, json!(3)).unwrap();
    assert_eq!(doc["a"][2], json!({"z": 3}));
}

#[test]
fn filter_write_updates_nested_match() {
    let mut doc = sample();
    let before = get("friends[].associatedAddresses[].city", &doc)
        .unwrap()
        .cloned();
    assert_eq!(before, Some(json!("Los Angeles")));

    let path = "friends[{name=Josephine Darakjy}].associatedAddresses[{state=CA}].city";
    assert_eq!(set(path, &mut doc, json!("New Los Angeles")).unwrap(), 1);
    assert_eq!(get(path, &doc).unwrap(), Some(&json!("New Los Angeles")));
    assert_eq!(
        doc["friends"][0]["associatedAddresses"][0]["city"],
        json!("New Los Angeles")
    );
}

#[test]
fn filter_write_targets_every_match() {
    let mut doc = json!({"addrs": [
        {"state": "CA", "city": "A"},
        {"state": "NV", "city": "B"},
        {"state": "CA", "city": "C"}
    ]});
    assert_eq!(set("addrs[{state=CA}].city", &mut doc, json!("X")).unwrap(), 2);
    assert_eq!(
        doc,
        json!({"addrs": [
            {"state": "CA", "city": "X"},
            {"state": "NV", "city": "B"},
            {"state": "CA", "city": "X"}
        ]})
    );
}

#[test]
fn filter_with_multiple_constraints_is_conjunctive() {
    let mut doc = sample();
    let path = "friends[{name=Lenna Paprocki}].associatedAddresses[{state=TX}, {city=Irving}].street";
    assert_eq!(set(path, &mut doc, json!("street in Irving, Texas")).unwrap(), 1);
    let addresses = &doc["friends"][1]["associatedAddresses"];
    assert_eq!(addresses[1]["street"], json!("street in Irving, Texas"));
    assert_eq!(addresses[2]["street"], json!("8 W Cerritos Ave"));
}

#[test]
fn filter_write_with_no_match_is_a_no_op() {
    let mut doc = json!({"addrs": [{"state": "CA"}]});
    let before = doc.clone();
    assert_eq!(set("addrs[{state=TX}].city", &mut doc, json!("X")).unwrap(), 0);
    assert_eq!(doc, before);

    let mut empty = json!({});
    assert_eq!(
        set(
            "friends[{name=Josephine Darakjy}].associatedAddresses[{state=CA}].city",
            &mut empty,
            json!("New California City")
        )
        .unwrap(),
        0
    );
    assert_eq!(empty, json!({}));
    assert_eq!(
        get("friends[{name=Lenna Paprocki}].associatedAddresses[{state=TX}].city", &empty).unwrap(),
        None
    );
}

#[test]
fn filter_matches_numbers_and_booleans_by_string_form() {
    let mut doc = json!({"items": [
        {"id": 7, "active": true},
        {"id": 8, "active": false}
    ]});
    set("items[{id=8}].seen", &mut doc, json!(true)).unwrap();
    set("items[{active:true}].seen", &mut doc, json!(false)).unwrap();
    assert_eq!(doc["items"][0]["seen"], json!(false));
    assert_eq!(doc["items"][1]["seen"], json!(true));
}

#[test]
fn filter_keys_may_address_nested_fields() {
    let mut doc = json!({"friends": [
        {"name": "Ann", "address": {"state": "CA"}},
        {"name": "Bob", "address": {"state": "TX"}}
    ]});
    set("friends[{address.state=TX}].flag", &mut doc, json!(1)).unwrap();
    assert_eq!(doc["friends"][1]["flag"], json!(1));
    assert_eq!(doc["friends"][0].get("flag"), None);
}

#[test]
fn terminal_filter_is_rejected_without_mutation() {
    let mut doc = sample();
    let before = doc.clone();
    let err = set(
        "friends[{name=Lenna Paprocki}].associatedAddresses[{state=TX}, {city=Irving}]",
        &mut doc,
        json!("street in Irving, Texas"),
    )
    .unwrap_err();
    assert!(matches!(err, PathError::InvalidTargetPath { .. }));
    assert_eq!(doc, before);
}

#[test]
fn get_all_fans_out_over_append_markers() {
    let doc = sample();
    let cities: Vec<_> = get_all("friends[].associatedAddresses[].city", &doc)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(
        cities,
        vec![
            json!("Los Angeles"),
            json!("Anchorage"),
            json!("Irving"),
            json!("Dallas")
        ]
    );
    assert_eq!(
        get("friends[{name=Lenna Paprocki}].associatedAddresses[{state=TX}].city", &doc).unwrap(),
        Some(&json!("Irving"))
    );
}

#[test]
fn set_requires_arguments() {
    let mut doc = json!({});
    assert_eq!(
        set("", &mut doc, json!(1)),
        Err(PathError::MissingRequiredArgument("path"))
    );
    let mut null = Value::Null;
    assert_eq!(
        set("a", &mut null, json!(1)),
        Err(PathError::MissingRequiredArgument("document"))
    );
}

#[test]
fn writes_into_root_lists() {
    let mut doc = json!([]);
    set("[]", &mut doc, json!({"a": 1})).unwrap();
    set("[0].b", &mut doc, json!(2)).unwrap();
    set("[2]", &mut doc, json!("z")).unwrap();
    assert_eq!(doc, json!([{"a": 1, "b": 2}, null, "z"]));
}
