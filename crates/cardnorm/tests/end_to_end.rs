use cardnorm::{card_without_values, cards_equivalent, normalize_reader, TranslatorSettings};
use serde_json::{json, Value};

fn card(name: &str, placeholder: &str) -> Value {
    json!({
        "type": "AdaptiveCard",
        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
        "version": "1.3",
        "body": [
            {"type": "TextBlock", "text": format!("Hi {name}"), "wrap": true},
            {"type": "Input.ChoiceSet", "id": "choice", "placeholder": placeholder,
             "choices": [{"title": "One", "value": "1"}, {"title": "Two", "value": "2"}]}
        ],
        "actions": [{"type": "Action.Submit", "title": "Send", "data": {"id": "submit"}}]
    })
}

#[test]
fn cards_differing_only_in_text_normalize_identically() -> Result<(), Box<dyn std::error::Error>> {
    let settings = TranslatorSettings::default();
    let a = card_without_values(card("Ada", "Pick one"), &settings)?;
    let b = card_without_values(card("Grace", "Choisissez"), &settings)?;
    assert_eq!(a, b);
    assert!(cards_equivalent(&card("Ada", "x"), &card("Linus", "y"), &settings));
    Ok(())
}

#[test]
fn structural_difference_is_detected() {
    let settings = TranslatorSettings::default();
    let mut other = card("Ada", "Pick one");
    other["body"][1]["choices"][1]["value"] = json!("3");
    assert!(!cards_equivalent(&card("Ada", "Pick one"), &other, &settings));

    let mut other = card("Ada", "Pick one");
    other["body"][0]["type"] = json!("RichTextBlock");
    assert!(!cards_equivalent(&card("Ada", "Pick one"), &other, &settings));
}

#[test]
fn normalized_card_keeps_identifiers() -> Result<(), Box<dyn std::error::Error>> {
    let out = card_without_values(card("Ada", "Pick one"), &TranslatorSettings::default())?;
    let v: Value = serde_json::from_str(&out)?;
    assert_eq!(v["body"][0]["text"], json!(""));
    assert_eq!(v["body"][1]["placeholder"], json!(""));
    assert_eq!(v["body"][1]["id"], json!("choice"));
    assert_eq!(v["body"][1]["choices"][0], json!({"title": "", "value": "1"}));
    assert_eq!(v["actions"][0]["data"], json!({"id": "submit"}));
    assert_eq!(v["version"], json!("1.3"));
    Ok(())
}

#[test]
fn reader_input() -> Result<(), Box<dyn std::error::Error>> {
    let text = serde_json::to_string(&card("Ada", "Pick one"))?;
    let from_reader = normalize_reader(text.as_bytes(), &TranslatorSettings::default())?;
    let direct = card_without_values(card("Bob", "Other"), &TranslatorSettings::default())?;
    assert_eq!(from_reader, direct);
    Ok(())
}
