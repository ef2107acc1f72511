//! Adaptive Card vocabulary the normalizer and the conversions key off.

/// Content type of an Adaptive Card attachment.
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Property names.
pub mod props {
    pub const ACTIONS: &str = "actions";
    pub const ALT_TEXT: &str = "altText";
    pub const BODY: &str = "body";
    pub const DATA: &str = "data";
    pub const DISPLAY_TEXT: &str = "displayText";
    pub const FACTS: &str = "facts";
    pub const FALLBACK_TEXT: &str = "fallbackText";
    pub const ID: &str = "id";
    pub const INLINES: &str = "inlines";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const TEXT: &str = "text";
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const URL: &str = "url";
}

/// Input element kinds.
pub mod input {
    pub const CHOICE_SET: &str = "Input.ChoiceSet";
    pub const DATE: &str = "Input.Date";
    pub const NUMBER: &str = "Input.Number";
    pub const TEXT: &str = "Input.Text";
    pub const TIME: &str = "Input.Time";
    pub const TOGGLE: &str = "Input.Toggle";
}

/// Card action kinds.
pub mod action {
    /// Legacy action that posts its value back into the conversation.
    pub const IM_BACK: &str = "imBack";
}

/// Element kinds whose `value` holds free text rather than structural data.
pub const FREE_TEXT_VALUE_KINDS: [&str; 2] = [input::TEXT, action::IM_BACK];
