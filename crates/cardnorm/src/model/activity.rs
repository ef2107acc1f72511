use serde::{Deserialize, Serialize};
use serde_json::Map;

use super::card::Attachment;

/// A recorded conversation: its own activities plus any nested conversations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityList {
    #[serde(rename = "list_of_conversations")]
    pub list_of_conversations: Vec<ActivityList>,
    pub activities: Vec<Activity>,
}

impl ActivityList {
    /// All activities, depth-first: this list's own activities come before
    /// those of its nested conversations.
    pub fn iter_activities(&self) -> Box<dyn Iterator<Item = &Activity> + '_> {
        Box::new(
            self.activities
                .iter()
                .chain(self.list_of_conversations.iter().flat_map(|l| l.iter_activities())),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    pub value_type: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub timestamp: Option<i64>,
    pub from: Option<FromAccount>,
    pub channel_id: Option<String>,
    pub value: Option<ActivityValue>,
    pub text_format: Option<String>,
    pub text: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
    pub reply_to_id: Option<String>,
    pub suggested_actions: Option<Vec<serde_json::Value>>,
    pub line_number: Option<i64>,
    pub name: Option<String>,
}

impl Activity {
    pub fn is_message_with_text(&self) -> bool {
        self.kind.as_deref() == Some("message")
            && self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FromAccount {
    pub id: String,
    pub role: i32,
}

impl FromAccount {
    pub fn new(id: impl Into<String>, role: i32) -> Self {
        Self { id: id.into(), role }
    }
}

/// Payload of an event or invoke activity.
///
/// Known recognizer fields are typed; everything else is kept in `extension`
/// in input order and merged back in when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_utterance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_trigger_utterance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_candidates: Option<Vec<IntentCandidate>>,
    #[serde(flatten)]
    pub extension: Map<String, serde_json::Value>,
}

impl ActivityValue {
    /// The merged JSON object of known and extension fields.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntentCandidate {
    pub intent_id: Option<String>,
    pub intent_score: Option<IntentScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentScore {
    pub score: f64,
    #[serde(rename = "Type")]
    pub kind: i32,
    #[serde(rename = "Title")]
    pub title: Option<String>,
}
