//! Bot-connector wire records and conversions to and from the harness model.
//!
//! Conversions re-encode through `serde_json::Value` instead of mapping
//! fields by hand, so both sides only have to agree on JSON names.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Activity, Attachment};
use crate::schema::ADAPTIVE_CARD_CONTENT_TYPE;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectorAttachment {
    /// A missing field reads as empty; an explicit `null` is rejected.
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelAccount {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectorActivity {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<ConnectorAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
}

/// Serialize `source` and read it back as `T`.
fn reencode<S, T>(source: &S) -> Result<T>
where
    S: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let value = serde_json::to_value(source)?;
    Ok(serde_json::from_value(value)?)
}

/// Fails with a usage error unless `source` carries an Adaptive Card.
pub fn ensure_adaptive_card(source: &ConnectorAttachment) -> Result<()> {
    if source.content_type == ADAPTIVE_CARD_CONTENT_TYPE {
        return Ok(());
    }
    Err(Error::UnsupportedContentType {
        expected: ADAPTIVE_CARD_CONTENT_TYPE,
        received: source.content_type.clone(),
    })
}

impl Attachment {
    /// Build the harness attachment from a connector Adaptive Card attachment.
    pub fn from_connector(source: &ConnectorAttachment) -> Result<Self> {
        ensure_adaptive_card(source)?;
        Self::from_serializable(source)
    }

    /// Clone any attachment-shaped value into the harness model. A value that
    /// serializes to JSON `null` is rejected as a usage error.
    pub fn from_serializable<S: Serialize + ?Sized>(source: &S) -> Result<Self> {
        let value = serde_json::to_value(source)?;
        if value.is_null() {
            return Err(Error::NullSource);
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl Activity {
    /// Convert to the connector activity sent to the bot. Only type, text,
    /// name, value and attachments are carried over.
    pub fn to_connector(&self) -> Result<ConnectorActivity> {
        let value = self.value.as_ref().map(serde_json::to_value).transpose()?;

        let attachments = match self.attachments.as_deref() {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(reencode::<_, ConnectorAttachment>)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| Error::AttachmentConversion(Box::new(e)))?,
            _ => Vec::new(),
        };
        tracing::debug!(
            kind = self.kind.as_deref().unwrap_or_default(),
            attachments = attachments.len(),
            "converted activity for connector"
        );

        Ok(ConnectorActivity {
            kind: self.kind.clone(),
            text: self.text.clone(),
            name: self.name.clone(),
            value,
            attachments,
            ..Default::default()
        })
    }
}
