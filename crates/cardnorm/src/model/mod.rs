//! Test-harness representation of conversation activities and card attachments.

pub mod activity;
pub mod card;

pub use activity::{Activity, ActivityList, ActivityValue, FromAccount, IntentCandidate, IntentScore};
pub use card::{Action, Attachment, Body, Column, Content, Data, Item};
