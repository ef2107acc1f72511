#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod schema;
pub mod normalize;
pub mod model;
pub mod connector;

pub use crate::error::{Error, Result};
pub use crate::options::{OutputStyle, TranslatorSettings};
pub use crate::normalize::{
    card_without_values, cards_equivalent, normalize_reader, normalize_str, strip_translatable,
};
pub use crate::connector::{ensure_adaptive_card, ConnectorActivity, ConnectorAttachment};
