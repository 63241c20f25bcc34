use serde_derive::Deserialize;
use serde_json::{Map, Value};

use crate::response::Intent;

/// Contents of the `results` object wrapping every service answer.
///
/// Scalar fields the service may omit are optional; `intents` and
/// `entities` default to empty when absent. Entity instances are kept as
/// raw JSON here, the flattening into `Entity` values happens in
/// `Response::from_json`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawResults {
    pub uuid: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub intents: Vec<Intent>,
    pub act: Option<String>,
    #[serde(rename = "type")]
    pub utterance_type: Option<String>,
    pub sentiment: Option<String>,
    #[serde(default)]
    pub entities: Map<String, Value>,
    pub language: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
}
