//! Typed response model for a natural language understanding API.
//!
//! The remote service answers every analysis request with a JSON envelope
//! wrapping a `results` object. This crate turns that payload into a
//! [`Response`]: an immutable, query-friendly value exposing the ranked
//! intents, the extracted entities, and the dialogue act, semantic type
//! and sentiment classifications of the utterance.
//!
//! Issuing the HTTP request is the caller's business; this crate starts
//! where the response body ends up in a string.
//!
//! ```no_run
//! use nlu_client::Response;
//!
//! # fn main() -> nlu_client::Result<()> {
//! let body = r#"{ "results": { "intents": [] } }"#;
//! let response = Response::from_json(body)?;
//! if let Some(intent) = response.intent() {
//!     println!("{} ({})", intent.slug, intent.confidence);
//! }
//! if response.is_wh_query() {
//!     if let Some(location) = response.get("location") {
//!         println!("asked about {:?}", location.value());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod errors;
mod models;
pub mod ontology;
mod response;
#[cfg(test)]
mod testutils;

pub use crate::errors::*;
pub use crate::ontology::{DialogueAct, Sentiment, UtteranceType};
pub use crate::response::{Entity, Intent, Response};
