use log::debug;
use serde_derive::Deserialize;
use serde_json::{Map, Value};

use crate::errors::*;
use crate::models::RawResults;
use crate::ontology::{DialogueAct, Sentiment, UtteranceType};

/// One classified intent, as ranked by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Intent {
    #[serde(alias = "name")]
    pub slug: String,
    #[serde(default)]
    pub confidence: f32,
}

/// One extracted entity instance, tagged with the name it was filed under
/// in the service's entity mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    fields: Map<String, Value>,
}

impl Entity {
    fn new(name: String, fields: Map<String, Value>) -> Entity {
        Entity { name, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw field attached by the service, if present.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn value(&self) -> Option<&Value> {
        self.fields.get("value")
    }

    /// Text span of the input the entity was extracted from.
    pub fn raw(&self) -> Option<&str> {
        self.fields.get("raw").and_then(|raw| raw.as_str())
    }

    pub fn confidence(&self) -> Option<f64> {
        self.fields.get("confidence").and_then(|score| score.as_f64())
    }
}

/// Parsed answer of the NLU service, read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    raw: String,
    uuid: Option<String>,
    source: Option<String>,
    intents: Vec<Intent>,
    act: Option<String>,
    utterance_type: Option<String>,
    sentiment: Option<String>,
    entities: Vec<Entity>,
    language: Option<String>,
    version: Option<String>,
    timestamp: Option<String>,
    status: Option<Value>,
}

impl Response {
    /// Builds a `Response` from the raw payload string returned by the
    /// service.
    ///
    /// Fails when the payload is not valid JSON, when it has no `results`
    /// object, or when `results` fields do not have the documented shape.
    /// No partially populated value is ever returned.
    pub fn from_json(raw: &str) -> Result<Response> {
        let mut document: Value = serde_json::from_str(raw)
            .map_err(|err| NluClientError::InvalidJson(err.to_string()))?;
        let results = document
            .get_mut("results")
            .map(Value::take)
            .ok_or(NluClientError::MissingResults)?;
        let results: RawResults =
            serde_json::from_value(results).map_err(|err| {
                NluClientError::UnexpectedShape {
                    field: "results",
                    cause: err.to_string(),
                }
            })?;

        let mut entities = vec![];
        for (name, instances) in results.entities {
            let instances: Vec<Map<String, Value>> = serde_json::from_value(instances)
                .map_err(|err| NluClientError::UnexpectedShape {
                    field: "entities",
                    cause: format!("'{}': {}", name, err),
                })?;
            entities.extend(
                instances
                    .into_iter()
                    .map(|fields| Entity::new(name.clone(), fields)),
            );
        }

        debug!(
            "parsed response with {} intents and {} entities",
            results.intents.len(),
            entities.len()
        );

        Ok(Response {
            raw: raw.to_string(),
            uuid: results.uuid,
            source: results.source,
            intents: results.intents,
            act: results.act,
            utterance_type: results.utterance_type,
            sentiment: results.sentiment,
            entities,
            language: results.language,
            version: results.version,
            timestamp: results.timestamp,
            status: results.status,
        })
    }

    /// Original payload string, kept verbatim for diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_ref().map(|uuid| uuid.as_str())
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_ref().map(|source| source.as_str())
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_ref().map(|language| language.as_str())
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_ref().map(|version| version.as_str())
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_ref().map(|timestamp| timestamp.as_str())
    }

    pub fn status(&self) -> Option<&Value> {
        self.status.as_ref()
    }

    /// Dialogue act tag as sent by the service.
    pub fn act(&self) -> Option<&str> {
        self.act.as_ref().map(|act| act.as_str())
    }

    /// Semantic type tag as sent by the service, possibly a composite
    /// delimited label carrying several types at once.
    pub fn utterance_type(&self) -> Option<&str> {
        self.utterance_type.as_ref().map(|tag| tag.as_str())
    }

    /// Sentiment tag as sent by the service.
    pub fn sentiment_tag(&self) -> Option<&str> {
        self.sentiment.as_ref().map(|sentiment| sentiment.as_str())
    }

    /// All classified intents, in the ranking order chosen by the service.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// All extracted entities, flattened in wire order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Top ranked intent, if the service classified any.
    pub fn intent(&self) -> Option<&Intent> {
        self.intents.first()
    }

    /// First entity whose name matches `name` case-insensitively.
    ///
    /// Lookups take a `&str`; callers holding another representation
    /// convert before calling.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        let name = name.to_lowercase();
        self.entities
            .iter()
            .find(|entity| entity.name().to_lowercase() == name)
    }

    /// Every entity whose name matches `name` case-insensitively, in wire
    /// order. Empty when none match.
    pub fn all(&self, name: &str) -> Vec<&Entity> {
        let name = name.to_lowercase();
        self.entities
            .iter()
            .filter(|entity| entity.name().to_lowercase() == name)
            .collect()
    }

    /// Dialogue act resolved against the known vocabulary, `None` when the
    /// tag is absent or not a known act.
    pub fn dialogue_act(&self) -> Option<DialogueAct> {
        self.act().and_then(DialogueAct::from_identifier)
    }

    /// Sentiment resolved against the five point scale, `None` when the
    /// tag is absent or unknown.
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment_tag().and_then(Sentiment::from_identifier)
    }

    /// Every known utterance type occurring in the composite type tag.
    pub fn utterance_types(&self) -> Vec<UtteranceType> {
        match self.utterance_type() {
            Some(tag) => UtteranceType::all()
                .iter()
                .filter(|utterance_type| utterance_type.matches(tag))
                .cloned()
                .collect(),
            None => vec![],
        }
    }

    pub fn is_assertion(&self) -> bool {
        self.has_act(DialogueAct::Assertion)
    }

    pub fn is_command(&self) -> bool {
        self.has_act(DialogueAct::Command)
    }

    pub fn is_wh_query(&self) -> bool {
        self.has_act(DialogueAct::WhQuery)
    }

    pub fn is_yn_query(&self) -> bool {
        self.has_act(DialogueAct::YnQuery)
    }

    pub fn is_abbreviation(&self) -> bool {
        self.has_type(UtteranceType::Abbreviation)
    }

    pub fn is_entity(&self) -> bool {
        self.has_type(UtteranceType::Entity)
    }

    pub fn is_description(&self) -> bool {
        self.has_type(UtteranceType::Description)
    }

    pub fn is_human(&self) -> bool {
        self.has_type(UtteranceType::Human)
    }

    pub fn is_location(&self) -> bool {
        self.has_type(UtteranceType::Location)
    }

    pub fn is_number(&self) -> bool {
        self.has_type(UtteranceType::Number)
    }

    pub fn is_very_positive(&self) -> bool {
        self.has_sentiment(Sentiment::VeryPositive)
    }

    pub fn is_positive(&self) -> bool {
        self.has_sentiment(Sentiment::Positive)
    }

    pub fn is_neutral(&self) -> bool {
        self.has_sentiment(Sentiment::Neutral)
    }

    pub fn is_negative(&self) -> bool {
        self.has_sentiment(Sentiment::Negative)
    }

    pub fn is_very_negative(&self) -> bool {
        self.has_sentiment(Sentiment::VeryNegative)
    }

    fn has_act(&self, act: DialogueAct) -> bool {
        self.dialogue_act() == Some(act)
    }

    fn has_type(&self, utterance_type: UtteranceType) -> bool {
        self.utterance_type()
            .map(|tag| utterance_type.matches(tag))
            .unwrap_or(false)
    }

    fn has_sentiment(&self, sentiment: Sentiment) -> bool {
        self.sentiment() == Some(sentiment)
    }
}
