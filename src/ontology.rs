//! Closed vocabularies used to classify a parsed utterance.
//!
//! The wire format carries these categories as plain string tags. They are
//! kept raw on the `Response` so that service-added categories survive a
//! round trip, and are compared against the enumerations below when
//! answering category predicates.

/// Pragmatic function of the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueAct {
    Assertion,
    Command,
    WhQuery,
    YnQuery,
}

impl DialogueAct {
    pub fn all() -> &'static [DialogueAct] {
        static ALL: [DialogueAct; 4] = [
            DialogueAct::Assertion,
            DialogueAct::Command,
            DialogueAct::WhQuery,
            DialogueAct::YnQuery,
        ];
        &ALL
    }

    /// Tag used by the service for this act.
    pub fn identifier(&self) -> &'static str {
        match *self {
            DialogueAct::Assertion => "assert",
            DialogueAct::Command => "command",
            DialogueAct::WhQuery => "wh-query",
            DialogueAct::YnQuery => "yn-query",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<DialogueAct> {
        Self::all()
            .iter()
            .find(|act| act.identifier() == identifier)
            .cloned()
    }
}

/// Semantic classification of what the utterance is about. The service can
/// attach several of these to a single utterance, concatenated in one
/// delimited `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtteranceType {
    Abbreviation,
    Entity,
    Description,
    Human,
    Location,
    Number,
}

impl UtteranceType {
    pub fn all() -> &'static [UtteranceType] {
        static ALL: [UtteranceType; 6] = [
            UtteranceType::Abbreviation,
            UtteranceType::Entity,
            UtteranceType::Description,
            UtteranceType::Human,
            UtteranceType::Location,
            UtteranceType::Number,
        ];
        &ALL
    }

    pub fn identifier(&self) -> &'static str {
        match *self {
            UtteranceType::Abbreviation => "abbreviation",
            UtteranceType::Entity => "entity",
            UtteranceType::Description => "description",
            UtteranceType::Human => "human",
            UtteranceType::Location => "location",
            UtteranceType::Number => "number",
        }
    }

    /// Whether this type occurs anywhere in a composite `type` tag.
    pub fn matches(&self, type_tag: &str) -> bool {
        type_tag.contains(self.identifier())
    }
}

/// Five point polarity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Sentiment {
    pub fn all() -> &'static [Sentiment] {
        static ALL: [Sentiment; 5] = [
            Sentiment::VeryPositive,
            Sentiment::Positive,
            Sentiment::Neutral,
            Sentiment::Negative,
            Sentiment::VeryNegative,
        ];
        &ALL
    }

    pub fn identifier(&self) -> &'static str {
        match *self {
            Sentiment::VeryPositive => "vpositive",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::VeryNegative => "vnegative",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Sentiment> {
        Self::all()
            .iter()
            .find(|sentiment| sentiment.identifier() == identifier)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_act_identifiers_round_trip() {
        for act in DialogueAct::all() {
            assert_eq!(Some(*act), DialogueAct::from_identifier(act.identifier()));
        }
    }

    #[test]
    fn test_unknown_act_identifier() {
        assert_eq!(None, DialogueAct::from_identifier("exclamation"));
    }

    #[test]
    fn test_sentiment_identifiers_round_trip() {
        for sentiment in Sentiment::all() {
            assert_eq!(
                Some(*sentiment),
                Sentiment::from_identifier(sentiment.identifier())
            );
        }
    }

    #[test]
    fn test_type_matches_composite_tag() {
        // Given
        let type_tag = "entity|location";

        // When / Then
        assert!(UtteranceType::Entity.matches(type_tag));
        assert!(UtteranceType::Location.matches(type_tag));
        assert!(!UtteranceType::Number.matches(type_tag));
    }

    #[test]
    fn test_type_never_matches_empty_tag() {
        for utterance_type in UtteranceType::all() {
            assert!(!utterance_type.matches(""));
        }
    }
}
