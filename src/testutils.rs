/// Canonical service answer used across the response tests, with two
/// ranked intents, entities under two names and every scalar field set.
pub fn weather_payload() -> &'static str {
    r#"{
  "results": {
    "uuid": "4d0d9a56-4018-4b45-9e7b-b4673b2b0e74",
    "source": "What will the weather be in Paris tomorrow?",
    "intents": [
      { "slug": "weather", "confidence": 0.97 },
      { "slug": "smalltalk", "confidence": 0.12 }
    ],
    "act": "wh-query",
    "type": "entity|location",
    "sentiment": "neutral",
    "entities": {
      "location": [
        { "value": "Paris", "raw": "Paris", "confidence": 0.93 },
        { "value": "London", "raw": "London", "confidence": 0.81 }
      ],
      "datetime": [
        { "value": "2026-08-25T00:00:00+00:00", "raw": "tomorrow", "confidence": 0.88 }
      ]
    },
    "language": "en",
    "version": "2.10.0",
    "timestamp": "2026-08-24T12:00:00.000000+00:00",
    "status": 200
  }
}"#
}
