//! Breed record data model
//!
//! Records come from an externally supplied JSON document and are read-only
//! once loaded. Only `id` and `name` are relied upon; every other field is
//! optional and deserializes leniently so that a shape mismatch degrades the
//! card to "Not available" instead of failing the whole load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of a breed record
pub type BreedId = u64;

/// One entry of the source data describing a dog breed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: BreedId,
    /// Display name, the only searchable field
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Opaque key of the primary image on the CDN
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub reference_image_id: Option<String>,
    /// Breed group, e.g. "Working"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub breed_group: Option<String>,
    /// What the breed was bred for
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub bred_for: Option<String>,
    /// Comma separated temperament traits
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
    /// Country or region of origin
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Life span, e.g. "10 - 12 years"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,
    /// Weight range
    #[serde(default, deserialize_with = "lenient_measurement", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measurement>,
    /// Height range
    #[serde(default, deserialize_with = "lenient_measurement", skip_serializing_if = "Option::is_none")]
    pub height: Option<Measurement>,
}

impl BreedRecord {
    /// Create a record with only the required fields set
    #[inline]
    #[must_use]
    pub fn new(id: BreedId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// With primary image reference
    #[must_use]
    pub fn with_reference_image(mut self, reference_image_id: impl Into<String>) -> Self {
        self.reference_image_id = Some(reference_image_id.into());
        self
    }

    /// With breed group
    #[must_use]
    pub fn with_breed_group(mut self, group: impl Into<String>) -> Self {
        self.breed_group = Some(group.into());
        self
    }

    /// With temperament
    #[must_use]
    pub fn with_temperament(mut self, temperament: impl Into<String>) -> Self {
        self.temperament = Some(temperament.into());
        self
    }

    /// With origin
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// With life span
    #[must_use]
    pub fn with_life_span(mut self, life_span: impl Into<String>) -> Self {
        self.life_span = Some(life_span.into());
        self
    }

    /// With metric weight
    #[must_use]
    pub fn with_metric_weight(mut self, metric: impl Into<String>) -> Self {
        self.weight = Some(Measurement::metric(metric));
        self
    }

    /// With metric height
    #[must_use]
    pub fn with_metric_height(mut self, metric: impl Into<String>) -> Self {
        self.height = Some(Measurement::metric(metric));
        self
    }

    /// Metric weight, if any
    #[inline]
    #[must_use]
    pub fn metric_weight(&self) -> Option<&str> {
        self.weight.as_ref().and_then(|m| m.metric.as_deref())
    }

    /// Metric height, if any
    #[inline]
    #[must_use]
    pub fn metric_height(&self) -> Option<&str> {
        self.height.as_ref().and_then(|m| m.metric.as_deref())
    }
}

/// A measurement given in both unit systems
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Imperial range, e.g. "50 - 70"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub imperial: Option<String>,
    /// Metric range, e.g. "23 - 32"
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

impl Measurement {
    /// Measurement with only the metric value known
    #[inline]
    #[must_use]
    pub fn metric(value: impl Into<String>) -> Self {
        Self {
            imperial: None,
            metric: Some(value.into()),
        }
    }
}

/// Strings pass through, numbers and booleans become their text form,
/// anything else is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

fn lenient_id<'de, D>(deserializer: D) -> Result<BreedId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn lenient_measurement<'de, D>(deserializer: D) -> Result<Option<Measurement>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_full_record() {
        let record: BreedRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Affenpinscher",
            "reference_image_id": "BJa4kxc4X",
            "breed_group": "Toy",
            "bred_for": "Small rodent hunting, lapdog",
            "temperament": "Stubborn, Curious, Playful",
            "life_span": "10 - 12 years",
            "weight": { "imperial": "6 - 13", "metric": "3 - 6" },
            "height": { "imperial": "9 - 11.5", "metric": "23 - 29" }
        }))
        .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Affenpinscher");
        assert_eq!(record.reference_image_id.as_deref(), Some("BJa4kxc4X"));
        assert_eq!(record.breed_group.as_deref(), Some("Toy"));
        assert_eq!(record.origin, None);
        assert_eq!(record.metric_weight(), Some("3 - 6"));
        assert_eq!(record.metric_height(), Some("23 - 29"));
    }

    #[test]
    fn deserialize_minimal_record() {
        let record: BreedRecord = serde_json::from_str(r#"{"id": 2, "name": "Basenji"}"#).unwrap();
        assert_eq!(record, BreedRecord::new(2, "Basenji"));
        assert_eq!(record.metric_weight(), None);
    }

    #[test]
    fn shape_mismatch_degrades_to_absent() {
        let record: BreedRecord = serde_json::from_value(json!({
            "id": "7",
            "name": "Boxer",
            "origin": null,
            "life_span": 12,
            "temperament": ["Playful"],
            "weight": "25 - 32",
            "height": { "metric": 60 },
            "unknown_field": true
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.origin, None);
        assert_eq!(record.life_span.as_deref(), Some("12"));
        assert_eq!(record.temperament, None);
        assert_eq!(record.weight, None);
        assert_eq!(record.metric_height(), Some("60"));
    }

    #[test]
    fn missing_required_fields_default() {
        let record: BreedRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.id, 0);
        assert!(record.name.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let record = BreedRecord::new(3, "Akita")
            .with_reference_image("BFRYBufpm")
            .with_origin("Japan")
            .with_metric_weight("29 - 52");

        assert_eq!(record.reference_image_id.as_deref(), Some("BFRYBufpm"));
        assert_eq!(record.origin.as_deref(), Some("Japan"));
        assert_eq!(record.metric_weight(), Some("29 - 52"));
    }
}
