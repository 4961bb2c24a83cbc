//! Testing utilities for the breed gallery workspace
//!
//! Shared fixtures and sources.

#![allow(missing_docs)]

use breed_gallery::config::DEFAULT_DATA_FILE;
use breed_gallery::{BreedRecord, Response, StaticSource};

pub fn akita() -> BreedRecord {
    BreedRecord::new(1, "Akita").with_reference_image("abc")
}

pub fn basenji() -> BreedRecord {
    BreedRecord::new(2, "Basenji")
}

/// The two-breed collection used throughout the scenarios
pub fn sample_breeds() -> Vec<BreedRecord> {
    vec![akita(), basenji()]
}

/// A record with every displayed field filled in
pub fn complete_breed() -> BreedRecord {
    BreedRecord::new(3, "Bernese Mountain Dog")
        .with_reference_image("S1fFlx5Em")
        .with_breed_group("Working")
        .with_temperament("Affectionate, Intelligent, Loyal, Faithful")
        .with_origin("Switzerland")
        .with_life_span("7 - 10 years")
        .with_metric_weight("29 - 54")
        .with_metric_height("58 - 70")
}

pub fn breeds_json(breeds: &[BreedRecord]) -> String {
    serde_json::to_string(breeds).unwrap()
}

/// Source serving `breeds` at the default data path
pub fn source_with(breeds: &[BreedRecord]) -> StaticSource {
    StaticSource::new().with_response(DEFAULT_DATA_FILE, Response::ok(breeds_json(breeds)))
}

/// Source answering the default data path with `status`
pub fn failing_source(status: u16) -> StaticSource {
    StaticSource::new().with_response(DEFAULT_DATA_FILE, Response::with_status(status))
}
