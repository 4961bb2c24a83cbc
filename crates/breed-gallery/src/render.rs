//! Card renderer
//!
//! Draws breed records into a [`Container`], replacing whatever it held.
//! Also produces the transient loading message and the load error panel.

use crate::config::GalleryConfig;
use crate::dom::{Container, Element, Fragment, Image, ImageFallback};
use crate::model::BreedRecord;
use std::fmt::Display;
use std::path::Path;

/// Shown for any missing or empty field
pub const NOT_AVAILABLE: &str = "Not available";

/// Shown when there is nothing to draw
pub const NO_RESULTS: &str = "No breeds found. Try a different search.";

/// Shown while the collection loads
pub const LOADING: &str = "Loading breeds...";

/// Heading of the load error panel
pub const LOAD_FAILED: &str = "❌ Failed to load dog breeds";

/// Class of a card element
pub const CARD_CLASS: &str = "breed-card";

const INFO_CLASS: &str = "breed-info";
const PANEL_STYLE: &str = "text-align: center; padding: 2rem;";

/// Draw one card per record, in order
///
/// Clears the container first. With no records the container holds only
/// the [`NO_RESULTS`] message. Cards are attached in a single batch.
pub fn render<'a, I>(container: &mut Container, records: I, config: &GalleryConfig)
where
    I: IntoIterator<Item = &'a BreedRecord>,
{
    container.clear();

    let mut fragment = Fragment::new();
    for breed in records {
        fragment.append(breed_card(breed, config));
    }

    if fragment.is_empty() {
        container.replace_with(Element::new("p").text_child(NO_RESULTS));
        return;
    }

    tracing::debug!(cards = fragment.len(), "rendering breeds");
    container.append_fragment(fragment);
}

/// Replace content with the loading message
pub fn render_loading(container: &mut Container) {
    container.replace_with(Element::new("p").text_child(LOADING));
}

/// Replace content with the load error panel
pub fn render_load_error(container: &mut Container, error: &dyn Display, data_file: &Path) {
    container.replace_with(
        Element::new("div")
            .with_style(PANEL_STYLE)
            .child(Element::new("h3").text_child(LOAD_FAILED))
            .child(Element::new("p").text_child(format!(
                "Please make sure '{}' is in the same folder.",
                data_file.display()
            )))
            .child(Element::new("p").text_child(format!("Error: {error}"))),
    );
}

/// Build the card for one record
#[must_use]
pub fn breed_card(breed: &BreedRecord, config: &GalleryConfig) -> Element {
    let image = Image::new(config.primary_image_url(breed), breed.name.clone())
        .with_fallback(ImageFallback::new(config.fallback_image_url(breed.id)));

    let info = Element::new("div")
        .with_class(INFO_CLASS)
        .child(Element::new("h3").text_child(breed.name.clone()))
        .child(field("Breed Group", format_property(breed.breed_group.as_deref())))
        .child(field("Temperament", format_property(breed.temperament.as_deref())))
        .child(field("Origin", format_property(breed.origin.as_deref())))
        .child(field("Life Span", format_property(breed.life_span.as_deref())))
        .child(field("Weight", format_measure(breed.metric_weight(), "kg")))
        .child(field("Height", format_measure(breed.metric_height(), "cm")));

    Element::new("div")
        .with_class(CARD_CLASS)
        .child(image)
        .child(info)
}

/// Value as displayed, or [`NOT_AVAILABLE`] when missing or empty
#[inline]
#[must_use]
pub fn format_property(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_measure(value: Option<&str>, unit: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("{v} {unit}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn field(label: &str, value: String) -> Element {
    Element::new("p")
        .child(Element::new("strong").text_child(format!("{label}:")))
        .text_child(format!(" {value}"))
}
