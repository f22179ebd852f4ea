//! Selection store with an explicit publish step.
//!
//! The store owns the current [`Configuration`]. Callers apply selections and
//! then call [`ConfigStore::publish`], which computes a fresh layout and hands
//! it to exactly one [`LayoutSink`]. There is no subscriber list.

use thiserror::Error;

use crate::config::{parse_meters, CanopyType, Configuration};
use crate::layout::{compute_placement, plan_update, PlacementResult, SceneUpdate};

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("unknown selection category '{0}'")]
    UnknownCategory(String),
    #[error("invalid {field} value '{value}': expected a number of meters")]
    InvalidDimension { field: &'static str, value: String },
}

/// A single change coming from the configurator's menus.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    CanopyType(CanopyType),
    Roof(String),
    Size(String),
    Color(String),
    Length(f32),
    Width(f32),
}

impl Selection {
    /// Parse a menu category/value pair, e.g. `("canopy-type", "Free-Standing")`.
    ///
    /// Categories are matched case-insensitively and accept `-`, `_` or no
    /// separator (`canopyType`, `canopy_type`, `canopy-type`).
    pub fn parse(category: &str, value: &str) -> Result<Self, SelectionError> {
        let key: String = category
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let value = value.trim();
        match key.as_str() {
            "canopytype" | "type" => Ok(Selection::CanopyType(CanopyType::from_label(value))),
            "roof" => Ok(Selection::Roof(value.to_string())),
            "size" => Ok(Selection::Size(value.to_string())),
            "color" | "colour" => Ok(Selection::Color(value.to_string())),
            "length" => meters("length", value).map(Selection::Length),
            "width" => meters("width", value).map(Selection::Width),
            _ => Err(SelectionError::UnknownCategory(category.to_string())),
        }
    }
}

fn meters(field: &'static str, value: &str) -> Result<f32, SelectionError> {
    parse_meters(value).ok_or_else(|| SelectionError::InvalidDimension {
        field,
        value: value.to_string(),
    })
}

/// Receiver of published layouts (the scene-update layer).
pub trait LayoutSink {
    fn apply(&mut self, config: &Configuration, placement: &PlacementResult, update: SceneUpdate);
}

impl<F> LayoutSink for F
where
    F: FnMut(&Configuration, &PlacementResult, SceneUpdate),
{
    fn apply(&mut self, config: &Configuration, placement: &PlacementResult, update: SceneUpdate) {
        self(config, placement, update)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    config: Configuration,
    published_units: Option<usize>,
}

impl ConfigStore {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            published_units: None,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Apply one selection. Returns whether the configuration changed.
    pub fn select(&mut self, selection: Selection) -> bool {
        let before = self.config.clone();
        let config = &mut self.config;
        match selection {
            Selection::CanopyType(kind) => config.canopy_type = kind,
            Selection::Roof(roof) => config.roof = Some(roof),
            Selection::Size(size) => config.size = Some(size),
            Selection::Color(color) => config.color = Some(color),
            Selection::Length(length) => config.length = Some(length),
            Selection::Width(width) => config.width = Some(width),
        }
        before != self.config
    }

    /// Parse and apply a menu selection; the configuration is untouched on error.
    pub fn select_raw(&mut self, category: &str, value: &str) -> Result<bool, SelectionError> {
        let selection = Selection::parse(category, value)?;
        Ok(self.select(selection))
    }

    /// Replace the whole configuration, e.g. when restoring a saved quote.
    pub fn replace(&mut self, config: Configuration) -> bool {
        let changed = self.config != config;
        self.config = config;
        changed
    }

    /// Compute the layout for the current configuration and hand it to `sink`.
    pub fn publish<S: LayoutSink + ?Sized>(&mut self, sink: &mut S) -> SceneUpdate {
        let placement = compute_placement(&self.config);
        let update = plan_update(self.published_units, &placement);
        log::info!(
            "[store] publish {} size={:?} units={} update={:?}",
            self.config.canopy_type,
            self.config.size,
            placement.unit_count(),
            update
        );
        sink.apply(&self.config, &placement, update);
        self.published_units = Some(placement.unit_count());
        update
    }
}
