//! Preset catalog: named solid colors and five-zone region layouts.
//!
//! [`PresetCatalog`] is built once from an ordered list of
//! [`PresetDefinition`]s. Every alias becomes its own lookup key pointing at
//! the same definition, and the ordered list is kept for listing and
//! category-filtered iteration. The catalog is read-only after construction.

mod builtin;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::tool::ZONE_COUNT;

/// Preset grouping used by `--random` and `--rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Special,
    Flag,
    Color,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Special, Category::Flag, Category::Color];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Special => "special",
            Category::Flag => "flag",
            Category::Color => "color",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a preset paints: one color for the whole keyboard, or one per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorSpec {
    Solid { color: Rgb },
    Regions { colors: [Rgb; ZONE_COUNT] },
}

/// A catalog entry. The first alias is the preset's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetDefinition {
    pub aliases: &'static [&'static str],
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(flatten)]
    pub spec: ColorSpec,
}

impl PresetDefinition {
    /// Primary alias, used in progress messages.
    pub fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }

    /// Listing line without indentation: `alias1, alias2 - description`.
    pub fn listing(&self) -> String {
        let names = self.aliases.join(", ");
        match self.description {
            Some(d) if !d.is_empty() => format!("{names} - {d}"),
            _ => names,
        }
    }
}

/// Immutable alias → preset lookup plus the declaration-ordered list.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    definitions: Vec<PresetDefinition>,
    by_alias: HashMap<&'static str, usize>,
}

impl PresetCatalog {
    /// Build a catalog, expanding every alias into its own lookup key.
    ///
    /// A later definition that reuses an alias takes it over; each collision
    /// is logged as a warning.
    pub fn new(definitions: Vec<PresetDefinition>) -> Self {
        let mut by_alias = HashMap::new();
        for (index, def) in definitions.iter().enumerate() {
            for &alias in def.aliases {
                if let Some(prev) = by_alias.insert(alias, index) {
                    log::warn!(
                        "preset alias '{alias}' is defined by both '{}' and '{}'; using the latter",
                        definitions[prev].name(),
                        def.name()
                    );
                }
            }
        }
        PresetCatalog {
            definitions,
            by_alias,
        }
    }

    /// The catalog shipped with lux.
    pub fn builtin() -> Self {
        Self::new(builtin::DEFINITIONS.to_vec())
    }

    pub fn get(&self, alias: &str) -> Option<&PresetDefinition> {
        self.by_alias.get(alias).map(|&i| &self.definitions[i])
    }

    /// All definitions in declaration order.
    pub fn list_all(&self) -> &[PresetDefinition] {
        &self.definitions
    }

    /// Definitions of one category, in declaration order.
    pub fn by_category(&self, category: Category) -> Vec<&PresetDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Number of distinct lookup keys.
    pub fn alias_count(&self) -> usize {
        self.by_alias.len()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
