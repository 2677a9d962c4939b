//! `--list`: print the preset catalog, aliases grouped per preset.

use super::{PresetCatalog, PresetsOutput};

/// Text listing: a header, then one indented line per preset.
pub(super) fn listing_lines(catalog: &PresetCatalog) -> Vec<String> {
    std::iter::once("Available presets:".to_string())
        .chain(catalog.list_all().iter().map(|p| format!("  {}", p.listing())))
        .collect()
}

pub(super) fn cmd_list(catalog: &PresetCatalog, json: bool) {
    if json {
        let output = PresetsOutput {
            count: catalog.len(),
            presets: catalog.list_all(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => log::error!("could not serialize preset list: {e}"),
        }
        return;
    }

    for line in listing_lines(catalog) {
        println!("{line}");
    }
}
