//! Built-in preset table.
//!
//! To add an alias, append it to the definition's `aliases` list. Aliases are
//! case-sensitive and must be unique across the whole table.

use super::{Category, ColorSpec, PresetDefinition};
use crate::color::Rgb;

const fn solid(hex: u32) -> ColorSpec {
    ColorSpec::Solid {
        color: Rgb::from_u32(hex),
    }
}

const fn regions(hex: [u32; 5]) -> ColorSpec {
    ColorSpec::Regions {
        colors: [
            Rgb::from_u32(hex[0]),
            Rgb::from_u32(hex[1]),
            Rgb::from_u32(hex[2]),
            Rgb::from_u32(hex[3]),
            Rgb::from_u32(hex[4]),
        ],
    }
}

pub(super) const DEFINITIONS: &[PresetDefinition] = &[
    // ── Special ──
    PresetDefinition {
        aliases: &["magic-green", "i-am-hacker"],
        category: Category::Special,
        description: None,
        spec: solid(0x55ff12),
    },
    PresetDefinition {
        aliases: &["rainbow"],
        category: Category::Special,
        description: None,
        spec: regions([0xff0000, 0xff8000, 0xffff00, 0x00ff00, 0x0000ff]),
    },
    // ── Flags ──
    PresetDefinition {
        aliases: &["Slovakia", "Slovensko", "slovakia", "slovensko"],
        category: Category::Flag,
        description: Some("Slovak flag"),
        spec: regions([0xffffff, 0x0000ff, 0x0000ff, 0xff0000, 0xff0000]),
    },
    PresetDefinition {
        aliases: &[
            "USA", "Murica", "'Merica", "FREEDOM", "usa", "murica", "'merica", "freedom",
        ],
        category: Category::Flag,
        description: Some("American flag"),
        spec: regions([0xbf0a30, 0xffffff, 0x002868, 0xffffff, 0xbf0a30]),
    },
    PresetDefinition {
        aliases: &["Vatican", "Vaticano", "vatican", "vaticano"],
        category: Category::Flag,
        description: Some("Vatican flag"),
        spec: regions([0xffe135, 0xffe135, 0xffffff, 0xffffff, 0xffffff]),
    },
    PresetDefinition {
        aliases: &["Poland", "Polska", "poland", "polska"],
        category: Category::Flag,
        description: Some("Polish flag"),
        spec: regions([0xffffff, 0xffffff, 0xffffff, 0xdc143c, 0xdc143c]),
    },
    PresetDefinition {
        aliases: &["Croatia", "Hrvatska", "croatia", "hrvatska"],
        category: Category::Flag,
        description: Some("Croatian flag"),
        spec: regions([0xff0000, 0xffffff, 0xffffff, 0xffffff, 0x171796]),
    },
    PresetDefinition {
        aliases: &["Bhutan", "འབྲུག་ཡུལ", "bhutan"],
        category: Category::Flag,
        description: Some("Bhutanese flag"),
        spec: regions([0xffd520, 0xffd520, 0xffd520, 0xff4e12, 0xff4e12]),
    },
    PresetDefinition {
        aliases: &["Mongolia", "Монгол", "ᠮᠣᠩᠭᠣᠯ", "mongolia"],
        category: Category::Flag,
        description: Some("Mongolian flag"),
        spec: regions([0xc4272f, 0x015197, 0x015197, 0x015197, 0xc4272f]),
    },
    PresetDefinition {
        aliases: &["Uganda", "Natural-Obligations", "uganda", "natural-obligations"],
        category: Category::Flag,
        description: Some("Ugandan flag"),
        spec: regions([0x000000, 0xfcdc04, 0xd90000, 0x000000, 0xfcdc04]),
    },
    // ── Royal colors ──
    PresetDefinition {
        aliases: &["royal-blue"],
        category: Category::Color,
        description: None,
        spec: solid(0x4169e1),
    },
    PresetDefinition {
        aliases: &["emerald-green", "emerald"],
        category: Category::Color,
        description: None,
        spec: solid(0x50c878),
    },
    PresetDefinition {
        aliases: &["bordeaux"],
        category: Category::Color,
        description: Some("dark wine red"),
        spec: solid(0x800020),
    },
    PresetDefinition {
        aliases: &["royal-red"],
        category: Category::Color,
        description: None,
        spec: solid(0xc41e3a),
    },
    PresetDefinition {
        aliases: &["royal-purple"],
        category: Category::Color,
        description: None,
        spec: solid(0x7851a9),
    },
    PresetDefinition {
        aliases: &["gold"],
        category: Category::Color,
        description: None,
        spec: solid(0xffd700),
    },
    PresetDefinition {
        aliases: &["sapphire"],
        category: Category::Color,
        description: Some("deep jewel blue"),
        spec: solid(0x0f52ba),
    },
    PresetDefinition {
        aliases: &["ruby"],
        category: Category::Color,
        description: None,
        spec: solid(0xe0115f),
    },
    PresetDefinition {
        aliases: &["amethyst"],
        category: Category::Color,
        description: Some("purple quartz"),
        spec: solid(0x9966cc),
    },
    PresetDefinition {
        aliases: &["ivory"],
        category: Category::Color,
        description: None,
        spec: solid(0xfffff0),
    },
    PresetDefinition {
        aliases: &["burgundy"],
        category: Category::Color,
        description: None,
        spec: solid(0x722f37),
    },
    PresetDefinition {
        aliases: &["navy"],
        category: Category::Color,
        description: None,
        spec: solid(0x000080),
    },
    PresetDefinition {
        aliases: &["bronze"],
        category: Category::Color,
        description: None,
        spec: solid(0xcd7f32),
    },
];
