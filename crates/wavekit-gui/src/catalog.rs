//! Static curriculum content: category descriptions and the example records
//! shown in the selector. Example names and notes come from the rule
//! registry so the selector and the renderer can never disagree.

use wavekit_core::{Category, Variant};
use wavekit_rules::{build_registry, RuleEntry};

/// Descriptive text for one wave category.
pub struct CategoryInfo {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 2] = [
    CategoryInfo {
        category: Category::Transverse,
        title: "Transverse Wave",
        description: "Medium moves perpendicular to wave direction. \
                      Examples: water waves, light waves.",
    },
    CategoryInfo {
        category: Category::Longitudinal,
        title: "Longitudinal Wave",
        description: "Medium moves parallel to wave direction. \
                      Examples: sound waves, seismic P-waves.",
    },
];

pub fn category_info(category: Category) -> &'static CategoryInfo {
    match category {
        Category::Transverse => &CATEGORIES[0],
        Category::Longitudinal => &CATEGORIES[1],
    }
}

/// Registry entries belonging to one category, in selector order.
pub fn examples_for(category: Category) -> Vec<RuleEntry> {
    build_registry()
        .into_iter()
        .filter(|e| e.variant.category() == category)
        .collect()
}

/// The example auto-selected when a category is activated.
pub fn first_example(category: Category) -> Variant {
    match category {
        Category::Transverse => Variant::Water,
        Category::Longitudinal => Variant::Sound,
    }
}

/// Display name of a variant, from the registry.
pub fn example_name(variant: Variant) -> &'static str {
    build_registry()
        .iter()
        .find(|e| e.variant == variant)
        .map(|e| e.name)
        .unwrap_or("Wave")
}
