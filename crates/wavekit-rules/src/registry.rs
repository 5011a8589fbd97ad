use crate::simple::{SimpleLongitudinal, SimpleTransverse};
use crate::WaveRule;
use wavekit_core::{Category, Variant};

/// An entry in the rule registry: one selectable wave example.
pub struct RuleEntry {
    pub variant: Variant,
    pub name: &'static str,
    /// One-line classroom note shown under the example selector.
    pub blurb: &'static str,
    pub constructor: fn() -> Box<dyn WaveRule>,
}

/// Build the registry of all wave examples, in selector order.
///
/// The registry is the single source of truth the GUI uses to enumerate
/// examples and the dispatcher uses to instantiate their rendering rules.
pub fn build_registry() -> Vec<RuleEntry> {
    vec![
        RuleEntry {
            variant: Variant::Water,
            name: "Water Surface Wave",
            blurb: "Ripples formed when a stone is dropped in water.",
            constructor: || Box::new(crate::water::WaterRule::new()),
        },
        RuleEntry {
            variant: Variant::Light,
            name: "Light Wave",
            blurb: "Electromagnetic transverse wave traveling in space.",
            constructor: || Box::new(crate::light::LightRule::new()),
        },
        RuleEntry {
            variant: Variant::Rope,
            name: "Rope Wave",
            blurb: "Up-down pulse sent along a stretched rope.",
            constructor: || Box::new(crate::rope::RopeRule::new()),
        },
        RuleEntry {
            variant: Variant::Sound,
            name: "Sound Wave",
            blurb: "Compression & rarefaction of air carrying sound.",
            constructor: || Box::new(crate::sound::SoundRule::new()),
        },
        RuleEntry {
            variant: Variant::Pwave,
            name: "Seismic P-Wave",
            blurb: "Primary earthquake wave moving through Earth (fastest).",
            constructor: || Box::new(crate::pwave::PwaveRule::new()),
        },
        RuleEntry {
            variant: Variant::Slinky,
            name: "Slinky Compression",
            blurb: "Push-pull (compression) motion in a slinky toy.",
            constructor: || Box::new(crate::slinky::SlinkyRule::new()),
        },
    ]
}

/// Resolve the rendering rule for the active category and selection.
///
/// `None`, an unknown selection, or a variant belonging to the other
/// category all fall back to the category's plain-trace rule.
pub fn rule_for(category: Category, variant: Option<Variant>) -> Box<dyn WaveRule> {
    if let Some(v) = variant {
        if v.category() == category {
            if let Some(entry) = build_registry().iter().find(|e| e.variant == v) {
                return (entry.constructor)();
            }
        }
    }
    match category {
        Category::Transverse => Box::new(SimpleTransverse::new()),
        Category::Longitudinal => Box::new(SimpleLongitudinal::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_variant() {
        let registry = build_registry();
        assert_eq!(registry.len(), 6);
        for v in [
            Variant::Water,
            Variant::Light,
            Variant::Rope,
            Variant::Sound,
            Variant::Pwave,
            Variant::Slinky,
        ] {
            assert!(registry.iter().any(|e| e.variant == v));
        }
    }

    #[test]
    fn test_dispatch_by_variant() {
        let rule = rule_for(Category::Transverse, Some(Variant::Water));
        assert_eq!(rule.name(), "Water Surface Wave");
        let rule = rule_for(Category::Longitudinal, Some(Variant::Pwave));
        assert_eq!(rule.name(), "Seismic P-Wave");
    }

    #[test]
    fn test_no_selection_falls_back() {
        assert_eq!(rule_for(Category::Transverse, None).name(), "Transverse Wave");
        assert_eq!(
            rule_for(Category::Longitudinal, None).name(),
            "Longitudinal Wave"
        );
    }

    #[test]
    fn test_category_mismatch_falls_back() {
        // A longitudinal selection while transverse is active uses the
        // transverse fallback, not the selected rule.
        let rule = rule_for(Category::Transverse, Some(Variant::Slinky));
        assert_eq!(rule.name(), "Transverse Wave");
    }

    #[test]
    fn test_registry_order_matches_selector() {
        let ids: Vec<&str> = build_registry().iter().map(|e| e.variant.id()).collect();
        assert_eq!(ids, ["water", "light", "rope", "sound", "pwave", "slinky"]);
    }
}
