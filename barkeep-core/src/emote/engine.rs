//! EmoteEngine - emote text production and progression cursors
//!
//! # Simple items
//!
//! One template is picked uniformly from section 0 on every request.
//!
//! # Advanced items
//!
//! ```text
//! seed (first request, or stale cursor)
//!     └─ random section, never the one last handed out for this menu item id
//! emit  → template at (section, step), placeholders interpolated
//! advance
//!     ├─ step + 1 < steps        → (section, step + 1)
//!     └─ otherwise               → (next playable section, 0), wrapping
//! ```
//!
//! The last-seeded section per menu item id lives in the engine instance.
//! Menu item ids are globally unique, so this memory never mixes profiles.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shared::models::{MenuItem, MultistepEmotes, Progression};
use std::collections::HashMap;

use super::template::{EmoteContext, interpolate};

/// Emote text producer owning the per-menu-item anti-repeat memory
#[derive(Debug)]
pub struct EmoteEngine {
    /// Section most recently handed out by seeding, per menu item id
    last_section: HashMap<String, usize>,
    rng: StdRng,
}

impl Default for EmoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EmoteEngine {
    /// Engine with an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine with a caller-provided RNG (deterministic tests)
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            last_section: HashMap::new(),
            rng,
        }
    }

    /// Last section handed out by seeding for a menu item
    pub fn last_section(&self, menu_item_id: &str) -> Option<usize> {
        self.last_section.get(menu_item_id).copied()
    }

    /// Starting cursor for a fresh order line
    ///
    /// `Progression::None` for simple items and for advanced items without a
    /// single step to play.
    pub fn seed(&mut self, item: &MenuItem) -> Progression {
        if !item.emotes.advanced {
            return Progression::None;
        }
        match self.seed_section(item) {
            Some(section) => Progression::at(section, 0),
            None => Progression::None,
        }
    }

    /// Pick a starting section for an advanced item
    ///
    /// A single section is always section 0. Otherwise the pick is uniform
    /// over the sections that have steps, excluding the one last handed out
    /// for the same id; when that exclusion leaves nothing, the lone playable
    /// section is reused. Empty sections are never picked.
    pub fn seed_section(&mut self, item: &MenuItem) -> Option<usize> {
        let emotes = &item.emotes;
        let count = emotes.section_count();
        if count == 0 {
            return None;
        }
        if count == 1 {
            return (emotes.step_count(0) > 0).then_some(0);
        }

        let playable: Vec<usize> = (0..count).filter(|&i| emotes.step_count(i) > 0).collect();
        if playable.is_empty() {
            return None;
        }

        let last = self.last_section.get(&item.id).copied();
        let eligible: Vec<usize> = playable
            .iter()
            .copied()
            .filter(|&i| Some(i) != last)
            .collect();

        let pick = eligible
            .choose(&mut self.rng)
            .or_else(|| playable.first())
            .copied()?;

        tracing::debug!(
            menu_item_id = %item.id,
            section = pick,
            previous = ?last,
            "Seeded emote section"
        );
        self.last_section.insert(item.id.clone(), pick);
        Some(pick)
    }

    /// Produce one emote line for an order item and advance its cursor
    ///
    /// Simple items ignore (and clear) the cursor. Advanced items seed lazily
    /// and reseed a cursor that no longer points at a step (menu edited since).
    /// Returns an empty string when there is nothing to say.
    pub fn emit(&mut self, item: &MenuItem, progression: &mut Progression, ctx: &EmoteContext) -> String {
        if !item.emotes.advanced {
            *progression = Progression::None;
            return self.pick_simple(&item.emotes, ctx);
        }

        let emotes = &item.emotes;
        let (section, step) = match *progression {
            Progression::At {
                section_index,
                step_index,
            } if emotes.step(section_index, step_index).is_some() => (section_index, step_index),
            current => {
                if !current.is_none() {
                    tracing::debug!(
                        menu_item_id = %item.id,
                        cursor = ?current,
                        "Emote cursor out of range, reseeding"
                    );
                }
                match self.seed_section(item) {
                    Some(section) => (section, 0),
                    None => {
                        *progression = Progression::None;
                        return String::new();
                    }
                }
            }
        };

        let text = emotes
            .step(section, step)
            .map(|template| interpolate(template, ctx))
            .unwrap_or_default();

        *progression = advance(emotes, section, step);
        text
    }

    fn pick_simple(&mut self, emotes: &MultistepEmotes, ctx: &EmoteContext) -> String {
        emotes
            .sections
            .first()
            .and_then(|s| s.steps.choose(&mut self.rng))
            .map(|template| interpolate(template, ctx))
            .unwrap_or_default()
    }
}

/// Cursor after emitting `(section, step)`
///
/// `section` must have at least one step, so the wrap always lands somewhere.
fn advance(emotes: &MultistepEmotes, section: usize, step: usize) -> Progression {
    let next_step = step + 1;
    if next_step < emotes.step_count(section) {
        return Progression::at(section, next_step);
    }

    let count = emotes.section_count();
    let next_section = (1..=count)
        .map(|offset| (section + offset) % count)
        .find(|&i| emotes.step_count(i) > 0)
        .unwrap_or(section);
    Progression::at(next_section, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EmoteSection;

    fn section(name: &str, steps: &[&str]) -> EmoteSection {
        EmoteSection {
            name: name.into(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn advanced_item(id: &str, sections: Vec<EmoteSection>) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: "Soda".into(),
            item_type: "drink".into(),
            available: true,
            price: 2.0,
            emotes: MultistepEmotes {
                advanced: true,
                sections,
            },
            image: None,
        }
    }

    fn simple_item(lines: &[&str]) -> MenuItem {
        let mut item = advanced_item("simple", vec![section("Default", lines)]);
        item.emotes.advanced = false;
        item
    }

    fn engine(seed: u64) -> EmoteEngine {
        EmoteEngine::with_rng(StdRng::seed_from_u64(seed))
    }

    fn soda() -> MenuItem {
        advanced_item(
            "soda",
            vec![section("A", &["s1", "s2"]), section("B", &["s3"])],
        )
    }

    #[test]
    fn test_soda_cycle_from_section_a() {
        let mut engine = engine(1);
        let item = soda();
        let ctx = EmoteContext::new();
        let mut cursor = Progression::at(0, 0);

        let lines: Vec<String> = (0..7).map(|_| engine.emit(&item, &mut cursor, &ctx)).collect();
        assert_eq!(lines, vec!["s1", "s2", "s3", "s1", "s2", "s3", "s1"]);
        assert_eq!(cursor, Progression::at(0, 1));
    }

    #[test]
    fn test_cycle_is_gap_free_from_any_start() {
        let item = advanced_item(
            "platter",
            vec![
                section("A", &["a1", "a2", "a3"]),
                section("B", &["b1"]),
                section("C", &["c1", "c2"]),
            ],
        );
        let ctx = EmoteContext::new();
        for seed in 0..20 {
            let mut engine = engine(seed);
            let mut cursor = Progression::None;
            let first = engine.emit(&item, &mut cursor, &ctx);
            let start = match first.as_str() {
                "a1" => 0,
                "b1" => 1,
                "c1" => 2,
                other => panic!("seeded mid-section: {other}"),
            };
            let mut expected: Vec<&str> = Vec::new();
            for k in 0..3 {
                expected.extend(item.emotes.sections[(start + k) % 3].steps.iter().map(String::as_str));
            }
            let mut got = vec![first];
            for _ in 1..expected.len() * 2 {
                got.push(engine.emit(&item, &mut cursor, &ctx));
            }
            let doubled: Vec<&str> = expected.iter().chain(expected.iter()).copied().collect();
            assert_eq!(got, doubled);
        }
    }

    #[test]
    fn test_seed_never_repeats_for_same_item() {
        let mut engine = engine(7);
        let item = advanced_item(
            "tea",
            vec![section("A", &["a"]), section("B", &["b"]), section("C", &["c"])],
        );
        let mut previous = engine.seed_section(&item).unwrap();
        for _ in 0..200 {
            let next = engine.seed_section(&item).unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_seed_alternates_with_two_sections() {
        let mut engine = engine(3);
        let item = soda();
        let first = engine.seed_section(&item).unwrap();
        for i in 1..10 {
            let expected = if i % 2 == 1 { 1 - first } else { first };
            assert_eq!(engine.seed_section(&item).unwrap(), expected);
        }
    }

    #[test]
    fn test_seed_memory_is_per_menu_item() {
        let mut engine = engine(11);
        let a = soda();
        let mut b = soda();
        b.id = "other".into();

        let picked = engine.seed_section(&a).unwrap();
        assert_eq!(engine.last_section("soda"), Some(picked));
        assert_eq!(engine.last_section("other"), None);
        engine.seed_section(&b);
        assert_eq!(engine.last_section("soda"), Some(picked));
    }

    #[test]
    fn test_single_section_is_deterministic() {
        let mut engine = engine(5);
        let item = advanced_item("one", vec![section("Only", &["x", "y"])]);
        for _ in 0..10 {
            assert_eq!(engine.seed_section(&item), Some(0));
        }
        assert_eq!(engine.last_section("one"), None);
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut engine = engine(9);
        let item = advanced_item(
            "gappy",
            vec![section("A", &["a1"]), section("Empty", &[]), section("C", &["c1"])],
        );
        let ctx = EmoteContext::new();
        let mut cursor = Progression::at(0, 0);
        let lines: Vec<String> = (0..4).map(|_| engine.emit(&item, &mut cursor, &ctx)).collect();
        assert_eq!(lines, vec!["a1", "c1", "a1", "c1"]);

        for _ in 0..20 {
            assert_ne!(engine.seed_section(&item), Some(1));
        }
    }

    #[test]
    fn test_advanced_without_steps_is_silent() {
        let mut engine = engine(2);
        let item = advanced_item("empty", vec![section("A", &[]), section("B", &[])]);
        let mut cursor = Progression::None;
        assert_eq!(engine.emit(&item, &mut cursor, &EmoteContext::new()), "");
        assert_eq!(cursor, Progression::None);
        assert_eq!(engine.seed(&item), Progression::None);

        let bare = advanced_item("bare", vec![]);
        assert_eq!(engine.emit(&bare, &mut cursor, &EmoteContext::new()), "");
    }

    #[test]
    fn test_stale_cursor_is_reseeded() {
        let mut engine = engine(4);
        let item = soda();
        let mut cursor = Progression::at(5, 9);
        let text = engine.emit(&item, &mut cursor, &EmoteContext::new());
        assert!(text == "s1" || text == "s3");
        assert!(matches!(cursor, Progression::At { .. }));
    }

    #[test]
    fn test_emit_interpolates_context() {
        let mut engine = engine(6);
        let item = advanced_item("ale", vec![section("Pour", &["slides an ale to {name}{missing}"])]);
        let mut cursor = Progression::None;
        let ctx = EmoteContext::new().with("name", "Bram");
        assert_eq!(engine.emit(&item, &mut cursor, &ctx), "slides an ale to Bram");
        assert_eq!(cursor, Progression::at(0, 0));
    }

    #[test]
    fn test_simple_item_picks_from_first_section() {
        let mut engine = engine(8);
        let item = simple_item(&["one", "two", "three"]);
        let mut cursor = Progression::at(0, 1);
        for _ in 0..20 {
            let text = engine.emit(&item, &mut cursor, &EmoteContext::new());
            assert!(["one", "two", "three"].contains(&text.as_str()));
        }
        assert_eq!(cursor, Progression::None);
    }

    #[test]
    fn test_simple_item_without_steps_is_empty() {
        let mut engine = engine(8);
        let mut item = simple_item(&[]);
        let mut cursor = Progression::None;
        assert_eq!(engine.emit(&item, &mut cursor, &EmoteContext::new()), "");
        item.emotes.sections.clear();
        assert_eq!(engine.emit(&item, &mut cursor, &EmoteContext::new()), "");
    }

    #[test]
    fn test_seed_simple_item_has_no_progression() {
        let mut engine = engine(1);
        assert_eq!(engine.seed(&simple_item(&["x"])), Progression::None);
        assert!(matches!(engine.seed(&soda()), Progression::At { step_index: 0, .. }));
    }
}
