use super::*;
use crate::services::MemoryClipboard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::models::{EmoteSection, MultistepEmotes, Progression};

mod test_emotes;


fn create_test_manager() -> OrdersManager {
    OrdersManager::with_engine(EmoteEngine::with_rng(StdRng::seed_from_u64(7)))
}


fn section(name: &str, steps: &[&str]) -> EmoteSection {
    EmoteSection {
        name: name.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}


// ========================================================================
// Menu fixtures
// ========================================================================

/// Advanced: A = [s1, s2], B = [s3]
fn soda() -> MenuItem {
    MenuItem {
        id: "soda".to_string(),
        name: "Soda".to_string(),
        item_type: "drink".to_string(),
        available: true,
        price: 2.5,
        emotes: MultistepEmotes {
            advanced: true,
            sections: vec![
                section("A", &["s1 for {name}", "s2"]),
                section("B", &["s3"]),
            ],
        },
        image: None,
    }
}

/// Simple: one line
fn bread() -> MenuItem {
    MenuItem {
        id: "bread".to_string(),
        name: "Bread".to_string(),
        item_type: "food".to_string(),
        available: true,
        price: 1.25,
        emotes: MultistepEmotes::simple(vec!["slides {qty} {item} to {name}".to_string()]),
        image: None,
    }
}

fn test_menu() -> Vec<MenuItem> {
    vec![soda(), bread()]
}


fn qty(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
    pairs.iter().map(|(id, q)| (id.to_string(), *q)).collect()
}


/// Create an order and return its id, asserting it was created
fn create(manager: &mut OrdersManager, name: &str, pairs: &[(&str, u32)]) -> String {
    manager
        .create_order(name, None, &qty(pairs), &test_menu())
        .expect("order should be created")
}


fn assert_disjoint(manager: &OrdersManager) {
    for order in manager.active_orders() {
        assert!(
            !manager.archived_orders().iter().any(|o| o.id == order.id),
            "order {} is both active and archived",
            order.id
        );
    }
}
