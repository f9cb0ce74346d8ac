use super::*;
use crate::services::{ClipboardError, NotificationKind};


struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}


fn soda_cycle_from(first: &str) -> Vec<String> {
    let cycle = ["s1 for Aria", "s2", "s3"];
    let start = cycle.iter().position(|l| *l == first).expect("line is in the cycle");
    (0..6).map(|i| cycle[(start + i) % 3].to_string()).collect()
}


#[test]
fn test_advanced_item_walks_the_cycle() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "Aria", &[("soda", 1)]);

    let lines: Vec<String> = (0..6)
        .map(|_| manager.next_emote(&order_id, "soda", &menu).unwrap())
        .collect();

    // Seeded at step 0 of A or B
    assert!(lines[0] == "s1 for Aria" || lines[0] == "s3");
    assert_eq!(lines, soda_cycle_from(&lines[0]));
}


#[test]
fn test_cursor_is_per_order_line() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let a = create(&mut manager, "Aria", &[("soda", 1)]);
    let b = create(&mut manager, "Aria", &[("soda", 1)]);

    let a_first = manager.next_emote(&a, "soda", &menu).unwrap();
    let a_second = manager.next_emote(&a, "soda", &menu).unwrap();

    // b has not moved even though a advanced twice
    let b_cursor = manager.get_order(&b).unwrap().item("soda").unwrap().progression;
    assert!(matches!(b_cursor, Progression::At { step_index: 0, .. }));
    assert_ne!(a_first, a_second);
}


#[test]
fn test_consecutive_orders_start_in_different_sections() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let a = create(&mut manager, "Aria", &[("soda", 1)]);
    let b = create(&mut manager, "Aria", &[("soda", 1)]);

    let a_first = manager.next_emote(&a, "soda", &menu).unwrap();
    let b_first = manager.next_emote(&b, "soda", &menu).unwrap();
    assert_ne!(a_first, b_first);
}


#[test]
fn test_simple_item_interpolates_context() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "", &[("bread", 3)]);

    let line = manager.next_emote(&order_id, "bread", &menu).unwrap();
    assert_eq!(line, "slides 3 Bread to the customer");

    manager.set_default_customer("you");
    let line = manager.next_emote(&order_id, "bread", &menu).unwrap();
    assert_eq!(line, "slides 3 Bread to you");
}


#[test]
fn test_next_emote_missing_targets() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "Aria", &[("bread", 1), ("ghost", 1)]);

    assert!(manager.next_emote("missing", "bread", &menu).is_none());
    // menu item exists but is not on this order
    assert!(manager.next_emote(&order_id, "soda", &menu).is_none());
    // on the order but deleted from the menu
    assert!(manager.next_emote(&order_id, "ghost", &menu).is_none());
}


#[test]
fn test_archived_orders_still_emote() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "Aria", &[("soda", 1)]);
    let first = manager.next_emote(&order_id, "soda", &menu).unwrap();

    manager.complete_order(&order_id);
    let second = manager.next_emote(&order_id, "soda", &menu).unwrap();

    let cycle = soda_cycle_from(&first);
    assert_eq!(second, cycle[1]);
}


#[test]
fn test_copy_emote_to_clipboard() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "Aria", &[("bread", 2)]);
    let mut clipboard = MemoryClipboard::new();
    let mut notifications = NotificationQueue::default();

    let text = manager
        .copy_emote(&order_id, "bread", &menu, &mut clipboard, &mut notifications)
        .unwrap();

    assert_eq!(text, "slides 2 Bread to Aria");
    assert_eq!(clipboard.last(), Some("slides 2 Bread to Aria"));
    let latest = notifications.latest().unwrap();
    assert_eq!(latest.kind, NotificationKind::Info);
    assert_eq!(latest.message, "RP command copied");
}


#[test]
fn test_copy_emote_clipboard_failure_keeps_advance() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = create(&mut manager, "Aria", &[("soda", 1)]);
    let mut notifications = NotificationQueue::default();

    let first = manager
        .copy_emote(&order_id, "soda", &menu, &mut BrokenClipboard, &mut notifications)
        .unwrap();
    assert_eq!(notifications.latest().unwrap().kind, NotificationKind::Error);

    let second = manager.next_emote(&order_id, "soda", &menu).unwrap();
    assert_eq!(second, soda_cycle_from(&first)[1]);
}


#[test]
fn test_copy_emote_unknown_order_touches_nothing() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let mut clipboard = MemoryClipboard::new();
    let mut notifications = NotificationQueue::default();

    assert!(
        manager
            .copy_emote("missing", "bread", &menu, &mut clipboard, &mut notifications)
            .is_none()
    );
    assert!(clipboard.history().is_empty());
    assert!(notifications.is_empty());
}


#[test]
fn test_copy_helper_command() {
    let mut manager = create_test_manager();
    let menu = test_menu();
    let order_id = manager
        .create_order("Aria", Some(42), &qty(&[("soda", 2), ("ghost", 1)]), &menu)
        .unwrap();
    let mut clipboard = MemoryClipboard::new();
    let mut notifications = NotificationQueue::default();

    let text = manager
        .copy_helper_command(
            &order_id,
            "/me passes the {items} to {customerName} (#{customerId})",
            &menu,
            &mut clipboard,
            &mut notifications,
        )
        .unwrap();

    assert_eq!(text, "/me passes the 2x Soda, 1x Unknown item to Aria (#42)");
    assert_eq!(clipboard.last(), Some(text.as_str()));
}
