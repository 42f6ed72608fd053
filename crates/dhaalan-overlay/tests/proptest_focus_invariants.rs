//! Property-based invariant tests for the overlay focus trap.
//!
//! 1. Focus never escapes the focusable list, whatever keys arrive.
//! 2. N Tab presses over N focusables is the identity on focus.
//! 3. Tab then Shift+Tab is the identity for any starting position.
//! 4. Close always hands back the captured prior focus, exactly once.

use dhaalan_overlay::{Key, KeyOutcome, Overlay, OverlayKind};
use proptest::prelude::*;

fn arbitrary_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Tab),
        Just(Key::BackTab),
        Just(Key::Down),
        Just(Key::Up),
        Just(Key::Enter),
        any::<char>().prop_map(Key::Char),
    ]
}

fn focusables() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::btree_set(1u32..100, 0..8).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #[test]
    fn focus_never_escapes_the_trap(
        targets in focusables(),
        keys in proptest::collection::vec(arbitrary_key(), 0..40),
    ) {
        let mut overlay = Overlay::new(OverlayKind::Menu);
        overlay.open(Some(999));
        overlay.mounted(targets.clone());

        for key in keys {
            match overlay.handle_key(key) {
                KeyOutcome::FocusMoved(id) => prop_assert!(targets.contains(&id)),
                KeyOutcome::Selected { item, restore } => {
                    prop_assert!(targets.contains(&item));
                    prop_assert_eq!(restore, Some(999));
                    return Ok(()); // overlay closed by selection
                }
                KeyOutcome::Closed { .. } | KeyOutcome::Ignored => {}
            }
            if let Some(id) = overlay.focused() {
                prop_assert!(targets.contains(&id));
            }
        }
    }

    #[test]
    fn n_tabs_is_identity(targets in focusables()) {
        prop_assume!(!targets.is_empty());
        let mut overlay = Overlay::new(OverlayKind::Modal);
        overlay.open(None);
        overlay.mounted(targets.clone());
        let start = overlay.focused();

        for _ in 0..targets.len() {
            overlay.handle_key(Key::Tab);
        }
        prop_assert_eq!(overlay.focused(), start);
    }

    #[test]
    fn tab_backtab_is_identity(targets in focusables(), advance in 0usize..8) {
        prop_assume!(!targets.is_empty());
        let mut overlay = Overlay::new(OverlayKind::Modal);
        overlay.open(None);
        overlay.mounted(targets);
        for _ in 0..advance {
            overlay.handle_key(Key::Tab);
        }
        let before = overlay.focused();
        overlay.handle_key(Key::Tab);
        overlay.handle_key(Key::BackTab);
        prop_assert_eq!(overlay.focused(), before);
    }

    #[test]
    fn close_returns_prior_focus_exactly_once(
        prior in proptest::option::of(1u32..100),
        targets in focusables(),
    ) {
        let mut overlay = Overlay::new(OverlayKind::Modal);
        overlay.open(prior);
        overlay.mounted(targets);
        prop_assert_eq!(overlay.close(), prior);
        prop_assert_eq!(overlay.close(), None);
    }
}
