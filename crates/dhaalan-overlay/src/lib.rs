#![forbid(unsafe_code)]

//! Focus-trapped, keyboard-navigable overlay behavior.
//!
//! One state machine serves every modal-like surface in the app: the chat
//! widget, the search overlay, the image lightbox, and dropdown menus.
//!
//! # State machine
//!
//! `Closed → Opening → Open → Closed`
//!
//! Opening captures the previously focused target before any focus
//! change; the Opening → Open transition is a separate call
//! ([`Overlay::mounted`]) so focus lands only after the overlay's content
//! actually exists — the retained-tree analogue of deferring past a CSS
//! transition. Closing is transient inside [`Overlay::close`]: a text UI
//! has no exit animation to wait for, so the session is discarded and the
//! captured focus target handed back in the same call.
//!
//! # Invariants
//!
//! 1. While Open, Tab/Shift+Tab cycle over the focusable list and never
//!    escape it.
//! 2. The prior-focus target is returned exactly once, at close.
//! 3. Recomputing the focusable list never leaves focus on a removed
//!    target.
//! 4. An empty focusable list is a no-op for every navigation key.

pub mod overlay;
pub mod scroll_lock;

pub use overlay::{FocusId, Key, KeyOutcome, Overlay, OverlayKind, OverlayPhase};
pub use scroll_lock::ScrollLock;
