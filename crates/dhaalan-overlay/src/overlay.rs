#![forbid(unsafe_code)]

//! The overlay controller: one open/close cycle of a focus-trapped
//! surface.

use tracing::debug;

/// Identifier of a focusable target inside or outside an overlay.
pub type FocusId = u32;

/// Backend-free key events relevant to overlay navigation. The binary
/// maps real terminal input onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    BackTab,
    Escape,
    Enter,
    Up,
    Down,
    Char(char),
}

/// How an overlay behaves while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Full-surface overlay (chat widget, search, lightbox): engages the
    /// scroll lock; arrow keys are left to the content.
    Modal,
    /// Dropdown menu: ArrowDown/ArrowUp traverse items with wrapping, and
    /// selecting an item auto-closes.
    Menu,
}

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    /// Prior focus captured, content not yet mounted.
    Opening,
    Open,
}

/// Transient bookkeeping for one open/close cycle.
#[derive(Debug)]
struct Session {
    prior_focus: Option<FocusId>,
    focusables: Vec<FocusId>,
    focused: Option<FocusId>,
}

/// What a key event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an overlay concern; let the content handle it.
    Ignored,
    /// Focus moved to this target.
    FocusMoved(FocusId),
    /// The overlay closed. `restore` is the target to give focus back to,
    /// if it still exists in the tree (a vanished target is skipped by
    /// the caller, silently).
    Closed { restore: Option<FocusId> },
    /// A menu item was activated, auto-closing the overlay.
    Selected {
        item: FocusId,
        restore: Option<FocusId>,
    },
}

/// Controller for one focus-trapped overlay surface.
#[derive(Debug)]
pub struct Overlay {
    kind: OverlayKind,
    phase: OverlayPhase,
    session: Option<Session>,
    default_focus: Option<FocusId>,
}

impl Overlay {
    #[must_use]
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            phase: OverlayPhase::Closed,
            session: None,
            default_focus: None,
        }
    }

    /// Focus this target on open instead of the first focusable (e.g. the
    /// search overlay's text input).
    #[must_use]
    pub fn with_default_focus(mut self, id: FocusId) -> Self {
        self.default_focus = Some(id);
        self
    }

    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Currently focused target inside the overlay.
    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.session.as_ref().and_then(|s| s.focused)
    }

    /// Closed → Opening. Captures the element holding focus right now,
    /// before any focus change. No-op unless Closed.
    pub fn open(&mut self, prior_focus: Option<FocusId>) {
        if self.phase != OverlayPhase::Closed {
            return;
        }
        self.session = Some(Session {
            prior_focus,
            focusables: Vec::new(),
            focused: None,
        });
        self.phase = OverlayPhase::Opening;
        debug!(?prior_focus, "overlay opening");
    }

    /// Opening → Open, on a later tick than `open` so content mount and
    /// transition timing are tolerated. Focus moves to the configured
    /// default if it is in the list, else the first focusable. An empty
    /// list leaves focus unset (no-op, not an error).
    pub fn mounted(&mut self, focusables: Vec<FocusId>) {
        if self.phase != OverlayPhase::Opening {
            return;
        }
        let focused = match self.default_focus {
            Some(id) if focusables.contains(&id) => Some(id),
            _ => focusables.first().copied(),
        };
        if let Some(session) = self.session.as_mut() {
            session.focusables = focusables;
            session.focused = focused;
        }
        self.phase = OverlayPhase::Open;
    }

    /// Recompute the focusable list after content changed (async data
    /// arrived, items removed). If the focused target vanished, focus
    /// falls to the first remaining target.
    pub fn set_focusables(&mut self, focusables: Vec<FocusId>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.focused = match session.focused {
            Some(id) if focusables.contains(&id) => Some(id),
            _ => focusables.first().copied(),
        };
        session.focusables = focusables;
    }

    /// Open → Closed. Returns the prior-focus target exactly once; the
    /// session is discarded.
    pub fn close(&mut self) -> Option<FocusId> {
        if self.phase == OverlayPhase::Closed {
            return None;
        }
        self.phase = OverlayPhase::Closed;
        let restore = self.session.take().and_then(|s| s.prior_focus);
        debug!(?restore, "overlay closed");
        restore
    }

    /// Pointer-down at some point; `inside` says whether it landed within
    /// the overlay boundary. Outside closes.
    pub fn pointer_down(&mut self, inside: bool) -> KeyOutcome {
        if self.is_open() && !inside {
            KeyOutcome::Closed {
                restore: self.close(),
            }
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Handle a key while Open. Everything else returns `Ignored`.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::Escape => KeyOutcome::Closed {
                restore: self.close(),
            },
            Key::Tab => self.move_focus(1),
            Key::BackTab => self.move_focus(-1),
            Key::Down if self.kind == OverlayKind::Menu => self.move_focus(1),
            Key::Up if self.kind == OverlayKind::Menu => self.move_focus(-1),
            Key::Enter if self.kind == OverlayKind::Menu => {
                let Some(item) = self.focused() else {
                    return KeyOutcome::Ignored;
                };
                KeyOutcome::Selected {
                    item,
                    restore: self.close(),
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Cyclic move over the focusable list; wraps at both ends.
    fn move_focus(&mut self, delta: i32) -> KeyOutcome {
        let Some(session) = self.session.as_mut() else {
            return KeyOutcome::Ignored;
        };
        if session.focusables.is_empty() {
            return KeyOutcome::Ignored;
        }
        let len = session.focusables.len() as i32;
        let current = session
            .focused
            .and_then(|id| session.focusables.iter().position(|&f| f == id))
            .map_or(0, |i| i as i32);
        let next = match session.focused {
            None => 0,
            Some(_) => (current + delta).rem_euclid(len),
        };
        let id = session.focusables[next as usize];
        session.focused = Some(id);
        KeyOutcome::FocusMoved(id)
    }
}
