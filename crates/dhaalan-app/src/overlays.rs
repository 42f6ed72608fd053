#![forbid(unsafe_code)]

//! Overlay surfaces and their shared scroll lock.

use dhaalan_overlay::{FocusId, Key, KeyOutcome, Overlay, OverlayKind, ScrollLock};

// Focus targets in the underlying page chrome.
pub const NAV_SEARCH: FocusId = 1;
pub const NAV_CHAT: FocusId = 2;
pub const NAV_LANGUAGE: FocusId = 3;

// Focus targets inside the overlays.
pub const SEARCH_INPUT: FocusId = 10;
pub const SEARCH_SUBMIT: FocusId = 11;
pub const CHAT_INPUT: FocusId = 20;
pub const CHAT_SEND: FocusId = 21;
pub const LANG_ITEM_EN: FocusId = 30;
pub const LANG_ITEM_DV: FocusId = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Search,
    Chat,
    Language,
}

/// The three overlay surfaces. At most one is active; the modal ones
/// share the document scroll lock.
#[derive(Debug)]
pub struct Overlays {
    search: Overlay,
    chat: Overlay,
    language: Overlay,
    scroll: ScrollLock,
    active: Option<Surface>,
}

impl Overlays {
    pub fn new() -> Self {
        Self {
            search: Overlay::new(OverlayKind::Modal).with_default_focus(SEARCH_INPUT),
            chat: Overlay::new(OverlayKind::Modal).with_default_focus(CHAT_INPUT),
            language: Overlay::new(OverlayKind::Menu),
            scroll: ScrollLock::new(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<Surface> {
        self.active
    }

    pub fn is_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    pub fn overlay(&self, surface: Surface) -> &Overlay {
        match surface {
            Surface::Search => &self.search,
            Surface::Chat => &self.chat,
            Surface::Language => &self.language,
        }
    }

    fn overlay_mut(&mut self, surface: Surface) -> &mut Overlay {
        match surface {
            Surface::Search => &mut self.search,
            Surface::Chat => &mut self.chat,
            Surface::Language => &mut self.language,
        }
    }

    /// Begin opening a surface. Content mounts on a later tick, so the
    /// caller schedules a `mounted` follow-up message.
    pub fn open(&mut self, surface: Surface, prior_focus: Option<FocusId>) {
        if self.active.is_some() {
            return;
        }
        self.active = Some(surface);
        if self.overlay(surface).kind() == OverlayKind::Modal {
            self.scroll.engage();
        }
        self.overlay_mut(surface).open(prior_focus);
    }

    /// Complete the open with the surface's focusable list.
    pub fn mounted(&mut self, surface: Surface) {
        if self.active != Some(surface) {
            return;
        }
        let focusables = match surface {
            Surface::Search => vec![SEARCH_INPUT, SEARCH_SUBMIT],
            Surface::Chat => vec![CHAT_INPUT, CHAT_SEND],
            Surface::Language => vec![LANG_ITEM_EN, LANG_ITEM_DV],
        };
        self.overlay_mut(surface).mounted(focusables);
    }

    /// Route a key to the active surface. Closing outcomes release the
    /// scroll lock and deactivate.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let Some(surface) = self.active else {
            return KeyOutcome::Ignored;
        };
        let outcome = self.overlay_mut(surface).handle_key(key);
        self.after(surface, outcome);
        outcome
    }

    pub fn pointer_down(&mut self, inside: bool) -> KeyOutcome {
        let Some(surface) = self.active else {
            return KeyOutcome::Ignored;
        };
        let outcome = self.overlay_mut(surface).pointer_down(inside);
        self.after(surface, outcome);
        outcome
    }

    /// Close the active surface directly (e.g. submit auto-closes the
    /// search overlay); returns the focus restore target.
    pub fn close_active(&mut self) -> Option<FocusId> {
        let surface = self.active.take()?;
        if self.overlay(surface).kind() == OverlayKind::Modal {
            self.scroll.release();
        }
        self.overlay_mut(surface).close()
    }

    pub fn focused(&self) -> Option<FocusId> {
        self.active.and_then(|s| self.overlay(s).focused())
    }

    fn after(&mut self, surface: Surface, outcome: KeyOutcome) {
        if matches!(
            outcome,
            KeyOutcome::Closed { .. } | KeyOutcome::Selected { .. }
        ) {
            self.active = None;
            if self.overlay(surface).kind() == OverlayKind::Modal {
                self.scroll.release();
            }
        }
    }
}

impl Default for Overlays {
    fn default() -> Self {
        Self::new()
    }
}
