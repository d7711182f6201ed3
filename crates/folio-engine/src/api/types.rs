use bytemuck::{Pod, Zeroable};

/// An outbound side effect communicated from the core to the page via the
/// shared buffer. Generic container: `kind` identifies the event, `a/b/c`
/// carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AppEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl AppEvent {
    pub const FLOATS: usize = 4;

    /// Smooth-scroll the page to a vertical offset.
    pub const KIND_SCROLL_TO: f32 = 1.0;
    /// Lock (a = 1) or unlock (a = 0) page scrolling.
    pub const KIND_SCROLL_LOCK: f32 = 2.0;
    /// Acknowledge a contact form submission.
    pub const KIND_FORM_ACK: f32 = 3.0;
    /// Move keyboard focus to the hero section.
    pub const KIND_FOCUS_HERO: f32 = 4.0;
    /// The page body should fade in now.
    pub const KIND_PAGE_REVEALED: f32 = 5.0;

    pub fn scroll_to(y: f32) -> Self {
        Self { kind: Self::KIND_SCROLL_TO, a: y, ..Self::default() }
    }

    pub fn scroll_lock(locked: bool) -> Self {
        Self {
            kind: Self::KIND_SCROLL_LOCK,
            a: if locked { 1.0 } else { 0.0 },
            ..Self::default()
        }
    }

    pub fn form_ack() -> Self {
        Self { kind: Self::KIND_FORM_ACK, ..Self::default() }
    }

    pub fn focus_hero() -> Self {
        Self { kind: Self::KIND_FOCUS_HERO, ..Self::default() }
    }

    pub fn page_revealed() -> Self {
        Self { kind: Self::KIND_PAGE_REVEALED, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_to_carries_offset() {
        let ev = AppEvent::scroll_to(640.0);
        assert_eq!(ev.kind, AppEvent::KIND_SCROLL_TO);
        assert_eq!(ev.a, 640.0);
    }

    #[test]
    fn events_cast_to_floats() {
        let events = [AppEvent::scroll_lock(true), AppEvent::form_ack()];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats.len(), 2 * AppEvent::FLOATS);
        assert_eq!(floats[0], AppEvent::KIND_SCROLL_LOCK);
        assert_eq!(floats[1], 1.0);
        assert_eq!(floats[4], AppEvent::KIND_FORM_ACK);
    }
}
