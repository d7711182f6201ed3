/// Keys the page forwards to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
}

/// Which viewport-intersection observer a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverGroup {
    Stats,
    Skills,
    Timeline,
    FadeIns,
    Images,
}

/// A hover-effect element, addressed by its index within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Magnetic(u32),
    Tilt(u32),
}

/// Input event types the core understands.
/// The page translates raw browser events into these; no component ever
/// sees a browser event directly.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer entered an interactive element (link, button, card).
    PointerEnterInteractive,
    /// The pointer left an interactive element.
    PointerLeaveInteractive,
    /// The pointer moved over a hover-effect element; coordinates are local
    /// to the element, and the element's rect size rides along.
    HoverMove {
        target: HoverTarget,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// The pointer left a hover-effect element.
    HoverEnd { target: HoverTarget },
    /// The page scrolled to a vertical offset.
    Scroll { offset_y: f32 },
    /// The viewport was resized.
    Resize { width: f32, height: f32 },
    /// A key was pressed.
    KeyDown { key: Key },
    /// An observed element crossed into the viewport at the given
    /// visibility ratio.
    Intersection {
        group: ObserverGroup,
        index: u32,
        ratio: f32,
    },
    /// Section geometry, re-sent by the page after layout changes.
    SectionLayout { index: u32, top: f32, height: f32 },
    /// A navigation link was activated.
    NavActivate { index: u32 },
    /// The mobile menu toggle was pressed.
    MenuToggle,
    /// A project card requested its detail overlay.
    OpenProject { index: u32 },
    /// The overlay's close affordance was activated.
    CloseProject,
    /// The contact form was submitted with these field values.
    SubmitForm {
        name: String,
        email: String,
        subject: String,
        message: String,
    },
}

/// A queue of input events.
/// The bridge writes events into the queue; the app drains them each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the page via the bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key: Key::Escape });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn submit_form_carries_fields() {
        let mut q = InputQueue::new();
        q.push(InputEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        });
        match &q.drain()[0] {
            InputEvent::SubmitForm { name, email, .. } => {
                assert_eq!(name, "Ada");
                assert_eq!(email, "ada@example.com");
            }
            other => panic!("expected SubmitForm, got {:?}", other),
        }
    }
}
