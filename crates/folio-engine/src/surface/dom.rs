use serde::{Deserialize, Serialize};

use crate::content::projects::ProjectView;

/// Semantic identity of a page element. The page maps each target to a real
/// element once at load; the core never sees a selector. Indexed variants
/// address the i-th element of their group in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomTarget {
    Body,
    Navbar,
    NavToggle,
    NavMenu,
    NavLink(u32),
    TypingText,
    Cursor,
    CursorFollower,
    StatValue(u32),
    SkillBar(u32),
    TimelineItem(u32),
    FadeTarget(u32),
    MagneticButton(u32),
    TiltCard(u32),
    DeferredImage(u32),
    ModalRoot,
    ModalBody,
    ContactForm,
    LiveRegion,
}

/// A mutation the page applies to one target element. Together with
/// `CanvasCommand` this is the entire means by which the core affects
/// presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomOp {
    AddClass { class: String },
    RemoveClass { class: String },
    SetText { text: String },
    SetStyle { property: String, value: String },
    /// Render a project detail view into the target container.
    SetProjectView { view: ProjectView },
    /// Clear the form's fields.
    ResetForm,
    /// Promote the target image's deferred source to its live source.
    LoadDeferredImage,
    /// Polite live-region announcement for screen readers.
    Announce { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomCommand {
    pub target: DomTarget,
    pub op: DomOp,
}

/// Per-frame batch of DOM commands, serialized once per tick for the page
/// to apply in order.
#[derive(Debug, Default, Serialize)]
pub struct DomBatch {
    commands: Vec<DomCommand>,
}

impl DomBatch {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, target: DomTarget, op: DomOp) {
        self.commands.push(DomCommand { target, op });
    }

    pub fn add_class(&mut self, target: DomTarget, class: &str) {
        self.push(target, DomOp::AddClass { class: class.to_string() });
    }

    pub fn remove_class(&mut self, target: DomTarget, class: &str) {
        self.push(target, DomOp::RemoveClass { class: class.to_string() });
    }

    pub fn set_text(&mut self, target: DomTarget, text: impl Into<String>) {
        self.push(target, DomOp::SetText { text: text.into() });
    }

    pub fn set_style(&mut self, target: DomTarget, property: &str, value: impl Into<String>) {
        self.push(
            target,
            DomOp::SetStyle {
                property: property.to_string(),
                value: value.into(),
            },
        );
    }

    /// Append already-built commands (the bridge aggregates batches across
    /// the ticks of one page frame).
    pub fn extend_from_slice(&mut self, commands: &[DomCommand]) {
        self.commands.extend_from_slice(commands);
    }

    pub fn commands(&self) -> &[DomCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize the batch for the bridge. Infallible in practice; an empty
    /// batch serializes to an empty command list.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.commands).unwrap_or_else(|_| "[]".to_string())
    }
}
