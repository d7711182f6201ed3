//! Contact form stub: collects the submitted field values, surfaces them
//! locally, and resets the form. A real deployment hands the record to a
//! delivery service; that boundary is out of scope here.

use serde::{Deserialize, Serialize};

use crate::api::app::{Component, FrameOutput};
use crate::api::types::AppEvent;
use crate::core::context::SharedContext;
use crate::input::events::InputEvent;
use crate::surface::dom::{DomOp, DomTarget};

/// One submitted message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct ContactForm;

impl ContactForm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        let InputEvent::SubmitForm { name, email, subject, message } = event else {
            return;
        };
        let submission = ContactSubmission {
            name: name.clone(),
            email: email.clone(),
            subject: subject.clone(),
            message: message.clone(),
        };
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("contact form submitted: {}", json),
            Err(err) => log::warn!("contact form submitted (unloggable: {})", err),
        }
        out.events.push(AppEvent::form_ack());
        out.dom.push(DomTarget::ContactForm, DomOp::ResetForm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::Viewport;

    fn submit() -> InputEvent {
        InputEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn submission_acks_and_resets() {
        let mut form = ContactForm::new();
        let ctx = SharedContext::new(Viewport::new(1280.0, 720.0), 150.0);
        let mut out = FrameOutput::new();

        form.on_event(&submit(), &ctx, &mut out);

        assert_eq!(out.events, vec![AppEvent::form_ack()]);
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::ContactForm, DomOp::ResetForm)
        )));
    }

    #[test]
    fn submission_serializes_all_fields() {
        let record = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ContactSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn other_events_ignored() {
        let mut form = ContactForm::new();
        let ctx = SharedContext::new(Viewport::new(1280.0, 720.0), 150.0);
        let mut out = FrameOutput::new();
        form.on_event(&InputEvent::MenuToggle, &ctx, &mut out);
        assert!(out.dom.is_empty() && out.events.is_empty());
    }
}
