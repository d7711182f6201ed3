//! Magnetic and tilt hover effects: pure per-event transform computation
//! from pointer-local coordinates and the hovered element's rect.

use crate::api::app::{Component, FrameOutput};
use crate::core::context::SharedContext;
use crate::input::events::{HoverTarget, InputEvent};
use crate::surface::dom::DomTarget;

/// Fraction of the pointer's offset from center a magnetic button follows.
const MAGNETIC_PULL: f32 = 0.3;
/// Pixels of pointer offset per degree of tilt.
const TILT_DIVISOR: f32 = 10.0;

pub struct HoverEffects;

impl HoverEffects {
    pub fn new() -> Self {
        Self
    }

    fn magnetic_transform(x: f32, y: f32, width: f32, height: f32) -> String {
        let tx = (x - width / 2.0) * MAGNETIC_PULL;
        let ty = (y - height / 2.0) * MAGNETIC_PULL;
        format!("translate({:.2}px, {:.2}px)", tx, ty)
    }

    fn tilt_transform(x: f32, y: f32, width: f32, height: f32) -> String {
        let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
        let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            rotate_x, rotate_y
        )
    }
}

impl Default for HoverEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HoverEffects {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        match *event {
            InputEvent::HoverMove { target, x, y, width, height } => match target {
                HoverTarget::Magnetic(i) => {
                    out.dom.set_style(
                        DomTarget::MagneticButton(i),
                        "transform",
                        Self::magnetic_transform(x, y, width, height),
                    );
                }
                HoverTarget::Tilt(i) => {
                    out.dom.set_style(
                        DomTarget::TiltCard(i),
                        "transform",
                        Self::tilt_transform(x, y, width, height),
                    );
                }
            },
            InputEvent::HoverEnd { target } => match target {
                HoverTarget::Magnetic(i) => {
                    out.dom
                        .set_style(DomTarget::MagneticButton(i), "transform", "translate(0, 0)");
                }
                HoverTarget::Tilt(i) => {
                    out.dom.set_style(
                        DomTarget::TiltCard(i),
                        "transform",
                        "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
                    );
                }
            },
            _ => {}
        }
    }
}
