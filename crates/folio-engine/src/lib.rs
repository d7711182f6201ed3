pub mod api;
pub mod bridge;
pub mod components;
pub mod content;
pub mod core;
pub mod extensions;
pub mod input;
pub mod surface;

// Re-export key types at crate root for convenience
pub use api::app::{Component, FrameOutput, PortfolioApp};
pub use api::config::AppConfig;
pub use api::error::ConfigError;
pub use api::types::AppEvent;
pub use bridge::protocol::{CanvasBuffer, ProtocolLayout};
pub use components::cursor::CursorTrail;
pub use components::form::{ContactForm, ContactSubmission};
pub use components::hover::HoverEffects;
pub use components::modal::ProjectModal;
pub use components::navigation::Navigation;
pub use components::particles::{Particle, ParticleField};
pub use components::reveal::RevealAnimators;
pub use components::typing::TypingCycler;
pub use content::manifest::PageManifest;
pub use content::projects::{ProjectCatalog, ProjectRecord, ProjectView};
pub use core::context::{PointerState, SharedContext, Viewport};
pub use core::rng::Rng;
pub use core::time::{Countdown, Debouncer, FixedTimestep};
pub use input::events::{HoverTarget, InputEvent, InputQueue, Key, ObserverGroup};
pub use surface::canvas::{CanvasCommand, CanvasFrame, Rgba};
pub use surface::dom::{DomBatch, DomCommand, DomOp, DomTarget};

// Extensions — decoupled pure helpers
pub use extensions::{ease, lerp, lerp_vec2, smooth_toward, Easing};
