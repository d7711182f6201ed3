use glam::Vec2;

/// Last known pointer state, shared-read by the particle field, the cursor
/// trail, and the hover effects. Written only by the app root while folding
/// input, before any component runs.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// None until the first pointer move of the session.
    pub position: Option<Vec2>,
    /// Interaction radius for particle repulsion.
    pub radius: f32,
}

/// Viewport dimensions in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Process-wide shared state. Single-threaded by construction: one writer
/// (the app root), many readers (components, during their update). A port
/// that moves particle updates off-thread would need to guard exactly this
/// struct and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct SharedContext {
    pub pointer: PointerState,
    pub viewport: Viewport,
    /// Current vertical scroll offset of the page.
    pub scroll_y: f32,
}

impl SharedContext {
    pub fn new(viewport: Viewport, pointer_radius: f32) -> Self {
        Self {
            pointer: PointerState {
                position: None,
                radius: pointer_radius,
            },
            viewport,
            scroll_y: 0.0,
        }
    }
}
