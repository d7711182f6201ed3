use glam::Vec2;

/// RGBA color: 8-bit channels plus a float alpha, matching the raster
/// surface's `rgba(r, g, b, a)` fill and stroke styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A drawing primitive for the raster surface. The page executes these
/// verbatim; the core never touches a drawing context itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    /// Clear the whole surface.
    Clear,
    /// A filled circle.
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// A stroked line segment.
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Per-frame command list for the raster surface. Cleared and rebuilt on
/// every tick; a frame is always complete (no partial redraws).
#[derive(Debug, Default)]
pub struct CanvasFrame {
    commands: Vec<CanvasCommand>,
}

impl CanvasFrame {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: CanvasCommand) {
        self.commands.push(command);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(CanvasCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(CanvasCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_collects_commands() {
        let mut frame = CanvasFrame::new();
        frame.push(CanvasCommand::Clear);
        frame.fill_circle(Vec2::new(10.0, 20.0), 1.5, Rgba::new(14, 165, 233, 0.4));
        assert_eq!(frame.len(), 2);
        frame.clear();
        assert!(frame.is_empty());
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Rgba::new(14, 165, 233, 1.0).with_alpha(0.1);
        assert_eq!(c.r, 14);
        assert_eq!(c.a, 0.1);
    }
}
