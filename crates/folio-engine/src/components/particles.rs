//! Ambient particle background: drifting points joined by proximity lines,
//! repelled by the pointer.

use glam::Vec2;

use crate::api::app::{Component, FrameOutput};
use crate::api::config::AppConfig;
use crate::core::context::{SharedContext, Viewport};
use crate::core::rng::Rng;
use crate::core::time::Debouncer;
use crate::input::events::InputEvent;
use crate::surface::canvas::{CanvasCommand, Rgba};

/// Palette color shared by particles and their connective lines.
const ACCENT: Rgba = Rgba::new(14, 165, 233, 1.0);
/// Connection line opacity at zero distance.
const LINE_BASE_ALPHA: f32 = 0.1;
const LINE_WIDTH: f32 = 0.5;
/// Pixels of displacement at full repulsion force.
const REPULSION_SCALE: f32 = 2.0;

/// A simulated point. No identity beyond its slot in the field.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// The particle field simulator. Owns its particles and RNG; reads the
/// pointer and viewport from the shared context; draws to the raster
/// surface every tick.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Rng,
    max_particles: usize,
    density_divisor: f32,
    connection_distance: f32,
    resize_debounce: Debouncer,
    /// Extent the current particle set was generated for.
    surface: Viewport,
}

impl ParticleField {
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            rng: Rng::new(config.particle_seed),
            max_particles: config.max_particles,
            density_divisor: config.particle_density_divisor,
            connection_distance: config.connection_distance,
            resize_debounce: Debouncer::new(config.resize_debounce_ms / 1000.0),
            surface: viewport,
        };
        field.regenerate(viewport);
        field
    }

    /// count = min(configured max, floor(area / density divisor)).
    pub fn expected_count(&self, viewport: Viewport) -> usize {
        let derived = (viewport.area() / self.density_divisor).floor() as usize;
        derived.min(self.max_particles)
    }

    /// Throw away the current set and populate a fresh one for `viewport`.
    /// Old particle state is never interpolated across a resize.
    pub fn regenerate(&mut self, viewport: Viewport) {
        self.surface = viewport;
        let count = self.expected_count(viewport);
        self.particles.clear();
        for _ in 0..count {
            self.particles.push(Particle {
                pos: Vec2::new(
                    self.rng.range(0.0, viewport.width),
                    self.rng.range(0.0, viewport.height),
                ),
                vel: Vec2::new(self.rng.range(-0.25, 0.25), self.rng.range(-0.25, 0.25)),
                radius: self.rng.range(0.5, 2.5),
                opacity: self.rng.range(0.2, 0.7),
            });
        }
        log::debug!(
            "particle field regenerated: {} particles for {}x{}",
            count,
            viewport.width,
            viewport.height
        );
    }

    /// Advance one particle: integrate, repel from the pointer, then wrap.
    /// Wrapping last keeps both axes inside [0, extent) no matter how hard
    /// the repulsion pushed.
    fn step_particle(particle: &mut Particle, pointer: Option<Vec2>, radius: f32, surface: Viewport) {
        particle.pos += particle.vel;

        if let Some(pointer) = pointer {
            let away = particle.pos - pointer;
            let distance = away.length();
            if distance < radius {
                let force = (radius - distance) / radius;
                // Degenerate case: pointer exactly on the particle has no
                // defined push direction; skip rather than emit NaN.
                if distance > f32::EPSILON {
                    particle.pos += (away / distance) * force * REPULSION_SCALE;
                }
            }
        }

        // rem_euclid can round up to the modulus itself for tiny negative
        // inputs; fold that back to keep the half-open bound.
        if surface.width > 0.0 {
            particle.pos.x = particle.pos.x.rem_euclid(surface.width);
            if particle.pos.x >= surface.width {
                particle.pos.x = 0.0;
            }
        }
        if surface.height > 0.0 {
            particle.pos.y = particle.pos.y.rem_euclid(surface.height);
            if particle.pos.y >= surface.height {
                particle.pos.y = 0.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Component for ParticleField {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, _out: &mut FrameOutput) {
        if let InputEvent::Resize { .. } = event {
            self.resize_debounce.trigger();
        }
    }

    fn update(&mut self, dt: f32, ctx: &SharedContext, out: &mut FrameOutput) {
        if self.resize_debounce.tick(dt) {
            self.regenerate(ctx.viewport);
        }

        let pointer = ctx.pointer.position;
        let radius = ctx.pointer.radius;
        let surface = self.surface;

        out.canvas.push(CanvasCommand::Clear);

        for particle in &mut self.particles {
            Self::step_particle(particle, pointer, radius, surface);
            out.canvas
                .fill_circle(particle.pos, particle.radius, ACCENT.with_alpha(particle.opacity));
        }

        // Pairwise connection pass. O(n²), same as the page shipped; fine at
        // the configured cap but the dominant cost if that cap is raised.
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let distance = a.distance(b);
                if distance < self.connection_distance {
                    let alpha = LINE_BASE_ALPHA * (1.0 - distance / self.connection_distance);
                    out.canvas
                        .stroke_line(a, b, LINE_WIDTH, ACCENT.with_alpha(alpha));
                }
            }
        }
    }
}
