//! Declarative paint output.
//!
//! Widgets never draw pixels themselves; they record [`DrawCommand`]s into a
//! [`PaintContext`] and the host renderer replays them in order.

mod commands;

pub use commands::DrawCommand;

use crate::widgets::{Color, LinearGradient, Rect};

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    /// Open clips, used to balance pushes and pops
    clip_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            clip_depth: 0,
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    /// Pop the innermost clip. Unbalanced pops are ignored.
    pub fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("pop_clip without a matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::rect(rect, color));
    }

    pub fn draw_gradient_rect(&mut self, rect: Rect, tint: Color, gradient: LinearGradient) {
        self.commands.push(DrawCommand::gradient(rect, tint, gradient));
    }

    pub fn draw_wave(&mut self, index: usize, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Wave { index, rect, color });
    }

    /// Recorded commands in paint order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
