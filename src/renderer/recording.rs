//! Headless surface that records draw calls
//!
//! Used by the native runner and tests in place of a real canvas.

use glam::Vec2;
use serde::Serialize;

use super::surface::{Color, Surface};
use crate::sim::Aabb;

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Color, Aabb),
    SetFill(Color),
    FillRect(Aabb),
    FillCircle { center: Vec2, radius: f32 },
    FillText { text: String, pos: Vec2, size: f32 },
    PushTranslateX(f32),
    PopTransform,
}

/// Records every call for later inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Current transform stack depth
    depth: usize,
}

impl RecordingSurface {
    /// Forget the previous frame
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect(_)))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// True when every push had a matching pop
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color, area: Aabb) {
        self.commands.push(DrawCommand::Clear(color, area));
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn fill_rect(&mut self, rect: Aabb) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            size,
        });
    }

    fn push_translate_x(&mut self, dx: f32) {
        self.depth += 1;
        self.commands.push(DrawCommand::PushTranslateX(dx));
    }

    fn pop_transform(&mut self) {
        if self.depth == 0 {
            log::warn!("pop_transform without a matching push");
            return;
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::PopTransform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{FrameOptions, draw_frame};
    use crate::sim::{Bullet, BulletOwner, GameState};

    #[test]
    fn test_frame_is_balanced_and_draws_bullets() {
        let mut state = GameState::new(21);
        state
            .level
            .bullets
            .push(Bullet::new(Vec2::new(300.0, 300.0), 1.0, BulletOwner::Player));
        let mut surface = RecordingSurface::default();
        let options = FrameOptions {
            show_hud: false,
            ..Default::default()
        };
        draw_frame(&state, &mut surface, &options);
        assert!(surface.is_balanced());
        assert_eq!(surface.circle_count(), 1);
        assert!(surface.texts().is_empty());

        surface.begin_frame();
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_unmatched_pop_ignored() {
        let mut surface = RecordingSurface::default();
        surface.pop_transform();
        assert!(surface.commands.is_empty());
        assert!(surface.is_balanced());
    }
}
