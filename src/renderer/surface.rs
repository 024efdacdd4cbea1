//! Drawing primitives a backend must provide

use glam::Vec2;

use crate::sim::Aabb;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Build an opaque color from a 0xRRGGBB literal
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, rgb};

    pub const BACKGROUND: Color = rgb(0xffffff);
    pub const PLATFORM: Color = rgb(0x2ecc71);
    pub const FLAG: Color = rgb(0xffd700);
    pub const PLAYER: Color = rgb(0xe74c3c);
    pub const ENEMY: Color = rgb(0x34495e);
    pub const BULLET: Color = rgb(0x8e44ad);
    pub const CHECKPOINT: Color = rgb(0xecf0f1);
    pub const CHECKPOINT_REACHED: Color = rgb(0xf1c40f);
    pub const HEALTH_FULL: Color = rgb(0xe74c3c);
    pub const HEALTH_EMPTY: Color = rgb(0xaaaaaa);
    pub const HUD_TEXT: Color = rgb(0x000000);
}

/// A 2D drawing target.
///
/// Coordinates are screen space unless a camera translation is pushed, in
/// which case they are world space.
pub trait Surface {
    /// Clear a screen-space area (normally the whole viewport)
    fn clear(&mut self, color: Color, area: Aabb);

    /// Set the fill color for subsequent shapes and text
    fn set_fill(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Aabb);

    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Draw text with its baseline-left corner at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32);

    /// Offset everything drawn until the matching pop by `dx`
    fn push_translate_x(&mut self, dx: f32);

    fn pop_transform(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_channels() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0, 1.0]);
        let c = rgb(0x2ecc71);
        assert!((c[1] - 0.8).abs() < 1e-6);
    }
}
