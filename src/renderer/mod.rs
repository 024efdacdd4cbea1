//! Render adapter
//!
//! The simulation never draws directly. Hosts implement [`Surface`] for their
//! backend (canvas, GPU, terminal) and call [`draw_frame`] once per frame with
//! the fully updated state.

pub mod draw;
pub mod recording;
pub mod surface;

pub use draw::{Drawable, FrameOptions, draw_frame, flicker_hidden};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Color, Surface, colors};
