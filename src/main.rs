//! Side Scroller headless runner
//!
//! Drives a session with a scripted autopilot, draws every frame into a
//! recording surface and prints a summary.
//!
//! Usage:
//!   side-scroller --seed 42 --frames 3600
//!   RUST_LOG=debug side-scroller --config settings.json --level 3 --dump

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use side_scroller::Settings;
    use side_scroller::platform::{InputState, Key};
    use side_scroller::renderer::{RecordingSurface, draw_frame};
    use side_scroller::sim::{GameEvent, GameState, UpdateOutcome, tick};
    use side_scroller::ui::{Overlay, UiCommand};

    #[derive(Parser)]
    #[command(name = "side-scroller")]
    #[command(about = "Run the platformer headless with an autopilot")]
    struct Args {
        /// Run seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Frames to simulate
        #[arg(long, default_value_t = 3600)]
        frames: u64,

        /// Settings JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop once this level is reached
        #[arg(long)]
        level: Option<u32>,

        /// Print the final session snapshot as JSON
        #[arg(long)]
        dump: bool,
    }

    /// Frames between autopilot shots
    const FIRE_INTERVAL: u64 = 30;

    /// Scripted input: run right, hop when stalled, shoot periodically,
    /// hold interact so the flag completes the level on contact.
    #[derive(Default)]
    struct Autopilot {
        input: InputState,
        last_x: f32,
    }

    impl Autopilot {
        fn drive(&mut self, state: &GameState, frame: u64) {
            self.input.key_down(Key::Right, false);
            self.input.key_down(Key::Run, false);
            self.input.key_down(Key::Interact, false);

            let player = &state.player;
            let stalled = (player.body.x - self.last_x).abs() < 0.5;
            let enemy_ahead = state.level.enemies.iter().any(|e| {
                e.is_hittable() && e.body.x > player.body.x && e.body.x - player.body.x < 300.0
            });
            if player.on_ground && (stalled || enemy_ahead || frame % 90 == 0) {
                self.input.key_down(Key::Jump, false);
            }

            if frame % FIRE_INTERVAL == 0 {
                self.input.key_down(Key::Fire, false);
            } else {
                self.input.key_up(Key::Fire);
            }
            self.last_x = player.body.x;
        }
    }

    #[derive(Default)]
    struct Summary {
        kills: u32,
        hurts: u32,
        deaths: u32,
        checkpoints: u32,
        levels_completed: u32,
        frames: u64,
    }

    impl Summary {
        fn record(&mut self, event: &GameEvent) {
            match event {
                GameEvent::EnemyKilled { .. } => self.kills += 1,
                GameEvent::PlayerHurt { .. } => self.hurts += 1,
                GameEvent::PlayerDied { .. } => self.deaths += 1,
                GameEvent::CheckpointReached { .. } => self.checkpoints += 1,
                GameEvent::LevelComplete { .. } => self.levels_completed += 1,
                GameEvent::LevelStarted { .. } => {}
            }
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        let seed = args
            .seed
            .or(settings.seed)
            .unwrap_or_else(rand::random::<u64>);
        log::info!("Side Scroller (native) starting with seed {seed}");

        let mut state = settings.new_game(seed);
        let mut overlay = Overlay::default();
        let mut autopilot = Autopilot::default();
        let mut surface = RecordingSurface::default();
        let mut summary = Summary::default();
        let frame_options = settings.frame_options();

        for frame in 0..args.frames {
            if args.level.is_some_and(|target| state.level_index >= target) {
                break;
            }

            autopilot.drive(&state, frame);
            let input = autopilot.input.take_tick_input();
            if tick(&mut state, &input) == UpdateOutcome::ResetLevel {
                log::debug!("Frame {frame}: reset after death");
            }

            let events = state.drain_events();
            for event in &events {
                summary.record(event);
            }
            overlay.handle_events(&events);
            if overlay.visible {
                log::info!("{}", overlay.text);
                overlay.apply(UiCommand::NextLevel, &mut state);
                autopilot.input.clear();
            }

            surface.begin_frame();
            draw_frame(&state, &mut surface, &frame_options);
            if !surface.is_balanced() {
                log::warn!("Frame {frame}: unbalanced transform stack");
            }
            summary.frames = frame + 1;
        }

        println!();
        println!("=== RUN SUMMARY ===");
        println!("  Seed:       {seed}");
        println!("  Frames:     {}", summary.frames);
        println!("  Level:      {}", state.level_index);
        println!("  Score:      {}", state.score);
        println!("  Completed:  {}", summary.levels_completed);
        println!("  Kills:      {}", summary.kills);
        println!("  Hits taken:  {}", summary.hurts);
        println!("  Deaths:     {}", summary.deaths);
        println!("  Checkpoints: {}", summary.checkpoints);
        println!("  Last frame: {} draw calls", surface.commands.len());

        if args.dump {
            let json = serde_json::to_string_pretty(&state).context("serializing session")?;
            println!("{json}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an external adapter
}
