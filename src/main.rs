mod display;
mod input;

use std::error::Error;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::{thread_rng, Rng};

use sky_dodge::assets::{self, AssetError, Rgb};
use sky_dodge::compute::{
    apply_collision, init_world, spawn_cloud, spawn_missile, update_mobs, update_player,
};
use sky_dodge::config::Config;
use sky_dodge::entities::GameStatus;
use sky_dodge::timers::SpawnTimer;
use sky_dodge::viewport::Viewport;

use display::{SpriteSet, Visuals};
use input::{Action, Input};

/// Directory probed for image sprites.  Absent → flat-color blocks.
const SPRITE_DIR: &str = "img";

const KEY_WHITE: Rgb = Rgb(255, 255, 255);
const KEY_BLACK: Rgb = Rgb(0, 0, 0);

// ── Sprite discovery ──────────────────────────────────────────────────────────

/// Load the three sprites at the cell sizes this terminal gives their world
/// extents.  Once the directory exists, every file must load — a missing or
/// broken image aborts the program.
fn load_visuals(vp: &Viewport, cfg: &Config) -> Result<Visuals, AssetError> {
    let dir = Path::new(SPRITE_DIR);
    if !dir.is_dir() {
        info!("no {SPRITE_DIR}/ directory, drawing flat shapes");
        return Ok(Visuals::Plain);
    }

    let (w, h) = vp.scale_size(cfg.player_size.0, cfg.player_size.1);
    let jet = assets::load_sprite(&dir.join("jet.png"), KEY_WHITE, w, h)?;
    let (w, h) = vp.scale_size(cfg.missile_size.0, cfg.missile_size.1);
    let missile = assets::load_sprite(&dir.join("missile.png"), KEY_WHITE, w, h)?;
    let (w, h) = vp.scale_size(cfg.cloud_size.0, cfg.cloud_size.1);
    let cloud = assets::load_sprite(&dir.join("cloud.png"), KEY_BLACK, w, h)?;

    info!("loaded sprites from {SPRITE_DIR}/");
    Ok(Visuals::Images(SpriteSet { jet, missile, cloud }))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopEnd {
    Quit,
    Downed,
}

/// One full run, from a fresh world to quit or shoot-down.  Each iteration
/// is one frame: drain events, fire due spawn timers, sample held keys,
/// advance the world, render, present, then sleep off the frame budget.
fn game_loop<W: Write>(
    out: &mut W,
    input: &mut Input,
    cfg: &Config,
    vp: &Viewport,
    visuals: &Visuals,
    rng: &mut impl Rng,
) -> std::io::Result<LoopEnd> {
    let mut world = init_world(cfg);
    let mut missile_timer = SpawnTimer::new(cfg.missile_interval);
    let mut cloud_timer = SpawnTimer::new(cfg.cloud_interval);
    let frame_budget = cfg.frame_budget();

    input.reset();
    let start = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        for action in input.drain(frame) {
            match action {
                Action::Quit => return Ok(LoopEnd::Quit),
                // Restart only means something on the game-over screen
                Action::Restart => {}
            }
        }

        let elapsed = start.elapsed();
        for _ in 0..missile_timer.poll(elapsed) {
            world = spawn_missile(&world, cfg, rng);
        }
        for _ in 0..cloud_timer.poll(elapsed) {
            world = spawn_cloud(&world, cfg, rng);
        }

        let held = input.held(frame);
        world = update_player(&world, &held, cfg);
        world = update_mobs(&world);
        world = apply_collision(&world);

        display::render(out, &world, vp, visuals, elapsed)?;

        if world.status == GameStatus::Downed {
            info!(
                "shot down after {}s, {} missiles dodged",
                elapsed.as_secs(),
                world.dodged
            );
            return Ok(LoopEnd::Downed);
        }

        let spent = frame_start.elapsed();
        if spent < frame_budget {
            thread::sleep(frame_budget - spent);
        }
    }
}

fn run<W: Write>(out: &mut W, input: &mut Input, cfg: &Config) -> Result<(), Box<dyn Error>> {
    let (cols, rows) = terminal::size()?;
    let vp = Viewport::new(cfg.world_w, cfg.world_h, cols, rows);
    let visuals = load_visuals(&vp, cfg)?;
    let mut rng = thread_rng();

    info!(
        "world {}x{} on a {cols}x{rows} terminal, {} fps",
        cfg.world_w, cfg.world_h, cfg.target_fps
    );

    loop {
        match game_loop(out, input, cfg, &vp, &visuals, &mut rng)? {
            LoopEnd::Quit => break,
            // The shoot-down frame is already on screen; wait for a choice
            LoopEnd::Downed => match input.next_action() {
                Action::Restart => continue,
                Action::Quit => break,
            },
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });
    let mut input = Input::new(rx);

    let result = run(&mut out, &mut input, &Config::default());

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
