use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use sdl2::keyboard::Keycode;
use tracing::{error, info, warn};

use wuline::config::{Config, WINDOW_TITLE};
use wuline::display::{Display, InputEvent, RenderTarget};
use wuline::scene::{Effect, Scene};
use wuline::util::{seed_from_clock, FpsCounter, Rng};
use wuline::{logging, LineRasterizer, Result};

const SCENE_FILE: &str = "scene.json";
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(2);

/// Load the configured scene file, or scatter random spinners
fn initial_scene(config: &Config, rng: &mut Rng) -> Result<Scene> {
    match &config.scene {
        Some(path) => {
            let scene = Scene::load(path)?;
            info!(path = %path.display(), spinners = scene.spinners.len(), "scene loaded");
            Ok(scene)
        },
        None => Ok(Scene::random(config.spinners, config.width, config.height, rng)),
    }
}

fn report_fps(fps_counter: &FpsCounter, frame: u64) {
    let (min_fps, max_fps) = fps_counter.min_max_fps();
    info!(
        frame,
        avg = fps_counter.avg_fps() as u32,
        min = min_fps as u32,
        max = max_fps as u32,
        ms = fps_counter.avg_frame_time_ms(),
        "fps"
    );
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("wuline: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        print!("{}", Config::usage());
        return Ok(());
    }
    logging::init(config.debug);

    let (width, height) = (config.width, config.height);
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut rng = Rng::new(seed);

    let mut scene = initial_scene(&config, &mut rng)?;
    if let Some(path) = &config.save_scene {
        scene.save(path)?;
        info!(path = %path.display(), "scene saved");
    }

    let (mut display, texture_creator) =
        Display::with_options(WINDOW_TITLE, width, height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut raster = LineRasterizer::new(width, height)?;

    info!(
        width,
        height,
        vsync = config.vsync,
        spinners = scene.spinners.len(),
        seed,
        "=== wuline ==="
    );
    info!("Escape quits, Space pauses, R reshuffles, S saves, F toggles the FPS log");

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = true;
    let mut paused = false;
    let mut last_report = Instant::now();
    let frame_interval = Duration::from_millis(config.frame_ms);
    let mut frame: u64 = 0;

    'main: loop {
        let frame_start = Instant::now();
        let (dt, _avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::Space) => {
                    paused = !paused;
                    info!(paused, "animation toggled");
                },
                InputEvent::KeyDown(Keycode::R) => {
                    let seed = rng.next_u64();
                    scene = Scene::random(scene.spinners.len(), width, height, &mut Rng::new(seed));
                    info!(seed, "new scene");
                },
                InputEvent::KeyDown(Keycode::S) => match scene.save(Path::new(SCENE_FILE)) {
                    Ok(()) => info!("Scene saved to {}", SCENE_FILE),
                    Err(e) => warn!("Failed to save: {}", e),
                },
                InputEvent::KeyDown(Keycode::F) => show_fps = !show_fps,
                InputEvent::KeyDown(_) => {},
            }
        }

        if !paused {
            scene.update(dt);
        }
        scene.render(&mut raster);
        display.present(&mut target, raster.buffer())?;

        frame += 1;
        if show_fps && last_report.elapsed() >= FPS_REPORT_INTERVAL {
            report_fps(&fps_counter, frame);
            last_report = Instant::now();
        }
        if config.frames.is_some_and(|limit| frame >= limit) {
            info!(frame, "frame limit reached");
            break;
        }

        let spent = frame_start.elapsed();
        if spent < frame_interval {
            thread::sleep(frame_interval - spent);
        }
    }

    info!(frames = frame, effect = scene.name(), "shutting down");
    Ok(())
}
