//! Headless overlay demo
//!
//! Builds the demo HUD, drives it with a scripted pointer path through the
//! winit adapter and records what each frame would draw.

mod hud;

use std::path::Path;

use overlay_gui::{
    FixedMetrics, FrameRender, HoverEnd, HoverEnter, HudConfig, NodeId, RecordingCanvas,
    SceneManager,
};
use overlay_gui_winit::PointerTracker;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

const CONFIG_PATH: &str = "overlay.toml";
const TICKS: u64 = 120;
/// Frames rendered per tick, like a 60 fps host over a 20 tps simulation
const FRAMES_PER_TICK: u32 = 3;

/// One scripted input action
enum Step {
    MoveTo(f64, f64),
    Click,
    Scroll(f32),
    Type(&'static str),
    Press(NamedKey),
}

/// Pointer script keyed by tick, in raw window pixels
///
/// The scene halves the Y axis by default, so Y values here are doubled.
fn script() -> Vec<(u64, Step)> {
    vec![
        (5, Step::MoveTo(200.0, 200.0)),
        (10, Step::MoveTo(40.0, 122.0)),
        (20, Step::MoveTo(50.0, 124.0)),
        (30, Step::Click),
        (40, Step::MoveTo(427.0, 480.0)),
        (41, Step::Click),
        (45, Step::Type("overlay")),
        (50, Step::Press(NamedKey::Backspace)),
        (55, Step::Scroll(-1.0)),
        (70, Step::Press(NamedKey::Escape)),
        (80, Step::MoveTo(900.0, 900.0)),
    ]
}

fn load_config() -> HudConfig {
    if !Path::new(CONFIG_PATH).exists() {
        log::info!("No {CONFIG_PATH}, using defaults");
        return HudConfig::default();
    }
    match HudConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load {CONFIG_PATH}: {e}");
            log::warn!("Falling back to default configuration");
            HudConfig::default()
        }
    }
}

fn apply(step: &Step, tracker: &mut PointerTracker) {
    match step {
        Step::MoveTo(x, y) => tracker.cursor_moved(PhysicalPosition::new(*x, *y)),
        Step::Click => {
            // Press now, release on the following tick
            tracker.mouse_input(ElementState::Pressed, MouseButton::Left);
        }
        Step::Scroll(lines) => tracker.mouse_wheel(MouseScrollDelta::LineDelta(0.0, *lines)),
        Step::Type(text) => {
            for ch in text.chars() {
                let key = Key::Character(ch.to_string().into());
                tracker.key_input(&key, ElementState::Pressed, false);
            }
        }
        Step::Press(named) => tracker.key_input(&Key::Named(*named), ElementState::Pressed, false),
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting overlay demo...");

    let config = load_config();
    let viewport = config.viewport_extent();
    let mut scene = SceneManager::new(config);
    hud::build(&mut scene);
    log::info!("✓ Built HUD with {} top-level elements", scene.len());

    scene.events_mut().subscribe(|event: &HoverEnter| {
        log::info!(
            "✓ Hover enter {:?} at tick {}",
            event.element.id,
            event.host.tick
        );
    });
    scene.events_mut().subscribe(|event: &HoverEnd| {
        log::info!("  Hover end {:?} at tick {}", event.element.id, event.host.tick);
    });
    let frames = std::rc::Rc::new(std::cell::Cell::new(0u64));
    let counter = frames.clone();
    scene.events_mut().subscribe(move |_: &FrameRender| counter.set(counter.get() + 1));

    let mut canvas = RecordingCanvas::new(viewport).with_metrics(FixedMetrics {
        char_width: 6.0,
        line_height: 9.0,
    });
    let mut tracker = PointerTracker::new();
    let script = script();
    let mut released = true;

    for tick in 0..TICKS {
        if !released {
            tracker.mouse_input(ElementState::Released, MouseButton::Left);
            released = true;
        }
        for (_, step) in script.iter().filter(|(at, _)| *at == tick) {
            if matches!(step, Step::Click) {
                released = false;
            }
            apply(step, &mut tracker);
        }
        tracker.drive(&mut scene);

        for _ in 0..FRAMES_PER_TICK {
            canvas.clear();
            scene.render(&mut canvas, 1.0 / FRAMES_PER_TICK as f32);
        }
        log::debug!("Tick {tick}: {} draw commands", canvas.commands.len());
    }

    let search = scene
        .find(&NodeId::from(hud::SEARCH))
        .and_then(|node| node.as_input())
        .map(|input| input.text().to_owned())
        .unwrap_or_default();
    log::info!("✓ Ran {TICKS} ticks, {} frames", frames.get());
    log::info!("  Search field: {search:?}");
    log::info!("  Menu open: {}", scene.screen_open());
    log::info!(
        "  Last frame: {} draw commands, {} text runs",
        canvas.commands.len(),
        canvas.texts().count()
    );
}
