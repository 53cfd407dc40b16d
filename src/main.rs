//! Map overlay demo host.
//!
//! A minimal raylib host that drives [`OverlayExtension`] the way a game
//! would: it loads textures, dispatches tick, warp, resize, and render events,
//! and draws the overlay on top of a plain background.
//!
//! # Controls
//!
//! - `0` – warp to a location without the overlay property
//! - `1`..`9` – warp to a location tagged with the Nth rule's property value
//! - `F10` – toggle fullscreen
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib-host -- --data ./data.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::info;
use raylib::ffi;
use raylib::prelude::*;

use mapoverlay::error::OverlayError;
use mapoverlay::overlay::OverlayExtension;
use mapoverlay::resources::maplocation::MapLocation;
use mapoverlay::resources::overlayconfig::OverlayConfig;
use mapoverlay::resources::screengeometry::DisplayState;
use mapoverlay::resources::texture::{TextureHandle, TextureLoader};
use mapoverlay::systems::render::{DrawSurface, ScreenRect};

/// Map overlay demo host
#[derive(Parser)]
#[command(version, about = "Full-screen map property overlays, demo host")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Overlay data file, overriding `data_path` from the config.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Directory image paths are resolved against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    assets: PathBuf,
}

/// Texture loader backed by raylib. Handles index into `textures`.
struct RaylibTextureLoader<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
    root: PathBuf,
    textures: Vec<Texture2D>,
}

impl TextureLoader for RaylibTextureLoader<'_> {
    fn load(&mut self, path: &str) -> Result<TextureHandle, OverlayError> {
        let full = self.root.join(path);
        let full = full.to_string_lossy();
        let texture = self
            .rl
            .load_texture(self.thread, &full)
            .map_err(|e| OverlayError::texture(path, e.to_string()))?;
        self.textures.push(texture);
        Ok(TextureHandle((self.textures.len() - 1) as u32))
    }
}

/// Draw surface backed by a raylib drawing scope.
struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a [Texture2D],
}

impl DrawSurface for RaylibSurface<'_, '_> {
    fn draw_texture(&mut self, texture: TextureHandle, dest: ScreenRect) {
        let Some(tex) = self.textures.get(texture.0 as usize) else {
            return;
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        let dest = Rectangle {
            x: dest.x as f32,
            y: dest.y as f32,
            width: dest.width as f32,
            height: dest.height as f32,
        };
        self.d
            .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

fn display_state(rl: &RaylibHandle) -> DisplayState {
    let monitor: i32 = unsafe { ffi::GetCurrentMonitor() };
    let (monitor_width, monitor_height) =
        unsafe { (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor)) };
    DisplayState {
        fullscreen: rl.is_window_fullscreen(),
        back_buffer_width: monitor_width,
        back_buffer_height: monitor_height,
        client_width: rl.get_screen_width(),
        client_height: rl.get_screen_height(),
    }
}

const WARP_KEYS: [KeyboardKey; 10] = [
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = OverlayConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("Using default config: {}", e);
    }
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Map Overlay")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let display = display_state(&rl);
    let property_key = config.property_key.clone();

    // Load every texture before any event can reach the extension.
    let (mut overlay, textures) = {
        let mut loader = RaylibTextureLoader {
            rl: &mut rl,
            thread: &thread,
            root: cli.assets,
            textures: Vec::new(),
        };
        let overlay = OverlayExtension::new(config, display, &mut loader);
        (overlay, loader.textures)
    };

    // Location 0 carries no overlay property; location N is tagged with rule N-1.
    let mut locations = vec![MapLocation::new("Farm")];
    for (i, rule) in overlay.rules().rules.iter().enumerate() {
        locations.push(
            MapLocation::new(format!("Location{}", i + 1))
                .with_property(property_key.as_str(), rule.property_value.as_str()),
        );
    }
    let mut current = 0usize;
    overlay.location_changed(&locations[current]);

    let mut ticks: u64 = 0;
    while !rl.window_should_close() {
        for (index, key) in WARP_KEYS.iter().enumerate() {
            if index < locations.len() && rl.is_key_pressed(*key) {
                current = index;
                info!("Warped to {}", locations[current].name);
                overlay.location_changed(&locations[current]);
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_F10) {
            rl.toggle_fullscreen();
            info!("Fullscreen: {}", rl.is_window_fullscreen());
        }

        if rl.is_window_resized() {
            overlay.display_size_changed(display_state(&rl));
        } else {
            overlay.set_display(display_state(&rl));
        }

        ticks += 1;
        overlay.ticked(ticks);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGREEN);
        d.draw_text(
            &format!("{} | tick {}", locations[current].name, ticks),
            10,
            10,
            20,
            Color::RAYWHITE,
        );
        let mut surface = RaylibSurface {
            d: &mut d,
            textures: &textures,
        };
        overlay.render(&mut surface);
    }
}
