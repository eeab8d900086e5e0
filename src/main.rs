// SDF sketch: one shape drawn from its signed-distance function, edited live.
// • Tab switches circle / box / line.
// • Up/Down picks a parameter; Left/Right changes it (Shift = coarse).
// • [ / ] change a point's y; left click moves the focused point.
// • On a color: Left/Right change alpha, Space cycles the palette,
//   typing six hex digits sets the RGB (Backspace drops one).
// • ESC quits.

mod color;
mod config;
mod draw;
mod error;
mod gamma;
mod panel;
mod raster;
mod sdf;
mod session;
mod shape;
mod types;
mod vector;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use config::Config;
use draw::{draw_crosshair, draw_hud, Drawer};
use error::Error;
use gamma::GammaLut;
use panel::Panel;
use session::{ParamChange, RenderContext, Session};
use shape::{ParamKind, ShapeKind};
use types::FrameBuffer;

/// Interactive signed-distance-field shape renderer.
#[derive(Parser, Debug)]
#[command(name = "sdf-sketch", version, about)]
struct Args {
    /// Config file (default: ~/.config/sdf-sketch/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width, overrides the config
    #[arg(long)]
    width: Option<u32>,

    /// Window height, overrides the config
    #[arg(long)]
    height: Option<u32>,

    /// Shape shown first
    #[arg(short, long, value_enum, default_value_t = ShapeKind::Circle)]
    shape: ShapeKind,

    /// Scan pixels on one thread
    #[arg(long)]
    sequential: bool,
}

const HUD_COLOR: u32 = 0x00_FF_FF_FF;
const CROSSHAIR_COLOR: u32 = 0x00_FF_CC_33;

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(args.config.as_deref());
    let width = args.width.unwrap_or(config.window.width).max(1);
    let height = args.height.unwrap_or(config.window.height).max(1);

    let ctx = RenderContext {
        background: config.background(),
        parallel: config.render.parallel && !args.sequential,
        lut: config.render.linear_blend.then(GammaLut::new),
    };
    info!(
        "Starting {}x{} ({} scan)",
        width,
        height,
        if ctx.parallel { "parallel" } else { "sequential" }
    );

    /* --- Window + editor state ---
       Visual: window opens on the default circle (or --shape), HUD top-left. */
    let mut drawer = Drawer::new(
        &config.window.title,
        width as usize,
        height as usize,
        config.window.resizable,
    )?;
    let mut session = Session::new(width, height, args.shape, config.editor.blur_radius);
    let mut panel = Panel::new(config.editor.step, config.editor.coarse_step, config.palette());

    /* --- Frame buffers ---
       `canvas` holds the last blitted render; `screen` is canvas + HUD, rebuilt every frame.
       Visual: the shape only changes when an edit lands; the HUD never smears into it. */
    let mut canvas = FrameBuffer::new(width as usize, height as usize);
    let mut screen = canvas.clone();
    let mut dirty = true;

    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Window size: a new size means a new raster.
           Visual: dragging the window edge re-renders at the new size, shape stays put. */
        let (w, h) = drawer.size();
        if w > 0 && h > 0 {
            dirty |= session.dispatch(ParamChange::Resize { width: w as u32, height: h as u32 });
        }

        /* 2) Editor input -> parameter-change events. */
        for input in drawer.inputs() {
            if let Some(change) = panel.handle(input, session.shape()) {
                dirty |= session.dispatch(change);
            }
        }

        /* 3) Render only when the snapshot changed.
           Visual: the shape with its soft edge blended over the background. */
        if dirty {
            let snap = session.snapshot();
            let raster = session::render(&snap, &ctx)?;
            if (canvas.width, canvas.height) != (snap.width as usize, snap.height as usize) {
                debug!("Canvas resized to {}x{}", snap.width, snap.height);
                canvas = FrameBuffer::new(snap.width as usize, snap.height as usize);
                screen = canvas.clone();
            }
            session::present(&raster, &mut canvas, &ctx)?;
            dirty = false;
        }

        /* 4) Overlays on a copy of the canvas.
           Visual: parameter list, plus a crosshair while a point is focused. */
        screen.pixels.copy_from_slice(&canvas.pixels);
        let shape = session.shape();
        if config.editor.show_hud {
            draw_hud(&mut screen, &panel.lines(shape), HUD_COLOR);
        }
        if shape.kind().param_kind(panel.focused_name(shape)) == Some(ParamKind::Vector) {
            if let Some((mx, my)) = drawer.mouse_pos() {
                draw_crosshair(&mut screen, mx as i32, my as i32, 12, CROSSHAIR_COLOR);
            }
        }

        /* 5) Present. */
        drawer.present(&screen)?;
    }

    Ok(())
}
