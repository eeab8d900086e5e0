// Render session: one shape per kind, the selected kind and the canvas size.
// Edits arrive as `ParamChange` events and are folded into the session; the
// render step only ever sees an immutable `Snapshot`.

use std::time::Instant;

use log::{debug, info, warn};

use crate::color::Color;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::raster::Raster;
use crate::shape::{ParamValue, Shape, ShapeKind};
use crate::types::FrameBuffer;

#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    SelectShape(ShapeKind),
    Set { name: String, value: ParamValue },
    Resize { width: u32, height: u32 },
}

/// Everything the render step needs to know about the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub shape: Shape,
    pub width: u32,
    pub height: u32,
}

/// Per-session render settings, built once from config + CLI.
pub struct RenderContext {
    pub background: Color,
    pub parallel: bool,
    pub lut: Option<GammaLut>, // Some = blend the blur band in linear light
}

pub struct Session {
    shapes: [Shape; 3], // indexed like ShapeKind::ALL
    current: ShapeKind,
    width: u32,
    height: u32,
}

fn slot(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Circle => 0,
        ShapeKind::Box => 1,
        ShapeKind::Line => 2,
    }
}

impl Session {
    /// Default shapes laid out for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32, current: ShapeKind, blur_radius: f64) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            shapes: ShapeKind::ALL.map(|kind| Shape::default_for(kind, w, h, blur_radius)),
            current,
            width,
            height,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shapes[slot(self.current)]
    }

    #[cfg(test)]
    pub fn shape_of(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[slot(kind)]
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot { shape: *self.shape(), width: self.width, height: self.height }
    }

    /// Fold one event into the session. `Ok(true)` when something changed.
    /// A rejected event leaves the session exactly as it was.
    pub fn apply(&mut self, change: ParamChange) -> Result<bool, Error> {
        match change {
            ParamChange::SelectShape(kind) => {
                let changed = kind != self.current;
                self.current = kind;
                Ok(changed)
            }
            ParamChange::Set { name, value } => {
                let next = self.shape().with_param(&name, value)?;
                let changed = next != *self.shape();
                self.shapes[slot(self.current)] = next;
                Ok(changed)
            }
            ParamChange::Resize { width, height } => {
                if width == 0 || height == 0 {
                    return Err(Error::InvalidSize { width, height });
                }
                let changed = (width, height) != (self.width, self.height);
                self.width = width;
                self.height = height;
                Ok(changed)
            }
        }
    }

    /// `apply` for the event loop: rejected edits are logged and dropped.
    pub fn dispatch(&mut self, change: ParamChange) -> bool {
        let label = match &change {
            ParamChange::SelectShape(kind) => Some(*kind),
            _ => None,
        };
        match self.apply(change) {
            Ok(changed) => {
                if let (true, Some(kind)) = (changed, label) {
                    info!("Shape: {kind}");
                }
                changed
            }
            Err(e) => {
                warn!("Ignoring edit: {e}");
                false
            }
        }
    }
}

/// Fresh surface of the snapshot's size with the shape's field applied.
pub fn render(snap: &Snapshot, ctx: &RenderContext) -> Result<Raster, Error> {
    let started = Instant::now();
    let mut raster = Raster::new(snap.width, snap.height)?;
    raster.apply_field(snap.shape.field(), ctx.parallel);
    debug!(
        "Rendered {} at {}x{} in {:.2?}",
        snap.shape.kind(),
        snap.width,
        snap.height,
        started.elapsed()
    );
    Ok(raster)
}

/// Blit `raster` into `frame` over the session background.
pub fn present(raster: &Raster, frame: &mut FrameBuffer, ctx: &RenderContext) -> Result<(), Error> {
    raster.blit(frame, ctx.background, ctx.lut.as_ref())
}
