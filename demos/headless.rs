//! Headless run of the frame contract.
//!
//! Plays a scripted key sequence through [`FrameDriver`], flattening every
//! frame into a mesh instead of a window, and logs what a renderer would
//! upload.
//!
//! ```text
//! cargo run --example headless                 # 250 frames, all five solids
//! cargo run --example headless -- 1000         # custom frame count
//! RUST_LOG=platonic=trace cargo run --example headless
//! ```

use platonic::frame::{FrameDriver, KeyBindings};
use platonic::render::MeshBuilder;
use platonic::view::ViewParams;
use platonic::{Catalog, PlatonicError};

const DEFAULT_FRAMES: u64 = 250;

/// Key held during each 50-frame block of the script.
const SCRIPT: [char; 5] = ['1', '2', '3', '4', '5'];

fn main() -> Result<(), PlatonicError> {
    // Default: WARN for everything, INFO for platonic and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=platonic=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("platonic=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let catalog = Catalog::global()?;
    let view = ViewParams::default();
    tracing::info!(
        title = %view.title,
        width = view.window_size.0,
        height = view.window_size.1,
        interval = ?view.frame_interval(),
        "view configured"
    );
    let mut driver = FrameDriver::new(catalog, KeyBindings::default(), view)?;

    for i in 0..frames {
        let block = usize::try_from(i / 50).unwrap_or(usize::MAX);
        let key = SCRIPT[block % SCRIPT.len()];
        if let Some(selection) = driver.handle_keys(&[key]) {
            tracing::info!(texture = %selection.texture.display(), "texture reload requested");
        }

        let mut builder = MeshBuilder::new();
        let frame = driver.render_frame(&mut builder);
        let mesh = builder.finish()?;

        if frame.index % 50 == 0 {
            tracing::info!(
                frame = frame.index,
                solid = %frame.kind,
                triangles = mesh.faces.triangle_count(),
                segments = mesh.wireframe.segments.len(),
                "frame emitted"
            );
        }
    }

    tracing::info!(frames = driver.frames_rendered(), "done");
    Ok(())
}
