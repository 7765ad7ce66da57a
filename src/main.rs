//! Headless scene inspector.
//!
//! Loads a scene description, builds a session and dumps the composed render
//! output for a few logical ticks. Useful for checking a scene file and its
//! mesh references without a graphics backend attached.

use cgmath::Vector3;
use roomview::{
    render::{RenderBackend, RenderItem},
    resources::AssetPaths,
    session::{InputEvent, Session},
};

struct Dump;

impl RenderBackend for Dump {
    fn draw(&mut self, item: &RenderItem<'_>) {
        let origin = item.world.w;
        let mesh = match item.mesh {
            Some(mesh) => format!("{} tris", mesh.triangle_count()),
            None => "no mesh".to_string(),
        };
        println!(
            "{}{} at ({:.3}, {:.3}, {:.3}) [{}]",
            if item.selected { "> " } else { "  " },
            item.name,
            origin.x,
            origin.y,
            origin.z,
            mesh,
        );
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let scene_path = std::env::args().nth(1).unwrap_or_else(|| "scene.json".to_string());
    let mut session = Session::from_file(&scene_path, AssetPaths::default())?;

    println!("scene: {scene_path} ({} nodes)", session.graph.len());
    println!("camera: {:?}", session.camera.position);

    // A short dry run: cycle the selection once and tick three times so
    // animated nodes visibly accumulate rotation in the dump.
    session.apply(InputEvent::SelectNext);
    session.apply(InputEvent::MoveCamera(Vector3::new(0.0, 0.0, 0.5)));
    for tick in 0..3 {
        session.advance();
        println!("--- tick {tick} ---");
        session.render_to(&mut Dump);
    }

    Ok(())
}
