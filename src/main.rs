use anyhow::Context;
use clap::Parser;
use glam::Vec3;

use scene_loop::camera::Camera;
use scene_loop::cli::{Cli, Stage};
use scene_loop::frame::ScriptedFrames;
use scene_loop::intersect::ShapeIntersector;
use scene_loop::options::AnimationOptions;
use scene_loop::session::Session;
use scene_loop::traits::{NullRenderer, QueuedAssets};
use scene_loop::types::{AnimatableObject, Material, ObjectId, Shape, Transform};
use scene_loop::window::{run_windowed, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use scene_loop::{
    create_lit_sphere_scene, create_picking_scene, create_spinning_cube_scene,
    create_textured_scene,
};

/// Camera placement shared by every stage
const CAMERA_POSITION: Vec3 = Vec3::new(-10.0, 30.0, 30.0);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = match cli.stage {
        Stage::SpinningCube => create_spinning_cube_scene(),
        Stage::LitSphere => create_lit_sphere_scene(),
        Stage::Textured => create_textured_scene(),
        Stage::Picking => create_picking_scene(),
    };

    if let Some(path) = &cli.options {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        state.options = serde_json::from_str::<AnimationOptions>(&text)
            .with_context(|| format!("parsing options file {}", path.display()))?;
        log::info!("loaded options from {}", path.display());
    }

    let camera = Camera::new(
        CAMERA_POSITION,
        Vec3::ZERO,
        INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32,
    );

    let mut session = Session::new(state, camera)?;

    // Later stages expect an externally loaded model; the queued loader
    // stands in for the real engine's importer.
    if matches!(cli.stage, Stage::Textured | Stage::Picking) {
        let mut loader = QueuedAssets::new();
        loader.deliver(AnimatableObject {
            id: ObjectId(1000),
            tag: "monkey".to_string(),
            shape: Shape::Model,
            transform: Transform::at(Vec3::new(-12.0, 4.0, 10.0)),
            material: Material::flat([0.8, 0.8, 0.8]),
        });
        session = session.with_loader(loader);
    }

    match cli.headless {
        Some(frames) => {
            let mut renderer = NullRenderer::new();
            session.resized(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
            session.run(
                ScriptedFrames::at_60hz(frames),
                &ShapeIntersector::new(),
                &mut renderer,
            )?;
            log::info!(
                "headless run finished: {} frames, {} objects",
                renderer.frames_rendered(),
                session.state().len()
            );
        }
        None => run_windowed(
            session,
            ShapeIntersector::new(),
            NullRenderer::new(),
            "scene-loop",
        )?,
    }

    Ok(())
}
