//! Session lifecycle and the per-tick pipeline.
//!
//! A session owns the scene state, the camera, the frame updater and the
//! latest pointer sample. Construction validates the designated-object table
//! and fails fast; after that every tick runs to completion on one thread:
//! drain control edits, poll the asset loader, update, pick, render.

use crate::camera::Camera;
use crate::error::SceneError;
use crate::frame::FrameInfo;
use crate::pick;
use crate::state::SceneState;
use crate::traits::{AssetLoader, ControlSurface, FrameSource, RayIntersect, SceneRenderer};
use crate::types::PointerSample;
use crate::update::FrameUpdater;

pub struct Session {
    state: SceneState,
    camera: Camera,
    updater: FrameUpdater,
    pointer: Option<PointerSample>,
    viewport: (u32, u32),
    controls: Option<Box<dyn ControlSurface>>,
    loader: Option<Box<dyn AssetLoader>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("camera", &self.camera)
            .field("updater", &self.updater)
            .field("pointer", &self.pointer)
            .field("viewport", &self.viewport)
            .field("controls", &self.controls.is_some())
            .field("loader", &self.loader.is_some())
            .finish()
    }
}

impl Session {
    /// Build a session over a finished scene. A designated object that is not
    /// registered aborts here, before the render loop ever starts.
    pub fn new(state: SceneState, camera: Camera) -> Result<Self, SceneError> {
        state.validate_designations()?;
        Ok(Self {
            state,
            camera,
            updater: FrameUpdater::new(),
            pointer: None,
            viewport: (0, 0),
            controls: None,
            loader: None,
        })
    }

    pub fn with_controls(mut self, controls: impl ControlSurface + 'static) -> Self {
        self.controls = Some(Box::new(controls));
        self
    }

    pub fn with_loader(mut self, loader: impl AssetLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Record the latest pointer position in window pixels. Kept as the last
    /// known sample until the next move event.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        let (width, height) = self.viewport;
        self.pointer = Some(PointerSample::from_pixels(px, py, width, height));
    }

    /// Viewport resize: store the new size and update the camera's aspect
    /// ratio. Object transforms are untouched.
    pub fn resized(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.resize(width, height);
    }

    /// Run one tick to completion.
    pub fn tick(
        &mut self,
        frame: FrameInfo,
        intersect: &dyn RayIntersect,
        renderer: &mut dyn SceneRenderer,
    ) -> Result<(), SceneError> {
        // Control edits settle before the update step; a rejected edit keeps
        // the prior value and the loop keeps going.
        if let Some(controls) = self.controls.as_mut() {
            for edit in controls.drain_edits() {
                if let Err(err) = self.state.set_option(&edit.name, edit.value) {
                    log::warn!("control edit rejected: {err}");
                }
            }
        }

        if let Some(loader) = self.loader.as_mut() {
            while let Some(delivery) = loader.poll() {
                match delivery {
                    Ok(object) => {
                        log::info!("asset ready, registering object {}", object.id);
                        self.state.register(object);
                    }
                    Err(err) => log::warn!("asset load failed, scene unchanged: {err}"),
                }
            }
        }

        let mut deltas = self.updater.update(frame, &mut self.state)?;

        if let Some(pointer) = self.pointer {
            let ray = self.camera.ray_through(pointer);
            let hits = intersect.pick(&ray, &self.state);
            deltas.extend(pick::dispatch(frame, &hits, &mut self.state)?);
        }

        // A renderer hiccup is logged, not fatal; the next frame retries
        if let Err(err) = renderer.render(&self.state, &self.camera, &deltas) {
            log::error!("render failed: {err}");
        }
        Ok(())
    }

    /// Drive the session from a frame source until it runs dry. Used for
    /// headless runs; the windowed path ticks from redraw events instead.
    pub fn run<F: FrameSource>(
        &mut self,
        frames: F,
        intersect: &dyn RayIntersect,
        renderer: &mut dyn SceneRenderer,
    ) -> Result<(), SceneError> {
        for frame in frames {
            self.tick(frame, intersect, renderer)?;
        }
        Ok(())
    }
}
