//! Winit adapter: bridges the host window's event loop to a session.
//!
//! Cursor moves become pointer samples, resizes update the viewport and
//! camera aspect, and each redraw drives one tick off the wall-clock frame
//! iterator. Everything runs on the event-loop thread; handlers run to
//! completion before the next event is delivered.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::frame::FrameIterator;
use crate::session::Session;
use crate::traits::{RayIntersect, SceneRenderer};

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

struct WindowApp<I: RayIntersect, R: SceneRenderer> {
    session: Session,
    intersect: I,
    renderer: R,
    frames: FrameIterator,
    window: Option<Arc<Window>>,
    title: String,
}

impl<I: RayIntersect, R: SceneRenderer> ApplicationHandler for WindowApp<I, R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                INITIAL_WINDOW_WIDTH,
                INITIAL_WINDOW_HEIGHT,
            ));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                let size = window.inner_size();
                self.session.resized(size.width, size.height);
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.session.resized(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.session.pointer_moved(position.x, position.y)
            }
            WindowEvent::RedrawRequested => {
                if let Some(frame) = self.frames.next() {
                    if let Err(err) =
                        self.session.tick(frame, &self.intersect, &mut self.renderer)
                    {
                        log::error!("tick failed: {err}");
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window and drive the session until it is closed
pub fn run_windowed<I, R>(
    session: Session,
    intersect: I,
    renderer: R,
    title: &str,
) -> anyhow::Result<()>
where
    I: RayIntersect,
    R: SceneRenderer,
{
    let event_loop = EventLoop::new()?;
    let mut app = WindowApp {
        session,
        intersect,
        renderer,
        frames: FrameIterator::new(),
        window: None,
        title: title.to_string(),
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
