use std::time::Instant;

use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use blockbuilder::controller::input::native::KeyBindings;
use blockbuilder::{logging, AppResult, InputEvent, Session, Settings};

struct App {
    window: Option<Window>,
    session: Session,
    bindings: KeyBindings,
    started: Instant,
}

impl App {
    fn new(settings: &Settings) -> Self {
        Self {
            window: None,
            session: Session::new(settings),
            bindings: KeyBindings::default(),
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn translate(&self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => self.bindings.key_to_input(*code, *state),
            WindowEvent::MouseInput { state, button, .. } => self.bindings.mouse_to_input(*button, *state),
            // look comes from cursor positions so that leaving the window resets it
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
                x: position.x,
                y: position.y,
            }),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::CursorLeft),
            WindowEvent::CursorEntered { .. } => Some(InputEvent::CursorEntered),
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }

    fn redraw(&mut self) {
        let now = self.now_ms();
        let placed = self.session.update(now);
        for block in placed {
            let c = block.center;
            info!("placed {} at ({:.2}, {:.2}, {:.2})", block.block_type.name, c.x, c.y, c.z);
        }
        if placed.is_empty() {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
    }

    fn title(&self) -> String {
        format!(
            "BlockBuilder3D - {} blocks - {}",
            self.session.world().len(),
            self.session.current_block()
        )
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                info!("window opened");
                self.window = Some(window);
            }
            Err(e) => {
                error!("could not create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(input) = self.translate(&event) {
            self.session.handle_event(&input);
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> AppResult<()> {
    logging::init();

    let settings = Settings::from_env();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&settings);
    event_loop.run_app(&mut app)?;
    info!("session ended with {} blocks", app.session.world().len());
    Ok(())
}
