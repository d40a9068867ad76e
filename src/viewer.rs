//! Standalone pet window backed by winit.
//!
//! A borderless, transparent, always-on-top window the size of one
//! sprite frame. A drift-compensated 300 ms ticker drives the animation
//! through `ControlFlow::WaitUntil`; pointer events flow through the
//! [`InputProcessor`] into the engine, and the engine's position is
//! mirrored back onto the window.
//!
//! ```no_run
//! # use mochi::Viewer;
//! Viewer::builder()
//!     .with_title("Mochi")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use glam::IVec2;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId, WindowLevel},
};

use crate::{
    engine::{PetEngine, Reaction},
    error::PetError,
    input::{InputEvent, InputProcessor},
    motion::ScreenBounds,
    render::{RenderContext, SpriteBlit},
    sprite::{FrameStore, SPRITE_SIZE},
    util::ticker::{TickTimer, TICK_PERIOD},
};

/// Events injected into the winit loop from outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    /// The tray "exit" item was activated.
    #[cfg_attr(not(feature = "tray"), allow(dead_code))]
    TrayExit,
}

/// Instructions shown once at startup.
#[cfg(feature = "dialog")]
const HELP_TEXT: &str = "Drag to move the pet around.\n\
    Click to toggle tail-wagging or sleeping.\n\
    Double-click to walk.\n\
    Triple-click to exit.";

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    title: String,
    show_help: bool,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Mochi", startup
    /// help shown).
    fn new() -> Self {
        Self {
            title: "Mochi".into(),
            show_help: true,
        }
    }

    /// Set the window and tray tooltip title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Show or suppress the startup instructions dialog.
    #[must_use]
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            title: self.title,
            show_help: self.show_help,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the pet.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    title: String,
    show_help: bool,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the pet
    /// exits.
    pub fn run(self) -> Result<(), PetError> {
        let event_loop = EventLoop::<ShellEvent>::with_user_event()
            .build()
            .map_err(|e| PetError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        #[cfg(feature = "tray")]
        let proxy = event_loop.create_proxy();

        let mut app = PetApp {
            window: None,
            context: None,
            blit: None,
            engine: None,
            input: InputProcessor::new(),
            ticker: TickTimer::new(TICK_PERIOD, Instant::now()),
            title: self.title,
            show_help: self.show_help,
            #[cfg(feature = "tray")]
            tray: None,
            #[cfg(feature = "tray")]
            proxy,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PetError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct PetApp {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    blit: Option<SpriteBlit>,
    engine: Option<PetEngine>,
    input: InputProcessor,
    ticker: TickTimer,
    title: String,
    #[cfg_attr(not(feature = "dialog"), allow(dead_code))]
    show_help: bool,
    #[cfg(feature = "tray")]
    tray: Option<crate::tray::TrayHandle>,
    #[cfg(feature = "tray")]
    proxy: winit::event_loop::EventLoopProxy<ShellEvent>,
}

/// Union of all monitor rectangles, with a fallback when the platform
/// reports none.
fn screen_bounds(event_loop: &ActiveEventLoop) -> ScreenBounds {
    let union = ScreenBounds::union_of(
        event_loop.available_monitors().map(|monitor| {
            let origin = monitor.position();
            let size = monitor.size();
            (
                IVec2::new(origin.x, origin.y),
                IVec2::new(size.width as i32, size.height as i32),
            )
        }),
    );
    union.unwrap_or_else(|| {
        log::warn!("no monitors reported; assuming a 1920x1080 screen");
        ScreenBounds::new(IVec2::ZERO, IVec2::new(1920, 1080))
    })
}

/// Start the pet in the middle of the primary monitor.
fn initial_position(event_loop: &ActiveEventLoop) -> IVec2 {
    let size = SPRITE_SIZE as i32;
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .map_or(IVec2::new(40, 40), |monitor| {
            let origin = monitor.position();
            let dims = monitor.size();
            IVec2::new(
                origin.x + (dims.width as i32 - size) / 2,
                origin.y + (dims.height as i32 - size) / 2,
            )
        })
}

/// One-time startup instructions, as a native message box.
#[cfg(feature = "dialog")]
fn show_help(title: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(HELP_TEXT)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl PetApp {
    /// Mirror the engine's position onto the platform window.
    fn apply_position(&self) {
        if let (Some(window), Some(engine)) = (&self.window, &self.engine)
        {
            let position = engine.position();
            window.set_outer_position(PhysicalPosition::new(
                position.x, position.y,
            ));
        }
    }

    /// Run one due animation tick and re-arm the timer.
    fn run_tick(&mut self) {
        let fired = Instant::now();

        let moved = self.engine.as_mut().map_or(false, PetEngine::tick);
        if moved {
            self.apply_position();
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }

        self.ticker.advance(fired, Instant::now());
    }

    /// Feed a translated event through the processor into the engine and
    /// act on the reaction.
    fn dispatch(
        &mut self,
        event_loop: &ActiveEventLoop,
        event: InputEvent,
    ) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let Some(command) =
            self.input
                .handle_event(event, engine.position(), Instant::now())
        else {
            return;
        };

        match engine.execute(command) {
            Reaction::None => {}
            Reaction::Moved => self.apply_position(),
            Reaction::RestartTicker => {
                self.ticker.restart(Instant::now());
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Reaction::Quit => event_loop.exit(),
        }
    }

    /// Upload the current frame and present it.
    fn redraw(&mut self) {
        let (Some(context), Some(blit), Some(engine)) =
            (&self.context, &mut self.blit, &self.engine)
        else {
            return;
        };

        blit.upload(context, engine.current_frame());

        let frame = match context.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(
                wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
            ) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("render error: {e:?}");
                return;
            }
        };

        let view = frame.texture.create_view(&Default::default());
        let mut encoder = context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            },
        );
        blit.render(&mut encoder, &view);
        context.submit(encoder);
        frame.present();
    }
}

impl ApplicationHandler<ShellEvent> for PetApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let bounds = screen_bounds(event_loop);
        let position = initial_position(event_loop);

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(PhysicalSize::new(SPRITE_SIZE, SPRITE_SIZE))
            .with_position(PhysicalPosition::new(position.x, position.y));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (SPRITE_SIZE, SPRITE_SIZE),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU context: {e}");
                event_loop.exit();
                return;
            }
        };

        let engine = PetEngine::new(FrameStore::load(), bounds, position);
        let mut blit = SpriteBlit::new(&context, SPRITE_SIZE, SPRITE_SIZE);
        blit.upload(&context, engine.current_frame());

        // The tray is optional: a platform without one just loses the
        // menu, not the pet.
        #[cfg(feature = "tray")]
        {
            match crate::tray::TrayHandle::new(
                self.proxy.clone(),
                &self.title,
            ) {
                Ok(tray) => self.tray = Some(tray),
                Err(e) => {
                    log::warn!("tray unavailable, continuing without it: {e}");
                }
            }
        }

        #[cfg(feature = "dialog")]
        if self.show_help {
            show_help(&self.title);
        }

        self.ticker.restart(Instant::now());
        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.blit = Some(blit);
        self.engine = Some(engine);
    }

    fn new_events(
        &mut self,
        _event_loop: &ActiveEventLoop,
        cause: StartCause,
    ) {
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            self.run_tick();
        }
    }

    fn user_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        event: ShellEvent,
    ) {
        match event {
            ShellEvent::TrayExit => {
                log::info!("exit requested from tray");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size.width, size.height);
                }
            }

            WindowEvent::Moved(position) => {
                if let Some(engine) = &mut self.engine {
                    engine.sync_position(IVec2::new(position.x, position.y));
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                self.dispatch(
                    event_loop,
                    InputEvent::MouseButton {
                        button: button.into(),
                        pressed,
                    },
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // One pending deadline at a time; re-armed by every tick and by
        // manual state changes.
        if self.window.is_some() {
            event_loop
                .set_control_flow(ControlFlow::WaitUntil(self.ticker.deadline()));
        }
    }
}
