use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use chirp::clipboard::SystemClipboard;
use chirp::commands::Cmd;
use chirp::layout::HitTarget;
use chirp::messages::{AppMsg, Msg, UiMsg};
use chirp::model::AppModel;
use chirp::update::update;

use super::input::handle_key;
use crate::view::Renderer;

/// Interval between cursor blink / notification expiry ticks
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Initial window size in logical pixels
pub const INITIAL_WIDTH: u32 = 560;
pub const INITIAL_HEIGHT: u32 = 640;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    modifiers: ModifiersState,
    exit_requested: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    clipboard: SystemClipboard,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            exit_requested: false,
            msg_tx,
            msg_rx,
            clipboard: SystemClipboard::new(),
        }
    }

    /// Create the renderer and copy its font metrics into the model so the
    /// layout matches what gets drawn
    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let size = window.inner_size();
        let renderer = Renderer::new(window, context, &self.model.config)?;

        self.model.char_width = renderer.char_width();
        self.model.line_height = renderer.line_height();
        self.model.scale_factor = renderer.scale_factor();
        self.model.window_size = (size.width, size.height);

        self.renderer = Some(renderer);
        Ok(())
    }

    fn reinit_renderer(&mut self) {
        let (Some(window), Some(context)) = (self.window.clone(), self.context.take()) else {
            return;
        };
        if let Err(e) = self.init_renderer(window, &context) {
            tracing::error!("Failed to reinitialize renderer: {}", e);
        }
        self.context = Some(context);
    }

    fn update_cursor_icon(&self, target: Option<HitTarget>) {
        let Some(window) = &self.window else { return };
        let icon = match target {
            Some(HitTarget::MessageField | HitTarget::TagInput) => CursorIcon::Text,
            Some(
                HitTarget::EmojiButton(_)
                | HitTarget::AddTagButton
                | HitTarget::ChipRemove(_)
                | HitTarget::ExportButton,
            ) => CursorIcon::Pointer,
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                handle_key(&mut self.model, &event.logical_key, self.modifiers)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let cmd = update(
                    &mut self.model,
                    Msg::Ui(UiMsg::PointerMoved {
                        x: position.x,
                        y: position.y,
                    }),
                );
                self.update_cursor_icon(self.model.ui.hovered);
                cmd
            }
            WindowEvent::CursorLeft { .. } => {
                self.model.ui.hovered = None;
                Some(Cmd::Redraw)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.model.ui.pointer;
                update(&mut self.model, Msg::Ui(UiMsg::Click { x, y }))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> bool {
        let blink = update(&mut self.model, Msg::Ui(UiMsg::BlinkCursor));
        let expire = update(&mut self.model, Msg::Ui(UiMsg::ExpireNotification));
        blink.is_some() || expire.is_some()
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
                Cmd::CopyToClipboard { text } => {
                    let tx = self.msg_tx.clone();
                    let clipboard = self.clipboard.clone();
                    std::thread::spawn(move || {
                        let result = clipboard.write_text(&text).map_err(|e| e.to_string());
                        let _ = tx.send(Msg::App(AppMsg::ClipboardWriteCompleted(result)));
                    });
                }
                Cmd::ReadClipboard => {
                    let tx = self.msg_tx.clone();
                    let clipboard = self.clipboard.clone();
                    std::thread::spawn(move || {
                        let result = clipboard.read_text().map_err(|e| e.to_string());
                        let _ = tx.send(Msg::App(AppMsg::ClipboardReadCompleted(result)));
                    });
                }
                Cmd::ReinitializeRenderer => self.reinit_renderer(),
                Cmd::Quit => self.exit_requested = true,
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("chirp")
            .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;

        self.init_renderer(Rc::clone(&window), &context)?;
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                tracing::error!("Failed to open window: {:#}", e);
                eprintln!("chirp: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = match &self.window {
            Some(window) if window_id == window.id() && !should_exit => {
                match self.handle_event(&event) {
                    Some(cmd) => {
                        let needs_redraw = cmd.needs_redraw();
                        self.process_cmd(cmd);
                        needs_redraw
                    }
                    None => false,
                }
            }
            _ => false,
        };

        if should_exit || self.exit_requested {
            event_loop.exit();
        } else if should_redraw {
            self.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.process_async_messages() {
            self.request_redraw();
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick = now;
            if self.tick() {
                self.request_redraw();
            }
        }

        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Clipboard results are picked up on the next wake-up
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + TICK_INTERVAL));
    }
}
