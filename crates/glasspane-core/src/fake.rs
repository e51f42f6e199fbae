//! Scripted platform and GUI doubles that record every call.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{InitStep, PlatformResult};
use crate::geometry::{Margins, Point, Rect, Size};
use crate::gui::Gui;
use crate::platform::{DeviceParts, FeatureLevel, Platform, Pump, ShowCommand, SwapChainDesc};
use crate::surface::Surface;

/// Native resource kinds tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Class,
    Window,
    Device,
    Context,
    SwapChain,
    BackBuffer,
    RenderTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Acquire(Kind),
    Release(Kind),
    RegisterClass(String),
    UnregisterClass(String),
    CreateWindow { title: String, size: Size },
    LayerAlpha(u8),
    ExtendFrame(Margins),
    CreateDevice(SwapChainDesc, Vec<FeatureLevel>),
    Show(ShowCommand),
    Pump,
    GuiInit,
    BeginFrame,
    Render,
    EndFrame,
    Clear([f32; 4]),
    Submit(usize),
    Draw(usize),
    Present(u32),
    GuiShutdown,
    Notify(String),
}

#[derive(Debug, Default)]
pub struct Ledger {
    pub events: Vec<Event>,
}

pub type SharedLedger = Rc<RefCell<Ledger>>;

impl Ledger {
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn acquired(&self, kind: Kind) -> usize {
        self.count(|e| *e == Event::Acquire(kind))
    }

    pub fn released(&self, kind: Kind) -> usize {
        self.count(|e| *e == Event::Release(kind))
    }

    /// Release events in the order they happened.
    pub fn releases(&self) -> Vec<Kind> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Release(k) => Some(*k),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Notify(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

/// A fake native resource that records its own release.
#[derive(Debug)]
pub struct Resource {
    kind: Kind,
    name: String,
    ledger: SharedLedger,
}

impl Resource {
    fn acquire(ledger: &SharedLedger, kind: Kind, name: &str) -> Self {
        ledger.borrow_mut().push(Event::Acquire(kind));
        Self {
            kind,
            name: name.to_string(),
            ledger: Rc::clone(ledger),
        }
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.push(Event::Release(self.kind));
        if self.kind == Kind::Class {
            ledger.push(Event::UnregisterClass(self.name.clone()));
        }
    }
}

/// A platform whose failures and message queue are scripted.
pub struct FakePlatform {
    pub ledger: SharedLedger,
    /// Step that fails when reached.
    pub fail_at: Option<InitStep>,
    /// Pump results, consumed one per frame. An empty script quits.
    pub pumps: VecDeque<Pump>,
    /// 1-based index of the present call that fails.
    pub fail_present: Option<u64>,
    pub desktop: Size,
    presents: u64,
}

impl FakePlatform {
    pub fn new(ledger: &SharedLedger) -> Self {
        Self {
            ledger: Rc::clone(ledger),
            fail_at: None,
            pumps: VecDeque::new(),
            fail_present: None,
            desktop: Size::new(1920, 1080),
            presents: 0,
        }
    }

    /// Scripts `frames` quit-free pumps followed by a quit.
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.pumps = std::iter::repeat_n(Pump::Continue, frames)
            .chain(std::iter::once(Pump::Quit))
            .collect();
        self
    }

    fn gate(&self, step: InitStep) -> PlatformResult<()> {
        if self.fail_at == Some(step) {
            return Err(format!("induced failure at {step:?}").into());
        }
        Ok(())
    }

    fn push(&self, event: Event) {
        self.ledger.borrow_mut().push(event);
    }
}

impl Platform for FakePlatform {
    type Class = Resource;
    type Window = Resource;
    type Device = Resource;
    type Context = Resource;
    type SwapChain = Resource;
    type BackBuffer = Resource;
    type RenderTarget = Resource;

    fn register_class(&mut self, name: &str) -> PlatformResult<Resource> {
        self.gate(InitStep::RegisterClass)?;
        self.push(Event::RegisterClass(name.to_string()));
        Ok(Resource::acquire(&self.ledger, Kind::Class, name))
    }

    fn desktop_size(&mut self) -> PlatformResult<Size> {
        self.gate(InitStep::DesktopResolution)?;
        Ok(self.desktop)
    }

    fn create_window(
        &mut self,
        _class: &Resource,
        title: &str,
        size: Size,
    ) -> PlatformResult<Resource> {
        self.gate(InitStep::CreateWindow)?;
        self.push(Event::CreateWindow {
            title: title.to_string(),
            size,
        });
        Ok(Resource::acquire(&self.ledger, Kind::Window, title))
    }

    fn set_layer_alpha(&mut self, _window: &Resource, alpha: u8) -> PlatformResult<()> {
        self.gate(InitStep::LayeredAttributes)?;
        self.push(Event::LayerAlpha(alpha));
        Ok(())
    }

    fn client_rect(&mut self, _window: &Resource) -> PlatformResult<Rect> {
        self.gate(InitStep::ClientArea)?;
        Ok(Rect::new(0, 0, self.desktop.width, self.desktop.height))
    }

    fn window_rect(&mut self, _window: &Resource) -> PlatformResult<Rect> {
        self.gate(InitStep::WindowArea)?;
        Ok(Rect::new(0, 0, self.desktop.width, self.desktop.height))
    }

    fn client_to_screen(&mut self, _window: &Resource, point: Point) -> PlatformResult<Point> {
        self.gate(InitStep::ClientToScreen)?;
        Ok(point)
    }

    fn extend_frame(&mut self, _window: &Resource, margins: Margins) -> PlatformResult<()> {
        self.gate(InitStep::ExtendFrame)?;
        self.push(Event::ExtendFrame(margins));
        Ok(())
    }

    fn create_device(
        &mut self,
        _window: &Resource,
        desc: &SwapChainDesc,
        levels: &[FeatureLevel],
    ) -> PlatformResult<DeviceParts<Resource, Resource, Resource>> {
        self.gate(InitStep::CreateDevice)?;
        self.push(Event::CreateDevice(desc.clone(), levels.to_vec()));
        Ok(DeviceParts {
            device: Resource::acquire(&self.ledger, Kind::Device, "device"),
            context: Resource::acquire(&self.ledger, Kind::Context, "context"),
            swap_chain: Resource::acquire(&self.ledger, Kind::SwapChain, "swap chain"),
            feature_level: levels[0],
        })
    }

    fn back_buffer(&mut self, _swap_chain: &Resource) -> PlatformResult<Resource> {
        self.gate(InitStep::BackBuffer)?;
        Ok(Resource::acquire(&self.ledger, Kind::BackBuffer, "back buffer"))
    }

    fn create_render_target(
        &mut self,
        _device: &Resource,
        _back_buffer: &Resource,
    ) -> PlatformResult<Resource> {
        self.gate(InitStep::RenderTargetView)?;
        Ok(Resource::acquire(&self.ledger, Kind::RenderTarget, "rtv"))
    }

    fn show_window(&mut self, _window: &Resource, show: ShowCommand) {
        self.push(Event::Show(show));
    }

    fn pump_messages(&mut self) -> Pump {
        self.push(Event::Pump);
        self.pumps.pop_front().unwrap_or(Pump::Quit)
    }

    fn bind_and_clear(&mut self, _context: &Resource, _target: &Resource, color: [f32; 4]) {
        self.push(Event::Clear(color));
    }

    fn present(&mut self, _swap_chain: &Resource, sync_interval: u32) -> PlatformResult<()> {
        self.presents += 1;
        self.push(Event::Present(sync_interval));
        if self.fail_present == Some(self.presents) {
            return Err("device removed".into());
        }
        Ok(())
    }

    fn notify_error(&mut self, _caption: &str, message: &str) {
        self.push(Event::Notify(message.to_string()));
    }
}

/// A GUI double. Renderers add widgets through [`FakeGui::widgets`].
pub struct FakeGui {
    pub ledger: SharedLedger,
    pub fail_init: bool,
    widgets: Rc<Cell<usize>>,
}

impl FakeGui {
    pub fn new(ledger: &SharedLedger) -> Self {
        Self {
            ledger: Rc::clone(ledger),
            fail_init: false,
            widgets: Rc::new(Cell::new(0)),
        }
    }

    /// Handle a renderer uses to declare widgets for the current frame.
    pub fn widgets(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.widgets)
    }

    fn push(&self, event: Event) {
        self.ledger.borrow_mut().push(event);
    }
}

impl Gui<FakePlatform> for FakeGui {
    type DrawData = usize;

    fn init(&mut self, _surface: &Surface<FakePlatform>) -> PlatformResult<()> {
        if self.fail_init {
            return Err("font atlas upload failed".into());
        }
        self.push(Event::GuiInit);
        Ok(())
    }

    fn begin_frame(&mut self, _surface: &Surface<FakePlatform>) {
        self.widgets.set(0);
        self.push(Event::BeginFrame);
    }

    fn end_frame(&mut self) -> usize {
        self.push(Event::EndFrame);
        self.widgets.replace(0)
    }

    fn submit(&mut self, _surface: &Surface<FakePlatform>, draw_data: usize) {
        self.push(Event::Submit(draw_data));
        if draw_data > 0 {
            self.push(Event::Draw(draw_data));
        }
    }

    fn shutdown(&mut self) {
        self.push(Event::GuiShutdown);
    }
}

/// A renderer that records each call and counts frames.
pub fn counting_renderer(ledger: &SharedLedger, count: &Rc<Cell<u32>>) -> impl FnMut() + use<> {
    let ledger = Rc::clone(ledger);
    let count = Rc::clone(count);
    move || {
        count.set(count.get() + 1);
        ledger.borrow_mut().push(Event::Render);
    }
}
