//! The frame orchestrator: window, event loop, and per-tick sequence.
//!
//! Each tick advances every moving point, rebuilds the proximity graph,
//! hands dots and edges to the render sink, and finally steps the signal
//! decay. The loop has exactly two states: running, and terminated by the
//! window's close request.

use std::sync::Arc;

use glam::Vec2;
use tracing::{debug, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

#[cfg(feature = "audio")]
use crate::audio::AudioCapture;
use crate::config::Config;
use crate::error::RunError;
use crate::gpu::{GpuState, LineInstance};
use crate::graph::{EdgeTarget, ProximityGraph};
use crate::motion::{scatter, MovingPoint};
use crate::point::PointStore;
use crate::signal::SignalLevel;
use crate::time::FrameClock;
use crate::viewport::Viewport;

/// Owns a configured run. Construct with a validated [`Config`], then call
/// [`run`](Simulation::run).
pub struct Simulation {
    config: Config,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until the window is closed. Blocks the calling thread.
    ///
    /// Any failure while bringing up the window or the GPU aborts startup;
    /// a missing audio source only logs a warning and disables modulation.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct App {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    viewport: Viewport,
    store: PointStore,
    movers: Vec<MovingPoint>,
    graph: ProximityGraph,
    /// Last known cursor position in window coordinates, if any.
    cursor: Option<Vec2>,
    signal: Option<SignalLevel>,
    #[cfg(feature = "audio")]
    _audio: Option<AudioCapture>,
    clock: FrameClock,
    line_scratch: Vec<LineInstance>,
    fatal: Option<RunError>,
}

impl App {
    fn new(config: Config) -> Self {
        let viewport = Viewport::new(config.width as f32, config.height as f32);

        let mut rng = rand::thread_rng();
        let (store, movers) = scatter(
            &mut rng,
            config.points as usize,
            viewport,
            config.min_speed,
            config.max_speed,
        );
        let graph = ProximityGraph::new(config.link_radius, config.fade, config.mouse_link);

        info!(
            "{} points, link radius {} px, fade {}, mouse link {}",
            config.points, config.link_radius, config.fade, config.mouse_link
        );

        #[cfg(feature = "audio")]
        let (signal, audio) = start_audio(&config);
        #[cfg(not(feature = "audio"))]
        let signal = {
            if config.audio {
                warn!("built without the audio feature; --audio has no effect");
            }
            None
        };

        Self {
            config,
            window: None,
            gpu: None,
            viewport,
            store,
            movers,
            graph,
            cursor: None,
            signal,
            #[cfg(feature = "audio")]
            _audio: audio,
            clock: FrameClock::new(),
            line_scratch: Vec::new(),
            fatal: None,
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        for mover in &mut self.movers {
            mover.update(&mut self.store, self.viewport);
        }

        // Sample before building edges; decay afterwards, once per tick.
        let modulation = self
            .signal
            .as_ref()
            .map(|signal| signal.modulation())
            .unwrap_or(1.0);

        let edges = self
            .graph
            .rebuild(&self.store, self.viewport, self.cursor, modulation);

        self.line_scratch.clear();
        let cursor_scene = self.cursor.map(|c| self.viewport.cursor_to_scene(c));
        let line_color = self.config.line_color;
        for edge in edges {
            let a = self.store.get(edge.a);
            let b = match edge.b {
                EdgeTarget::Point(j) => self.store.get(j),
                EdgeTarget::Cursor => match cursor_scene {
                    Some(c) => c,
                    None => continue,
                },
            };
            self.line_scratch.push(LineInstance {
                a: a.to_array(),
                b: b.to_array(),
                color: line_color.with_alpha(line_color.a * edge.weight).to_array(),
            });
        }

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(self.viewport, self.store.positions(), &self.line_scratch) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    let size = winit::dpi::PhysicalSize {
                        width: gpu.config.width,
                        height: gpu.config.height,
                    };
                    gpu.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    warn!("surface out of memory, shutting down");
                    event_loop.exit();
                }
                Err(e) => warn!("render error: {:?}", e),
            }
        }

        if let Some(signal) = &self.signal {
            signal.decay();
        }

        let (_, fps) = self.clock.tick();
        if let Some(fps) = fps {
            debug!("fps {:.1}, {} edges", fps, self.line_scratch.len());
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attrs = Window::default_attributes()
            .with_title("plexus")
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_transparent(self.config.transparent)
            .with_decorations(self.config.decorations);
        if self.config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fatal = Some(RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.config)) {
            Ok(gpu) => {
                self.viewport = Viewport::from_physical(window.inner_size());
                self.gpu = Some(gpu);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.fatal = Some(RunError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.viewport = Viewport::from_physical(physical_size);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }
            _ => {}
        }
    }
}

#[cfg(feature = "audio")]
fn start_audio(config: &Config) -> (Option<SignalLevel>, Option<AudioCapture>) {
    if !config.audio {
        return (None, None);
    }
    let signal = SignalLevel::new();
    match AudioCapture::start(signal.clone()) {
        Ok(capture) => (Some(signal), Some(capture)),
        Err(e) => {
            warn!("audio capture unavailable, running without modulation: {}", e);
            (None, None)
        }
    }
}
