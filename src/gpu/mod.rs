//! The wgpu render sink.
//!
//! Accepts, per frame: the point list (drawn as uniformly colored round
//! dots), the edge list (drawn as per-segment-colored lines), and a clear
//! color. Everything is drawn in viewport pixel coordinates with a
//! bottom-left origin; an orthographic projection uniform maps pixels to
//! clip space, so the shaders never need to know the surface size.

mod dots;
mod lines;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::color::Rgba;
use crate::config::Config;
use crate::error::GpuError;
use crate::viewport::Viewport;

use dots::DotPipeline;
use lines::LinePipeline;

pub use dots::DOT_SHADER;
pub use lines::{LineInstance, LINE_SHADER};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

fn ortho(viewport: Viewport) -> Mat4 {
    Mat4::orthographic_rh(0.0, viewport.width, 0.0, viewport.height, -1.0, 1.0)
}

/// GPU resources for one window surface.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    uniform_buffer: wgpu::Buffer,
    dots: DotPipeline,
    lines: LinePipeline,
    background: Rgba,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let uniforms = Uniforms {
            view_proj: ortho(Viewport::new(
                surface_config.width as f32,
                surface_config.height as f32,
            ))
            .to_cols_array_2d(),
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let dots = DotPipeline::new(
            &device,
            &uniform_buffer,
            surface_format,
            config.dot_color,
            config.dot_size,
            config.points as usize,
        );
        let lines = LinePipeline::new(&device, &uniform_buffer, surface_format, config.line_width);

        Ok(Self {
            surface,
            device,
            queue,
            config: surface_config,
            uniform_buffer,
            dots,
            lines,
            background: config.background,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw one frame: clear, dots, then lines on top, present.
    pub fn render(
        &mut self,
        viewport: Viewport,
        points: &[Vec2],
        lines: &[LineInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let uniforms = Uniforms {
            view_proj: ortho(viewport).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        self.dots.upload(&self.queue, points);
        self.lines.upload(&self.device, &self.queue, lines);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.dots.draw(&mut render_pass, points.len() as u32);
            self.lines.draw(&mut render_pass, lines.len() as u32);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
