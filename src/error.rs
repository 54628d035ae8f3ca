//! Error types for plexus.
//!
//! Configuration and color errors are reported before the simulation is
//! constructed; GPU and event-loop errors abort startup. An audio failure is
//! the one non-fatal case: the visualization runs on without modulation.

use std::fmt;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not 6 or 8 hex digits long.
    BadLength(usize),
    /// The string contains a non-hexadecimal character.
    BadDigit(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::BadLength(n) => {
                write!(f, "expected 6 or 8 hex digits, got {}", n)
            }
            ColorError::BadDigit(s) => write!(f, "invalid hex color {:?}", s),
        }
    }
}

impl std::error::Error for ColorError {}

/// Errors from validating the run configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_speed`/`max_speed` do not form a non-negative range.
    SpeedRange { min: f32, max: f32 },
    /// The link radius must be positive.
    LinkRadius(f32),
    /// The initial window size must be non-zero in both dimensions.
    WindowSize { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpeedRange { min, max } => {
                write!(f, "invalid speed range [{}, {}]", min, max)
            }
            ConfigError::LinkRadius(r) => {
                write!(f, "link radius must be positive, got {}", r)
            }
            ConfigError::WindowSize { width, height } => {
                write!(f, "window size {}x{} has a zero dimension", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "failed to create GPU surface: {}", e),
            GpuError::NoAdapter(e) => write!(f, "no compatible GPU adapter found: {}", e),
            GpuError::DeviceCreation(e) => write!(f, "failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::NoAdapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the visualization.
#[derive(Debug)]
pub enum RunError {
    /// Failed to create or drive the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::EventLoop(e) => write!(f, "event loop error: {}", e),
            RunError::Window(e) => write!(f, "failed to create window: {}", e),
            RunError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::EventLoop(e) => Some(e),
            RunError::Window(e) => Some(e),
            RunError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for RunError {
    fn from(e: winit::error::EventLoopError) -> Self {
        RunError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for RunError {
    fn from(e: winit::error::OsError) -> Self {
        RunError::Window(e)
    }
}

impl From<GpuError> for RunError {
    fn from(e: GpuError) -> Self {
        RunError::Gpu(e)
    }
}

/// Errors from setting up audio capture.
#[cfg(feature = "audio")]
#[derive(Debug)]
pub enum AudioError {
    /// No default input device available.
    NoDevice,
    /// Failed to query the device's default stream config.
    NoConfig(cpal::DefaultStreamConfigError),
    /// The device's sample format is not supported.
    UnsupportedFormat(cpal::SampleFormat),
    /// Failed to build the input stream.
    Build(cpal::BuildStreamError),
    /// Failed to start the input stream.
    Play(cpal::PlayStreamError),
}

#[cfg(feature = "audio")]
impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoDevice => write!(f, "no default audio input device"),
            AudioError::NoConfig(e) => write!(f, "failed to query stream config: {}", e),
            AudioError::UnsupportedFormat(format) => {
                write!(f, "unsupported sample format {:?}", format)
            }
            AudioError::Build(e) => write!(f, "failed to build input stream: {}", e),
            AudioError::Play(e) => write!(f, "failed to start input stream: {}", e),
        }
    }
}

#[cfg(feature = "audio")]
impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::NoConfig(e) => Some(e),
            AudioError::Build(e) => Some(e),
            AudioError::Play(e) => Some(e),
            _ => None,
        }
    }
}
