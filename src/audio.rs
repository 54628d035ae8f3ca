//! Audio capture feeding the signal level.
//!
//! Opens the default input device in peak-detect fashion: each buffer is
//! reduced to a single intensity (per-channel max amplitude, averaged over
//! the channels that carried any signal) and published through
//! [`SignalLevel::raise`]. The capture callback runs on the audio host's
//! thread; the frame loop never waits on it.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample};
use tracing::{info, warn};

use crate::error::AudioError;
use crate::signal::SignalLevel;

const MAX_CHANNELS: usize = 32;

/// A running capture stream. Dropping it stops capture; the signal level
/// then simply decays to zero.
pub struct AudioCapture {
    _stream: cpal::Stream,
}

impl AudioCapture {
    /// Open the default input device and start publishing peaks into
    /// `signal`.
    pub fn start(signal: SignalLevel) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_input_device().ok_or(AudioError::NoDevice)?;
        let supported = device
            .default_input_config()
            .map_err(AudioError::NoConfig)?;

        info!(
            "capturing audio from {:?} ({} ch, {} Hz, {:?})",
            device.name().unwrap_or_else(|_| "<unknown>".into()),
            supported.channels(),
            supported.sample_rate().0,
            supported.sample_format(),
        );

        let config: cpal::StreamConfig = supported.config();
        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, signal)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, signal)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, signal)?,
            other => return Err(AudioError::UnsupportedFormat(other)),
        };
        stream.play().map_err(AudioError::Play)?;

        Ok(Self { _stream: stream })
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    signal: SignalLevel,
) -> Result<cpal::Stream, AudioError>
where
    T: cpal::SizedSample,
    f32: FromSample<T>,
{
    let channels = (config.channels as usize).clamp(1, MAX_CHANNELS);
    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                signal.raise(peak_level(data, channels));
            },
            |err| warn!("audio input stream error: {}", err),
            None,
        )
        .map_err(AudioError::Build)
}

/// Per-channel max amplitude over a buffer, averaged over the channels that
/// carried any signal at all. A fully silent buffer yields 0.
fn peak_level<T>(samples: &[T], channels: usize) -> f32
where
    T: cpal::SizedSample,
    f32: FromSample<T>,
{
    let mut peaks = [0.0f32; MAX_CHANNELS];

    for frame in samples.chunks_exact(channels) {
        for (peak, &sample) in peaks.iter_mut().zip(frame) {
            let v = f32::from_sample(sample).abs();
            if v > *peak {
                *peak = v;
            }
        }
    }

    let mut sum = 0.0;
    let mut live = 0u32;
    for &peak in &peaks[..channels] {
        if peak != 0.0 {
            sum += peak;
            live += 1;
        }
    }

    if live == 0 {
        0.0
    } else {
        sum / live as f32
    }
}
