// Audio ingestion module
// Reads WAV files and reduces every frame to its first channel

use hound::{SampleFormat, WavReader};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Audio file contains no samples")]
    EmptyInput,

    #[error("Failed to open audio file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read WAV file: {0}")]
    WavReadError(#[from] hound::Error),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone)]
pub struct AudioData {
    /// First-channel samples normalized to f32, one per frame
    pub samples: Vec<f32>,

    /// Sample rate in Hz (e.g., 44100, 48000)
    pub sample_rate: u32,

    /// Channel count of the source file (only channel 0 is kept)
    pub channels: u16,

    /// Bit depth of original audio (8, 16, 24, 32)
    pub bit_depth: u16,

    /// Duration in milliseconds
    pub duration_ms: i64,

    /// Total number of frames read
    pub frame_count: usize,
}

/// Load a WAV file from disk
/// The file handle is owned by the reader and closed when this returns
pub fn load_wav(path: &Path) -> Result<AudioData, AudioError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AudioError::FileNotFound(path.to_path_buf()),
        _ => AudioError::Io(e),
    })?;

    let reader = WavReader::new(BufReader::new(file))?;
    let audio = decode(reader)?;

    log::info!(
        "Audio file loaded: {} samples ({} Hz, {} channels, {}-bit, {} ms)",
        audio.samples.len(),
        audio.sample_rate,
        audio.channels,
        audio.bit_depth,
        audio.duration_ms
    );

    Ok(audio)
}

fn decode<R: Read>(mut reader: WavReader<R>) -> Result<AudioData, AudioError> {
    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels;
    let bit_depth = spec.bits_per_sample;

    if channels == 0 {
        return Err(AudioError::UnsupportedFormat("zero channels".to_string()));
    }

    // Interleaved samples normalized to f32 [-1.0, 1.0)
    let interleaved: Vec<f32> = match (spec.sample_format, bit_depth) {
        (SampleFormat::Int, 8 | 16 | 24 | 32) => {
            // hound yields signed values for every integer width, 8-bit included
            let full_scale = (1u64 << (bit_depth - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / full_scale))
                .collect::<Result<Vec<_>, _>>()?
        }
        (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        (format, bits) => {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?} {}-bit audio",
                format, bits
            )));
        }
    };

    // Mono reduction: keep channel 0 of every frame
    let samples: Vec<f32> = interleaved
        .into_iter()
        .step_by(channels as usize)
        .collect();

    if samples.is_empty() {
        return Err(AudioError::EmptyInput);
    }

    let frame_count = samples.len();
    let duration_ms = if sample_rate > 0 {
        (frame_count as f64 * 1000.0 / sample_rate as f64) as i64
    } else {
        0
    };

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        bit_depth,
        duration_ms,
        frame_count,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write a 32-bit float WAV with the given interleaved samples
    pub(crate) fn write_float_wav(samples: &[f32], channels: u16) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let spec = WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        file
    }

    fn write_int_wav(samples: &[i32], bits_per_sample: u16, sample_rate: u32) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        for &s in samples {
            match bits_per_sample {
                8 => writer.write_sample(s as i8).unwrap(),
                16 => writer.write_sample(s as i16).unwrap(),
                _ => writer.write_sample(s).unwrap(),
            }
        }
        writer.finalize().unwrap();
        file
    }

    fn assert_samples(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_load_mono_float_file() {
        let values: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let file = write_float_wav(&values, 1);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.samples, values);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.frame_count, 10);
        assert_eq!(audio.sample_rate, 8000);
    }

    #[test]
    fn test_stereo_keeps_first_channel() {
        // Interleaved [L, R, L, R, L, R]
        let file = write_float_wav(&[0.1, 0.9, 0.2, 0.8, 0.3, 0.7], 2);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.channels, 2);
        assert_eq!(audio.samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let result = load_wav(Path::new("/nonexistent/voice.wav"));
        assert!(matches!(result, Err(AudioError::FileNotFound(_))));
    }

    #[test]
    fn test_zero_frames_is_empty_input() {
        let file = write_float_wav(&[], 1);
        let result = load_wav(file.path());
        assert!(matches!(result, Err(AudioError::EmptyInput)));
    }

    #[test]
    fn test_16_bit_pcm_is_normalized() {
        let file = write_int_wav(&[0, 16384, -32768], 16, 44100);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.bit_depth, 16);
        assert_samples(&audio.samples, &[0.0, 0.5, -1.0]);
    }

    #[test]
    fn test_8_bit_pcm_is_centered() {
        // Stored unsigned on disk; must come back centered on zero, not shifted by 128
        let file = write_int_wav(&[-128, 0, 64, 127], 8, 8000);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.bit_depth, 8);
        assert_samples(&audio.samples, &[-1.0, 0.0, 0.5, 0.9921875]);
    }

    #[test]
    fn test_24_bit_pcm_is_normalized() {
        let file = write_int_wav(&[-8388608, 0, 4194304], 24, 48000);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.bit_depth, 24);
        assert_samples(&audio.samples, &[-1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_garbage_file_is_wav_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a wav file").unwrap();

        let result = load_wav(file.path());

        assert!(matches!(result, Err(AudioError::WavReadError(_))));
    }

    #[test]
    fn test_duration_from_frame_count() {
        let file = write_int_wav(&vec![0; 44100], 16, 44100);

        let audio = load_wav(file.path()).unwrap();

        assert_eq!(audio.frame_count, 44100);
        assert_eq!(audio.duration_ms, 1000);
    }
}
