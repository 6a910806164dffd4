use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn hound_err(err: hound::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{err}"))
}

pub fn write_to_txt(samples: &[f32], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    for &sample in samples {
        writeln!(file, "{:.6}", sample)?;
    }
    Ok(())
}

/// One 0/1 digit per line
pub fn write_bits_to_txt(bits: &[bool], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = io::BufWriter::new(File::create(path)?);
    for &bit in bits {
        writeln!(file, "{}", bit as u8)?;
    }
    file.flush()
}

pub fn read_from_txt(path: &Path) -> io::Result<Vec<f32>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    reader
        .lines()
        .map(|line| {
            let line = line?;
            line.trim()
                .parse::<f32>()
                .map_err(|err| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("{err}"))
                })
        })
        .collect()
}

pub fn write_to_wav(
    signal: &[f32],
    sample_rate: u32,
    filename: &Path,
) -> io::Result<()> {
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec).map_err(hound_err)?;
    let amplitude = i16::MAX as f32;
    for &sample in signal {
        writer
            .write_sample((sample.clamp(-1.0, 1.0) * amplitude) as i16)
            .map_err(hound_err)?;
    }
    writer
        .finalize()
        .map_err(hound_err)?;
    Ok(())
}

/// Read a mono recording; multi-channel files keep only the first channel.
pub fn read_wav(filename: &Path) -> io::Result<(Vec<f32>, u32)> {
    let reader = hound::WavReader::open(filename).map_err(hound_err)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|sample| sample.map_err(hound_err))
            .collect::<io::Result<_>>()?,
        hound::SampleFormat::Int => {
            let amplitude = (1i64
                << (spec
                    .bits_per_sample
                    .saturating_sub(1))) as f32;
            reader
                .into_samples::<i32>()
                .map(|sample| {
                    sample
                        .map(|value| value as f32 / amplitude)
                        .map_err(hound_err)
                })
                .collect::<io::Result<_>>()?
        }
    };

    Ok((
        samples
            .into_iter()
            .step_by(channels)
            .collect(),
        spec.sample_rate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("mlsgen-io-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_wav_round_trip() {
        let path = temp_path("round_trip.wav");
        let signal = vec![0.5f32, -0.5, 0.25, -1.0, 1.0];
        write_to_wav(&signal, 48000, &path).unwrap();

        let (read, sample_rate) = read_wav(&path).unwrap();
        assert_eq!(sample_rate, 48000);
        assert_eq!(read.len(), signal.len());
        for (a, b) in read.iter().zip(signal.iter()) {
            assert!((a - b).abs() < 1e-3);
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_txt_round_trip() {
        let path = temp_path("values.txt");
        let values = vec![0.125f32, -2.5, 0.0];
        write_to_txt(&values, &path).unwrap();
        assert_eq!(read_from_txt(&path).unwrap(), values);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bits_txt() {
        let path = temp_path("bits.txt");
        write_bits_to_txt(&[true, false, true], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1\n0\n1\n");
        let _ = std::fs::remove_file(&path);
    }
}
