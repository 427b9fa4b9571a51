use base64::{engine::general_purpose, Engine as _};

/// Encode f32 samples as mono 16-bit PCM WAV (RIFF) and return Base64.
///
/// Samples nominally sit in [-1.0, 1.0]; out-of-range values are clamped
/// before the integer conversion so they can never wrap. An empty slice
/// produces a valid zero-frame container.
pub fn encode_wav_base64(samples: &[f32], sample_rate: u32) -> String {
    // Scale f32 [-1.0,1.0] to i16, rounding to the nearest integer
    let mut pcm_i16 = Vec::<i16>::with_capacity(samples.len());
    for &s in samples {
        let scaled = (s * i16::MAX as f32).round();
        pcm_i16.push(scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16);
    }

    // WAV header fields
    let num_channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate: u32 = sample_rate * num_channels as u32 * (bits_per_sample as u32 / 8);
    let block_align: u16 = num_channels * (bits_per_sample / 8);
    let data_size: u32 = (pcm_i16.len() * 2) as u32;
    let riff_size: u32 = 36 + data_size;

    let mut out = Vec::<u8>::with_capacity(44 + pcm_i16.len() * 2);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    for v in pcm_i16 {
        out.extend_from_slice(&v.to_le_bytes());
    }

    general_purpose::STANDARD.encode(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};
    use std::io::Cursor;

    fn decode_wav(encoded: &str) -> hound::WavReader<Cursor<Vec<u8>>> {
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
        hound::WavReader::new(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_samples() {
        let samples = vec![0.0f32, 0.5, -0.5, 1.0, -1.0];
        let encoded = encode_wav_base64(&samples, 22_050);

        let mut reader = decode_wav(&encoded);
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22_050);
        assert_eq!(spec.bits_per_sample, 16);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded.len(), samples.len());
        assert_eq!(decoded[0], 0);
        assert_eq!(decoded[1], 16384); // round(0.5 * 32767)
        assert_eq!(decoded[2], -16384);
        assert_eq!(decoded[3], i16::MAX);
        assert_eq!(decoded[4], -i16::MAX);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let encoded = encode_wav_base64(&[2.0f32, -3.0], 22_050);
        let mut reader = decode_wav(&encoded);
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, vec![i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_empty_input_yields_valid_zero_frame_container() {
        let encoded = encode_wav_base64(&[], 22_050);
        let reader = decode_wav(&encoded);
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.spec().sample_rate, 22_050);
    }

    #[test]
    fn test_no_line_wrapping_in_base64() {
        let samples = vec![0.25f32; 4096];
        let encoded = encode_wav_base64(&samples, 22_050);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }
}
