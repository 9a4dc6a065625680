/// Scales every 8-bit sample in place by `factor`, clamping into `[0, 255]`.
///
/// Each sample is widened to `f32` before multiplying so the scaled value
/// cannot wrap around; the clamped result is truncated back to `u8`.
/// Channel order and spatial layout are untouched, so this works on any
/// interleaved or planar buffer.
pub fn scale_samples(samples: &mut [u8], factor: f32) {
    for sample in samples.iter_mut() {
        *sample = (f32::from(*sample) * factor).clamp(0.0, 255.0) as u8;
    }
}
