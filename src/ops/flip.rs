/// Mirrors an interleaved image buffer left-to-right, in place.
///
/// `samples` holds `height` rows of `width` pixels, each pixel `channels`
/// consecutive samples. Rows are reflected around their vertical centerline
/// by swapping whole pixels; the middle pixel of an odd-width row stays put.
/// Applying the flip twice restores the original buffer exactly.
///
/// # Panics
///
/// Panics if `width * channels` does not evenly divide the buffer length.
pub fn flip_horizontal(samples: &mut [u8], width: usize, channels: usize) {
    let row_stride = width * channels;
    if row_stride == 0 {
        return;
    }
    assert_eq!(
        samples.len() % row_stride,
        0,
        "width and channels do not evenly divide the buffer"
    );

    // Split each row at a pixel boundary so odd widths leave the center alone.
    let half = (width / 2) * channels;
    for row in samples.chunks_exact_mut(row_stride) {
        let (left, right) = row.split_at_mut(half);
        for (l, r) in left
            .chunks_exact_mut(channels)
            .zip(right.rchunks_exact_mut(channels))
        {
            l.swap_with_slice(r);
        }
    }
}
