/// Build a zero-padded copy of an interleaved image buffer
///
/// The returned buffer holds `(width + 2 * padding) * (height + 2 * padding)`
/// pixels of `channels` samples each. The source rows are copied into the
/// interior at offset `(padding, padding)`; every border sample is zero.
/// The caller treats the result as read-only once built, so it can be
/// shared freely across parallel accumulation workers.
///
/// # Arguments
/// * `src` - Interleaved row-major samples, `width * height * channels` long
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Samples per pixel
/// * `padding` - Border width in pixels on each side
///
/// # Returns
/// The padded buffer, freshly allocated
///
/// # Panics
/// Panics if `src` does not hold exactly `width * height * channels`
/// samples.
pub fn zero_pad(
    src: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    padding: usize,
) -> Vec<u8> {
    assert_eq!(
        src.len(),
        width * height * channels,
        "Image buffer of {} samples does not match {}x{}x{}",
        src.len(),
        width,
        height,
        channels
    );

    let padded_width = width + 2 * padding;
    let padded_height = height + 2 * padding;
    let mut padded = vec![0u8; padded_width * padded_height * channels];

    let row_len = width * channels;
    for i in 0..height {
        let src_start = i * row_len;
        let dst_start = ((i + padding) * padded_width + padding) * channels;
        padded[dst_start..dst_start + row_len]
            .copy_from_slice(&src[src_start..src_start + row_len]);
    }

    padded
}
