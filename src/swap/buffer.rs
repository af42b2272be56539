// src/swap/buffer.rs
use bytemuck::Pod;

use crate::error::{Result, SwabError};
use crate::width::ElementWidth;

/// Reverse the byte order of a single element at the start of `buf`.
///
/// Exactly `width` bytes are touched; anything past them is left alone.
///
/// # Example
///
/// ```
/// use swab_rs::{swap_in_place, ElementWidth};
///
/// let mut buf = [0x01, 0x02, 0x03, 0x04];
/// swap_in_place(&mut buf, ElementWidth::W32).unwrap();
/// assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn swap_in_place(buf: &mut [u8], width: ElementWidth) -> Result<()> {
    let w = width.in_bytes();
    if buf.len() < w {
        return Err(SwabError::BufferTooSmall {
            needed: w,
            len: buf.len(),
        });
    }
    buf[..w].reverse();
    Ok(())
}

/// Copy a single element from `src` into `dst`, reversing its byte order.
///
/// `src` is never written to. The borrow rules already rule out overlap
/// between `dst` and `src`, so no runtime aliasing check is needed.
///
/// # Example
///
/// ```
/// use swab_rs::{swap_copy, ElementWidth};
///
/// let src = [0x01, 0x02];
/// let mut dst = [0u8; 2];
/// swap_copy(&mut dst, &src, ElementWidth::W16).unwrap();
/// assert_eq!(dst, [0x02, 0x01]);
/// assert_eq!(src, [0x01, 0x02]);
/// ```
pub fn swap_copy(dst: &mut [u8], src: &[u8], width: ElementWidth) -> Result<()> {
    let w = width.in_bytes();
    if src.len() < w {
        return Err(SwabError::BufferTooSmall {
            needed: w,
            len: src.len(),
        });
    }
    if dst.len() < w {
        return Err(SwabError::DestinationTooSmall {
            needed: w,
            len: dst.len(),
        });
    }
    for i in 0..w {
        dst[i] = src[w - 1 - i];
    }
    Ok(())
}

/// Element-wise byte-order reversal of `src` into `dst`.
///
/// Every whole `width`-byte element of `src` is written to the same
/// position in `dst` with its bytes reversed; elements are never merged
/// across boundaries. Trailing bytes that do not form a complete element
/// are copied through unmodified. Returns the number of bytes that were
/// swapped (always a multiple of the width).
///
/// # Example
///
/// ```
/// use swab_rs::{swap_buffer, ElementWidth};
///
/// let src = [0x01, 0x02, 0x03, 0x04];
/// let mut dst = [0u8; 4];
/// let swapped = swap_buffer(&mut dst, &src, ElementWidth::W16).unwrap();
/// assert_eq!(swapped, 4);
/// assert_eq!(dst, [0x02, 0x01, 0x04, 0x03]);
/// ```
pub fn swap_buffer(dst: &mut [u8], src: &[u8], width: ElementWidth) -> Result<usize> {
    match width {
        ElementWidth::W16 => swap_buffer_fixed::<2>(dst, src),
        ElementWidth::W32 => swap_buffer_fixed::<4>(dst, src),
        ElementWidth::W64 => swap_buffer_fixed::<8>(dst, src),
    }
}

/// [`swap_buffer`] specialized to 16-bit elements.
pub fn swap_buffer16(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    swap_buffer_fixed::<2>(dst, src)
}

/// [`swap_buffer`] specialized to 32-bit elements.
pub fn swap_buffer32(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    swap_buffer_fixed::<4>(dst, src)
}

/// [`swap_buffer`] specialized to 64-bit elements.
pub fn swap_buffer64(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    swap_buffer_fixed::<8>(dst, src)
}

/// Monomorphized swap loop shared by the runtime-width and fixed-width
/// entry points. With `W` known at compile time the inner loop unrolls to
/// straight-line byte moves.
fn swap_buffer_fixed<const W: usize>(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    if dst.len() < src.len() {
        return Err(SwabError::DestinationTooSmall {
            needed: src.len(),
            len: dst.len(),
        });
    }

    let swapped = src.len() - src.len() % W;
    let elements = dst[..swapped]
        .chunks_exact_mut(W)
        .zip(src[..swapped].chunks_exact(W));
    for (d, s) in elements {
        for i in 0..W {
            d[i] = s[W - 1 - i];
        }
    }

    // Trailing partial element passes through untouched.
    dst[swapped..src.len()].copy_from_slice(&src[swapped..]);
    Ok(swapped)
}

/// Reverse the byte order of every whole element of `buf` in place.
///
/// Trailing bytes that do not form a complete element are left unmodified.
/// Returns the number of bytes swapped.
///
/// # Example
///
/// ```
/// use swab_rs::{swap_buffer_in_place, ElementWidth};
///
/// let mut buf = [0x01, 0x02, 0x03, 0x04, 0x05];
/// let swapped = swap_buffer_in_place(&mut buf, ElementWidth::W16);
/// assert_eq!(swapped, 4);
/// assert_eq!(buf, [0x02, 0x01, 0x04, 0x03, 0x05]);
/// ```
pub fn swap_buffer_in_place(buf: &mut [u8], width: ElementWidth) -> usize {
    let w = width.in_bytes();
    let mut swapped = 0;
    for chunk in buf.chunks_exact_mut(w) {
        chunk.reverse();
        swapped += w;
    }
    swapped
}

/// Reverse the byte order of every element of a typed slice in place.
///
/// `T` must be a 2-, 4-, or 8-byte plain-old-data type; other sizes are
/// rejected with [`SwabError::UnsupportedWidth`] before any byte moves.
///
/// # Example
///
/// ```
/// use swab_rs::swap_slice_in_place;
///
/// let mut data: [u32; 2] = [0x01020304, 0x05060708];
/// swap_slice_in_place(&mut data).unwrap();
/// assert_eq!(data, [0x04030201, 0x08070605]);
/// ```
pub fn swap_slice_in_place<T: Pod>(data: &mut [T]) -> Result<()> {
    let width = ElementWidth::of::<T>()?;
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    swap_buffer_in_place(bytes, width);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_in_place_widths() {
        let mut buf = [0x01, 0x02];
        swap_in_place(&mut buf, ElementWidth::W16).unwrap();
        assert_eq!(buf, [0x02, 0x01]);

        let mut buf = [0x01, 0x02, 0x03, 0x04];
        swap_in_place(&mut buf, ElementWidth::W32).unwrap();
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);

        let mut buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        swap_in_place(&mut buf, ElementWidth::W64).unwrap();
        assert_eq!(buf, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_swap_in_place_only_touches_element() {
        let mut buf = [0x01, 0x02, 0xAA, 0xBB];
        swap_in_place(&mut buf, ElementWidth::W16).unwrap();
        assert_eq!(buf, [0x02, 0x01, 0xAA, 0xBB]);
    }

    #[test]
    fn test_swap_in_place_short_buffer() {
        let mut buf = [0x01, 0x02, 0x03];
        let result = swap_in_place(&mut buf, ElementWidth::W32);
        assert_eq!(
            result,
            Err(SwabError::BufferTooSmall { needed: 4, len: 3 })
        );
        // Failed call must not have written anything.
        assert_eq!(buf, [0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_swap_copy_leaves_source_untouched() {
        let src = [0x01, 0x02, 0x03, 0x04];
        let mut dst = [0u8; 4];
        swap_copy(&mut dst, &src, ElementWidth::W32).unwrap();
        assert_eq!(dst, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(src, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_swap_copy_short_destination() {
        let src = [0x01, 0x02, 0x03, 0x04];
        let mut dst = [0u8; 2];
        let result = swap_copy(&mut dst, &src, ElementWidth::W32);
        assert_eq!(
            result,
            Err(SwabError::DestinationTooSmall { needed: 4, len: 2 })
        );
    }

    #[test]
    fn test_swap_buffer_elements_stay_independent() {
        let src = [0x01, 0x02, 0x03, 0x04];
        let mut dst = [0u8; 4];
        swap_buffer(&mut dst, &src, ElementWidth::W16).unwrap();
        assert_eq!(dst, [0x02, 0x01, 0x04, 0x03]);
    }

    #[test]
    fn test_swap_buffer_trailing_remainder_copied_unmodified() {
        let src = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut dst = [0u8; 7];
        let swapped = swap_buffer(&mut dst, &src, ElementWidth::W32).unwrap();
        assert_eq!(swapped, 4);
        assert_eq!(dst, [0x04, 0x03, 0x02, 0x01, 0x05, 0x06, 0x07]);
    }

    #[test]
    fn test_swap_buffer_empty() {
        let src: [u8; 0] = [];
        let mut dst: [u8; 0] = [];
        assert_eq!(swap_buffer(&mut dst, &src, ElementWidth::W64).unwrap(), 0);
    }

    #[test]
    fn test_swap_buffer_destination_too_small() {
        let src = [0u8; 8];
        let mut dst = [0u8; 4];
        let result = swap_buffer(&mut dst, &src, ElementWidth::W16);
        assert_eq!(
            result,
            Err(SwabError::DestinationTooSmall { needed: 8, len: 4 })
        );
    }

    #[test]
    fn test_fixed_width_forms_match_generic() {
        let src: Vec<u8> = (1..=32).collect();
        for (width, fixed) in [
            (
                ElementWidth::W16,
                swap_buffer16 as fn(&mut [u8], &[u8]) -> Result<usize>,
            ),
            (ElementWidth::W32, swap_buffer32),
            (ElementWidth::W64, swap_buffer64),
        ] {
            let mut generic = vec![0u8; src.len()];
            let mut specialized = vec![0u8; src.len()];
            swap_buffer(&mut generic, &src, width).unwrap();
            fixed(&mut specialized, &src).unwrap();
            assert_eq!(generic, specialized, "width {:?}", width);
        }
    }

    #[test]
    fn test_double_swap_restores_buffer() {
        let original: Vec<u8> = (0..64).map(|i| i as u8 ^ 0x5A).collect();
        for width in ElementWidth::ALL {
            let mut once = vec![0u8; original.len()];
            let mut twice = vec![0u8; original.len()];
            swap_buffer(&mut once, &original, width).unwrap();
            swap_buffer(&mut twice, &once, width).unwrap();
            assert_eq!(twice, original, "width {:?}", width);
        }
    }

    #[test]
    fn test_swap_buffer_in_place_matches_copying_form() {
        let src: Vec<u8> = (0..24).map(|i| i as u8).collect();
        for width in ElementWidth::ALL {
            let mut copied = vec![0u8; src.len()];
            swap_buffer(&mut copied, &src, width).unwrap();

            let mut in_place = src.clone();
            let swapped = swap_buffer_in_place(&mut in_place, width);
            assert_eq!(swapped, src.len() - src.len() % width.in_bytes());
            assert_eq!(in_place, copied, "width {:?}", width);
        }
    }

    #[test]
    fn test_swap_slice_in_place_typed() {
        let mut values: [u16; 3] = [0x0102, 0x0304, 0x0506];
        swap_slice_in_place(&mut values).unwrap();
        assert_eq!(values, [0x0201, 0x0403, 0x0605]);

        let mut values: [u64; 1] = [0x0102030405060708];
        swap_slice_in_place(&mut values).unwrap();
        assert_eq!(values, [0x0807060504030201]);
    }

    #[test]
    fn test_swap_slice_in_place_rejects_unsupported_sizes() {
        let mut bytes: [u8; 4] = [1, 2, 3, 4];
        assert_eq!(
            swap_slice_in_place(&mut bytes),
            Err(SwabError::UnsupportedWidth(1))
        );
        assert_eq!(bytes, [1, 2, 3, 4]);
    }
}
