use chromaduino_color::{Pixel, pixel_bytes};

/// Bytes per pixel on the wire
pub const PIXEL_BYTES: usize = 3;

/// Largest data transaction the slave accepts (10 pixels)
pub const MAX_BLOCK_BYTES: usize = 30;

/// Number of bytes a block write of `requested` bytes actually sends
///
/// Partial pixels are dropped, anything past [`MAX_BLOCK_BYTES`] is cut,
/// and less than one whole pixel sends nothing.
pub const fn block_len(requested: usize) -> usize {
    let whole = requested / PIXEL_BYTES * PIXEL_BYTES;
    if whole < PIXEL_BYTES {
        0
    } else if whole > MAX_BLOCK_BYTES {
        MAX_BLOCK_BYTES
    } else {
        whole
    }
}

/// Command port for a chain of Colorduino matrices
///
/// Matrices are addressed by logical index. Every call is a complete
/// fire-and-forget transaction; only the balance query reports back.
/// Board state (which buffer is selected, what is displayed) lives on the
/// boards and is never tracked here.
pub trait MatrixBus {
    /// Number of matrices on the chain
    fn matrix_count(&self) -> usize;

    /// Direct following pixel data to the off-screen buffer
    fn select_write_buffer(&mut self, matrix: usize);

    /// Switch the board into its fast command mode
    fn select_fast_command(&mut self, matrix: usize);

    /// Send one pixel
    fn write_pixel(&mut self, matrix: usize, pixel: Pixel);

    /// Send raw pixel bytes in one transaction
    ///
    /// The length is trimmed with [`block_len`]. Returns the number of
    /// bytes sent.
    fn write_block(&mut self, matrix: usize, bytes: &[u8]) -> usize;

    /// Swap the write and display buffers, showing the new frame
    fn flip_buffers(&mut self, matrix: usize);

    /// Ask how many bytes the board holds, then tell it to take the
    /// pending triple as its color balance
    ///
    /// Returns `true` only if exactly one whole pixel was pending.
    fn query_and_reset_balance(&mut self, matrix: usize) -> bool;

    /// Stream any number of pixels as consecutive full blocks
    ///
    /// Returns the number of pixels sent.
    fn write_pixels<I>(&mut self, matrix: usize, pixels: I) -> usize
    where
        Self: Sized,
        I: IntoIterator<Item = Pixel>,
    {
        let mut block = [0u8; MAX_BLOCK_BYTES];
        let mut len = 0;
        let mut sent = 0;
        for pixel in pixels {
            block[len..len + PIXEL_BYTES].copy_from_slice(&pixel_bytes(pixel));
            len += PIXEL_BYTES;
            if len == MAX_BLOCK_BYTES {
                sent += self.write_block(matrix, &block);
                len = 0;
            }
        }
        if len > 0 {
            sent += self.write_block(matrix, &block[..len]);
        }
        sent / PIXEL_BYTES
    }
}
