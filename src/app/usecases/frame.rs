use chromaduino_color::{ColorConverter, Hsv, Pixel};

use crate::{
    config::{MATRIX_PIXELS, MATRIX_WIDTH},
    domain::ports::MatrixBus,
};

/// Where a shaded pixel lands on the chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPosition {
    /// Logical matrix index
    pub matrix: usize,
    pub x: usize,
    pub y: usize,
}

impl PixelPosition {
    /// Row-major position of pixel `index` within `matrix`
    pub const fn from_index(matrix: usize, index: usize) -> Self {
        Self {
            matrix,
            x: index % MATRIX_WIDTH,
            y: index / MATRIX_WIDTH,
        }
    }
}

/// Frame level operations on a matrix chain
pub struct FrameUsecases<B: MatrixBus> {
    bus: B,
    converter: ColorConverter,
}

impl<B: MatrixBus> FrameUsecases<B> {
    pub fn new(bus: B, converter: ColorConverter) -> Self {
        Self { bus, converter }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Show a single color on one matrix
    pub fn fill(&mut self, matrix: usize, pixel: Pixel) {
        self.bus.select_write_buffer(matrix);
        self.bus
            .write_pixels(matrix, core::iter::repeat_n(pixel, MATRIX_PIXELS));
        self.bus.flip_buffers(matrix);
    }

    pub fn fill_hsv(&mut self, matrix: usize, color: Hsv) {
        let pixel = self.converter.convert(color);
        self.fill(matrix, pixel);
    }

    /// Render one frame across the whole chain
    ///
    /// All matrices are written first and flipped afterwards, one by one,
    /// so the window where boards show different frames stays short. It
    /// does not close: each flip is its own transaction.
    pub fn paint_chain<F>(&mut self, mut shader: F)
    where
        F: FnMut(PixelPosition) -> Hsv,
    {
        let converter = self.converter;
        for matrix in 0..self.bus.matrix_count() {
            self.bus.select_write_buffer(matrix);
            let pixels = (0..MATRIX_PIXELS)
                .map(|index| converter.convert(shader(PixelPosition::from_index(matrix, index))));
            self.bus.write_pixels(matrix, pixels);
        }
        for matrix in 0..self.bus.matrix_count() {
            self.bus.flip_buffers(matrix);
        }
    }

    /// Load a white balance triple into one matrix
    ///
    /// Returns whether the board had exactly the triple pending when the
    /// balance command arrived.
    pub fn set_balance(&mut self, matrix: usize, balance: Pixel) -> bool {
        self.bus.write_pixel(matrix, balance);
        let applied = self.bus.query_and_reset_balance(matrix);
        #[cfg(feature = "log")]
        if !applied {
            log::warn!("frame: balance not applied on matrix {}", matrix);
        }
        applied
    }
}
