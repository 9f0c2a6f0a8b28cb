use core::convert::Infallible;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::domain::ports::MatrixBus;

/// `smart-leds` view of a single matrix on the chain
///
/// Every `write` is one full frame: select the write buffer, stream the
/// pixels, flip. Pixels past the end of the matrix are still sent; the
/// board decides what to do with them.
pub struct MatrixWriter<'a, B: MatrixBus> {
    bus: &'a mut B,
    matrix: usize,
}

impl<'a, B: MatrixBus> MatrixWriter<'a, B> {
    pub fn new(bus: &'a mut B, matrix: usize) -> Self {
        Self { bus, matrix }
    }
}

impl<B: MatrixBus> SmartLedsWrite for MatrixWriter<'_, B> {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.bus.select_write_buffer(self.matrix);
        self.bus
            .write_pixels(self.matrix, iterator.into_iter().map(Into::into));
        self.bus.flip_buffers(self.matrix);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BusOp, RecordingBus};

    #[test]
    fn write_is_select_stream_flip() {
        let mut bus = RecordingBus::new(2);
        let mut writer = MatrixWriter::new(&mut bus, 1);
        writer
            .write([RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)])
            .unwrap();

        assert_eq!(bus.ops.len(), 3);
        assert_eq!(bus.ops[0], BusOp::Select(1));
        assert!(matches!(&bus.ops[1], BusOp::Block(1, bytes) if bytes.as_slice() == [1, 2, 3, 4, 5, 6]));
        assert_eq!(bus.ops[2], BusOp::Flip(1));
    }

    #[test]
    fn accepts_tuples_through_into() {
        let mut bus = RecordingBus::new(1);
        MatrixWriter::new(&mut bus, 0)
            .write([(255u8, 0u8, 0u8)])
            .unwrap();
        assert!(matches!(&bus.ops[1], BusOp::Block(0, bytes) if bytes.as_slice() == [255, 0, 0]));
    }
}
