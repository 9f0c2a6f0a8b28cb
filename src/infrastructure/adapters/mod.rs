mod matrix_writer;

pub use matrix_writer::MatrixWriter;
