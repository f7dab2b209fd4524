// demos/basic_usage.rs
//! Basic usage of the matrix buffers: build a model transform, inspect it,
//! and show the failure paths. Run with `RUST_LOG=warn` to see the log
//! lines the rejections emit.

use columna::{DenseMatrix, ElementKind, Matrix4, Matrix4Buffer};

fn main() {
    env_logger::init();

    // A 4x4 model transform, translated to (5, -2, 0.5).
    let mut model: Matrix4<f32> = Matrix4::new();
    model.set_position(5.0, -2.0, 0.5);

    println!("model transform (row-major view):\n{}", *model);
    println!("flat column-major buffer: {:?}", model.as_slice());

    // Precision chosen at runtime from an element-kind tag.
    match Matrix4Buffer::with_kind(ElementKind::DOUBLE) {
        Ok(buffer) => println!("built a {} 4x4 buffer", buffer.element_kind()),
        Err(e) => println!("construction failed: {e}"),
    }
    if let Err(e) = Matrix4Buffer::with_kind(ElementKind::Int16) {
        println!("integer kinds are rejected: {e}");
    }

    // Rectangular buffers follow the same column-major contract.
    let mut m: DenseMatrix<f32> = DenseMatrix::new(3, 2);
    println!("fresh 3x2 buffer: {:?}", m.as_slice());

    if let Err(e) = m.fill_from_slice(&[1.0, 2.0, 3.0]) {
        println!("short fill is rejected: {e}");
    }
}
