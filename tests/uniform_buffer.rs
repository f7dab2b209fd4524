// tests/uniform_buffer.rs
//! Integration tests exercising the buffers the way a uniform-uploading
//! consumer would: through the public API, ending at a flat column-major
//! slice of the declared precision and exact expected length.

use columna::{DenseMatrix, ElementKind, Matrix4, Matrix4Buffer, MatrixError};

/// Stand-in for a `uniformMatrix4fv`-style upload: the only contract the
/// graphics side has with this crate.
fn upload_mat4(data: &[f32]) -> usize {
    assert_eq!(data.len(), 16);
    data.len()
}

#[test]
fn test_model_transform_reaches_upload_intact() {
    let mut model: Matrix4<f32> = Matrix4::new();
    model.set_position(5.0, -2.0, 0.5);

    assert_eq!(upload_mat4(model.as_slice()), 16);

    // translation occupies the last four flat slots, identity elsewhere
    assert_eq!(&model.as_slice()[12..], &[5.0, -2.0, 0.5, 1.0]);
    assert_eq!(model.as_slice()[0], 1.0);
    assert_eq!(model.as_slice()[5], 1.0);
    assert_eq!(model.as_slice()[10], 1.0);
}

#[test]
fn test_precision_picked_from_runtime_tag() {
    let buffer = Matrix4Buffer::with_kind(ElementKind::FLOAT).unwrap();
    let m = buffer.as_f32().unwrap();
    assert_eq!(upload_mat4(m.as_slice()), 16);

    let err = Matrix4Buffer::with_kind(ElementKind::Int32).unwrap_err();
    assert_eq!(err, MatrixError::UnsupportedElementKind(ElementKind::Int32));
}

#[test]
fn test_bulk_fill_feeds_column_major_data_through() {
    let mut m: Matrix4<f32> = Matrix4::new();
    let columns: Vec<f32> = (0..16).map(|v| v as f32).collect();
    m.fill_from_slice(&columns).unwrap();

    assert_eq!(m.as_slice(), columns.as_slice());
    // (row 1, col 2) of column-major 4x4 is flat offset 1 + 2*4
    assert_eq!(m.get(1, 2).unwrap(), 9.0);
}

#[test]
fn test_failed_fill_never_corrupts_the_upload_buffer() {
    let mut m: Matrix4<f32> = Matrix4::new();
    m.set_position(1.0, 2.0, 3.0);
    let before = m.to_array();

    assert!(m.fill_from_slice(&[0.0; 15]).is_err());
    assert_eq!(m.to_array(), before);
    assert_eq!(upload_mat4(m.as_slice()), 16);
}

#[test]
fn test_rectangular_buffers_keep_the_layout_contract() {
    let mut m: DenseMatrix<f64> = DenseMatrix::new(3, 2);
    m.set(2, 1, 7.5).unwrap();

    // flat offset of (2, 1) is 2 + 1*3
    assert_eq!(m.as_slice()[5], 7.5);
    assert_eq!(m.len(), 6);
    assert_eq!(m.element_kind(), ElementKind::Float64);
}

#[test]
fn test_transform_survives_serialization() {
    let mut m: Matrix4<f64> = Matrix4::new();
    m.set_position_k(0.25, 0.5, 0.75, 1.0);

    let encoded = bincode::serialize(&m).unwrap();
    let decoded: Matrix4<f64> = bincode::deserialize(&encoded).unwrap();

    assert_eq!(decoded, m);
    assert_eq!(decoded.get(0, 3).unwrap(), 0.25);
}
