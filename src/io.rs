//! Reading and writing point sets and neighbor index matrices in a fixed binary layout.
//!
//! All fields are little-endian.
//!
//! Point sets:
//!
//! | field  | type           | description                       |
//! |--------|----------------|-----------------------------------|
//! | n      | `i32`          | number of points, positive        |
//! | d      | `i32`          | dimension, positive               |
//! | values | `f64` × n × d  | coordinates, point-major          |
//!
//! Index matrices:
//!
//! | field   | type          | description                      |
//! |---------|---------------|----------------------------------|
//! | n       | `i32`         | number of queries, positive      |
//! | k       | `i32`         | neighbors per query, positive    |
//! | indices | `i32` × n × k | neighbor indexes, query-major    |
//!
//! Writers assemble the whole record before writing it, so a record that fails validation
//! writes nothing. Readers never allocate more than the input actually supplies, so a header
//! claiming more values than follow fails with [`UnexpectedEof`][KnnIndexError::UnexpectedEof].
//!
//! Any point set written by [`write_points`] reads back with bit-identical coordinates. Since
//! [`PointSet`] rejects NaN coordinates, a file holding NaN values fails to read with
//! [`NanCoordinate`][KnnIndexError::NanCoordinate].

use std::io::{ErrorKind, Read, Write};

use crate::error::{KnnIndexError, Result};
use crate::indices::IndexMatrix;
use crate::points::{PointSet, PointSetRef};
use crate::r#type::IndexableNum;

const HEADER_SIZE: usize = 8;

/// Upper bound on the payload buffer reserved before any payload bytes are read.
const INITIAL_PAYLOAD_CAPACITY: usize = 1 << 20;

/// Read a point set.
pub fn read_points<R: Read>(mut reader: R) -> Result<PointSet<f64>> {
    let n = read_count(&mut reader, "point count")?;
    let d = read_count(&mut reader, "dimension")?;

    let buf = read_payload(&mut reader, n, d, f64::BYTES_PER_ELEMENT, "coordinates")?;
    let coords: Vec<f64> = buf
        .chunks_exact(f64::BYTES_PER_ELEMENT)
        .map(|chunk| f64::from_bits(u64::from_le(bytemuck::pod_read_unaligned(chunk))))
        .collect();

    log::debug!("read {} points of dimension {}", n, d);
    PointSet::try_new(coords, d)
}

/// Write a point set. The set must not be empty.
pub fn write_points<W: Write>(mut writer: W, points: PointSetRef<'_, f64>) -> Result<()> {
    let n = header_value("point count", points.num_items())?;
    let d = header_value("dimension", points.dim())?;

    let payload_len = points.coords().len() * f64::BYTES_PER_ELEMENT;
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload_len);
    buf.extend_from_slice(&n.to_le_bytes());
    buf.extend_from_slice(&d.to_le_bytes());
    for value in points.coords() {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    writer.write_all(&buf)?;
    log::debug!("wrote {} points of dimension {}", n, d);
    Ok(())
}

/// Read an index matrix.
pub fn read_indices<R: Read>(mut reader: R) -> Result<IndexMatrix> {
    let n = read_count(&mut reader, "query count")?;
    let k = read_count(&mut reader, "neighbor count")?;

    let buf = read_payload(&mut reader, n, k, 4, "indices")?;
    let indices: Vec<i32> = buf
        .chunks_exact(4)
        .map(|chunk| i32::from_le(bytemuck::pod_read_unaligned(chunk)))
        .collect();

    log::debug!("read {} rows of {} indices", n, k);
    Ok(IndexMatrix::new(k, indices))
}

/// Write an index matrix. The matrix must hold at least one row.
pub fn write_indices<W: Write>(mut writer: W, matrix: &IndexMatrix) -> Result<()> {
    let n = header_value("query count", matrix.num_queries())?;
    let k = header_value("neighbor count", matrix.k())?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + matrix.as_slice().len() * 4);
    buf.extend_from_slice(&n.to_le_bytes());
    buf.extend_from_slice(&k.to_le_bytes());
    for index in matrix.as_slice() {
        buf.extend_from_slice(&index.to_le_bytes());
    }

    writer.write_all(&buf)?;
    log::debug!("wrote {} rows of {} indices", n, k);
    Ok(())
}

/// Read a positive `i32` header field.
fn read_count<R: Read>(reader: &mut R, field: &'static str) -> Result<usize> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf, field)?;
    let value = i32::from_le_bytes(buf);
    if value <= 0 {
        return Err(KnnIndexError::InvalidHeader { field, value });
    }
    Ok(value as usize)
}

/// Read `rows * cols` values of `size` bytes each.
fn read_payload<R: Read>(
    reader: &mut R,
    rows: usize,
    cols: usize,
    size: usize,
    what: &'static str,
) -> Result<Vec<u8>> {
    let byte_len = rows
        .checked_mul(cols)
        .and_then(|len| len.checked_mul(size))
        .ok_or_else(|| {
            KnnIndexError::General(format!("{rows} x {cols} {what} do not fit in memory."))
        })?;

    // the header is untrusted: grow the buffer as data arrives instead of trusting byte_len
    let mut buf = Vec::new();
    let initial = byte_len.min(INITIAL_PAYLOAD_CAPACITY);
    buf.try_reserve_exact(initial).map_err(|err| {
        KnnIndexError::General(format!("Could not allocate {initial} bytes: {err}."))
    })?;
    reader.take(byte_len as u64).read_to_end(&mut buf)?;
    if buf.len() < byte_len {
        return Err(KnnIndexError::UnexpectedEof(what));
    }
    Ok(buf)
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8], what: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|err| {
        if err.kind() == ErrorKind::UnexpectedEof {
            KnnIndexError::UnexpectedEof(what)
        } else {
            KnnIndexError::Io(err)
        }
    })
}

/// Convert a count to a positive `i32` header field.
fn header_value(field: &'static str, value: usize) -> Result<i32> {
    match i32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        Ok(v) => Err(KnnIndexError::InvalidHeader { field, value: v }),
        Err(_) => Err(KnnIndexError::General(format!(
            "{field} {value} does not fit in a 32-bit header."
        ))),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::test::random_points;

    #[test]
    fn points_round_trip_bit_identical() {
        let points = random_points(7, 50, 3);
        let mut buf: Vec<u8> = vec![];
        write_points(&mut buf, points.as_ref()).unwrap();
        assert_eq!(buf.len(), 8 + 50 * 3 * 8);

        let read = read_points(Cursor::new(buf)).unwrap();
        assert_eq!(read.num_items(), 50);
        assert_eq!(read.dim(), 3);
        let bits = |points: &PointSet<f64>| -> Vec<u64> {
            points.as_ref().coords().iter().map(|v| v.to_bits()).collect()
        };
        assert_eq!(bits(&read), bits(&points));
    }

    #[test]
    fn header_is_little_endian() {
        let points = PointSet::try_new(vec![1.5, -2.0], 2).unwrap();
        let mut buf: Vec<u8> = vec![];
        write_points(&mut buf, points.as_ref()).unwrap();
        assert_eq!(&buf[..8], &[1, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(&buf[8..16], &1.5_f64.to_le_bytes());
    }

    #[test]
    fn indices_round_trip() {
        let matrix = IndexMatrix::new(3, vec![0, 4, 2, 1, -1, -1]);
        let mut buf: Vec<u8> = vec![];
        write_indices(&mut buf, &matrix).unwrap();
        assert_eq!(read_indices(Cursor::new(buf)).unwrap(), matrix);
    }

    #[test]
    fn rejects_non_positive_header() {
        let mut buf: Vec<u8> = vec![];
        buf.extend_from_slice(&0_i32.to_le_bytes());
        buf.extend_from_slice(&2_i32.to_le_bytes());
        assert!(matches!(
            read_points(Cursor::new(&buf)),
            Err(KnnIndexError::InvalidHeader { value: 0, .. })
        ));

        let mut buf: Vec<u8> = vec![];
        buf.extend_from_slice(&1_i32.to_le_bytes());
        buf.extend_from_slice(&(-3_i32).to_le_bytes());
        assert!(matches!(
            read_indices(Cursor::new(&buf)),
            Err(KnnIndexError::InvalidHeader { value: -3, .. })
        ));
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(matches!(
            read_points(Cursor::new(vec![1u8, 0])),
            Err(KnnIndexError::UnexpectedEof("point count"))
        ));

        let points = PointSet::try_new(vec![1., 2., 3., 4.], 2).unwrap();
        let mut buf: Vec<u8> = vec![];
        write_points(&mut buf, points.as_ref()).unwrap();
        buf.truncate(buf.len() - 1);
        assert!(matches!(
            read_points(Cursor::new(buf)),
            Err(KnnIndexError::UnexpectedEof("coordinates"))
        ));
    }

    #[test]
    fn huge_header_without_payload_is_truncated() {
        let mut buf: Vec<u8> = vec![];
        buf.extend_from_slice(&(1_i32 << 28).to_le_bytes());
        buf.extend_from_slice(&1_i32.to_le_bytes());
        assert!(matches!(
            read_points(Cursor::new(&buf)),
            Err(KnnIndexError::UnexpectedEof("coordinates"))
        ));

        // a partial payload is still rejected
        buf.extend_from_slice(&1.0_f64.to_le_bytes());
        assert!(matches!(
            read_points(Cursor::new(&buf)),
            Err(KnnIndexError::UnexpectedEof("coordinates"))
        ));

        let mut buf: Vec<u8> = vec![];
        buf.extend_from_slice(&(1_i32 << 28).to_le_bytes());
        buf.extend_from_slice(&(1_i32 << 2).to_le_bytes());
        assert!(matches!(
            read_indices(Cursor::new(&buf)),
            Err(KnnIndexError::UnexpectedEof("indices"))
        ));
    }

    #[test]
    fn nan_coordinates_fail_to_read() {
        let mut buf: Vec<u8> = vec![];
        buf.extend_from_slice(&1_i32.to_le_bytes());
        buf.extend_from_slice(&2_i32.to_le_bytes());
        buf.extend_from_slice(&0.5_f64.to_le_bytes());
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        assert!(matches!(
            read_points(Cursor::new(&buf)),
            Err(KnnIndexError::NanCoordinate { point: 0, axis: 1 })
        ));
    }

    #[test]
    fn empty_point_set_writes_nothing() {
        let points = PointSet::<f64>::try_new(vec![], 2).unwrap();
        let mut buf: Vec<u8> = vec![];
        assert!(write_points(&mut buf, points.as_ref()).is_err());
        assert!(buf.is_empty());
    }
}
