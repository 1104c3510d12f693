//! # Flat Binary Code Streams
//!
//! The on-disk stream layout matches an in-memory array of the code type
//! written out directly: no header, no framing, platform byte order.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{BmResult, BytemarkError},
    types::CodeType,
};

/// Fixed-width native-endian byte conversion for stored codes.
pub trait CodeBytes: CodeType {
    /// The stored width of one code, in bytes.
    const WIDTH: usize;

    /// Append the native-endian bytes of `self` to a buffer.
    fn extend_ne_bytes(
        &self,
        buffer: &mut Vec<u8>,
    );

    /// Read one code from a `WIDTH`-byte native-endian chunk.
    fn from_ne_chunk(chunk: &[u8]) -> Self;
}

macro_rules! impl_code_bytes {
    ($($ty:ty),*) => {
        $(
            impl CodeBytes for $ty {
                const WIDTH: usize = size_of::<$ty>();

                #[inline(always)]
                fn extend_ne_bytes(
                    &self,
                    buffer: &mut Vec<u8>,
                ) {
                    buffer.extend_from_slice(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn from_ne_chunk(chunk: &[u8]) -> Self {
                    let mut bytes = [0u8; size_of::<$ty>()];
                    bytes.copy_from_slice(chunk);
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_code_bytes!(u8, u16, u32, u64);

/// Flatten codes into their on-disk byte stream.
pub fn code_stream_bytes<T: CodeBytes>(codes: &[T]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(codes.len() * T::WIDTH);
    for code in codes {
        code.extend_ne_bytes(&mut bytes);
    }
    bytes
}

/// Read codes back from an on-disk byte stream.
///
/// ## Arguments
/// * `bytes` - The stream bytes; the length must be a multiple of the code width.
///
/// ## Returns
/// The decoded codes, or `Parse` for a truncated stream.
pub fn read_code_stream<T: CodeBytes>(bytes: &[u8]) -> BmResult<Vec<T>> {
    if !bytes.len().is_multiple_of(T::WIDTH) {
        return Err(BytemarkError::Parse(format!(
            "stream length {} is not a multiple of code width {}",
            bytes.len(),
            T::WIDTH
        )));
    }

    Ok(bytes.chunks_exact(T::WIDTH).map(T::from_ne_chunk).collect())
}

/// Write bytes to a path through a temporary sibling, then rename.
///
/// A failed write never leaves a partial file under the final name.
///
/// ## Arguments
/// * `path` - The final path.
/// * `bytes` - The bytes to write.
pub fn write_bytes_atomic(
    path: impl AsRef<Path>,
    bytes: &[u8],
) -> BmResult<()> {
    let path = path.as_ref();
    let tmp_path = tmp_sibling_path(path);

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(bytes)?;
    drop(file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// The temporary sibling of a final path, in the same directory.
fn tmp_sibling_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_stream_round_trip() {
        let codes: Vec<u16> = vec![0, 1, 513, u16::MAX];

        let bytes = code_stream_bytes(&codes);
        assert_eq!(bytes.len(), codes.len() * 2);
        assert_eq!(&bytes[4..6], &513u16.to_ne_bytes());

        let decoded: Vec<u16> = read_code_stream(&bytes).unwrap();
        assert_eq!(decoded, codes);
    }

    #[test]
    fn test_code_stream_u8_is_identity() {
        let codes: Vec<u8> = vec![3, 0, 255, 7];

        let bytes = code_stream_bytes(&codes);
        assert_eq!(bytes, codes);
    }

    #[test]
    fn test_code_stream_truncated() {
        let bytes = [0u8, 1, 2];

        assert!(matches!(
            read_code_stream::<u16>(&bytes),
            Err(BytemarkError::Parse(_))
        ));
    }

    #[test]
    fn test_write_bytes_atomic() {
        let dir = tempdir::TempDir::new("stream_io_test").unwrap();
        let path = dir.path().join("codes.bin");

        write_bytes_atomic(&path, b"abc").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"abc");
        assert!(!tmp_sibling_path(&path).exists());

        // Overwrite through the same temp-and-rename path.
        write_bytes_atomic(&path, b"xyz").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"xyz");
    }

    #[test]
    fn test_write_bytes_atomic_failure_leaves_no_file() {
        let dir = tempdir::TempDir::new("stream_io_test").unwrap();
        let path = dir.path().join("missing").join("codes.bin");

        assert!(write_bytes_atomic(&path, b"abc").is_err());
        assert!(!path.exists());
    }
}
