use crate::utils::error::Result;

/// Byte source for input files. The CLI reads from the local filesystem;
/// tests substitute an in-memory map.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}
