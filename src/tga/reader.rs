use std::io::{self, Read};

/// Forward-only byte source with little-endian helpers.
///
/// Every read is exact: a short read surfaces as `UnexpectedEof` and the
/// caller decides whether that is an I/O error or truncated pixel data.
pub(crate) struct ByteReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> u64 {
        self.pos
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)?;
        self.pos += buf.len() as u64;
        Ok(())
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn read_u8(&mut self) -> io::Result<u8> {
        let [b] = self.read_fixed_bytes::<1>()?;
        Ok(b)
    }
}
