//! Password output.

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer every time it is flushed and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write each password on its own line and flush.
pub fn write_batch<W: Write>(out: W, passwords: &[String]) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Join passwords with newlines, e.g. for the clipboard.
pub fn join_lines(passwords: &[String]) -> String {
    let mut joined = String::with_capacity(passwords.iter().map(|p| p.len() + 1).sum());
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(pass);
    }
    joined
}
