//! Buffered reader over a seekable byte source
//!
//! [`BufferedBinaryReader`] stages bytes from the source in a fixed buffer of
//! `2 * max_read_size` bytes. Requests are served as slices into that buffer,
//! so decoding several contiguous bytes never needs a per-call copy.
//!
//! The buffer is used as a sliding window. Once the read cursor moves past the
//! first half, the unread tail is copied back to the start ("wrapped"), which
//! keeps the cursor below `max_read_size` whenever a request begins. Any request
//! of up to `max_read_size` bytes therefore fits without straddling the end of
//! the buffer.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

use crate::config::ReaderConfig;
use crate::error::{Error, Result};

/// Forward-only buffered binary reader
///
/// The reader takes exclusive control of the source position. Reading from or
/// seeking the source behind the reader's back desynchronises its cursors.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use wow_bufread::BufferedBinaryReader;
///
/// # fn main() -> wow_bufread::Result<()> {
/// let mut reader = BufferedBinaryReader::new(Cursor::new(vec![1u8, 2, 3, 4, 5]));
/// assert_eq!(reader.read_u8()?, 0x01);
/// assert_eq!(reader.read_u16_be()?, 0x0203);
/// assert_eq!(reader.read_u8()?, 0x04);
///
/// reader.jump(0)?;
/// assert_eq!(reader.read_u32_be()?, 0x0102_0304);
/// # Ok(())
/// # }
/// ```
pub struct BufferedBinaryReader<R> {
    source: R,
    buffer: Box<[u8]>,
    max_read_size: usize,
    /// Index of the next unconsumed byte
    read: usize,
    /// Index one past the last valid byte
    write: usize,
    /// Absolute source offset matching `write`
    source_pos: u64,
}

impl<R: Read + Seek> BufferedBinaryReader<R> {
    /// Create a reader with the default configuration
    pub fn new(source: R) -> Self {
        Self::from_validated(source, ReaderConfig::default())
    }

    /// Create a reader with a custom maximum contiguous read size
    pub fn with_max_read_size(source: R, max_read_size: usize) -> Result<Self> {
        Self::with_config(source, ReaderConfig::new(max_read_size))
    }

    /// Create a reader from a configuration
    pub fn with_config(source: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(source, config))
    }

    fn from_validated(source: R, config: ReaderConfig) -> Self {
        log::debug!(
            "Creating buffered reader: max read size {}, capacity {}",
            config.max_read_size,
            config.capacity()
        );

        Self {
            source,
            buffer: vec![0u8; config.capacity()].into_boxed_slice(),
            max_read_size: config.max_read_size,
            read: 0,
            write: 0,
            source_pos: 0,
        }
    }

    /// Declare the source's current absolute offset
    ///
    /// Use this when attaching to a source that is not at offset 0, so that
    /// [`position`](Self::position) reports true offsets. Jumps are always
    /// absolute and are not affected. May be called after reads; `pos` is the
    /// offset the source itself sits at, past any bytes already buffered.
    pub fn with_position(mut self, pos: u64) -> Self {
        self.source_pos = pos;
        self
    }

    /// Largest number of bytes a single request may ask for
    pub fn max_read_size(&self) -> usize {
        self.max_read_size
    }

    /// Size of the staging buffer
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of fetched bytes not consumed yet
    pub fn buffered(&self) -> usize {
        self.write - self.read
    }

    /// Absolute source offset of the next byte to be consumed
    pub fn position(&self) -> u64 {
        self.source_pos.saturating_sub(self.buffered() as u64)
    }

    /// Borrow the underlying source
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Mutably borrow the underlying source
    ///
    /// Reading or seeking through this reference desynchronises the reader;
    /// call [`jump`](Self::jump) afterwards to resume from a known offset.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consume the reader and return the source
    ///
    /// Buffered but unconsumed bytes are lost; the source stays positioned
    /// after the last byte fetched.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read `count` contiguous bytes as a slice into the staging buffer
    ///
    /// The slice stays valid until the next call on the reader.
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8]> {
        self.request(count)
    }

    /// Core request primitive backing every decode operation
    pub(crate) fn request(&mut self, count: usize) -> Result<&[u8]> {
        if count > self.max_read_size {
            return Err(Error::RequestTooLarge {
                requested: count,
                max: self.max_read_size,
            });
        }

        self.wrap();
        debug_assert!(self.read < self.max_read_size);

        let start = self.read;
        let end = start + count;
        if end > self.write {
            self.fill(end)?;
        }
        self.read = end;

        Ok(&self.buffer[start..end])
    }

    /// Fetch from the source until the buffer holds valid data up to `end`
    fn fill(&mut self, end: usize) -> Result<()> {
        while self.write < end {
            let chunk_end = self.buffer.len().min(self.write + self.max_read_size);
            let received =
                read_retrying(&mut self.source, &mut self.buffer[self.write..chunk_end])?;
            if received == 0 {
                return Err(Error::SourceExhausted {
                    needed: end - self.write,
                });
            }
            if received > chunk_end - self.write {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "source reported {} bytes read into a {} byte buffer",
                        received,
                        chunk_end - self.write
                    ),
                )
                .into());
            }

            log::trace!(
                "Refilled {} bytes at source offset {} (buffer {}..{})",
                received,
                self.source_pos,
                self.write,
                self.write + received
            );
            self.write += received;
            self.source_pos += received as u64;
        }
        Ok(())
    }

    /// Move unread bytes to the buffer start once the cursor crosses the first half
    fn wrap(&mut self) {
        if self.read < self.max_read_size {
            return;
        }

        let carried = self.write - self.read;
        self.buffer.copy_within(self.read..self.write, 0);
        log::trace!("Wrapped buffer, carried {} unread bytes", carried);
        self.read = 0;
        self.write = carried;
    }

    /// Reposition to an absolute source offset, discarding all buffered data
    pub fn jump(&mut self, pos: u64) -> Result<()> {
        self.read = 0;
        self.write = 0;
        self.source_pos = self.source.seek(SeekFrom::Start(pos))?;
        log::trace!("Jumped to source offset {}", self.source_pos);
        Ok(())
    }

    /// Advance past `count` bytes without decoding them
    ///
    /// Skips within buffered data touch no I/O. Skips reaching past the
    /// buffered data drop the buffer and seek the source forward by the
    /// remaining distance; nothing is read.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let unread = self.buffered() as u64;
        if count < unread {
            self.read += count as usize;
            self.wrap();
            return Ok(());
        }

        let delta = count - unread;
        if delta > 0 {
            let offset = i64::try_from(delta).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("skip of {} bytes exceeds the seekable range", count),
                )
            })?;
            self.source_pos = self.source.seek(SeekFrom::Current(offset))?;
            log::trace!(
                "Skipped {} bytes past buffer to source offset {}",
                delta,
                self.source_pos
            );
        }

        self.read = 0;
        self.write = 0;
        Ok(())
    }
}

/// Read into `buf`, retrying reads the OS interrupted
fn read_retrying<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match source.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            result => return result,
        }
    }
}

impl<R> fmt::Debug for BufferedBinaryReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedBinaryReader")
            .field("max_read_size", &self.max_read_size)
            .field("read", &self.read)
            .field("write", &self.write)
            .field("source_pos", &self.source_pos)
            .finish_non_exhaustive()
    }
}
