//! # wow_bufread - Buffered Binary Reader
//!
//! A forward-only, buffered reader for table-based binary formats such as
//! font directories or chunked container files.
//!
//! ## Features
//!
//! - Fixed-width integer and float decoding in host, big-endian and
//!   little-endian byte order
//! - Zero-copy slices of up to `max_read_size` contiguous bytes
//! - Bounded memory: a single staging buffer of `2 * max_read_size` bytes
//! - Cheap forward [`skip`](BufferedBinaryReader::skip) that never reads
//!   skipped data, and absolute [`jump`](BufferedBinaryReader::jump)
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use wow_bufread::BufferedBinaryReader;
//!
//! # fn main() -> Result<(), wow_bufread::Error> {
//! let mut reader = BufferedBinaryReader::new(File::open("font.ttf")?);
//!
//! // Offset table
//! let _sfnt_version = reader.read_u32_be()?;
//! let num_tables = reader.read_u16_be()?;
//! reader.skip(6)?;
//!
//! // Table records
//! for _ in 0..num_tables {
//!     let tag = reader.read_tag()?;
//!     let _checksum = reader.read_u32_be()?;
//!     let offset = reader.read_u32_be()?;
//!     let length = reader.read_u32_be()?;
//!     println!("{} at {offset} ({length} bytes)", String::from_utf8_lossy(&tag));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Borrowed views
//!
//! [`read_bytes`](BufferedBinaryReader::read_bytes) returns a slice into the
//! staging buffer. The slice borrows the reader, so it cannot outlive the next
//! call that might refill or compact the buffer.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
mod decode;
pub mod error;
pub mod reader;

pub use config::{DEFAULT_MAX_READ_SIZE, ReaderConfig};
pub use error::{Error, Result};
pub use reader::BufferedBinaryReader;
