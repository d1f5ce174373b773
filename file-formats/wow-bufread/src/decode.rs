//! Fixed-width decode operations
//!
//! Every decoder requests exactly the width of its type from the staging
//! buffer. Host-native variants follow the target's byte order, `_be` and `_le`
//! variants are fixed regardless of the host. The byte order is chosen at
//! compile time through [`byteorder`] type parameters, so no call branches on
//! endianness.

use std::io::{Read, Seek};
use std::mem::size_of;

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

use crate::error::Result;
use crate::reader::BufferedBinaryReader;

macro_rules! decoders {
    ($($(#[$doc:meta])* $name:ident => $ty:ty, $order:ty, $read:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&mut self) -> Result<$ty> {
                self.request(size_of::<$ty>()).map(<$order>::$read)
            }
        )*
    };
}

impl<R: Read + Seek> BufferedBinaryReader<R> {
    /// Read a single unsigned byte
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.request(1).map(|bytes| bytes[0])
    }

    /// Read a single signed byte
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(|byte| byte as i8)
    }

    /// Copy the next `N` bytes into an owned array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.request(N)?);
        Ok(out)
    }

    /// Read a four-character tag, as used by table directories
    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        self.read_array::<4>()
    }

    decoders! {
        /// Read a `u16` in host byte order
        read_u16 => u16, NativeEndian, read_u16;
        /// Read an `i16` in host byte order
        read_i16 => i16, NativeEndian, read_i16;
        /// Read a `u32` in host byte order
        read_u32 => u32, NativeEndian, read_u32;
        /// Read an `i32` in host byte order
        read_i32 => i32, NativeEndian, read_i32;
        /// Read a `u64` in host byte order
        read_u64 => u64, NativeEndian, read_u64;
        /// Read an `i64` in host byte order
        read_i64 => i64, NativeEndian, read_i64;
        /// Read an `f32` in host byte order
        read_f32 => f32, NativeEndian, read_f32;
        /// Read an `f64` in host byte order
        read_f64 => f64, NativeEndian, read_f64;

        /// Read a big-endian `u16`
        read_u16_be => u16, BigEndian, read_u16;
        /// Read a big-endian `i16`
        read_i16_be => i16, BigEndian, read_i16;
        /// Read a big-endian `u32`
        read_u32_be => u32, BigEndian, read_u32;
        /// Read a big-endian `i32`
        read_i32_be => i32, BigEndian, read_i32;
        /// Read a big-endian `u64`
        read_u64_be => u64, BigEndian, read_u64;
        /// Read a big-endian `i64`
        read_i64_be => i64, BigEndian, read_i64;
        /// Read a big-endian `f32`
        read_f32_be => f32, BigEndian, read_f32;
        /// Read a big-endian `f64`
        read_f64_be => f64, BigEndian, read_f64;

        /// Read a little-endian `u16`
        read_u16_le => u16, LittleEndian, read_u16;
        /// Read a little-endian `i16`
        read_i16_le => i16, LittleEndian, read_i16;
        /// Read a little-endian `u32`
        read_u32_le => u32, LittleEndian, read_u32;
        /// Read a little-endian `i32`
        read_i32_le => i32, LittleEndian, read_i32;
        /// Read a little-endian `u64`
        read_u64_le => u64, LittleEndian, read_u64;
        /// Read a little-endian `i64`
        read_i64_le => i64, LittleEndian, read_i64;
        /// Read a little-endian `f32`
        read_f32_le => f32, LittleEndian, read_f32;
        /// Read a little-endian `f64`
        read_f64_le => f64, LittleEndian, read_f64;
    }
}
