//! Reading table directories from real files

use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use wow_bufread::BufferedBinaryReader;

use crate::common::pattern;

struct TableRecord {
    tag: [u8; 4],
    checksum: u32,
    offset: u32,
    length: u32,
}

/// Build a font-style file: offset table, table records, then table bodies
fn write_table_file(tables: &[(&[u8; 4], Vec<u8>, u32)]) -> File {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    bytes.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[0u8; 6]); // searchRange, entrySelector, rangeShift

    for (tag, body, offset) in tables {
        let checksum = body.iter().map(|&b| b as u32).sum::<u32>();
        bytes.extend_from_slice(*tag);
        bytes.extend_from_slice(&checksum.to_be_bytes());
        bytes.extend_from_slice(&offset.to_be_bytes());
        bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    }

    for (_, body, offset) in tables {
        let offset = *offset as usize;
        if bytes.len() < offset + body.len() {
            bytes.resize(offset + body.len(), 0);
        }
        bytes[offset..offset + body.len()].copy_from_slice(body);
    }

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    file
}

#[test]
fn test_table_directory_from_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let head = pattern(54);
    let name = b"wow-bufread test font".to_vec();
    let glyf = pattern(3000);
    let mut file = write_table_file(&[
        (b"head", head.clone(), 64),
        (b"name", name.clone(), 200),
        (b"glyf", glyf.clone(), 10_000),
    ]);

    let mut reader = BufferedBinaryReader::with_max_read_size(&mut file, 64).unwrap();

    assert_eq!(reader.read_u32_be().unwrap(), 0x0001_0000);
    let num_tables = reader.read_u16_be().unwrap();
    assert_eq!(num_tables, 3);
    reader.skip(6).unwrap();

    let mut records = Vec::new();
    for _ in 0..num_tables {
        records.push(TableRecord {
            tag: reader.read_tag().unwrap(),
            checksum: reader.read_u32_be().unwrap(),
            offset: reader.read_u32_be().unwrap(),
            length: reader.read_u32_be().unwrap(),
        });
    }
    assert_eq!(reader.position(), 12 + 16 * 3);

    let tags: Vec<&[u8; 4]> = records.iter().map(|r| &r.tag).collect();
    assert_eq!(tags, vec![b"head", b"name", b"glyf"]);

    for (record, expected) in records.iter().zip([&head, &name, &glyf]) {
        reader.jump(u64::from(record.offset)).unwrap();

        let mut body = Vec::new();
        let mut remaining = record.length as usize;
        while remaining > 0 {
            let count = remaining.min(reader.max_read_size());
            body.extend_from_slice(reader.read_bytes(count).unwrap());
            remaining -= count;
        }

        assert_eq!(&body, expected);
        assert_eq!(body.iter().map(|&b| b as u32).sum::<u32>(), record.checksum);
    }

    drop(reader);

    // The borrowed file stays usable and sits after the last fetched byte
    let mut rest = Vec::new();
    file.read_to_end(&mut rest).unwrap();
    assert!(rest.is_empty());
}

#[test]
fn test_skipping_through_large_file() {
    let data = pattern(100_000);
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&data).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut reader = BufferedBinaryReader::new(file);
    let mut pos = 0usize;
    let mut stride = 1u64;
    while pos + 4 <= data.len() {
        let expected = u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]);
        assert_eq!(reader.read_u32_le().unwrap(), expected);
        pos += 4;

        reader.skip(stride).unwrap();
        pos += stride as usize;
        assert_eq!(reader.position(), pos as u64);
        stride = stride * 3 % 9973;
    }
}
