//! Interoperability with flate2 and behaviour on real-world inputs.

use flate2::Compression;
use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use oxiflate::{Compressor, Decompressor, Mode, OxiflateError};
use std::io::{Read, Write};

/// Eleven lines of "hello, world", 143 bytes.
fn short_string() -> Vec<u8> {
    b"hello, world\n".repeat(11)
}

/// Deterministic, moderately compressible data.
fn mixed_data(size: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..size)
        .map(|i| {
            if i % 64 < 40 {
                b"lorem ipsum dolor sit amet "[i % 27]
            } else {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 0xFF) as u8
            }
        })
        .collect()
}

fn flate2_compress(data: &[u8], mode: Mode) -> Vec<u8> {
    let level = Compression::default();
    match mode {
        Mode::Deflate => {
            let mut e = DeflateEncoder::new(Vec::new(), level);
            e.write_all(data).unwrap();
            e.finish().unwrap()
        }
        Mode::Zlib => {
            let mut e = ZlibEncoder::new(Vec::new(), level);
            e.write_all(data).unwrap();
            e.finish().unwrap()
        }
        Mode::Gzip => {
            let mut e = GzEncoder::new(Vec::new(), level);
            e.write_all(data).unwrap();
            e.finish().unwrap()
        }
    }
}

fn flate2_decompress(data: &[u8], mode: Mode) -> Vec<u8> {
    let mut out = Vec::new();
    match mode {
        Mode::Deflate => DeflateDecoder::new(data).read_to_end(&mut out),
        Mode::Zlib => ZlibDecoder::new(data).read_to_end(&mut out),
        Mode::Gzip => GzDecoder::new(data).read_to_end(&mut out),
    }
    .unwrap();
    out
}

#[test]
fn test_flate2_reads_our_output() {
    let data = mixed_data(64 * 1024);
    let mut c = Compressor::new().unwrap();
    for mode in Mode::ALL {
        let compressed = c.compress(&data, mode).unwrap();
        assert_eq!(flate2_decompress(&compressed, mode), data, "mode {mode}");
    }
}

#[test]
fn test_we_read_flate2_output() {
    let data = mixed_data(64 * 1024);
    let mut dc = Decompressor::new().unwrap();
    for mode in Mode::ALL {
        let compressed = flate2_compress(&data, mode);

        assert_eq!(dc.decompress(&compressed, mode).unwrap(), data, "mode {mode}");

        let mut out = vec![0u8; data.len()];
        assert_eq!(dc.decompress_into(&compressed, &mut out, mode), Ok(data.len()));
        assert_eq!(out, data);
    }
}

#[test]
fn test_every_level_is_readable_by_flate2() {
    let data = mixed_data(8 * 1024);
    for level in oxiflate::CompressionLevel::all() {
        let mut c = Compressor::with_compression_level(level).unwrap();
        let compressed = c.compress_zlib(&data).unwrap();
        assert_eq!(flate2_decompress(&compressed, Mode::Zlib), data, "level {level}");
    }
}

#[test]
fn test_short_string_scenario() {
    let data = short_string();
    assert_eq!(data.len(), 143);

    let mut c = Compressor::new().unwrap();
    let compressed = c.compress_zlib(&data).unwrap();
    assert!(compressed.len() < data.len());
    c.close();

    let mut dc = Decompressor::new().unwrap();
    let mut out = vec![0u8; data.len()];
    assert_eq!(dc.decompress_zlib_into(&compressed, &mut out), Ok(143));
    assert_eq!(out, data);
    assert_eq!(dc.decompress_zlib(&compressed).unwrap(), data);
    dc.close();
}

#[test]
fn test_handles_switch_modes_between_calls() {
    let data = short_string();
    let mut c = Compressor::with_level(9).unwrap();
    let mut dc = Decompressor::new().unwrap();

    for mode in [Mode::Gzip, Mode::Deflate, Mode::Zlib, Mode::Gzip] {
        let compressed = c.compress(&data, mode).unwrap();
        assert_eq!(dc.decompress(&compressed, mode).unwrap(), data);
    }
}

#[test]
fn test_gzip_header_and_zlib_header() {
    let data = short_string();
    let gz = oxiflate::compress(&data, Mode::Gzip).unwrap();
    assert_eq!(&gz[..3], &[0x1F, 0x8B, 0x08]);

    let zlib = oxiflate::compress_zlib(&data).unwrap();
    assert_eq!(zlib[0] & 0x0F, 8);
    assert_eq!(((u16::from(zlib[0]) << 8) | u16::from(zlib[1])) % 31, 0);
}

#[test]
fn test_incompressible_data_uses_bound() {
    let data = {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        (0..4096)
            .map(|_| {
                state ^= state << 7;
                state ^= state >> 9;
                (state & 0xFF) as u8
            })
            .collect::<Vec<u8>>()
    };

    let mut c = Compressor::new().unwrap();
    for mode in Mode::ALL {
        let compressed = c.compress(&data, mode).unwrap();
        assert!(compressed.len() > data.len());
        assert!(compressed.len() <= c.compress_bound(data.len(), mode));
        assert_eq!(flate2_decompress(&compressed, mode), data);
    }
}

#[test]
fn test_compress_into_reports_short_buffer() {
    let data = mixed_data(4096);
    let mut c = Compressor::new().unwrap();
    let mut tiny = [0u8; 4];
    assert_eq!(c.compress_into(&data, &mut tiny, Mode::Zlib), Err(OxiflateError::ShortBuffer));

    let mut roomy = vec![0u8; c.compress_bound(data.len(), Mode::Zlib)];
    let n = c.compress_into(&data, &mut roomy, Mode::Zlib).unwrap();
    assert_eq!(flate2_decompress(&roomy[..n], Mode::Zlib), data);
}

#[test]
fn test_highly_compressible_data_needs_exact_fit() {
    // Zeros compress by roughly 1000x, far beyond the default factor.
    let data = vec![0u8; 1 << 20];
    let compressed = oxiflate::compress_zlib(&data).unwrap();

    assert!(matches!(
        oxiflate::decompress_zlib(&compressed),
        Err(OxiflateError::InsufficientDecompressionFactor { max_factor: 30, .. })
    ));

    let mut out = vec![0xFFu8; data.len()];
    assert_eq!(oxiflate::decompress_zlib_into(&compressed, &mut out), Ok(data.len()));
    assert_eq!(out, data);
}

#[test]
fn test_decompression_bomb_is_refused() {
    // 84 bytes of zlib inflating to 64 KiB of zeros, a ratio of about 780.
    let bomb = hex::decode(concat!(
        "78daedc101010000008090feafee080a00000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000006a000f0001",
    ))
    .unwrap();
    assert_eq!(bomb.len(), 84);

    let mut dc = Decompressor::new().unwrap();
    let err = dc.decompress_zlib(&bomb).unwrap_err();
    assert_eq!(
        err,
        OxiflateError::InsufficientDecompressionFactor {
            multiplier: 31,
            max_factor: 30
        }
    );
    assert!(err.to_string().contains("Maximum decompression factor"));

    // The size is known to the caller, so exact fit still works.
    let mut out = vec![0xFFu8; 64 * 1024];
    assert_eq!(dc.decompress_zlib_into(&bomb, &mut out), Ok(64 * 1024));
    assert!(out.iter().all(|&b| b == 0));
}

#[test]
fn test_truncated_stream_is_bad_data() {
    // A zlib stream cut off mid-block: inflates to 481 bytes, then ends.
    let truncated = hex::decode(concat!(
        "789c7d90316f83301085f7fc0ac45cac3b1b63cc0685542c55a4264b1784825bd1024686284851fe7b8104c454c",
        "b8bdff7de9def6e3b6b3cf6db298dedc0b26f02384014858efb2af78ecb1573c224e24e92301e4919d158c0dd7e7",
        "9a40a5de765f39ed76aca2e6a364caf5a17cacdbe2a7dcd8c6ab5e9d790eafab49d2ce87ac4f308724a5c5c70553",
        "6bfe1b93f968fa214287570bcfc882c6034a0fc736bfde873f38f99aee666fccfb3ad0f043d4604122917dc1abdc",
        "c6178deaa81a8416d60afcfba9ae8293e2cf2a5536609753f04194881be106c1de6d2eec7058c9c3180cdfc87691",
        "f814505305c77796d9e66042e372dd2622ec001c143ff09bec7bea151f90c05f3e916cc22f57cc976f73fc74374",
    ))
    .unwrap();

    let mut dc = Decompressor::new().unwrap();
    assert_eq!(dc.decompress_zlib(&truncated), Err(OxiflateError::BadData));
}

#[test]
fn test_corrupt_input_is_bad_data() {
    let mut compressed = oxiflate::compress(&short_string(), Mode::Gzip).unwrap();
    let last = compressed.len() - 1;
    // Corrupt the stored length in the gzip trailer.
    compressed[last] ^= 0xFF;
    assert_eq!(oxiflate::decompress(&compressed, Mode::Gzip), Err(OxiflateError::BadData));
}
