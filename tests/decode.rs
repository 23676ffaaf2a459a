use zentga::*;

fn header(image_type: u8, depth: u8, width: u16, height: u16, cmap_length: u16) -> Vec<u8> {
    let mut h = vec![0u8; HEADER_LEN];
    h[1] = u8::from(cmap_length > 0);
    h[2] = image_type;
    h[5..7].copy_from_slice(&cmap_length.to_le_bytes());
    h[7] = if cmap_length > 0 { 24 } else { 0 };
    h[12..14].copy_from_slice(&width.to_le_bytes());
    h[14..16].copy_from_slice(&height.to_le_bytes());
    h[16] = depth;
    h
}

fn footer(extension_offset: u32) -> Vec<u8> {
    let mut f = Vec::with_capacity(FOOTER_LEN);
    f.extend_from_slice(&extension_offset.to_le_bytes());
    f.extend_from_slice(&0u32.to_le_bytes());
    f.extend_from_slice(TGA_SIGNATURE);
    f
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn truecolor_24_two_pixels() {
    let mut data = header(2, 24, 2, 1, 0);
    data.extend_from_slice(&[0, 0, 255, 0, 255, 0]);

    let image = decode(&data).unwrap();
    assert_eq!(image.strategy(), DecodeStrategy::TrueColor24Raw);
    assert_eq!(image.rgb24_pixels(), &[255, 0, 0, 0, 255, 0]);
    assert_eq!(image.argb32_pixels(), &[255, 255, 0, 0, 255, 0, 255, 0]);
    assert_eq!(image.indexed_pixels(), None);
    assert_eq!(image.version(), TgaVersion::V1);
}

#[test]
fn indexed_rle_repeat_packet() {
    let mut data = header(9, 8, 3, 1, 6);
    for i in 0..6u8 {
        if i == 5 {
            data.extend_from_slice(&[10, 20, 30]);
        } else {
            data.extend_from_slice(&[i, i, i]);
        }
    }
    data.extend_from_slice(&[0x82, 0x05]);

    let image = decode(&data).unwrap();
    assert_eq!(image.indexed_pixels(), Some(&[5u8, 5, 5][..]));
    assert_eq!(image.rgb24_pixels(), &[30, 20, 10, 30, 20, 10, 30, 20, 10]);
    assert_eq!(
        image.argb32_pixels(),
        &[255, 30, 20, 10, 255, 30, 20, 10, 255, 30, 20, 10]
    );
    assert_eq!(image.color_table().len(), 6);
}

#[test]
fn unsupported_image_type() {
    let mut data = header(5, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        TgaError::UnsupportedFormat {
            image_type: 5,
            pixel_depth: 24
        }
    ));
}

#[test]
fn unsupported_rle_truecolor_and_monochrome() {
    for (t, d) in [(10u8, 24u8), (10, 32), (3, 8), (11, 8), (2, 16), (1, 16)] {
        let data = header(t, d, 1, 1, 0);
        assert!(
            matches!(decode(&data), Err(TgaError::UnsupportedFormat { .. })),
            "type {t} depth {d}"
        );
    }
}

#[test]
fn truncated_after_first_pixel() {
    let mut data = header(2, 24, 2, 2, 0);
    data.extend_from_slice(&[1, 2, 3]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        TgaError::TruncatedData {
            decoded: 1,
            expected: 4
        }
    ));
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn buffer_lengths_match_dimensions() {
    let (w, h) = (7u16, 5u16);
    let n = usize::from(w) * usize::from(h);

    let mut data = header(2, 32, w, h, 0);
    data.extend(std::iter::repeat_n(0x11, n * 4));
    let image = decode(&data).unwrap();
    assert_eq!(image.rgb24_pixels().len(), 3 * n);
    assert_eq!(image.argb32_pixels().len(), 4 * n);
    assert!(image.indexed_pixels().is_none());

    let mut data = header(1, 8, w, h, 1);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend(std::iter::repeat_n(0, n));
    let image = decode(&data).unwrap();
    assert_eq!(image.indexed_pixels().unwrap().len(), n);
    assert_eq!(image.rgb24_pixels().len(), 3 * n);
    assert_eq!(image.argb32_pixels().len(), 4 * n);
}

#[test]
fn alpha_is_opaque_without_source_alpha() {
    let mut data = header(2, 24, 4, 1, 0);
    data.extend_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0]);
    let image = decode(&data).unwrap();
    assert!(image.argb32_pixels().chunks_exact(4).all(|px| px[0] == 255));
}

#[test]
fn alpha_is_carried_for_32_bit() {
    let mut data = header(2, 32, 2, 1, 0);
    data.extend_from_slice(&[1, 2, 3, 0, 4, 5, 6, 128]);
    let image = decode(&data).unwrap();
    assert_eq!(image.rgb24_pixels(), &[3, 2, 1, 6, 5, 4]);
    assert_eq!(image.argb32_pixels(), &[0, 3, 2, 1, 128, 6, 5, 4]);
}

#[test]
fn zero_sized_image_reads_no_pixels() {
    for (w, h) in [(0u16, 10u16), (10, 0), (0, 0)] {
        let data = header(9, 32, w, h, 0);
        let image = decode(&data).unwrap();
        assert!(image.rgb24_pixels().is_empty());
        assert!(image.argb32_pixels().is_empty());
        assert!(image.footer().is_none());
    }

    // indexed zero-size still yields an (empty) indexed buffer
    let data = header(1, 8, 0, 3, 0);
    let image = decode(&data).unwrap();
    assert_eq!(image.indexed_pixels(), Some(&[][..]));
}

#[test]
fn colormap_index_out_of_range() {
    let mut data = header(1, 8, 2, 1, 2);
    data.extend_from_slice(&[0; 6]);
    data.extend_from_slice(&[1, 2]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, TgaError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn indexed_without_colormap_fails_on_first_pixel() {
    let mut data = header(1, 8, 1, 1, 0);
    data.push(0);
    assert!(matches!(
        decode(&data),
        Err(TgaError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn short_header_is_io_error() {
    assert!(matches!(decode(&[0u8; 10]), Err(TgaError::Io(_))));
    assert!(matches!(decode(&[]), Err(TgaError::Io(_))));
}

#[test]
fn short_colormap_is_io_error() {
    let mut data = header(1, 8, 1, 1, 4);
    data.extend_from_slice(&[0; 5]);
    assert!(matches!(decode(&data), Err(TgaError::Io(_))));
}

// ── Footer ──────────────────────────────────────────────────────────

#[test]
fn v2_footer_after_pixels() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend(footer(0));
    let image = decode(&data).unwrap();
    let f = image.footer().unwrap();
    assert!(f.has_valid_signature());
    assert!(!f.has_extension_area());
    assert_eq!(image.version(), TgaVersion::V2);
}

#[test]
fn v2_footer_followed_by_trailing_bytes() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend(footer(0));
    data.extend_from_slice(&[0xEE; 4]);
    let image = decode(&data).unwrap();
    let f = image.footer().unwrap();
    assert_eq!(f.signature, *TGA_SIGNATURE);
    assert_eq!((f.extension_offset, f.developer_offset), (0, 0));
    assert_eq!(image.version(), TgaVersion::V2);
}

#[test]
fn footer_offsets_point_past_itself() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    let ext_offset = (data.len() + FOOTER_LEN) as u32;
    data.extend(footer(ext_offset));
    data.extend(std::iter::repeat_n(0u8, 495)); // extension area
    let image = decode(&data).unwrap();
    assert_eq!(image.footer().unwrap().extension_offset, ext_offset);
    assert!(image.footer().unwrap().has_extension_area());
    assert_eq!(image.version(), TgaVersion::V2);
    assert_eq!(image.rgb24_pixels(), &[3, 2, 1]);
}

#[test]
fn large_trailer_is_not_buffered() {
    use std::io::Read;

    const TRAILER: u64 = 64 << 20;
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    let mut src = (&data[..]).chain(std::io::repeat(0).take(TRAILER));
    let limits = Limits {
        max_memory_bytes: Some(64),
        ..Default::default()
    };
    let image = TgaDecoder::new(&mut src).with_limits(limits).load().unwrap();
    assert_eq!(image.version(), TgaVersion::V1);
    let (_, rest) = src.into_inner();
    assert_eq!(rest.limit(), TRAILER - FOOTER_LEN as u64);
}

#[test]
fn short_trailer_is_not_a_footer() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend_from_slice(&[0xEE; 10]);
    let image = decode(&data).unwrap();
    assert!(image.footer().is_none());
}

#[test]
fn unsigned_trailer_is_kept_as_v1() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend_from_slice(&[0x41; FOOTER_LEN]);
    let image = decode(&data).unwrap();
    let f = image.footer().unwrap();
    assert!(!f.has_valid_signature());
    assert_eq!(f.extension_offset, 0x4141_4141);
    assert_eq!(image.version(), TgaVersion::V1);
}

// ── API surface ─────────────────────────────────────────────────────

#[test]
fn probe_reads_header_only() {
    let data = header(9, 32, 640, 480, 0);
    let h = probe(&data).unwrap();
    assert_eq!((h.width, h.height), (640, 480));
    assert_eq!(h.kind(), ImageType::RleColorMapped);
    assert_eq!(h.buffer_sizes().unwrap().size32, 640 * 480 * 4);
}

#[test]
fn image_id_and_descriptor() {
    let mut data = header(2, 32, 1, 1, 0);
    data[0] = 5;
    data[17] = 0x28;
    data.extend_from_slice(b"hello");
    data.extend_from_slice(&[0, 0, 0, 0]);
    let image = decode(&data).unwrap();
    assert_eq!(image.image_id(), b"hello");
    assert!(image.header().is_top_to_bottom());
    assert_eq!(image.header().alpha_bits(), 8);
}

#[test]
fn limits_reject_before_decoding() {
    let data = header(2, 24, 100, 100, 0);
    let limits = Limits {
        max_width: Some(64),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(&data, &limits),
        Err(TgaError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_memory_bytes: Some(1000),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(&data, &limits),
        Err(TgaError::LimitExceeded(_))
    ));
}

#[test]
fn into_buffers_moves_pixels_out() {
    let mut data = header(2, 24, 1, 1, 0);
    data.extend_from_slice(&[1, 2, 3]);
    let buffers = decode(&data).unwrap().into_buffers();
    assert_eq!(buffers.len(), 1);
    assert_eq!(buffers.rgb24, [3, 2, 1]);
    assert_eq!(buffers.argb32, [255, 3, 2, 1]);
}

#[test]
fn decoder_over_generic_reader() {
    let mut data = header(9, 24, 2, 1, 0);
    data.extend_from_slice(&[0x81, 1, 2, 3]);
    let image = TgaDecoder::new(std::io::Cursor::new(data)).load().unwrap();
    assert_eq!(image.rgb24_pixels(), &[3, 2, 1, 3, 2, 1]);
}

#[cfg(feature = "rgb")]
#[test]
fn rgb_view_matches_byte_buffer() {
    let mut data = header(9, 24, 3, 1, 0);
    data.extend_from_slice(&[0x81, 10, 20, 30, 0x00, 40, 50, 60]);
    let image = decode(&data).unwrap();
    let px = image.rgb24_as_pixels();
    assert_eq!(px.len(), 3);
    assert_eq!((px[0].r, px[0].g, px[0].b), (30, 20, 10));
    assert_eq!((px[2].r, px[2].g, px[2].b), (60, 50, 40));
    let flat: Vec<u8> = px.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
    assert_eq!(flat, image.rgb24_pixels());
}

#[cfg(feature = "imgref")]
#[test]
fn imgvec_has_header_dimensions() {
    let mut data = header(2, 24, 2, 3, 0);
    for v in 0..6u8 {
        data.extend_from_slice(&[v, v + 1, v + 2]);
    }
    let image = decode(&data).unwrap();
    let img = image.to_imgvec();
    assert_eq!(img.width(), usize::from(image.header().width));
    assert_eq!(img.height(), usize::from(image.header().height));
    assert_eq!(img.buf().as_slice(), image.rgb24_as_pixels());
}

#[test]
fn open_and_decode_file() {
    let mut data = header(2, 24, 1, 2, 0);
    data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    data.extend(footer(0));

    let path = std::env::temp_dir().join(format!("zentga-open-{}.tga", std::process::id()));
    std::fs::write(&path, &data).unwrap();
    let image = decode_file(&path);
    std::fs::remove_file(&path).unwrap();

    let image = image.unwrap();
    assert_eq!((image.width(), image.height()), (1, 2));
    assert_eq!(image.rgb24_pixels(), &[3, 2, 1, 6, 5, 4]);
    assert_eq!(image.version(), TgaVersion::V2);
}

#[test]
fn open_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("zentga-does-not-exist.tga");
    assert!(matches!(TgaDecoder::open(&path), Err(TgaError::Io(_))));
}
