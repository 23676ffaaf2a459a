#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, depth: u8, width: u16, height: u16, cmap_length: u16) -> Vec<u8> {
    let mut h = vec![0u8; 18];
    h[1] = u8::from(cmap_length > 0);
    h[2] = image_type;
    h[5..7].copy_from_slice(&cmap_length.to_le_bytes());
    h[7] = if cmap_length > 0 { 24 } else { 0 };
    h[12..14].copy_from_slice(&width.to_le_bytes());
    h[14..16].copy_from_slice(&height.to_le_bytes());
    h[16] = depth;
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Truecolor 24-bit 2x1
    let mut tc24 = header(2, 24, 2, 1, 0);
    tc24.extend_from_slice(&[0, 0, 255, 0, 255, 0]);
    fs::write(format!("{dir}/tc24_2x1.tga"), tc24).unwrap();

    // Truecolor 32-bit 1x1 with v2 footer
    let mut tc32 = header(2, 32, 1, 1, 0);
    tc32.extend_from_slice(&[1, 2, 3, 128]);
    tc32.extend_from_slice(&[0; 8]);
    tc32.extend_from_slice(b"TRUEVISION-XFILE.\0");
    fs::write(format!("{dir}/tc32_footer.tga"), tc32).unwrap();

    // Indexed 2x2 with 2-entry colormap
    let mut idx = header(1, 8, 2, 2, 2);
    idx.extend_from_slice(&[0, 0, 0, 255, 255, 255]);
    idx.extend_from_slice(&[0, 1, 1, 0]);
    fs::write(format!("{dir}/indexed_2x2.tga"), idx).unwrap();

    // RLE indexed: repeat + literal
    let mut rle8 = header(9, 8, 4, 1, 2);
    rle8.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
    rle8.extend_from_slice(&[0x81, 1, 0x01, 0, 1]);
    fs::write(format!("{dir}/rle8_4x1.tga"), rle8).unwrap();

    // RLE 32-bit single max-length repeat
    let mut rle32 = header(9, 32, 128, 1, 0);
    rle32.extend_from_slice(&[0xFF, 1, 2, 3, 4]);
    fs::write(format!("{dir}/rle32_128x1.tga"), rle32).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(2, 24, 1, 1, 0)[..10]).unwrap();
    fs::write(format!("{dir}/no_pixels.bin"), header(2, 24, 4, 4, 0)).unwrap();
    fs::write(format!("{dir}/unsupported.bin"), header(10, 24, 1, 1, 0)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
