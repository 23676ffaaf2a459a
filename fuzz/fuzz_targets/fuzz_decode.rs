#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic; a successful decode must be internally consistent
    let _ = zentga::probe(data);
    let Ok(image) = zentga::decode(data) else {
        return;
    };

    let pixels = image.width() as usize * image.height() as usize;
    assert_eq!(image.rgb24_pixels().len(), pixels * 3);
    assert_eq!(image.argb32_pixels().len(), pixels * 4);
    if let Some(indexed) = image.indexed_pixels() {
        assert_eq!(indexed.len(), pixels);
    }
});
