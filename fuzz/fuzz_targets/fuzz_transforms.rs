#![no_main]
use libfuzzer_sys::fuzz_target;
use pictool::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the width, the rest are RGBA samples
    let Some((&w, samples)) = data.split_first() else {
        return;
    };
    let width = usize::from(w % 16) + 1;
    let pixels: Vec<RGBA8> = samples
        .chunks_exact(4)
        .map(|c| RGBA8::new(c[0], c[1], c[2], c[3]))
        .collect();
    let height = pixels.len() / width;
    if height == 0 {
        return;
    }
    let rows: Vec<&[RGBA8]> = pixels.chunks_exact(width).collect();
    let original = from_rows(&rows).expect("rectangular rows");

    let mut image = original.clone();
    for vertical in [false, true] {
        flip(&mut image, vertical);
        flip(&mut image, vertical);
        assert_eq!(to_rows(&image), to_rows(&original), "double flip vertical={vertical}");
    }

    transpose(&mut image);
    assert_eq!((image.width(), image.height()), (height, width));
    transpose(&mut image);
    assert_eq!(to_rows(&image), to_rows(&original), "double transpose");

    rotate(&mut image, true);
    rotate(&mut image, false);
    assert_eq!(to_rows(&image), to_rows(&original), "right then left");

    let rendered = render(&image);
    assert_eq!(rendered.lines().count(), 1 + width * height);

    dered(&mut image);
    mono(&mut image, data.len() % 2 == 0);
    assert!(image.buf().iter().zip(original.buf()).all(|(a, b)| a.a == b.a));
});
