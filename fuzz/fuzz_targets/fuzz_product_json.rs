#![no_main]
use libfuzzer_sys::fuzz_target;
use product_transparency::{parse_product_str, PdfRenderer, TransparencyScorer};

/// Fuzz the product JSON entry point through scoring and rendering.
///
/// Any product that decodes must score within bounds and render without
/// panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(product) = parse_product_str(s) {
            let score = TransparencyScorer::new().score_product(&product);
            assert!(score.score <= 100);
            let _ = PdfRenderer::default().render(&product);
        }
    }
});
