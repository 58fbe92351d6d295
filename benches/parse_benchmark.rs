//! Benchmarks for unrtf parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test parsing performance with synthetic RTF data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic RTF document with the given number of paragraphs.
fn create_test_rtf(paragraph_count: usize) -> String {
    let mut content = String::new();

    // Header, font table and colour table
    content.push_str("{\\rtf1\\ansi\\ansicpg1252\\deff0\n");
    content.push_str("{\\fonttbl{\\f0\\froman\\fcharset0 Times New Roman;}{\\f1\\fswiss Arial;}}\n");
    content.push_str("{\\colortbl;\\red255\\green0\\blue0;\\red0\\green0\\blue255;}\n");

    for i in 0..paragraph_count {
        content.push_str(&format!(
            "\\pard\\f0\\fs24 Paragraph {} with {{\\b bold}}, {{\\i italic}} and {{\\cf1 coloured}} text. Caf\\'e9 \\u21340?.\\par\n",
            i + 1
        ));
    }

    content.push('}');
    content
}

/// Creates a synthetic RTF document holding one table.
fn create_table_rtf(row_count: usize, column_count: usize) -> String {
    let mut content = String::from("{\\rtf1\\ansi\\deff0 {\\fonttbl{\\f0 Arial;}}\n");

    for row in 0..row_count {
        content.push_str("\\trowd\\trgaph108\\trleft-108");
        for column in 0..column_count {
            content.push_str(&format!("\\cellx{}", (column + 1) * 1440));
        }
        content.push_str("\n\\intbl ");
        for column in 0..column_count {
            content.push_str(&format!("R{}C{}\\cell ", row + 1, column + 1));
        }
        content.push_str("\\row\n");
    }

    content.push('}');
    content
}

/// Benchmark RTF format detection.
fn bench_format_detection(c: &mut Criterion) {
    let rtf_data = create_test_rtf(1).into_bytes();
    let non_rtf_data = b"Not an RTF file at all, just random text content";

    c.bench_function("detect_valid_rtf", |b| {
        b.iter(|| unrtf::detect_format_from_bytes(black_box(&rtf_data)).unwrap());
    });

    c.bench_function("detect_non_rtf", |b| {
        b.iter(|| unrtf::detect_format_from_bytes(black_box(non_rtf_data)).is_err());
    });
}

/// Benchmark RTF parsing at various sizes.
fn bench_rtf_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtf_parsing");

    for paragraph_count in [10, 100, 1000].iter() {
        let src = create_test_rtf(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| unrtf::parse_str(black_box(&src)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark table parsing.
fn bench_table_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_parsing");

    for (rows, columns) in [(10, 4), (100, 8)].iter() {
        let src = create_table_rtf(*rows, *columns);

        group.bench_function(format!("{}x{}", rows, columns), |b| {
            b.iter(|| unrtf::parse_str(black_box(&src)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark text rendering with cleanup.
fn bench_text_rendering(c: &mut Criterion) {
    let doc = unrtf::parse_str(&create_test_rtf(100)).unwrap();
    let options = unrtf::RenderOptions::new().with_cleanup_preset(unrtf::CleanupPreset::Standard);

    c.bench_function("render_text_standard", |b| {
        b.iter(|| unrtf::render::to_text(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_rtf_parsing,
    bench_table_parsing,
    bench_text_rendering,
);
criterion_main!(benches);
