//! Benchmarks for reading and styling pdftohtml output.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic pdftohtml XML with body text, list items,
//! footnote markers and links on every page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdf_features::{ParseOptions, PdfFeatures};

/// Creates pdftohtml XML with the given number of pages.
fn create_test_xml(page_count: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<pdf2xml>\n");

    for page in 1..=page_count {
        xml.push_str(&format!(
            "<page number=\"{}\" position=\"absolute\" top=\"0\" left=\"0\" height=\"1262\" width=\"892\">\n",
            page
        ));
        if page == 1 {
            xml.push_str("<fontspec id=\"0\" size=\"12\" family=\"Times\" color=\"#000000\"/>\n");
            xml.push_str("<fontspec id=\"1\" size=\"7\" family=\"Times\" color=\"#000000\"/>\n");
        }

        let mut top = 60;
        for line in 0..40 {
            match line % 8 {
                3 | 4 => xml.push_str(&format!(
                    "<text top=\"{}\" left=\"80\" width=\"400\" height=\"15\" font=\"0\">• item {}</text>\n",
                    top, line
                )),
                5 => xml.push_str(&format!(
                    "<text top=\"{}\" left=\"100\" width=\"400\" height=\"15\" font=\"0\">◦ nested {}</text>\n",
                    top, line
                )),
                6 => xml.push_str(&format!(
                    "<text top=\"{}\" left=\"80\" width=\"400\" height=\"15\" font=\"0\">see <a href=\"https://example.org/{}\">reference</a></text>\n",
                    top, line
                )),
                _ => {
                    xml.push_str(&format!(
                        "<text top=\"{}\" left=\"80\" width=\"600\" height=\"15\" font=\"0\">Body text for line {} of the benchmark page</text>\n",
                        top, line
                    ));
                    xml.push_str(&format!(
                        "<text top=\"{}\" left=\"682\" width=\"6\" height=\"9\" font=\"1\">{}</text>\n",
                        top - 3,
                        line % 10
                    ));
                }
            }
            top += 20;
        }

        xml.push_str("</page>\n");
    }

    xml.push_str("</pdf2xml>\n");
    xml
}

/// Benchmark reading XML into a document.
fn bench_xml_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml_reading");

    for page_count in [1, 10, 50].iter() {
        let xml = create_test_xml(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| PdfFeatures::from_poppler_xml_str(black_box(&xml), ParseOptions::new()));
        });
    }

    group.finish();
}

/// Benchmark the style pass, parallel and sequential.
fn bench_style_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_pass");
    let xml = create_test_xml(50);

    for (name, parallel) in [("parallel", true), ("sequential", false)] {
        let doc = PdfFeatures::from_poppler_xml_str(
            &xml,
            ParseOptions::new().with_parallel(parallel),
        );

        group.bench_function(name, |b| {
            b.iter(|| {
                let mut doc = doc.clone();
                doc.set_token_styles();
                black_box(doc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_xml_reading, bench_style_pass);
criterion_main!(benches);
