//! Scanner benchmarks for `nulo_lexer_core`.
//!
//! Measures pure tokenization throughput: no rendering, no I/O.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nulo_lexer_core::{SourceBuffer, TokenKind};

/// Generate N simple functions for scaling benchmarks.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("func f{i}(x, y) {{\n  return x + {i} * y;\n}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark scanner throughput at various scales.
///
/// Consumes tokens in a tight loop without collecting into a Vec,
/// measuring pure scanning speed.
fn bench_scanner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_core/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = buf.scanner();
                    loop {
                        let tok = scanner.next_token();
                        if tok.kind == TokenKind::EndOfInput {
                            break;
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scanner_throughput);
criterion_main!(benches);
