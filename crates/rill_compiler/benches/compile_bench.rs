//! Benchmark harness for the Rill compiler.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p rill_compiler

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rill_compiler::Compilation;
use rill_evaluator::Variables;
use rill_syntax::SyntaxTree;

/// Small source for micro-benchmarks.
const SMALL_SOURCE: &str = r#"
var x = 42
let greeting = "hello"
function add(a: Int, b: Int): Int {
    return a + b
}
add(1, 2)
"#;

/// Medium source with every statement form.
const MEDIUM_SOURCE: &str = r#"
function gcd(a: Int, b: Int): Int {
    var x = a
    var y = b
    while y != 0 {
        var t = y
        y = x - x / y * y
        x = t
    }
    return x
}

function sumTo(n: Int): Int {
    var total = 0
    for i = 1 to n {
        total = total + i
    }
    return total
}

function classify(n: Int): String {
    if n < 0 {
        return "negative"
    } else if n == 0 {
        return "zero"
    }
    return "positive"
}

var acc = 0
var i = 0
do {
    acc = acc + gcd(i * 6, 48) + sumTo(i)
    i = i + 1
} while i < 10
classify(acc)
"#;

/// Generate a source with many independent functions.
fn generate_large_source(num_functions: usize) -> String {
    let mut source = String::new();
    for i in 0..num_functions {
        source.push_str(&format!(
            "function func{i}(x: Int): Int {{
    var total = x
    for j = 1 to 10 {{
        if j > 5 {{
            total = total + j * {i}
        }} else {{
            total = total - j
        }}
    }}
    return total
}}\n\n"
        ));
    }
    source.push_str("var result = 0\n");
    for i in 0..num_functions {
        source.push_str(&format!("result = result + func{i}({i})\n"));
    }
    source.push_str("result\n");
    source
}

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("small", |b| {
        b.iter(|| SyntaxTree::parse(black_box(SMALL_SOURCE)));
    });

    group.bench_function("medium", |b| {
        b.iter(|| SyntaxTree::parse(black_box(MEDIUM_SOURCE)));
    });

    let large = generate_large_source(50);
    group.bench_function("large", |b| {
        b.iter(|| SyntaxTree::parse(black_box(large.as_str())));
    });

    group.finish();
}

// ============================================================================
// Bind Benchmarks
// ============================================================================

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");

    group.bench_function("medium", |b| {
        b.iter(|| {
            let tree = SyntaxTree::parse(black_box(MEDIUM_SOURCE));
            let compilation = Compilation::new_script(tree);
            black_box(compilation.global_scope().diagnostics.len())
        });
    });

    let large = generate_large_source(50);
    group.bench_function("large", |b| {
        b.iter(|| {
            let tree = SyntaxTree::parse(black_box(large.as_str()));
            let compilation = Compilation::new_script(tree);
            black_box(compilation.global_scope().diagnostics.len())
        });
    });

    group.finish();
}

// ============================================================================
// Full Pipeline Benchmarks
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("small", |b| {
        b.iter(|| {
            let tree = SyntaxTree::parse(black_box(SMALL_SOURCE));
            let compilation = Compilation::new_script(tree);
            let mut variables = Variables::default();
            black_box(compilation.evaluate(&mut variables))
        });
    });

    group.bench_function("medium", |b| {
        b.iter(|| {
            let tree = SyntaxTree::parse(black_box(MEDIUM_SOURCE));
            let compilation = Compilation::new_script(tree);
            let mut variables = Variables::default();
            black_box(compilation.evaluate(&mut variables))
        });
    });

    group.finish();
}

// ============================================================================
// Scaling Benchmarks
// ============================================================================

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [10, 50, 100, 200] {
        let source = generate_large_source(size);
        group.bench_with_input(BenchmarkId::new("functions", size), &source, |b, source| {
            b.iter(|| {
                let tree = SyntaxTree::parse(black_box(source.as_str()));
                let compilation = Compilation::new_script(tree);
                let mut variables = Variables::default();
                black_box(compilation.evaluate(&mut variables))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_bind, bench_evaluate, bench_scaling);
criterion_main!(benches);
