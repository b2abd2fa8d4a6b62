use mtclone::{clone_from_capture, decode_capture, find_wins, temper, untemper, ValidationPolicy};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn bench_untemper(c: &mut Criterion) {
    let output = temper(0xdeadbeef);
    c.bench_function("untemper", |b| b.iter(|| untemper(black_box(output))));
}

pub fn bench_clone_from_capture(c: &mut Criterion) {
    let text = std::fs::read_to_string("./data/capture.hex").unwrap();
    let words = decode_capture(&text).unwrap();
    c.bench_function("clone_from_capture", |b| {
        b.iter(|| clone_from_capture(black_box(&words), ValidationPolicy::default()))
    });
}

pub fn bench_find_wins(c: &mut Criterion) {
    let text = std::fs::read_to_string("./data/capture.hex").unwrap();
    let words = decode_capture(&text).unwrap();
    let rng = clone_from_capture(&words, ValidationPolicy::default()).unwrap();
    c.bench_function("find_wins", |b| {
        b.iter(|| find_wins(&mut rng.clone(), black_box(10)))
    });
}

criterion_group!(benches, bench_untemper, bench_clone_from_capture, bench_find_wins);
criterion_main!(benches);
