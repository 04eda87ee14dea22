use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sm3::Sm3;

fn human_readable_size(size: usize) -> String {
    if size >= 1024 {
        format!("{}KB", size / 1024)
    } else {
        format!("{}B", size)
    }
}

fn bench_sm3(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm3");
    for &size in [16usize, 64, 256, 1024, 8192, 65536].iter() {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("hash {}", human_readable_size(size)), |b| {
            b.iter(|| black_box(sm3::hash(black_box(&data))))
        });

        let mut hasher = Sm3::new();
        group.bench_function(format!("streaming {}", human_readable_size(size)), |b| {
            b.iter(|| {
                hasher.write(black_box(&data));
                black_box(hasher.finalize())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sm3);
criterion_main!(benches);
