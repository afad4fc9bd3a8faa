//! SpookyHash benchmarks
//!
//! Run: `cargo bench -p spooky`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p spooky`

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spooky::{Akron, Alpha, BlockMix, Jasper, Spooky128, SpookyHash};

mod common;

fn oneshot<V: BlockMix>(c: &mut Criterion, name: &str) {
  let mut group = c.benchmark_group(name);
  for (len, data) in common::sized_inputs() {
    common::set_throughput(&mut group, len);
    group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
      b.iter(|| SpookyHash::<V>::oneshot(black_box(data), 1, 2));
    });
  }
  group.finish();
}

fn bench_oneshot(c: &mut Criterion) {
  oneshot::<Alpha>(c, "spooky128/oneshot");
  oneshot::<Akron>(c, "akron128/oneshot");
  oneshot::<Jasper>(c, "jasper128/oneshot");
}

fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("spooky128/streaming");
  let data = common::pseudo_random_bytes(64 * 1024, 0x5EED);
  common::set_throughput(&mut group, data.len());

  for chunk in [1usize, 13, 64, 96, 4096] {
    group.bench_with_input(BenchmarkId::new("chunk", chunk), &data, |b, data| {
      b.iter(|| {
        let mut state = Spooky128::init(1, 2);
        for part in data.chunks(chunk) {
          state.update(black_box(part));
        }
        state.finalize()
      });
    });
  }
  group.finish();
}

fn bench_keyed(c: &mut Criterion) {
  let mut group = c.benchmark_group("spooky128/keyed");
  let data = common::pseudo_random_bytes(64, 0xC0DE);
  common::set_throughput(&mut group, data.len());
  group.bench_function("64", |b| {
    b.iter(|| Spooky128::hash_keyed(black_box(b"sixteen byte key"), black_box(&data)));
  });
  group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming, bench_keyed);
criterion_main!(benches);
