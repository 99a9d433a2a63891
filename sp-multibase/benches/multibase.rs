use criterion::{
  black_box,
  criterion_group,
  criterion_main,
  Criterion,
};
use sp_multibase::{
  decode,
  encode,
  Base,
};

/// A 36-byte CIDv1 with a sha2-256 digest, the usual payload size.
fn cid_sized_input() -> Vec<u8> {
  let mut bytes = vec![0x01, 0x55, 0x12, 0x20];
  bytes.extend((0u8..32).map(|b| b.wrapping_mul(37)));
  bytes
}

fn bench_encode(c: &mut Criterion) {
  let input = cid_sized_input();
  let mut group = c.benchmark_group("encode");
  for base in Base::ALL {
    group.bench_function(base.name(), |b| {
      b.iter(|| {
        let _ = black_box(encode(*base, black_box(&input)));
      })
    });
  }
  group.finish();
}

fn bench_decode(c: &mut Criterion) {
  let input = cid_sized_input();
  let mut group = c.benchmark_group("decode");
  for base in Base::ALL {
    let text = encode(*base, &input);
    group.bench_function(base.name(), |b| {
      b.iter(|| {
        let _ = black_box(decode(black_box(&text)));
      })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
