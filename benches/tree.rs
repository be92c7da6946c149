use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use merkle_audit::{Blake3Hasher, Hash, Hasher, MerkleTree, Sha256Hasher};

fn leaves(n: u64) -> Vec<Hash> {
    (0..n).map(|i| Blake3Hasher.digest(&i.to_le_bytes())).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [16u64, 1024, 16 * 1024] {
        let input = leaves(n);
        group.bench_with_input(BenchmarkId::new("blake3", n), &input, |b, input| {
            b.iter(|| {
                let mut tree = MerkleTree::new();
                tree.build_tree(input.clone()).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("sha256", n), &input, |b, input| {
            b.iter(|| {
                let mut tree = MerkleTree::with_hasher(Sha256Hasher);
                tree.build_tree(input.clone()).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_prove_and_verify(c: &mut Criterion) {
    let input = leaves(4096);
    let mut tree = MerkleTree::new();
    let root = tree.build_tree(input.clone()).unwrap();
    let target = &input[input.len() - 1];
    let trail = tree.audit_proof(target).unwrap();

    c.bench_function("audit_proof/4096", |b| {
        b.iter(|| tree.audit_proof(black_box(target)).unwrap());
    });
    c.bench_function("verify_audit/4096", |b| {
        b.iter(|| tree.verify_audit(&root, black_box(target), &trail));
    });
    c.bench_function("verify/4096", |b| {
        b.iter(|| tree.verify(&root, black_box(target)));
    });
}

criterion_group!(benches, bench_build, bench_prove_and_verify);
criterion_main!(benches);
