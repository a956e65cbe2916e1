use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::UniformRand;
use criterion::{black_box, criterion_group, BatchSize, BenchmarkId, Criterion};
use targetcheck::poly;
use targetcheck::univariate_tc::{InputParams, RemainderMode, UnivariateTargetCheck};
use targetcheck::TargetCheck;

fn univariate_target_check_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("uni_targetcheck");

    for size in [8, 10, 12] {
        let rng = &mut ark_std::test_rng();

        let q_coeffs: Vec<Fr> = (0..(1 << size)).map(|_| Fr::rand(rng)).collect();
        let t_coeffs: Vec<Fr> = (0..4).map(|_| Fr::rand(rng)).collect();
        let p_coeffs = poly::multiply(&q_coeffs, &t_coeffs);

        let pp = InputParams::<Bls12_381> {
            max_degree: p_coeffs.len() - 1,
            t_coeffs: t_coeffs.clone(),
            remainder_mode: RemainderMode::Discard,
        };
        let (pk, vk) = UnivariateTargetCheck::<Bls12_381>::setup(&pp).unwrap();

        group.bench_with_input(
            BenchmarkId::new("uni_targetcheck_prove", size),
            &size,
            |b, &_size| {
                b.iter_batched(
                    || (p_coeffs.clone(), t_coeffs.clone()),
                    |(p, t)| {
                        let _proof = UnivariateTargetCheck::<Bls12_381>::prove(
                            black_box(&pk),
                            black_box(&p),
                            black_box(&t),
                        );
                    },
                    BatchSize::LargeInput,
                )
            },
        );

        let proof = UnivariateTargetCheck::<Bls12_381>::prove(&pk, &p_coeffs, &t_coeffs).unwrap();

        group.bench_with_input(
            BenchmarkId::new("uni_targetcheck_verify", size),
            &size,
            |b, &_size| {
                b.iter_batched(
                    || proof.clone(),
                    |pi| {
                        let _result =
                            UnivariateTargetCheck::<Bls12_381>::verify(black_box(&vk), &pi);
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benchmarks;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = univariate_target_check_benchmark
);
