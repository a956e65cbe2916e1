use criterion::criterion_main;

mod benches;

criterion_main! {
    benches::uni_tc_bench::benchmarks,
}
