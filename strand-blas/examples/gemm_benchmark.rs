use std::time::Instant;
use strand_blas::level3;
use strand_blas::{Complex64, Layout, RealScalar, Scalar, Transpose};

/// Naive triple loop over row-major operands, used as the reference.
fn gemm_triple_loop<T: Scalar>(a: &[T], b: &[T], c: &mut [T], m: usize, k: usize, n: usize) {
    c.fill(T::zero());
    for i in 0..m {
        for j in 0..n {
            let mut s = T::zero();
            for p in 0..k {
                s += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = s;
        }
    }
}

fn bench_one<T: Scalar>(
    name: &str,
    m: usize,
    n: usize,
    k: usize,
    iters: usize,
    make: impl Fn(usize) -> T,
) {
    let a: Vec<T> = (0..m * k).map(|i| make(i * 7 + 3)).collect();
    let b: Vec<T> = (0..k * n).map(|i| make(i * 11 + 5)).collect();
    let mut c_ref = vec![T::zero(); m * n];
    let mut c_new = vec![T::zero(); m * n];

    let run = |c: &mut [T]| {
        level3::gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            m,
            n,
            k,
            T::one(),
            &a,
            k,
            &b,
            n,
            T::zero(),
            c,
            n,
        );
    };

    // Warmup
    gemm_triple_loop(&a, &b, &mut c_ref, m, k, n);
    run(c_new.as_mut_slice());

    // Verify correctness
    let max_err = c_ref
        .iter()
        .zip(c_new.iter())
        .map(|(&r, &v)| (r - v).abs1().widen())
        .fold(0.0f64, f64::max);
    let max_val = c_ref.iter().map(|v| v.abs1().widen()).fold(0.0f64, f64::max);

    let t0 = Instant::now();
    for _ in 0..iters {
        gemm_triple_loop(&a, &b, &mut c_ref, m, k, n);
    }
    let ref_time = t0.elapsed().as_secs_f64() / iters as f64;

    let t1 = Instant::now();
    for _ in 0..iters {
        run(c_new.as_mut_slice());
    }
    let new_time = t1.elapsed().as_secs_f64() / iters as f64;

    // A complex multiply-add is four real ones.
    let flops_per = if T::IS_COMPLEX { 8.0 } else { 2.0 };
    let flops = flops_per * m as f64 * n as f64 * k as f64;

    println!(
        "  {:16} | loop: {:8.2} ms ({:6.2} GFLOPS) | gemm: {:8.2} ms ({:6.2} GFLOPS) | speedup: {:5.2}x | err: {:.2e}",
        name,
        ref_time * 1000.0,
        flops / ref_time / 1e9,
        new_time * 1000.0,
        flops / new_time / 1e9,
        ref_time / new_time,
        if max_val > 0.0 { max_err / max_val } else { max_err }
    );
}

fn main() {
    println!("=== GEMM Benchmark: triple loop vs gathered-dot gemm ===");
    println!(
        "  {:16} | {:>38} | {:>38} | {:>11} | err",
        "Size", "Triple loop", "gemm", "Speedup"
    );
    println!("  {}", "-".repeat(130));

    let real = |i: usize| (i % 1000) as f64 * 0.001;
    for &(n, iters) in &[(32, 2000), (64, 500), (128, 100), (256, 10), (512, 2)] {
        bench_one(&format!("f32 {n}x{n}"), n, n, n, iters, |i| real(i) as f32);
        bench_one(&format!("f64 {n}x{n}"), n, n, n, iters, real);
        bench_one(&format!("c64 {n}x{n}"), n, n, n, iters.div_ceil(4), |i| {
            Complex64::new(real(i), real(i + 1))
        });
    }
}
