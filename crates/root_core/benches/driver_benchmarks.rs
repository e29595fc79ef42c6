//! Benchmarks for root_core.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use root_core::linalg::{dot, dot_mat, identity};
use root_core::{Driver, Matrix, SolveContext, Strategy, TerminationFlag, Vector};

/// Damped fixed-point iteration x <- x - alpha * f(x).
struct Relaxation<const D: usize> {
    alpha: f64,
    x: Vector<D>,
    fx: Vector<D>,
}

impl<F, const D: usize> Strategy<F, D> for Relaxation<D>
where
    F: FnMut(&Vector<D>) -> Vector<D>,
{
    type Args = Vector<D>;

    fn initialize(&mut self, f: &mut F, x0: Vector<D>, _ctx: &mut SolveContext<'_>) -> bool {
        self.x = x0;
        self.fx = f(&self.x);
        true
    }

    fn iterate(&mut self, f: &mut F, ctx: &mut SolveContext<'_>) -> bool {
        for (x, fx) in self.x.iter_mut().zip(self.fx.iter()) {
            *x -= self.alpha * fx;
        }
        self.fx = f(&self.x);
        if ctx.is_nan(&self.fx) {
            ctx.set_flag(TerminationFlag::FunctionIsNonfinite);
            return false;
        }
        true
    }

    fn has_converged(&self, ctx: &mut SolveContext<'_>) -> bool {
        let done = ctx.is_zero_vec(&self.fx, &self.x);
        if done {
            ctx.set_flag(TerminationFlag::ResidualZero);
        }
        done
    }

    fn zero(&self) -> Vector<D> {
        self.x
    }

    fn residual(&self) -> Vector<D> {
        self.fx
    }
}

fn benchmark_solve(c: &mut Criterion) {
    let driver = Driver::<Relaxation<8>, 8>::new();
    let target: Vector<8> = std::array::from_fn(|i| i as f64 - 3.5);

    c.bench_function("relaxation_linear_8d", |b| {
        b.iter(|| {
            let mut strategy = Relaxation {
                alpha: 0.5,
                x: [0.0; 8],
                fx: [0.0; 8],
            };
            let f = |x: &Vector<8>| -> Vector<8> { std::array::from_fn(|i| x[i] - target[i]) };
            driver.solve(&mut strategy, f, black_box([0.0; 8]))
        })
    });
}

fn benchmark_linalg(c: &mut Criterion) {
    let eye: Matrix<16> = identity();
    let v: Vector<16> = std::array::from_fn(|i| (i as f64).sin());

    c.bench_function("dot_16", |b| b.iter(|| dot(black_box(&v), black_box(&v))));
    c.bench_function("dot_mat_16", |b| {
        b.iter(|| dot_mat(black_box(&eye), black_box(&v)))
    });
}

criterion_group!(benches, benchmark_solve, benchmark_linalg);
criterion_main!(benches);
