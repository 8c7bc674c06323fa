use std::env;
use std::error::Error;
use std::sync::Arc;
use std::thread;

use tabfun::configuration::Configuration;
use tabfun::math::differential::tabulateddifferentialoperator::TabulatedDifferentialOperator;
use tabfun::math::function::mathfunction::from_fn;
use tabfun::math::ode::boundaryvalueproblem::BoundaryValueProblem;
use tabfun::math::ode::bsplinesolver::BSplineBoundaryValueSolver;
use tabfun::math::ode::rungekutta::RungeKuttaSolver;
use tabfun::math::tabulated::synchronizedtabulatedfunction::SynchronizedTabulatedFunction;
use tabfun::math::tabulated::tabulatedfunction::TabulatedFunction;
use tabfun::math::tabulated::tabulatedfunctioncodec;

const TABLE_POINTS: usize = 11;

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::default(),
    };
    let factory = config.tabulated_function_factory();

    // dy/dx = x + y, y(0) = 1  ->  y = 2e^x - x - 1
    let ivp = RungeKuttaSolver::new(|x, y| x + y, 0.0, 1.0, 0.01)?;
    let ivp_table = ivp.to_tabulated(factory.as_ref(), 0.0, 1.0, TABLE_POINTS)?;
    println!("x, runge-kutta, exact");
    for point in ivp_table.points() {
        println!("{:.2}, {:.10}, {:.10}",
                 point.x(),
                 point.y(),
                 2.0 * point.x().exp() - point.x() - 1.0);
    }

    // y'' = 2, y(0) = 0, y(1) = 1  ->  y = x^2
    let problem = BoundaryValueProblem::second_order(from_fn(|_| 2.0), (0.0, 1.0), (0.0, 1.0))?;
    let bvp = BSplineBoundaryValueSolver::with_settings(&problem, 10, config.linear_solver())?;
    let bvp_table = bvp.to_tabulated(factory.as_ref(), 0.0, 1.0, TABLE_POINTS)?;
    println!();
    println!("x, b-spline, exact");
    for point in bvp_table.points() {
        println!("{:.2}, {:.10}, {:.10}", point.x(), point.y(), point.x() * point.x());
    }

    let operator = TabulatedDifferentialOperator::new(Arc::clone(&factory));
    let slope = operator.derive_function(bvp_table.as_ref())?;
    println!();
    println!("x, d/dx b-spline");
    for point in slope.points() {
        println!("{:.2}, {:.6}", point.x(), point.y());
    }

    let shared = SynchronizedTabulatedFunction::new(ivp_table);
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let function = shared.clone();
            thread::spawn(move || {
                function.do_synchronously(|inner| {
                    let last = inner.count() - 1;
                    let y = inner.get_y(last)?;
                    inner.set_y(last, y + 1.0)
                })
            })
        })
        .collect();
    for worker in workers {
        worker.join().map_err(|_| "worker thread panicked")??;
    }

    let encoded = tabulatedfunctioncodec::encode(&shared)?;
    println!();
    println!("{}", String::from_utf8(encoded)?);
    Ok(())
}
