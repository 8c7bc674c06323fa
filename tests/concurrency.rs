use std::sync::{
    Arc,
    Barrier
};
use std::thread;

use tabfun::math::function::mathfunction::MathFunction;
use tabfun::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfun::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfun::math::tabulated::synchronizedtabulatedfunction::SynchronizedTabulatedFunction;
use tabfun::math::tabulated::tabulatedfunction::TabulatedFunction;

const THREADS: usize = 8;

fn run_doubling(shared: SynchronizedTabulatedFunction) -> f64 {
    let barrier = Arc::new(Barrier::new(THREADS));
    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let function = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                function.do_synchronously(|inner| {
                    let y = inner.get_y(0).unwrap();
                    thread::yield_now();
                    inner.set_y(0, 2.0 * y).unwrap();
                });
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    shared.get_y(0).unwrap()
}

#[test]
fn test_read_modify_write_is_atomic() {
    let array = ArrayTabulatedFunction::new(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
    assert_eq!(run_doubling(SynchronizedTabulatedFunction::new(Box::new(array))), 256.0);

    let list = LinkedListTabulatedFunction::new(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
    assert_eq!(run_doubling(SynchronizedTabulatedFunction::new(Box::new(list))), 256.0);
}

#[test]
fn test_snapshots_stay_ordered_under_mutation() {
    let list = LinkedListTabulatedFunction::new(&[0.0, 1000.0], &[0.0, 0.0]).unwrap();
    let shared = SynchronizedTabulatedFunction::new(Box::new(list));

    let writer = {
        let mut function = shared.clone();
        thread::spawn(move || {
            for i in 1..500 {
                let x = (i * 7 % 997) as f64 + 0.5;
                function.insert(x, x).unwrap();
                if i % 3 == 0 {
                    function.remove(1).unwrap();
                }
            }
        })
    };

    for _ in 0..200 {
        let snapshot: Vec<_> = shared.iter().collect();
        assert!(snapshot.len() >= 2);
        assert!(snapshot.windows(2).all(|pair| pair[0].x() < pair[1].x()));
        assert!(shared.apply(500.0).is_finite());
    }
    writer.join().unwrap();

    let points: Vec<_> = (&shared).into_iter().collect();
    assert_eq!(points.len(), shared.count());
    assert_eq!(points.first().map(|p| p.x()), Some(0.0));
    assert_eq!(points.last().map(|p| p.x()), Some(1000.0));
}
