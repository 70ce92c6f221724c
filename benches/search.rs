use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridpath::{run_search, Grid, PathFinderState, Point, Role};

/// A grid walled into a serpentine corridor: every other column is an
/// obstacle wall with its opening on alternating ends, forcing the
/// search to sweep the whole board.
fn serpentine_grid(size: usize) -> (Grid, Point, Point) {
    let mut grid = Grid::new(size, 16);

    for (i, col) in (1..size - 1).step_by(2).enumerate() {
        let open_row = if i % 2 == 0 { size - 1 } else { 0 };
        for row in 0..size {
            if row != open_row {
                grid.set_role(Point { row, col }, Role::Obstacle).unwrap();
            }
        }
    }

    let start = Point { row: 0, col: 0 };
    let end = Point {
        row: 0,
        col: size - 1,
    };
    grid.set_role(start, Role::Start).unwrap();
    grid.set_role(end, Role::End).unwrap();

    (grid, start, end)
}

fn bench_serpentine(c: &mut Criterion, size: usize) {
    let (grid, start, end) = serpentine_grid(size);

    c.bench_function(&format!("serpentine_{}", size), |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            grid.reset_search_annotations();
            let state = run_search(
                &mut grid,
                black_box(start),
                black_box(end),
                |_, _| {},
                || false,
            )
            .unwrap();
            assert!(matches!(state, PathFinderState::PathFound(_)));
        })
    });
}

pub fn search_small(c: &mut Criterion) {
    bench_serpentine(c, 16);
}

pub fn search_medium(c: &mut Criterion) {
    bench_serpentine(c, 32);
}

pub fn search_large(c: &mut Criterion) {
    bench_serpentine(c, 64);
}

criterion_group!(benches, search_small, search_medium, search_large);
criterion_main!(benches);
