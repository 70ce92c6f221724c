use gridpath::{run_search, Grid, PathFinderState, Point, Role};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let mut grid = Grid::new(25, 16);

    let start = Point { row: 12, col: 0 };
    let end = Point { row: 12, col: 24 };
    grid.set_role(start, Role::Start)?;
    grid.set_role(end, Role::End)?;

    // a wall down the middle with a single opening near the bottom
    for row in 0..22 {
        grid.set_role(Point { row, col: 12 }, Role::Obstacle)?;
    }

    grid.reset_search_annotations();

    let mut updates = 0usize;
    let state = run_search(&mut grid, start, end, |_, _| updates += 1, || false)?;

    println!("{}", grid);

    match state {
        PathFinderState::PathFound(result) => {
            println!(
                "found a {}-edge path after {} cell updates:",
                result.length, updates
            );
            for point in &result.path {
                print!("{} ", point);
            }
            println!();
        }
        other => println!("{:?} after {} cell updates", other, updates),
    }

    Ok(())
}
