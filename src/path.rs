use std::collections::HashMap;

use crate::find::StepState;
use crate::grid::Point;

/// Walk the predecessor chain backwards from `end` and return the path
/// as an ordered sequence.
///
/// The returned vector runs start-to-end and contains the step after the
/// start through `end` inclusive, so its length equals the number of
/// edges on the path. Notifications are emitted in the opposite order:
/// one `StepState::PathMarked` per interior point, from the
/// end-adjacent point back toward the start, which lets a shell paint
/// the path retroactively the moment the goal is reached. The start and
/// end themselves are not marked; their roles already render distinctly.
pub fn reconstruct<F>(came_from: &HashMap<Point, Point>, end: Point, on_step: &mut F) -> Vec<Point>
where
    F: FnMut(Point, StepState),
{
    let mut path = vec![end];
    let mut current = end;

    while let Some(&previous) = came_from.get(&current) {
        if !came_from.contains_key(&previous) {
            // reached the start, which carries no predecessor entry
            break;
        }
        on_step(previous, StepState::PathMarked);
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain(points: &[Point]) -> HashMap<Point, Point> {
        points.windows(2).map(|w| (w[1], w[0])).collect()
    }

    #[test]
    fn path_runs_start_to_end_without_the_start() {
        // start (0,0), then a straight corridor to (0,4)
        let came_from = chain(&[
            Point { row: 0, col: 0 },
            Point { row: 0, col: 1 },
            Point { row: 0, col: 2 },
            Point { row: 0, col: 3 },
            Point { row: 0, col: 4 },
        ]);

        let path = reconstruct(&came_from, Point { row: 0, col: 4 }, &mut |_, _| {});

        assert_eq!(
            path,
            vec![
                Point { row: 0, col: 1 },
                Point { row: 0, col: 2 },
                Point { row: 0, col: 3 },
                Point { row: 0, col: 4 },
            ]
        );
    }

    #[test]
    fn marks_are_emitted_goal_to_start_for_interior_points() {
        let came_from = chain(&[
            Point { row: 0, col: 0 },
            Point { row: 1, col: 0 },
            Point { row: 2, col: 0 },
            Point { row: 2, col: 1 },
        ]);

        let mut marked = Vec::new();
        reconstruct(&came_from, Point { row: 2, col: 1 }, &mut |point, state| {
            assert_eq!(state, StepState::PathMarked);
            marked.push(point);
        });

        // end and start excluded, end-adjacent first
        assert_eq!(
            marked,
            vec![Point { row: 2, col: 0 }, Point { row: 1, col: 0 }]
        );
    }

    #[test]
    fn single_step_path_marks_nothing() {
        let came_from = chain(&[Point { row: 0, col: 0 }, Point { row: 0, col: 1 }]);

        let mut marks = 0;
        let path = reconstruct(&came_from, Point { row: 0, col: 1 }, &mut |_, _| marks += 1);

        assert_eq!(path, vec![Point { row: 0, col: 1 }]);
        assert_eq!(marks, 0);
    }
}
