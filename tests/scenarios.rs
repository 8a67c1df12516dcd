use grid_astar::*;

fn grid_with_endpoints(size: usize, start: Point, goal: Point) -> Grid {
    let mut grid = Grid::new(size);
    grid.set_start(start).unwrap();
    grid.set_goal(goal).unwrap();
    grid
}

/// On an empty grid the path is always as long as the Manhattan distance.
#[test]
fn open_grid_paths_are_manhattan() {
    let size = 6;
    for (sr, sc, gr, gc) in [(0, 0, 5, 5), (2, 3, 2, 0), (5, 1, 0, 4), (3, 3, 4, 3)] {
        let (start, goal) = (cell(sr, sc), cell(gr, gc));
        let mut grid = grid_with_endpoints(size, start, goal);
        let path = astar(&mut grid, &mut ()).unwrap().into_path().unwrap();
        assert_eq!(path.steps(), manhattan(&start, &goal) as usize);
        assert_eq!(
            grid.node(goal).unwrap().g_score(),
            path.steps() as f64
        );
    }
}

#[test]
fn corner_to_corner_on_five_by_five() {
    let mut grid = grid_with_endpoints(5, cell(0, 0), cell(4, 4));
    let path = astar(&mut grid, &mut ()).unwrap().into_path().unwrap();
    assert_eq!(path.steps(), 8);
    // Every move increases the row or the column.
    for pair in path.points().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let delta = (b.x - a.x, b.y - a.y);
        assert!(delta == (1, 0) || delta == (0, 1));
    }
}

/// Middle row walled except for its centre cell.
//  ___
// |S..|
// |#.#|
// |G..|
//  ___
#[test]
fn routes_through_single_gap() {
    let mut grid = grid_with_endpoints(3, cell(0, 0), cell(2, 0));
    grid.set_wall(cell(1, 0)).unwrap();
    grid.set_wall(cell(1, 2)).unwrap();
    let path = astar(&mut grid, &mut ()).unwrap().into_path().unwrap();
    assert!(path.points().contains(&cell(1, 1)));
    assert_eq!(path.steps(), 4);

    grid.reset_scores();
    grid.set_wall(cell(1, 1)).unwrap();
    let mut search = Search::new(&mut grid).unwrap();
    assert_eq!(search.run(&mut ()), Ok(Outcome::Exhausted));
    assert!(search.frontier().is_empty());
}

#[test]
fn start_cannot_also_be_goal() {
    let mut grid = Grid::new(3);
    grid.set_start(cell(1, 1)).unwrap();
    assert_eq!(
        grid.set_goal(cell(1, 1)),
        Err(Error::ConflictingRole {
            point: cell(1, 1),
            role: Role::Start
        })
    );
    assert_eq!(astar(&mut grid, &mut ()), Err(Error::MissingEndpoint));
}

/// Resetting and running again yields the same path and the same event sequence.
#[test]
fn reruns_are_deterministic() {
    let mut grid = grid_with_endpoints(12, cell(1, 1), cell(10, 9));
    for row in 0..10 {
        grid.set_wall(cell(row, 5)).unwrap();
    }
    for col in 6..11 {
        grid.set_wall(cell(7, col)).unwrap();
    }
    let mut first = Recorder::new();
    let first_path = astar(&mut grid, &mut first).unwrap();
    grid.reset_scores();
    let mut second = Recorder::new();
    let second_path = astar(&mut grid, &mut second).unwrap();
    assert_eq!(first_path, second_path);
    assert_eq!(first.events, second.events);

    // A full reset drops the layout, so restore it and compare again.
    let layout = grid.to_string();
    grid.reset_grid();
    for (row, line) in layout.lines().enumerate() {
        for (col, c) in line.chars().enumerate() {
            match c {
                'S' => grid.set_start(cell(row, col)).unwrap(),
                'G' => grid.set_goal(cell(row, col)).unwrap(),
                '#' => grid.set_wall(cell(row, col)).unwrap(),
                _ => {}
            }
        }
    }
    assert_eq!(astar(&mut grid, &mut ()).unwrap(), first_path);
}

/// Stepping manually visits the same nodes the observer reports as closed.
#[test]
fn stepwise_matches_observer() {
    let mut grid = grid_with_endpoints(8, cell(0, 0), cell(7, 6));
    grid.set_wall(cell(3, 3)).unwrap();
    grid.set_wall(cell(3, 4)).unwrap();
    let mut recorder = Recorder::new();
    let mut search = Search::new(&mut grid).unwrap();
    let mut expanded = Vec::new();
    let outcome = loop {
        match search.step(&mut recorder).unwrap() {
            Step::Expanded(p) => expanded.push(p),
            Step::Done(outcome) => break outcome,
        }
    };
    assert_eq!(search.state(), SearchState::Succeeded);
    assert_eq!(expanded.len(), search.expansions());
    assert_eq!(expanded[0], cell(0, 0));
    let closed: Vec<Point> = recorder.closed().collect();
    assert_eq!(closed, expanded[1..]);
    // One frame per expansion plus one for the path.
    assert_eq!(recorder.frames(), expanded.len() + 1);

    let path = outcome.into_path().unwrap();
    let mut reported: Vec<Point> = recorder.path_nodes().collect();
    reported.reverse();
    assert_eq!(reported, path.points()[1..path.points().len() - 1].to_vec());
    // Every reported path node was opened and closed along the way.
    let opened: Vec<Point> = recorder.opened().collect();
    let seen = |p: &Point| opened.contains(p) && expanded.contains(p);
    assert!(reported.iter().all(seen));
}

#[test]
fn cancel_from_another_thread() {
    let mut grid = grid_with_endpoints(40, cell(0, 0), cell(39, 39));
    let token = CancelToken::new();
    let remote = token.clone();
    std::thread::spawn(move || remote.cancel()).join().unwrap();
    let mut observer = Cancellable::new(Recorder::new(), token);
    assert_eq!(astar(&mut grid, &mut observer), Err(Error::Cancelled));
    assert!(observer.inner.events.is_empty());
}
