use grid_astar::{Outcome, Recorder, Search, Session, Step};

// Drives a session the way an interactive host would: the first two clicks place the
// start and goal, the following ones walls. The search is then advanced one expansion
// at a time while the frontier size is printed.

fn main() {
    env_logger::init();
    let mut session = Session::default();
    let cell = session.grid().cell_size() as f64;
    let click = |row: usize, col: usize| (col as f64 * cell + 1.0, row as f64 * cell + 1.0);

    let clicks = [(3, 3), (3, 12)]
        .into_iter()
        .chain((0..8).map(|row| (row, 8)));
    for (row, col) in clicks {
        let (x, y) = click(row, col);
        let edit = session.primary(x, y).unwrap();
        println!("{:?}", edit);
    }

    let mut grid = session.grid().clone();
    let mut recorder = Recorder::new();
    let mut search = Search::new(&mut grid).unwrap();
    let outcome = loop {
        match search.step(&mut recorder).unwrap() {
            Step::Expanded(p) => println!(
                "expanded {} (open: {}, parents: {})",
                p,
                search.frontier().len(),
                search.came_from().len()
            ),
            Step::Done(outcome) => break outcome,
        }
    };
    match outcome {
        Outcome::Found(path) => println!("{:?}", path.points()),
        Outcome::Exhausted => println!("No path"),
    }

    // The same search through the session freezes the grid afterwards.
    session.run(&mut ()).unwrap();
    println!("editable after run: {}", session.is_editable());
}
