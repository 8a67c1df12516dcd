use grid_astar::{astar, cell, Grid, Node, Observer, Point};
use std::collections::HashMap;

// Renders a finished search on the terminal:
// S start, G goal, # wall, o open, x closed, * path
//
// Run with RUST_LOG=debug to see the search log.

#[derive(Default)]
struct TerminalObserver {
    marks: HashMap<Point, char>,
    frames: usize,
}

impl Observer for TerminalObserver {
    fn on_node_opened(&mut self, node: &Node) {
        self.marks.insert(node.position(), 'o');
    }
    fn on_node_closed(&mut self, node: &Node) {
        self.marks.insert(node.position(), 'x');
    }
    fn on_path_node(&mut self, node: &Node) {
        self.marks.insert(node.position(), '*');
    }
    fn on_frame_ready(&mut self) {
        self.frames += 1;
    }
}

fn main() {
    env_logger::init();
    let mut grid = Grid::new(16);
    for row in 0..12 {
        grid.set_wall(cell(row, 5)).unwrap();
    }
    for col in 8..16 {
        grid.set_wall(cell(9, col)).unwrap();
    }
    grid.set_start(cell(2, 1)).unwrap();
    grid.set_goal(cell(13, 13)).unwrap();
    println!("{}", grid);

    let mut observer = TerminalObserver::default();
    let outcome = astar(&mut grid, &mut observer).unwrap();
    for row in grid.nodes().collect::<Vec<_>>().chunks(grid.size()) {
        let line: String = row
            .iter()
            .map(|node| {
                let p = node.position();
                if Some(p) == grid.start() {
                    'S'
                } else if Some(p) == grid.goal() {
                    'G'
                } else if node.is_wall() {
                    '#'
                } else {
                    observer.marks.get(&p).copied().unwrap_or('.')
                }
            })
            .collect();
        println!("{}", line);
    }
    match outcome.path() {
        Some(path) => println!(
            "Path of {} steps found in {} frames",
            path.steps(),
            observer.frames
        ),
        None => println!("No path exists"),
    }
}
