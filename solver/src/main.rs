use std::error::Error;

use log::info;

use ferroflow::builder::SquareBoardBuilder;
use ferroflow::generator::{GameBoard, GeneratorConfig};
use ferroflow::search::Solver;
use ferroflow::Location;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // flow free classic pack level 1
    let board = SquareBoardBuilder::with_size(5)
        .add_termini('A', (Location(0, 0), Location(4, 1)))
        .add_termini('B', (Location(0, 2), Location(3, 1)))
        .add_termini('C', (Location(1, 2), Location(4, 2)))
        .add_termini('D', (Location(0, 4), Location(3, 3)))
        .add_termini('E', (Location(1, 4), Location(4, 3)))
        .build()
        .map_err(|reasons| format!("invalid board: {:?}", reasons))?;

    assert_eq!(format!("{}", board), "A.B.D
..C.E
.....
.B.D.
.ACE.
");

    let solved = board.solve()?.ok_or("no solution")?;
    assert_eq!(format!("{}", solved), "AbBdD
abCdE
abcde
aBcDe
aACEe
");

    let solver = Solver::default();
    for (dim, num_wires) in [(5, 3), (6, 4), (7, 5)] {
        let config = GeneratorConfig::default().with_seed(dim as u64);
        let (_, puzzle) = GameBoard::generate(&config, dim, num_wires)?;
        println!("{}", puzzle);

        let outcome = solver.solve(&puzzle)?;
        info!("{}x{} with {} wires: solved={}, {} states expanded in {:.3}s, ~{} bytes peak",
            dim, dim, num_wires, outcome.stats.solved, outcome.stats.states_expanded,
            outcome.stats.time_seconds, outcome.stats.peak_memory_bytes);

        match outcome.solution {
            Some(node) => println!("{}", node),
            None => println!("no solution"),
        }
    }

    Ok(())
}
