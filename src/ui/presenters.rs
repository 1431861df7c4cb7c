use crate::game_engine::{GameEngine, GameStatus};
use crate::io::OutputWriter;
use crate::models::constants::CellContent;
use crate::models::game_state::GameState;
use crate::models::position::Position;

pub struct BoardPresenter;

impl BoardPresenter {
    /// Render the board one row per line. A lost game shows the death cell.
    pub fn show_board(state: &GameState, status: &GameStatus, output: &mut dyn OutputWriter) {
        let death = match status {
            GameStatus::Lost { death_position } => Some(*death_position),
            _ => None,
        };

        for row in 0..state.grid.size {
            let mut line = String::new();
            for col in 0..state.grid.size {
                let pos = Position::new(row, col);
                line.push_str(Self::cell_content(state, pos, death).symbol());
            }
            output.writeln(&line);
        }
    }

    fn cell_content(state: &GameState, pos: Position, death: Option<Position>) -> CellContent {
        if death == Some(pos) {
            CellContent::Death
        } else if pos == state.player {
            CellContent::Player
        } else if state.zombies.contains(&pos) {
            CellContent::Zombie
        } else if pos == state.grid.exit {
            CellContent::Exit
        } else if state.grid.is_blocked(pos) {
            CellContent::Obstacle
        } else {
            CellContent::Empty
        }
    }
}

pub struct StatsPresenter;

impl StatsPresenter {
    /// End-of-level stats panel: moves taken, optimal path length, zombie
    /// count, and the path the player walked.
    pub fn show_level_stats(engine: &GameEngine, output: &mut dyn OutputWriter) {
        let state = engine.game_state();
        output.writeln("--- LEVEL STATS ---");
        output.writeln(&format!("Steps taken: {}", state.move_count));
        match engine.optimal_path_length() {
            Some(length) => output.writeln(&format!("Optimal path length: {}", length)),
            None => output.writeln("Optimal path length: N/A"),
        }
        output.writeln(&format!("Zombie count: {}", state.zombies.len()));

        let path = state
            .player_path
            .iter()
            .map(|p| format!("({},{})", p.row, p.col))
            .collect::<Vec<_>>()
            .join(" -> ");
        output.writeln(&format!("Path taken: {}", path));
    }

    pub fn show_victory(level: u32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("*** YOU ESCAPED LEVEL {} ***", level));
    }

    pub fn show_defeat(death_position: Position, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!(
            "*** CAUGHT AT ({},{}) - GAME OVER ***",
            death_position.row, death_position.col
        ));
    }
}
