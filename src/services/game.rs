//! Interactive terminal game
//!
//! Command loop in the style of a classic terminal game: one keystroke-like
//! command per line, board redrawn after every accepted move, next/retry
//! offered on terminal states.

use crate::game_engine::{GameEngine, GameStatus, MoveOutcome};
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::position::Direction;
use crate::ui::presenters::{BoardPresenter, StatsPresenter};

pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(level: u32, seed: u64, input: I, output: O) -> GameResult<Self> {
        Ok(Game {
            engine: GameEngine::new(level, seed)?,
            input,
            output,
        })
    }

    pub fn run(&mut self) -> GameResult<()> {
        self.show_level_intro();

        loop {
            let input = self.input.read_line("MOVE")?;
            let command = input.trim().to_lowercase();

            match command.as_str() {
                "w" => self.play_move(Direction::Up)?,
                "s" => self.play_move(Direction::Down)?,
                "a" => self.play_move(Direction::Left)?,
                "d" => self.play_move(Direction::Right)?,
                "q" => {
                    self.output.writeln("THANKS FOR PLAYING.");
                    break;
                }
                _ => Self::print_command_menu(&mut self.output),
            }
        }
        Ok(())
    }

    fn play_move(&mut self, direction: Direction) -> GameResult<()> {
        let outcome = self.engine.request_move(direction);
        match outcome {
            MoveOutcome::Rejected => {
                self.output.writeln("BLOCKED.");
                return Ok(());
            }
            MoveOutcome::Continued | MoveOutcome::Won | MoveOutcome::Lost => {
                BoardPresenter::show_board(
                    self.engine.game_state(),
                    self.engine.status(),
                    &mut self.output,
                );
            }
        }

        match self.engine.status().clone() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                StatsPresenter::show_victory(self.engine.level(), &mut self.output);
                StatsPresenter::show_level_stats(&self.engine, &mut self.output);
                self.prompt_after_win()?;
            }
            GameStatus::Lost { death_position } => {
                StatsPresenter::show_defeat(death_position, &mut self.output);
                StatsPresenter::show_level_stats(&self.engine, &mut self.output);
                self.prompt_after_loss()?;
            }
        }
        Ok(())
    }

    fn prompt_after_win(&mut self) -> GameResult<()> {
        let input = self.input.read_line("NEXT LEVEL? (Y/N, R = RESTART AT LEVEL 1)")?;
        match input.trim().to_lowercase().as_str() {
            "y" => self.engine.next_level()?,
            "r" => self.engine.restart()?,
            _ => {
                self.output.writeln("LEVEL COMPLETE. PRESS Q TO QUIT.");
                return Ok(());
            }
        }
        self.show_level_intro();
        Ok(())
    }

    fn prompt_after_loss(&mut self) -> GameResult<()> {
        let input = self.input.read_line("RETRY LEVEL? (Y/N, R = RESTART AT LEVEL 1)")?;
        match input.trim().to_lowercase().as_str() {
            "y" => self.engine.retry_level()?,
            "r" => self.engine.restart()?,
            _ => {
                self.output.writeln("GAME OVER. PRESS Q TO QUIT.");
                return Ok(());
            }
        }
        self.show_level_intro();
        Ok(())
    }

    fn show_level_intro(&mut self) {
        self.print_briefing();
        BoardPresenter::show_board(
            self.engine.game_state(),
            self.engine.status(),
            &mut self.output,
        );
    }

    fn print_briefing(&mut self) {
        let state = self.engine.game_state();
        let plural = if state.zombies.len() != 1 { "S" } else { "" };
        self.output.writeln(&format!(
            "LEVEL {} - REACH THE EXIT (E) AND DODGE {} ZOMBIE{}",
            self.engine.level(),
            state.zombies.len(),
            plural,
        ));
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   W = MOVE UP");
        output.writeln("   S = MOVE DOWN");
        output.writeln("   A = MOVE LEFT");
        output.writeln("   D = MOVE RIGHT");
        output.writeln("   Q = QUIT");
    }
}
