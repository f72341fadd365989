//! The interactive loop.
//!
//! Reads one command per line, applies it to the current game and redraws.
//! The optimal move count for each new game is requested from the worker
//! thread and folded in whenever it arrives; until then the status line shows
//! it as computing.

use std::io::{self, BufRead, Write};

use rotaslide_game::{Game, GameFactory};
use rotaslide_generator::PuzzleSeed;
use rotaslide_solver::OptimalMoveSolver;

use crate::{
    input::{self, Command},
    render,
    worker::{self, SolveRequest, WorkHandle},
};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct RotaslideApp {
    factory: GameFactory,
    solver: OptimalMoveSolver,
    game: Game,
    pending: Vec<WorkHandle>,
}

impl RotaslideApp {
    /// Starts the first game, from `seed` if given.
    #[must_use]
    pub fn new(mut factory: GameFactory, seed: Option<PuzzleSeed>) -> Self {
        let game = match seed {
            Some(seed) => factory.new_game_with_seed(seed),
            None => factory.new_game(),
        };
        Self::with_game(factory, game)
    }

    /// Starts with an existing game.
    #[must_use]
    pub fn with_game(factory: GameFactory, game: Game) -> Self {
        let solver = factory.solver();
        let mut app = Self {
            factory,
            solver,
            game,
            pending: Vec::new(),
        };
        app.request_optimal();
        app
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn request_optimal(&mut self) {
        let request = SolveRequest::for_game(&self.game, self.solver.limits());
        match worker::enqueue(request) {
            Ok(handle) => self.pending.push(handle),
            Err(err) => {
                log::warn!("solving on the current thread: {err}");
                self.game.compute_optimal(&self.solver);
            }
        }
    }

    /// Folds in every solver answer that has arrived.
    fn poll_worker(&mut self) {
        let game = &mut self.game;
        self.pending.retain_mut(|handle| match handle.poll() {
            Ok(Some(response)) => {
                game.resolve_optimal(response.game_id, &response.outcome);
                false
            }
            Ok(None) => true,
            Err(err) => {
                log::warn!("lost solver answer for game {}: {err}", handle.game_id());
                false
            }
        });
    }

    /// Blocks until the current game's answer is in.
    fn wait_for_optimal(&mut self) {
        let current = self.game.id();
        while self.game.optimal().is_computing() {
            let Some(index) = self.pending.iter().position(|h| h.game_id() == current) else {
                self.game.compute_optimal(&self.solver);
                break;
            };
            match self.pending.swap_remove(index).wait() {
                Ok(response) => {
                    self.game.resolve_optimal(response.game_id, &response.outcome);
                }
                Err(err) => log::warn!("lost solver answer for game {current}: {err}"),
            }
        }
    }

    fn start_new_game(&mut self) {
        // Dropping the handles cancels solves that have not started yet.
        self.pending.clear();
        self.game = self.factory.new_game();
        self.request_optimal();
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `reader` or writing `output`.
    pub fn run<R, W>(&mut self, reader: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", input::HELP)?;
        self.draw(&mut output)?;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.draw(&mut output)?;
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command, &mut output)?,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.draw(&mut output)?;
        }
        output.flush()
    }

    fn handle<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<Flow> {
        let result = match command {
            Command::Slide(direction) => self.game.attempt_slide(direction),
            Command::Rotate(position) => self.game.attempt_rotate(position),
            Command::Hint => {
                match self.game.hint(&self.solver) {
                    Some(mv) => writeln!(output, "hint: {mv}")?,
                    None => writeln!(output, "no hint available")?,
                }
                return Ok(Flow::Continue);
            }
            Command::NewGame => {
                self.start_new_game();
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(output, "{}", input::HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(_) if self.game.status().is_won() => {
                self.wait_for_optimal();
                if let Some(summary) = self.game.summary() {
                    writeln!(output, "{summary}")?;
                }
                writeln!(output, "type n for a new game or q to quit")?;
            }
            Ok(_) => {}
            Err(reason) => writeln!(output, "{reason}")?,
        }
        Ok(Flow::Continue)
    }

    fn draw<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        self.poll_worker();
        let snapshot = self.game.snapshot();
        writeln!(output)?;
        write!(output, "{}", render::render_board(&snapshot))?;
        writeln!(output, "{}", render::render_status(&snapshot, self.game.mode()))?;
        write!(output, "> ")?;
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use rotaslide_game::{GameConfig, GameId, GameMode, OptimalMoves};
    use rotaslide_solver::SearchLimits;

    use super::*;

    fn app(board: &str) -> RotaslideApp {
        let factory = GameFactory::new(GameConfig::default()).unwrap();
        let game = Game::new(GameId::new(100), board.parse().unwrap(), GameMode::Classic);
        RotaslideApp::with_game(factory, game)
    }

    fn run(app: &mut RotaslideApp, script: &str) -> String {
        let mut output = Vec::new();
        app.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_winning_prints_summary() {
        let mut app = app("0 1 2 / 3 4 5 / 6 _ 7");
        let output = run(&mut app, "a\nq\n");
        assert!(output.contains("solved in 1 moves (optimal 1, extra 0)"));
        assert!(app.game().status().is_won());
    }

    #[test]
    fn test_blocked_move_is_reported() {
        let mut app = app("0 1 2 / 3 4 5 / 6 7:90 _");
        let output = run(&mut app, "w\nr 5 5\nq\n");
        assert!(output.contains("no tile can slide that way"));
        assert!(output.contains("that cell is off the board"));
        assert_eq!(app.game().moves_taken(), 0);
    }

    #[test]
    fn test_bad_command_is_reported() {
        let mut app = app("0 1 2 / 3 4 5 / 6 _ 7");
        let output = run(&mut app, "jump\n");
        assert!(output.contains("unknown command `jump`"));
    }

    #[test]
    fn test_hint_names_a_move() {
        let mut app = app("0 1 2 / 3 4 _ / 6 7 5");
        let output = run(&mut app, "h\nq\n");
        assert!(output.contains("hint: slide 5"));
    }

    #[test]
    fn test_new_game_drops_old_answer() {
        let mut app = app("0 1 2 / 3 4 5 / 6 _ 7");
        let old = app.game().id();
        run(&mut app, "n\n");
        assert_ne!(app.game().id(), old);

        app.wait_for_optimal();
        assert!(!app.game().optimal().is_computing());
        assert!(app.pending.iter().all(|handle| handle.game_id() != app.game().id()));
    }

    #[test]
    fn test_new_game_discards_pending_requests() {
        let mut app = app("0 1 2 / 3 4 5 / 6 _ 7");
        assert_eq!(app.pending.len(), 1);
        run(&mut app, "n\nn\nn\n");
        assert!(app.pending.len() <= 1);
        assert!(app.pending.iter().all(|handle| handle.game_id() == app.game().id()));
    }

    #[test]
    fn test_configured_limits_reach_the_solver() {
        let config = GameConfig {
            limits: SearchLimits {
                max_expansions: 0,
                fallback_moves: 17,
            },
            ..GameConfig::default()
        };
        let factory = GameFactory::new(config).unwrap();
        let game = Game::new(
            GameId::new(5),
            "0 1 2 / 3 4 _ / 6 7 5".parse().unwrap(),
            GameMode::Classic,
        );
        let mut app = RotaslideApp::with_game(factory, game);
        app.wait_for_optimal();
        assert_eq!(app.game().optimal(), OptimalMoves::Approximate(17));
    }
}
