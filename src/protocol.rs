use log::{debug, warn};
use std::io::{self, BufRead, Write};

use crate::board::{GameState, Phase, Seat};
use crate::search::alphabeta::{SearchParams, Searcher};

/// Line protocol for an external game loop:
/// `state <json>`, `seat 1|2`, `go [depth N] [companion]`, `isready`, `quit`.
pub struct AgentLoop {
    state: Option<GameState>,
    seat: Option<Seat>,
    params: SearchParams,
}

impl AgentLoop {
    pub fn new(params: SearchParams) -> Self { Self { state: None, seat: None, params } }

    fn cmd_state(&mut self, json: &str, out: &mut impl Write) -> io::Result<()> {
        match GameState::from_json(json) {
            Ok(s) => {
                if let Err(e) = s.validate() { warn!("accepted state with inconsistent board: {e}"); }
                self.state = Some(s);
                Ok(())
            }
            Err(e) => writeln!(out, "error {e}"),
        }
    }

    fn cmd_seat(&mut self, arg: &str, out: &mut impl Write) -> io::Result<()> {
        match arg.trim() {
            "1" => self.seat = Some(Seat::One),
            "2" => self.seat = Some(Seat::Two),
            other => return writeln!(out, "error unknown seat `{other}`"),
        }
        Ok(())
    }

    fn cmd_go(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(state) = self.state.as_ref() else { return writeln!(out, "error no state") };
        let mut params = self.params;
        let mut phase = Phase::Normal;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            match tok {
                "depth" => {
                    if let Some(d) = tokens.next().and_then(|s| s.parse::<u32>().ok()) { params.depth = d; }
                }
                "companion" => phase = Phase::ChooseCompanion,
                _ => {}
            }
        }
        let seat = self.seat.unwrap_or_else(|| Seat::infer(&state.player1, &state.player2));
        let res = Searcher::new(params).search(state, phase, seat);
        debug!("go: {} nodes, score {:.2}", res.nodes, res.score);
        match res.best_move {
            Some(mv) => writeln!(out, "bestmove {mv}"),
            None => writeln!(out, "bestmove none"),
        }
    }

    /// Handles one input line. Returns `false` once the loop should stop.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        if line == "quit" { return Ok(false); }
        if line == "isready" { writeln!(out, "readyok")?; }
        else if let Some(rest) = line.strip_prefix("state ") { self.cmd_state(rest, out)?; }
        else if let Some(rest) = line.strip_prefix("seat ") { self.cmd_seat(rest, out)?; }
        else if line == "go" { self.cmd_go("", out)?; }
        else if let Some(rest) = line.strip_prefix("go ") { self.cmd_go(rest, out)?; }
        else { writeln!(out, "error unknown command")?; }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            if !self.handle(&line?, &mut stdout)? { break; }
        }
        Ok(())
    }
}
