use anyhow::{Context, Result};
use clap::Parser;
use kingshand::protocol::AgentLoop;
use kingshand::{GameState, Phase, SearchParams, Searcher, Seat};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick a Hand of the King move with alpha-beta search", long_about = None)]
struct Args {
    /// Game state JSON file; read from stdin when omitted
    #[arg(long)]
    state: Option<PathBuf>,

    /// Search parameters JSON file (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side to move: 1 or 2. Guessed from the agent tags when omitted
    #[arg(long)]
    seat: Option<u8>,

    /// Pick a companion instead of a normal move
    #[arg(long)]
    companion: bool,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Threads for the root split
    #[arg(long)]
    threads: Option<usize>,

    /// Melisandre gives the same side the next ply
    #[arg(long)]
    melisandre_extra_turn: bool,

    /// Run the line protocol on stdin/stdout instead of a single search
    #[arg(long)]
    protocol: bool,

    /// Print the board and search statistics to stderr
    #[arg(long)]
    verbose: bool,
}

fn load_params(args: &Args) -> Result<SearchParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth { params.depth = d; }
    if let Some(t) = args.threads { params.threads = t.max(1); }
    if args.melisandre_extra_turn { params.melisandre_extra_turn = true; }
    Ok(params)
}

fn read_state(path: Option<&PathBuf>) -> Result<GameState> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("reading state from stdin")?;
            s
        }
    };
    GameState::from_json(&text).context("parsing game state")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;

    if args.protocol {
        AgentLoop::new(params).run_loop()?;
        return Ok(());
    }

    let state = read_state(args.state.as_ref())?;
    state.validate().context("invalid board")?;
    let seat = match args.seat {
        Some(1) => Seat::One,
        Some(2) => Seat::Two,
        Some(n) => anyhow::bail!("Invalid seat {n}: use 1 or 2"),
        None => Seat::infer(&state.player1, &state.player2),
    };
    let phase = if args.companion { Phase::ChooseCompanion } else { Phase::Normal };

    if args.verbose { eprintln!("\n{}", state.board); }
    let t0 = Instant::now();
    let res = Searcher::new(params).search(&state, phase, seat);
    if args.verbose {
        eprintln!("depth={} nodes={} score={:.2} elapsed={:.3}s", params.depth, res.nodes, res.score, t0.elapsed().as_secs_f64());
    }
    match res.best_move {
        Some(mv) => println!("{}", serde_json::to_string(&mv)?),
        None => println!("null"),
    }
    Ok(())
}
