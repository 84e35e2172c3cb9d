use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use kingshand::deal::random_state;
use kingshand::{Phase, SearchParams, Searcher, Seat};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "kingshand-bench", version, about = "Benchmark search nodes per second on seeded deals")]
struct Args {
    /// First deal seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of consecutive seeds to search
    #[arg(long, default_value_t = 20)]
    deals: u64,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Threads for the root split
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Search the companion phase instead of a normal move
    #[arg(long)]
    companion: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = SearchParams { depth: args.depth, threads: args.threads.max(1), ..SearchParams::default() };
    let phase = if args.companion { Phase::ChooseCompanion } else { Phase::Normal };

    let bar = ProgressBar::new(args.deals);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} deals {msg}")?);
    let t0 = Instant::now();
    let mut nodes = 0u64;
    for seed in args.seed..args.seed + args.deals {
        let state = random_state(seed);
        let res = Searcher::new(params).search(&state, phase, Seat::One);
        nodes += res.nodes;
        bar.set_message(format!("seed {seed}: {} nodes", res.nodes));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!("deals={} depth={} nodes={} elapsed={:.3}s nps={:.1}", args.deals, args.depth, nodes, dt.as_secs_f64(), nps);
    Ok(())
}
