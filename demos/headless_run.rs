//! Run a contagion without a renderer and print the counters.
//!
//! Usage: `cargo run --example headless_run -- [config.json] [ticks] [out_dir]`

use std::path::PathBuf;

use contagion_sim::ecs::TickClock;
use contagion_sim::flush::flush_history_to_jsonl;
use contagion_sim::{SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => SimConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        _ => SimConfig::default(),
    };
    let ticks: u64 = match args.next() {
        Some(n) => n.parse()?,
        None => 600,
    };

    // 60 ticks per time unit, like a 60 fps window timed in seconds.
    let mut sim = Simulation::with_clock(config, TickClock::new(1.0 / 60.0))?;
    sim.populate()?;

    for tick in 0..ticks {
        sim.step(1.0)?;
        if tick % 60 == 0 {
            let c = sim.counters();
            eprintln!(
                "tick {:>5}: healthy={} infectious={} infected={} immune={}",
                tick, c.healthy, c.infectious, c.infected, c.immune
            );
        }
    }

    let c = sim.counters();
    let peak = sim
        .infectious_series()
        .into_iter()
        .max_by_key(|&(_, n)| n)
        .unwrap_or((0.0, 0));
    eprintln!(
        "final: healthy={} infectious={} infected={} immune={} (peak {} infectious at t={:.2})",
        c.healthy, c.infectious, c.infected, c.immune, peak.1, peak.0
    );

    if let Some(dir) = args.next() {
        let path = flush_history_to_jsonl(sim.history(), &PathBuf::from(dir))?;
        eprintln!("history written to {}", path.display());
    }
    Ok(())
}
