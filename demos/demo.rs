//! Monty Hall demo: switch vs stay over a handful of door layouts.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Textbook game** — 3 doors, 1 prize, 1 door left closed. Switching
//!    should win about two times in three.
//! 2. **Generalised layouts** — more doors, more prizes, more closed doors.
//! 3. **Rejected layout** — shows the error naming the broken rule and the
//!    JSON envelope the web layer would return.
//!
//! Set `RUST_LOG=debug` to see per-strategy tallies from the engine.

use probability_lab::{api_adapter, run_experiment, MontyHallRequest};

fn print_layout(count_prize: usize, count_door: usize, closed_door: usize, seed: u64) {
    let request = MontyHallRequest {
        count_prize,
        count_door,
        closed_door,
        iteration: 10_000,
        rng_seed: Some(seed),
    };
    match run_experiment(request) {
        Ok(report) => {
            println!(
                "  {count_prize} prize(s), {count_door} doors, {closed_door} closed  \
                 →  change {:>6.2}%   stay {:>6.2}%",
                report.customizable.change, report.customizable.stay
            );
        }
        Err(err) => println!("  {count_prize}/{count_door}/{closed_door}: {err}"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("══ Textbook game ══");
    println!();
    print_layout(1, 3, 1, 1001);

    println!();
    println!("══ Generalised layouts ══");
    println!();
    for (i, (p, d, c)) in [(1, 10, 1), (1, 10, 5), (2, 10, 4), (10, 30, 10), (5, 8, 5)]
        .into_iter()
        .enumerate()
    {
        print_layout(p, d, c, 2000 + i as u64);
    }

    println!();
    println!("══ Rejected layout ══");
    println!();
    let result = run_experiment(MontyHallRequest::new(1, 3, 2));
    if let Err(err) = &result {
        println!("  1/3/2: {err}");
    }
    println!("  {}", api_adapter::monty_hall_response(&result));
    println!();
}
