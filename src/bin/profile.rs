use std::time::Duration;

use mazeshift::{config::SearchConfig, generators::get_rng, logging, report::find_path};

fn main() -> std::io::Result<()> {
    let _guard = logging::init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);

    let config = SearchConfig::from_env();
    // A fixed seed still varies per run by offsetting it with the iteration.
    let seed_for = |i: usize| config.seed.map(|s| s.wrapping_add(i as u64));

    let mut found = 0;
    let mut times = Vec::with_capacity(num_iters);
    for i in 0..num_iters {
        let mut rng = get_rng(seed_for(i));
        let (report, _) = find_path(&config, &mut rng).map_err(std::io::Error::other)?;
        if !report.result.is_empty() {
            found += 1;
        }
        times.push(Duration::from_secs_f64(report.execution_time / 1000.0));
    }

    if times.is_empty() {
        println!("No iterations run.");
        return Ok(());
    }
    let total: Duration = times.iter().sum();
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();
    println!(
        "{}x{} grid, {} obstacles: found {}/{} ({:.1}%)",
        config.grid_size,
        config.grid_size,
        config.obstacle_count,
        found,
        num_iters,
        found as f64 * 100.0 / num_iters as f64
    );
    println!(
        "time per search: mean {:?}, min {:?}, max {:?}",
        total.div_f64(num_iters as f64),
        min,
        max
    );
    tracing::info!("Profiled {} iterations, {} found a path", num_iters, found);
    Ok(())
}
