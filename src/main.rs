use std::io::Write;

use mazeshift::{config::SearchConfig, generators::get_rng, logging, report::find_path};

fn main() -> std::io::Result<()> {
    let _guard = logging::init_tracing();

    let render = std::env::args().skip(1).any(|arg| arg == "--render");
    let config = SearchConfig::from_env();
    tracing::info!("Loaded config: {:?}", config);

    let mut rng = get_rng(config.seed);
    let (report, maze) = find_path(&config, &mut rng).map_err(|e| {
        tracing::error!("Search failed: {}", e);
        std::io::Error::other(e)
    })?;
    tracing::info!(
        "Search finished in {:.3} ms with {} snapshots",
        report.execution_time,
        report.result.len()
    );

    let json = report.to_json().map_err(std::io::Error::other)?;
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", json)?;

    if render {
        let path = report
            .result
            .first()
            .map(|record| record.moving_object_coordinate.as_slice())
            .unwrap_or_default();
        maze.render_path(&mut stdout, path, config.destination())?;
    }
    Ok(())
}
