use eyre::WrapErr;
use fem1d::config::SolverConfig;
use fem1d::io::png::{render_function, PlotSettings};
use fem1d::io::vtk::SolutionDataSetBuilder;
use fem1d::problem::Problem;
use log::info;
use std::env;

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args_os().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path.to_string_lossy());
            SolverConfig::from_json_file(path)?
        }
        None => {
            info!("No configuration given, using defaults");
            SolverConfig::default()
        }
    };

    info!("Starting solver");
    let problem = Problem::from_config(&config)?;
    let solution = problem.solve()?;

    info!("Plotting solution with {} samples", config.plot_samples);
    let settings = PlotSettings {
        width: config.plot_width,
        height: config.plot_height,
        samples: config.plot_samples,
        ..PlotSettings::default()
    };
    let [from, to] = config.domain;
    render_function(
        |x| solution.result_at(x),
        from,
        to,
        &config.output,
        &settings,
        &problem.title(),
    )?;
    info!("Wrote plot to {}", config.output.display());

    if let Some(vtk_output) = &config.vtk_output {
        SolutionDataSetBuilder::from_solution(&solution)
            .with_title(problem.title())
            .try_export(vtk_output)
            .wrap_err("failed to export solution to VTK")?;
        info!("Wrote VTK file to {}", vtk_output.display());
    }

    Ok(())
}
