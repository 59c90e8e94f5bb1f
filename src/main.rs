use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use log::info;

use tsp_ls_core::{
    DEFAULT_SPIKE_THRESHOLD_FACTOR, Point, Result, Solution, SolverInput, SolverOptions,
    cycle_metrics, logging, solve, write_solution,
};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let input = SolverInput::from_options(&options)?;

    info!("input: {input}");
    info!("options: {options}");

    let solution = solve(input.points(), &options);

    write_output(&solution, input.points(), &options)?;

    info!(
        "output: n={} length={:.2} time={:.2}s",
        solution.tour.len(),
        solution.length,
        now.elapsed().as_secs_f32()
    );

    cycle_metrics(input.points(), &solution.tour, DEFAULT_SPIKE_THRESHOLD_FACTOR);

    Ok(())
}

fn write_output(solution: &Solution, points: &[Point], options: &SolverOptions) -> Result<()> {
    if options.output.is_empty() {
        let mut out = io::stdout().lock();
        write_solution(&mut out, solution, points, options.emit)?;
        out.flush()?;
    } else {
        let mut out = BufWriter::new(File::create(&options.output)?);
        write_solution(&mut out, solution, points, options.emit)?;
        out.flush()?;
    }
    Ok(())
}
