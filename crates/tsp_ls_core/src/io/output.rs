use std::io::Write;

use crate::{Result, io::options::OutputFormat, node::Point, solver::Solution};

/// Renders `solution` to `out` in the requested format.
pub fn write_solution(
    out: &mut impl Write,
    solution: &Solution,
    points: &[Point],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Indices => write_indices(out, solution),
        OutputFormat::Points => write_points(out, solution, points),
    }
}

/// `<length> <optimal-flag>` line, then the visiting order as indices.
fn write_indices(out: &mut impl Write, solution: &Solution) -> Result<()> {
    writeln!(out, "{:.2} {}", solution.length, u8::from(solution.optimal))?;
    let order = solution
        .tour
        .iter()
        .map(|idx| idx.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{order}")?;
    Ok(())
}

/// One `x y` line per point, in visiting order.
fn write_points(out: &mut impl Write, solution: &Solution, points: &[Point]) -> Result<()> {
    for &idx in &solution.tour {
        writeln!(out, "{}", points[idx])?;
    }
    Ok(())
}
