use crate::config::FLASH_THRESHOLD;
use crate::error::SimError;
use crate::simulation::grid::Grid;

/// Aggregate outcome of a timed simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    /// Grid state after the final reset
    pub grid: Grid,
    /// Total flashes across all steps
    pub flashes: u64,
    /// 1-based indices of steps in which every cell flashed
    pub novas: Vec<u32>,
}

/// Run one step's increment and flash cascade, returning the charged grid.
///
/// Every cell gains one energy, then flashes propagate to a fixpoint: each
/// flashing cell boosts its in-bounds Moore neighbors by one, and any
/// neighbor pushed past the threshold flashes in turn. A cell flashes at most
/// once per step; once flashed it receives no further boosts. Returned
/// energies still carry the over-threshold values, so callers can count
/// flashes before applying [`reset`].
pub fn increment_and_propagate(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for energy in &mut next.cells {
        *energy += 1;
    }

    let mut flashed = vec![false; next.cell_count()];
    let mut pending = Vec::new();

    // Row-major scan seeds the worklist. Drain order does not affect the
    // outcome: the flashed flags make each cell's contribution one-shot and
    // the boosts commute.
    for idx in 0..next.cell_count() {
        if next.cells[idx] > FLASH_THRESHOLD {
            flashed[idx] = true;
            pending.push(idx);
        }
    }

    while let Some(idx) = pending.pop() {
        for neighbor in next.neighbors(idx) {
            if flashed[neighbor] {
                continue;
            }
            next.cells[neighbor] += 1;
            if next.cells[neighbor] > FLASH_THRESHOLD {
                flashed[neighbor] = true;
                pending.push(neighbor);
            }
        }
    }

    next
}

/// Number of cells currently over the flash threshold
pub fn count_flashing(grid: &Grid) -> usize {
    grid.cells
        .iter()
        .filter(|&&energy| energy > FLASH_THRESHOLD)
        .count()
}

/// Zero every cell over the flash threshold, leaving the rest unchanged.
pub fn reset(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for energy in &mut next.cells {
        if *energy > FLASH_THRESHOLD {
            *energy = 0;
        }
    }
    next
}

/// True when every cell in the grid is flashing
pub fn is_nova(grid: &Grid) -> bool {
    count_flashing(grid) == grid.cell_count()
}

/// Run `steps` full steps, accumulating flashes and nova step indices.
pub fn simulate(grid: &Grid, steps: u32) -> SimulationResult {
    let mut current = grid.clone();
    let mut flashes = 0u64;
    let mut novas = Vec::new();

    for step in 1..=steps {
        let charged = increment_and_propagate(&current);
        flashes += count_flashing(&charged) as u64;
        if is_nova(&charged) {
            novas.push(step);
        }
        current = reset(&charged);
    }

    SimulationResult {
        grid: current,
        flashes,
        novas,
    }
}

/// Step until the whole grid flashes at once, returning that step's index.
///
/// Returns immediately on detection, without resetting the nova grid. Fails
/// with [`SimError::NovaNotFound`] once `max_steps` is reached (exclusive
/// bound), carrying the exhausted bound.
pub fn first_nova(grid: &Grid, max_steps: u32) -> Result<u32, SimError> {
    let mut current = grid.clone();

    for step in 1..max_steps {
        let charged = increment_and_propagate(&current);
        if is_nova(&charged) {
            return Ok(step);
        }
        current = reset(&charged);
    }

    Err(SimError::NovaNotFound { max_steps })
}
