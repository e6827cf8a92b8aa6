use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::model::MilpModel;
use crate::solver::{MilpSolver, SolverOutput, SolverStatus};

/// Runs `solver` on `model`, giving up after `time_limit` of wall-clock time.
///
/// Without a limit the solver runs on the calling thread.
/// With a limit it runs on a dedicated worker thread. On expiry a [`SolverStatus::Timeout`] is returned
/// immediately and the worker is detached: its result, once it arrives, is discarded.
///
/// A detached worker cannot be interrupted and keeps a core busy until the solver returns on its own.
/// Callers running many timed-out solves in a row pay for every abandoned worker still running,
/// so batch drivers should bound their own concurrency accordingly.
pub fn solve_with_time_limit<S>(
    solver: &S,
    model: &MilpModel,
    time_limit: Option<Duration>,
) -> SolverOutput
where
    S: MilpSolver + Clone + Send + 'static,
{
    let Some(limit) = time_limit else {
        return solver.solve(model);
    };

    let start = Instant::now();
    let (tx, rx) = mpsc::channel();
    let worker_solver = solver.clone();
    let worker_model = model.clone();

    let spawned = thread::Builder::new()
        .name("milp-solver".to_string())
        .spawn(move || {
            let output = worker_solver.solve(&worker_model);
            //the receiver is gone if the time limit already expired
            let _ = tx.send(output);
        });

    if let Err(e) = spawned {
        return SolverOutput::failure(
            SolverStatus::Error(format!("could not spawn solver thread: {e}")),
            start.elapsed(),
        );
    }

    match rx.recv_timeout(limit) {
        Ok(output) => output,
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                "[SOLVER] {} exceeded time limit of {:?}, abandoning the solve",
                solver.name(),
                limit
            );
            SolverOutput::failure(SolverStatus::Timeout, start.elapsed())
        }
        Err(RecvTimeoutError::Disconnected) => SolverOutput::failure(
            SolverStatus::Error(format!("{} terminated without a result", solver.name())),
            start.elapsed(),
        ),
    }
}
