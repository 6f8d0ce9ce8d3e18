use std::{sync::mpsc, thread, time::Duration};

use log::debug;
use splr::{Certificate, Config, SolveIF, Solver, SolverError};

use super::{DecisionOutcome, encoding::CnfEncoding};
use crate::{
    errors::OracleError,
    graph::{Edge, NumNodes},
};

/// Decides "does a vertex cover of size exactly k exist" under a wall-clock
/// budget.
///
/// The solver runs on its own thread while we wait on the result channel with
/// a deadline. The solver instance itself carries the same budget as its
/// internal time limit, which doubles as the cancellation request: when the
/// channel wait gives up first, the orphaned worker aborts itself shortly
/// after and its late answer is dropped with the channel.
pub fn decide(
    number_of_nodes: NumNodes,
    cover_size: NumNodes,
    edges: &[Edge],
    budget: Duration,
) -> Result<DecisionOutcome, OracleError> {
    let encoding = CnfEncoding::vertex_cover(number_of_nodes, cover_size, edges);
    debug!(
        "decide n={number_of_nodes} k={cover_size}: {} vars, {} clauses",
        encoding.number_of_vars(),
        encoding.clauses().len()
    );

    let mut config = Config::default();
    // 0 would disable the solver-side limit, so keep it strictly positive
    config.c_timeout = budget.as_secs_f64().max(0.01);

    let solver = match Solver::try_from((config, encoding.clauses())) {
        Ok(solver) => solver,
        Err(Ok(Certificate::UNSAT)) => return Ok(DecisionOutcome::NotCovered),
        Err(Ok(Certificate::SAT(model))) => {
            return Ok(DecisionOutcome::Covered(encoding.cover_from_model(&model)));
        }
        Err(Err(e)) => return Err(OracleError::Integration(e.to_string())),
    };

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut solver = solver;
        let _ = sender.send(solver.solve());
    });

    match receiver.recv_timeout(budget) {
        Ok(Ok(Certificate::SAT(model))) => {
            Ok(DecisionOutcome::Covered(encoding.cover_from_model(&model)))
        }
        Ok(Ok(Certificate::UNSAT)) => Ok(DecisionOutcome::NotCovered),
        Ok(Err(SolverError::TimeOut)) => Ok(DecisionOutcome::Timeout),
        Ok(Err(e)) => Err(OracleError::Integration(e.to_string())),
        Err(mpsc::RecvTimeoutError::Timeout) => Ok(DecisionOutcome::Timeout),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(OracleError::WorkerVanished),
    }
}
