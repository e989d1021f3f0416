/// Argument definitions and the solve/report pipeline.
pub(crate) mod cli;
