//! Scalar filters applied between telemetry arrival and actuation.

mod lin_pred;
mod lowpass;
#[cfg(test)]
mod tests;

pub use lin_pred::LinPred;
#[cfg(test)]
pub use lin_pred::MAX_EXTRAPOLATION;
pub use lowpass::Lowpass;
