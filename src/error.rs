use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum Error {
  #[error("duration must be a positive number of hours, got {0}")]
  InvalidDuration(f64),
  #[error("{kind} package expects {expected} values, got {actual}")]
  MalformedPackage {
    kind: Kind,
    expected: usize,
    actual: usize,
  },
  #[error("unrecognized workout tag `{0}`")]
  UnrecognizedTag(String),
}
