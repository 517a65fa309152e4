use {
  arguments::Arguments,
  clap::Parser,
  error::Error,
  std::{
    fmt::{self, Display, Formatter},
    process,
  },
  summary::Summary,
  workout::{Kind, Workout},
};

mod arguments;
mod error;
mod summary;
mod workout;

/// Sample sensor packages: (workout tag, positional readings).
const PACKAGES: &[(&str, &[f64])] = &[
  ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
  ("RUN", &[15000.0, 1.0, 75.0]),
  ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
