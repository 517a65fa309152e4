use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Arguments {}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    for &(tag, data) in PACKAGES {
      println!("{}", Workout::from_package(tag, data)?.summary());
    }

    Ok(())
  }
}
