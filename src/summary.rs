use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Summary {
  pub(crate) kind: Kind,
  pub(crate) duration: f64,
  pub(crate) distance: f64,
  pub(crate) speed: f64,
  pub(crate) calories: f64,
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Тип тренировки: {};Длительность: {:.3} ч.;Дистанция: {:.3} км;Ср. скорость: {:.3} км/ч;Потрачено ккал: {:.3}.",
      self.kind, self.duration, self.distance, self.speed, self.calories
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn swimming_line() {
    let summary = Workout::from_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
      .unwrap()
      .summary();

    assert_eq!(
      summary.to_string(),
      "Тип тренировки: Swimming;Длительность: 1.000 ч.;Дистанция: 0.994 км;\
       Ср. скорость: 1.000 км/ч;Потрачено ккал: 336.000."
    );
  }

  #[test]
  fn running_line() {
    let summary = Workout::from_package("RUN", &[15000.0, 1.0, 75.0])
      .unwrap()
      .summary();

    assert_eq!(
      summary.to_string(),
      "Тип тренировки: Running;Длительность: 1.000 ч.;Дистанция: 9.750 км;\
       Ср. скорость: 9.750 км/ч;Потрачено ккал: 797.805."
    );
  }

  #[test]
  fn walking_line_uses_source_kind_name() {
    let summary = Workout::from_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
      .unwrap()
      .summary();

    assert!(summary.to_string().starts_with("Тип тренировки: SportsWalking;"));
  }

  #[test]
  fn integral_values_keep_three_decimals() {
    let summary = Summary {
      kind: Kind::Swimming,
      duration: 1.0,
      distance: 2.0,
      speed: 1.0,
      calories: 336.0,
    };

    let line = summary.to_string();

    assert!(line.contains("Длительность: 1.000 ч."));
    assert!(line.contains("Дистанция: 2.000 км"));
    assert!(line.contains("Ср. скорость: 1.000 км/ч"));
    assert!(line.contains("Потрачено ккал: 336.000."));
  }
}
