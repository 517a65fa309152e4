use super::*;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

// Meters covered per stride or stroke.
const STEP_LENGTH: f64 = 0.65;
const STROKE_LENGTH: f64 = 1.38;

// Empirical calorie coefficients, fixed per workout kind.
const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 1.79;
const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_WEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;
const SWIMMING_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
  Running,
  Walking,
  Swimming,
}

impl Display for Kind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Running => "Running",
      Self::Walking => "SportsWalking",
      Self::Swimming => "Swimming",
    })
  }
}

/// One recorded workout. `action` counts strides or strokes, `duration` is
/// in hours, `weight` in kilograms, `height` in centimeters and
/// `pool_length` in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Workout {
  Running {
    action: u32,
    duration: f64,
    weight: f64,
  },
  Walking {
    action: u32,
    duration: f64,
    weight: f64,
    height: f64,
  },
  Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    pool_length: u32,
    pool_laps: u32,
  },
}

impl Workout {
  /// Builds a workout from a sensor package: a three-letter tag and the
  /// positional readings for that kind. Rejects unknown tags, wrong reading
  /// counts and non-positive durations.
  pub(crate) fn from_package(tag: &str, data: &[f64]) -> Result<Self, Error> {
    let kind = match tag {
      "RUN" => Kind::Running,
      "SWM" => Kind::Swimming,
      "WLK" => Kind::Walking,
      _ => return Err(Error::UnrecognizedTag(tag.into())),
    };

    let expected = match kind {
      Kind::Running => 3,
      Kind::Walking => 4,
      Kind::Swimming => 5,
    };

    if data.len() != expected {
      return Err(Error::MalformedPackage {
        kind,
        expected,
        actual: data.len(),
      });
    }

    let (action, duration, weight) = (data[0] as u32, data[1], data[2]);

    if !duration.is_finite() || duration <= 0.0 {
      return Err(Error::InvalidDuration(duration));
    }

    Ok(match kind {
      Kind::Running => Self::Running {
        action,
        duration,
        weight,
      },
      Kind::Walking => Self::Walking {
        action,
        duration,
        weight,
        height: data[3],
      },
      Kind::Swimming => Self::Swimming {
        action,
        duration,
        weight,
        pool_length: data[3] as u32,
        pool_laps: data[4] as u32,
      },
    })
  }

  pub(crate) fn kind(&self) -> Kind {
    match self {
      Self::Running { .. } => Kind::Running,
      Self::Walking { .. } => Kind::Walking,
      Self::Swimming { .. } => Kind::Swimming,
    }
  }

  fn action(&self) -> u32 {
    match *self {
      Self::Running { action, .. }
      | Self::Walking { action, .. }
      | Self::Swimming { action, .. } => action,
    }
  }

  fn duration(&self) -> f64 {
    match *self {
      Self::Running { duration, .. }
      | Self::Walking { duration, .. }
      | Self::Swimming { duration, .. } => duration,
    }
  }

  fn step_length(&self) -> f64 {
    match self {
      Self::Swimming { .. } => STROKE_LENGTH,
      _ => STEP_LENGTH,
    }
  }

  /// Distance covered in km, from the stride or stroke count.
  pub(crate) fn distance(&self) -> f64 {
    f64::from(self.action()) * self.step_length() / M_IN_KM
  }

  /// Mean speed in km/h. Swimming uses pool geometry instead of the stroke
  /// count.
  pub(crate) fn mean_speed(&self) -> f64 {
    match *self {
      Self::Swimming {
        duration,
        pool_length,
        pool_laps,
        ..
      } => f64::from(pool_length) * f64::from(pool_laps) / M_IN_KM / duration,
      _ => self.distance() / self.duration(),
    }
  }

  pub(crate) fn calories(&self) -> f64 {
    match *self {
      Self::Running {
        duration, weight, ..
      } => {
        (RUNNING_SPEED_MULTIPLIER * self.mean_speed() + RUNNING_SPEED_SHIFT) * weight / M_IN_KM
          * duration
          * MIN_IN_H
      }
      Self::Walking {
        duration,
        weight,
        height,
        ..
      } => {
        let speed_ms = self.mean_speed() * KMH_IN_MS;

        (WALKING_WEIGHT_MULTIPLIER * weight
          + speed_ms.powi(2) / (height / CM_IN_M) * WALKING_SPEED_WEIGHT_MULTIPLIER * weight)
          * duration
          * MIN_IN_H
      }
      Self::Swimming {
        duration, weight, ..
      } => {
        (self.mean_speed() + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * weight * duration
      }
    }
  }

  pub(crate) fn summary(&self) -> Summary {
    Summary {
      kind: self.kind(),
      duration: self.duration(),
      distance: self.distance(),
      speed: self.mean_speed(),
      calories: self.calories(),
    }
  }
}
