use std::{f64::consts::TAU, fmt, str::FromStr};

use rand::Rng;
use rand_distr::Normal;

use crate::foundation::{
    core::Vec2,
    error::{MaskError, MaskResult},
};

/// Random law used for velocity sampling and perturbation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Distribution {
    /// `U[0, max]` speeds, `U[-max, max]` perturbations.
    #[default]
    Uniform,
    /// Half-normal speeds and normal perturbations with `std = max / 2`.
    Gaussian,
}

impl FromStr for Distribution {
    type Err = MaskError;

    fn from_str(s: &str) -> MaskResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            // Older configs spell it "guassian".
            "gaussian" | "guassian" => Ok(Self::Gaussian),
            other => Err(MaskError::unsupported_distribution(format!(
                "'{other}' is not one of uniform, gaussian"
            ))),
        }
    }
}

impl TryFrom<String> for Distribution {
    type Error = MaskError;

    fn try_from(s: String) -> MaskResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uniform => "uniform",
            Self::Gaussian => "gaussian",
        })
    }
}

/// Polar velocity: `speed` in pixels per step, `angle` in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Velocity {
    /// Pixels per step.
    pub speed: f64,
    /// Direction in radians.
    pub angle: f64,
}

impl Velocity {
    /// Velocity from polar parts.
    pub const fn new(speed: f64, angle: f64) -> Self {
        Self { speed, angle }
    }

    /// Displacement of a stroke head while laying out vertices (x from `sin`, y from `cos`).
    pub fn head_step(self) -> Vec2 {
        Vec2::new(
            self.speed * self.angle.sin(),
            self.speed * self.angle.cos(),
        )
    }

    /// Whole-line translation, truncated toward zero to integer pixels
    /// (x from `cos`, y from `sin`).
    pub fn line_translation(self) -> Vec2 {
        Vec2::new(
            (self.speed * self.angle.cos()).trunc(),
            (self.speed * self.angle.sin()).trunc(),
        )
    }
}

/// Per-step bound on velocity change, `(d_speed, d_angle)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Acceleration {
    /// Speed bound.
    pub d_speed: f64,
    /// Angle bound in radians.
    pub d_angle: f64,
}

impl Acceleration {
    /// Acceleration bound from its two parts.
    pub const fn new(d_speed: f64, d_angle: f64) -> Self {
        Self { d_speed, d_angle }
    }

    /// Both parts must be finite and non-negative.
    pub fn validate(self, field: &str) -> MaskResult<()> {
        for (part, v) in [("speed", self.d_speed), ("angle", self.d_angle)] {
            if !v.is_finite() || v < 0.0 {
                return Err(MaskError::invalid_argument(format!(
                    "{field}.{part} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Acceleration {
    fn from((d_speed, d_angle): (f64, f64)) -> Self {
        Self { d_speed, d_angle }
    }
}

impl From<Acceleration> for (f64, f64) {
    fn from(a: Acceleration) -> Self {
        (a.d_speed, a.d_angle)
    }
}

pub(crate) fn check_magnitude(field: &str, v: f64) -> MaskResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(MaskError::invalid_argument(format!(
            "{field} must be finite and >= 0, got {v}"
        )));
    }
    Ok(())
}

fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> MaskResult<f64> {
    let normal = Normal::new(0.0, std_dev)
        .map_err(|e| MaskError::invalid_argument(format!("normal std dev {std_dev}: {e}")))?;
    Ok(rng.sample(normal))
}

/// Draw a fresh velocity.
///
/// Uniform draws `speed ~ U[0, max_speed]`; gaussian draws `speed = |N(0, max_speed / 2)|`.
/// The angle is always `U[0, 2π)`.
pub fn sample_velocity<R: Rng + ?Sized>(
    rng: &mut R,
    max_speed: f64,
    dist: Distribution,
) -> MaskResult<Velocity> {
    check_magnitude("max speed", max_speed)?;
    let speed = match dist {
        Distribution::Uniform => rng.gen_range(0.0..=max_speed),
        Distribution::Gaussian => gaussian(rng, max_speed / 2.0)?.abs(),
    };
    let angle = rng.gen_range(0.0..TAU);
    Ok(Velocity { speed, angle })
}

/// Apply one random acceleration step. The resulting speed is not clamped.
pub fn perturb_velocity<R: Rng + ?Sized>(
    rng: &mut R,
    velocity: Velocity,
    max_acceleration: Acceleration,
    dist: Distribution,
) -> MaskResult<Velocity> {
    max_acceleration.validate("max acceleration")?;
    let Acceleration { d_speed, d_angle } = max_acceleration;
    let (ds, da) = match dist {
        Distribution::Uniform => (
            rng.gen_range(-d_speed..=d_speed),
            rng.gen_range(-d_angle..=d_angle),
        ),
        Distribution::Gaussian => (
            gaussian(rng, d_speed / 2.0)?,
            gaussian(rng, d_angle / 2.0)?,
        ),
    };
    Ok(Velocity {
        speed: velocity.speed + ds,
        angle: velocity.angle + da,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/motion/velocity.rs"]
mod tests;
