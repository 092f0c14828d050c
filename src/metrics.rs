//! Metric Source
//!
//! Supplies one reading per metric type. The server only relies on the
//! [`MetricSource`] contract: every reading falls within the closed range
//! returned by [`range`] for its type.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::protocol::MetricType;

/// Temperature range in °C
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = -10.0..=40.0;

/// Relative humidity range in %
pub const HUMIDITY_RANGE: RangeInclusive<f32> = 20.0..=100.0;

/// Wind speed range in km/h
pub const WIND_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Pressure range in hPa
pub const PRESSURE_RANGE: RangeInclusive<f32> = 950.0..=1050.0;

/// Closed interval every reading of `metric` falls in
pub fn range(metric: MetricType) -> RangeInclusive<f32> {
    match metric {
        MetricType::Temperature => TEMPERATURE_RANGE,
        MetricType::Humidity => HUMIDITY_RANGE,
        MetricType::Wind => WIND_RANGE,
        MetricType::Pressure => PRESSURE_RANGE,
    }
}

/// Source of weather readings
pub trait MetricSource {
    /// Temperature in °C, within `TEMPERATURE_RANGE`
    fn temperature(&mut self) -> f32;

    /// Relative humidity in %, within `HUMIDITY_RANGE`
    fn humidity(&mut self) -> f32;

    /// Wind speed in km/h, within `WIND_RANGE`
    fn wind(&mut self) -> f32;

    /// Pressure in hPa, within `PRESSURE_RANGE`
    fn pressure(&mut self) -> f32;

    /// Dispatch to the reading for `metric`
    fn query(&mut self, metric: MetricType) -> f32 {
        match metric {
            MetricType::Temperature => self.temperature(),
            MetricType::Humidity => self.humidity(),
            MetricType::Wind => self.wind(),
            MetricType::Pressure => self.pressure(),
        }
    }
}

/// Uniformly distributed readings drawn from an owned generator
#[derive(Debug, Clone)]
pub struct RandomMetricSource<R = StdRng> {
    rng: R,
}

impl RandomMetricSource<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator, for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomMetricSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn sample(&mut self, metric: MetricType) -> f32 {
        self.rng.random_range(range(metric))
    }
}

impl<R: Rng> MetricSource for RandomMetricSource<R> {
    fn temperature(&mut self) -> f32 {
        self.sample(MetricType::Temperature)
    }

    fn humidity(&mut self) -> f32 {
        self.sample(MetricType::Humidity)
    }

    fn wind(&mut self) -> f32 {
        self.sample(MetricType::Wind)
    }

    fn pressure(&mut self) -> f32 {
        self.sample(MetricType::Pressure)
    }
}
