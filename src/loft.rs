//! Driving the placement schedule over a set of stations and handing the placed sections to a
//! host through the `ProfileConsumer` seam. The host is responsible for turning the points into
//! curves, lofting them and reporting failures to a user; nothing in here talks to a modeling
//! application directly.

use crate::airfoil::generate;
use crate::placement::{station_fraction, terminal_tip_point};
use crate::{InvalidLoft, Naca4, PlacementParameters, Point3, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info, warn};

/// A capability which receives the placed sections of a blade, in ascending station order,
/// followed by the single tip point which closes the loft.
pub trait ProfileConsumer {
    /// Receive the 3D points of the section placed at `station_index`. The points form a closed
    /// loop in the same order as the template contour.
    fn accept_section(&mut self, points: &[Point3], station_index: usize) -> Result<()>;

    /// Receive the tip point, along with the strength of the tangency condition the loft should
    /// use when converging on it.
    fn accept_tip(&mut self, point: Point3, tangent_strength: f64) -> Result<()>;
}

/// The scalar configuration of a blade loft. Missing fields take the default values when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BladeConfig {
    /// The NACA 4-digit code of the template section
    pub code: String,

    /// The number of samples on each of the upper and lower surfaces of the template
    pub points_per_surface: usize,

    /// The number of stations the span is divided into
    pub station_count: usize,

    /// The number of stations at the root which are not emitted
    pub skip_stations: usize,

    /// The distance from the blade axis to the skew pivot
    pub skew_radius: f64,
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            code: "2412".to_string(),
            points_per_surface: 20,
            station_count: 50,
            skip_stations: 6,
            skew_radius: 2.0,
        }
    }
}

impl BladeConfig {
    /// Parse a configuration from JSON. Fields which are not present take their default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bladeform::BladeConfig;
    /// let config = BladeConfig::from_json(r#"{"code": "0012", "skew_radius": 3.0}"#).unwrap();
    /// assert_eq!(config.code, "0012");
    /// assert_eq!(config.station_count, 50);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a loft with at least one section.
    pub fn validate(&self) -> Result<()> {
        self.section()?;
        if self.station_count == 0 {
            return Err(InvalidLoft::NoStations.into());
        }
        if self.skip_stations >= self.station_count {
            return Err(InvalidLoft::AllStationsSkipped {
                skip: self.skip_stations,
                count: self.station_count,
            }
            .into());
        }
        if !self.skew_radius.is_finite() || self.skew_radius <= 0.0 {
            return Err(InvalidLoft::BadSkewRadius(self.skew_radius).into());
        }
        Ok(())
    }

    /// The decoded template section.
    pub fn section(&self) -> std::result::Result<Naca4, crate::InvalidCode> {
        self.code.parse()
    }

    /// The indices of the stations which will be emitted.
    pub fn stations(&self) -> Range<usize> {
        self.skip_stations.min(self.station_count)..self.station_count
    }

    /// The weight of the tangency condition at the tip point, which is half the station count.
    pub fn tip_tangent_strength(&self) -> f64 {
        self.station_count as f64 / 2.0
    }

    /// The placement of every emitted station, in ascending station order.
    pub fn schedule(&self) -> Result<Vec<(usize, PlacementParameters)>> {
        let mut placements = Vec::with_capacity(self.stations().len());
        for i in self.stations() {
            let fraction = station_fraction(i, self.station_count);
            placements.push((i, PlacementParameters::at_fraction(fraction, self.skew_radius)?));
        }
        Ok(placements)
    }
}

/// A short account of what was handed to a consumer by `build_loft`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoftSummary {
    pub sections: usize,
    pub first_station: usize,
    pub tip: Point3,
}

/// Generate the template section once, place a copy of it at every emitted station, and hand the
/// placed sections followed by the tip point to the consumer.
///
/// Sections are computed in parallel but always delivered in ascending station order. Any error
/// returned by the consumer stops the build and is returned to the caller.
///
/// # Arguments
///
/// * `config`: the blade configuration, which is validated before any geometry is produced
/// * `consumer`: the host side receiver of the sections and the tip
///
/// returns: Result<LoftSummary, Box<dyn Error, Global>>
pub fn build_loft<C>(config: &BladeConfig, consumer: &mut C) -> Result<LoftSummary>
where
    C: ProfileConsumer + ?Sized,
{
    config.validate()?;
    let profile = generate(&config.code, config.points_per_surface)?;
    let schedule = config.schedule()?;
    if schedule.len() < 2 {
        warn!(
            "only station {} of {} remains after skipping, the loft has a single section",
            config.skip_stations, config.station_count
        );
    }

    let sections = schedule
        .par_iter()
        .map(|(i, placement)| (*i, placement.apply(profile.contour())))
        .collect::<Vec<_>>();

    for (i, points) in sections.iter() {
        debug!("emitting section at station {} ({} points)", i, points.len());
        consumer.accept_section(points, *i)?;
    }

    let tip = terminal_tip_point(config.skew_radius);
    consumer.accept_tip(tip, config.tip_tangent_strength())?;

    info!(
        "lofted {} sections of {} from station {}, tip at {:?}",
        sections.len(),
        profile.section(),
        config.skip_stations,
        tip
    );

    Ok(LoftSummary {
        sections: sections.len(),
        first_station: config.skip_stations,
        tip,
    })
}

/// A single placed section recorded by a `LoftPlan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSection {
    pub station: usize,
    pub points: Vec<Point3>,
}

/// An in-memory consumer which records everything it is given, for hosts which would rather pull
/// the finished sections than be called back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoftPlan {
    pub sections: Vec<PlacedSection>,
    pub tip: Option<Point3>,
    pub tip_tangent_strength: Option<f64>,
}

impl LoftPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete plan from a configuration.
    pub fn from_config(config: &BladeConfig) -> Result<Self> {
        let mut plan = Self::new();
        build_loft(config, &mut plan)?;
        Ok(plan)
    }
}

impl ProfileConsumer for LoftPlan {
    fn accept_section(&mut self, points: &[Point3], station_index: usize) -> Result<()> {
        self.sections.push(PlacedSection {
            station: station_index,
            points: points.to_vec(),
        });
        Ok(())
    }

    fn accept_tip(&mut self, point: Point3, tangent_strength: f64) -> Result<()> {
        self.tip = Some(point);
        self.tip_tangent_strength = Some(tangent_strength);
        Ok(())
    }
}
