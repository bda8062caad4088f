//! Parametric generation of NACA 4-digit airfoil sections and of the schedule of placements which
//! turns copies of one section into the cross-sections of a twisted, tapered and swept blade.
//!
//! The crate only computes point sets and transforms. Turning them into curves, surfaces or a
//! solid is the job of a host which implements [`ProfileConsumer`].

use std::error::Error;

pub mod airfoil;
pub mod common;
mod errors;
mod geom2;
mod geom3;
pub mod loft;
pub mod placement;

pub use airfoil::{AirfoilProfile, Naca4};
pub use errors::{DomainError, InvalidCode, InvalidLoft};
pub use geom2::Point2;
pub use geom3::{Iso3, Point3, UnitQuat, Vector3};
pub use loft::{BladeConfig, LoftPlan, LoftSummary, ProfileConsumer, build_loft};
pub use placement::PlacementParameters;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;
