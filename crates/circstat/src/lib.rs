//! Circular (directional) statistics for radar-field analysis.
//!
//! Ordinary arithmetic means break down for quantities that wrap around: the
//! mean of 359° and 1° should be 0°, not 180°. This crate provides:
//!
//! - **Angular statistics**: circular mean and standard deviation of angles in
//!   radians or degrees, and the element-by-element mean of two angle sets
//! - **Interval statistics**: the same statistics for any periodic quantity
//!   defined on an arbitrary `[min, max)` interval (compass bearings, phase,
//!   hour of day, ...)
//! - **Masked fields**: 2D fields with a per-element validity mask
//! - **Directional statistics**: mean or median along the ray or range axis of
//!   a masked field, invalidating outputs backed by too few valid inputs
//! - **Circular summaries**: mean, spread and concentration bundled together
//!
//! All numeric functions are pure. They never fail: empty inputs and
//! degenerate distributions produce NaN or infinity, which propagate to the
//! caller.
//!
//! # Modules
//!
//! - [`angular`]: Circular mean and standard deviation of angles
//! - [`interval`]: Statistics on values wrapped into a custom interval
//! - [`masked`]: Masked 2D fields and 1D series
//! - [`directional`]: Mean/median reductions over masked fields
//! - [`summary`]: Combined circular statistics for one distribution
//!
//! # Examples
//!
//! ## Averaging across the wrap boundary
//!
//! ```
//! use circstat::angular::{angular_mean_deg, mean_of_two_angles_deg};
//!
//! let mean = angular_mean_deg([350.0, 10.0]);
//! assert!(mean.abs() < 1e-9);
//!
//! let means = mean_of_two_angles_deg(&[359.0, 90.0], &[1.0, 180.0]).unwrap();
//! assert!(means[0].abs() < 1e-9);
//! assert!((means[1] - 135.0).abs() < 1e-9);
//! ```
//!
//! ## Statistics on a custom interval
//!
//! ```
//! use circstat::interval::interval_std;
//!
//! // Hour of day: 23h and 1h are two hours apart, not twenty-two
//! let spread = interval_std([23.0, 1.0], 0.0, 24.0);
//! assert!(spread < 1.1);
//! ```
//!
//! ## Reducing a masked field
//!
//! ```
//! use circstat::{
//!     directional::{AvgType, compute_directional_stats},
//!     masked::{Axis, MaskedField},
//! };
//!
//! let field = MaskedField::from_rows([
//!     [Some(1.0), Some(2.0), None],
//!     [Some(3.0), Some(2.0), None],
//! ])
//! .unwrap();
//! let stats = compute_directional_stats(&field, AvgType::Mean, 1, Axis::Rays);
//! assert_eq!(stats.values.get(0), Some(2.0));
//! assert_eq!(stats.values.get(2), None);
//! assert_eq!(stats.nvalid, [2, 2, 0]);
//! ```

pub use self::error::ShapeError;

pub mod angular;
pub mod directional;
mod error;
pub mod interval;
pub mod masked;
pub mod summary;
