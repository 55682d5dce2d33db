pub mod errors;
pub mod config;
pub mod utils;
pub mod coordinate;
pub mod commands;

pub use errors::{UtmError, UtmResult};
pub use config::ConverterConfig;
pub use coordinate::{Coordinate, CoordinateSystem, Ellipsoid, GeodeticPoint, GeodeticResult, UtmPoint, UtmTransformer};
pub use coordinate::{to_geodetic, to_utm, to_utm_in_zone};
pub use utils::{degrees_to_radians, radians_to_degrees};
