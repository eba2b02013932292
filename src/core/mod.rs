pub mod bands;
pub mod scale;
pub mod types;

pub use bands::{BandColorResolver, ColorBand, ColorResolver, ColorSpace};
pub use scale::{AxisOrientation, AxisScale, PlotArea, normalize_range};
pub use types::{
    CubicInterpolationMode, DatasetStyles, HighestMark, HitMode, LegendPosition, RatingPoint,
    ResourceInfo, TimeUnit, Viewport,
};
