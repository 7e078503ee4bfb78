pub mod palette_store;
pub mod raster_source;
pub mod sampling_service;

pub use palette_store::{load_library, parse_library, PaletteStore};
pub use raster_source::RasterSource;
pub use sampling_service::{SampleJob, SampleOutcome, SamplingService};
