pub mod analysis;

pub use analysis::{AnalysisResponse, PartImage, VehicleDetails};
