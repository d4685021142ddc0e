//! Sales forecast screen: model status, generation form, projection chart
//! over the monthly history and the list of generated predictions.

pub mod view;
pub mod view_model;

pub use view::PredictionsPage;
