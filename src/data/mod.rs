//! Data module - CSV loading, column cleaning and plot request handling

mod loader;
mod request;
mod resolver;

pub use loader::{DataLoader, LoaderError};
pub use request::{build_chart_data, RequestError};
pub use resolver::{clean_and_resolve, CleanedSeries, ResolveError};
