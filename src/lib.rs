pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOrigins;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use result::{CorsDecision, PreflightResult, SimpleResult};
