//! Repository Layer
//!
//! Remote access to the food collection:
//! - traits: abstract repository interface
//! - transport: request/response values and the reqwest transport
//! - normalize: coercion of loosely typed server records
//! - http_repo: REST implementation over a transport

mod http_repo;
mod normalize;
mod traits;
mod transport;

#[cfg(test)]
mod tests;

pub use http_repo::HttpFoodRepository;
pub use normalize::{normalize_list, normalize_one, RawFood};
pub use traits::FoodRepository;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
