pub mod error;
pub mod factory;
pub mod traits;
pub mod zeldvorik;

pub use error::GatewayError;
pub use factory::create_gateway;
pub use traits::ContentGateway;
pub use zeldvorik::ZeldvorikClient;
