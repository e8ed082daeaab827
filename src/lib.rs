mod cache;
mod candidates;
mod client;
mod committees;
mod errors;
mod independent_expenditures;
mod organizations;
mod request;
mod response;
mod transport;

pub use self::cache::ResponseCache;
pub use self::candidates::Candidates;
pub use self::client::{Client, API_KEY_VAR, BASE_URL};
pub use self::committees::Committees;
pub use self::errors::Error;
pub use self::independent_expenditures::IndependentExpenditures;
pub use self::organizations::Organizations;
pub use self::transport::Transport;
