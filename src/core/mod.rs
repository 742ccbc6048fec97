pub mod description;
pub mod service;

pub use service::PokedexService;
