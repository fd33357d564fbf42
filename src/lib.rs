//! A client for the MangaRock web API.
//!
//! Every response is a `{code, data}` envelope. Mangas and authors are looked
//! up by id through a shared metadata endpoint and joined together client side.

#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod author;
pub mod chapter;
pub mod config;
pub mod manga;
pub mod meta;
pub mod requester;
pub mod types;
pub mod utils;

pub use api::{ API, APIError };
pub use author::Author;
pub use chapter::Chapter;
pub use config::{ ClientBuilder, Config, ConfigError };
pub use manga::{ Category, Manga, MangaSingle };
pub use requester::RequesterError;
