// Job listings: the listing API client, country allow-list, and feed enrichment.

pub mod client;
pub mod feed;
pub mod handlers;
pub mod models;
