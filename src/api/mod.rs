mod config;
mod page;

pub use config::PageConfig;
pub use page::GoldPage;
