pub mod config;
pub mod data_models;
pub mod document;
pub mod error;
pub mod fetcher;
pub mod pacer;
pub mod pipeline;
pub mod report;
pub mod selector;
pub mod similarity;
pub mod storefront;
