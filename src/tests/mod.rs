mod config;
mod highlight;
