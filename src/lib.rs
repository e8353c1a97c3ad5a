pub mod assistant;
pub mod config;
pub mod export;
pub mod football_data;
pub mod http_cache;
pub mod http_client;
pub mod league_table;
pub mod provider;
pub mod sample_data;
pub mod state;
pub mod stats;
pub mod win_prob;
