pub mod json_api;

pub use json_api::{analyze_match_json, AnalyzeRequest, SCHEMA_VERSION};
