//! String-based JSON API for collaborators outside the engine crate.

pub mod career_json;

pub use career_json::{
    generate_career_json, simulate_career_json, CareerRequest, CareerResponse,
    SimulationResponse, SCHEMA_VERSION,
};
