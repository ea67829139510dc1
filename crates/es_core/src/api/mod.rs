pub mod profile_json;
pub mod scout_json;

pub use profile_json::{build_awards_update_json, build_bio_update_json};
pub use scout_json::{
    apply_submission_response_json, build_match_submission_json, parse_api_response_json,
};
