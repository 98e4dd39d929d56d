pub mod envelope;
pub mod h2h;
pub mod match_row;
pub mod momentum;
pub mod rankings;

pub use envelope::{envelope_error, envelope_success};
pub use h2h::parse_h2h;
pub use match_row::{derive_status, map_tour, parse_match_row, parse_sets, parse_server};
pub use momentum::{build_momentum, MomentumTrace};
pub use rankings::parse_ranking_rows;
