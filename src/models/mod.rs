// Data Models
pub mod candidate_list;
pub mod panel_state;

pub use candidate_list::{reduce, CandidateFile, CandidateList, SelectionEvent};
pub use panel_state::PanelState;
