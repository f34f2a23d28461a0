mod state;
mod view;

pub use state::{ResetFinishState, Submission};
pub use view::ResetFinishView;
