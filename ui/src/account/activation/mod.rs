mod state;
mod view;

pub use state::ActivationState;
pub use view::ActivationView;
