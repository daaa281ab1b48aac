// The form component: controller (state + submission lifecycle) and the view a renderer draws.

pub mod controller;
pub mod view;

pub use controller::{FormController, SubmitOutcome};
pub use view::FormView;
