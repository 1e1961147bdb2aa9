mod dashboard;
mod home;
mod module;
mod not_found;
mod state;
mod toasts;
mod unit;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use module::ModuleView;
pub use not_found::NotFoundPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toasts::{Toaster, Toasts, provide_toaster};
