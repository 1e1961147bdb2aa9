use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use portal_core::model::{ModuleId, RoleId};
use services::AppServices;

/// Where the portal should open when the window first appears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchTarget {
    pub role: RoleId,
    pub module: Option<ModuleId>,
}

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
    fn launch_target(&self) -> Option<LaunchTarget>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    launch_target: Option<LaunchTarget>,
    launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch_target = app.launch_target();
        Self {
            services: app.services(),
            launch_once: Arc::new(AtomicBool::new(launch_target.is_some())),
            launch_target,
        }
    }

    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone()
    }

    /// The launch target the first time it is asked for, `None` afterwards.
    #[must_use]
    pub fn take_launch_target(&self) -> Option<LaunchTarget> {
        if self.launch_once.swap(false, Ordering::AcqRel) {
            self.launch_target.clone()
        } else {
            None
        }
    }

    /// The configured value (not the one-shot value).
    #[must_use]
    pub fn launch_target_configured(&self) -> Option<&LaunchTarget> {
        self.launch_target.as_ref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Curriculum;
    use storage::repository::Storage;

    struct FixedApp(Option<LaunchTarget>);

    impl UiApp for FixedApp {
        fn services(&self) -> AppServices {
            AppServices::from_storage(Curriculum::builtin().unwrap(), &Storage::in_memory())
        }

        fn launch_target(&self) -> Option<LaunchTarget> {
            self.0.clone()
        }
    }

    #[test]
    fn launch_target_is_taken_once() {
        let target = LaunchTarget {
            role: RoleId::new("developer"),
            module: None,
        };
        let app: Arc<dyn UiApp> = Arc::new(FixedApp(Some(target.clone())));
        let ctx = build_app_context(&app);
        let copy = ctx.clone();

        assert_eq!(ctx.take_launch_target(), Some(target.clone()));
        assert_eq!(copy.take_launch_target(), None);
        assert_eq!(ctx.launch_target_configured(), Some(&target));
    }
}
