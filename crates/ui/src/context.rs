use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use quiz_core::model::{Language, QuizLaunch};
use services::{AppServices, Localizer};

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
    fn initial_language(&self) -> Language;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    initial_language: Language,
    pending_launch: Arc<Mutex<Option<QuizLaunch>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            initial_language: app.initial_language(),
            pending_launch: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
    }

    /// Hand a launch payload to the quiz page.
    pub fn set_pending_launch(&self, launch: QuizLaunch) {
        if let Ok(mut slot) = self.pending_launch.lock() {
            *slot = Some(launch);
        }
    }

    /// One-shot: the quiz page takes the payload when it mounts.
    #[must_use]
    pub fn take_pending_launch(&self) -> Option<QuizLaunch> {
        self.pending_launch
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Requested language plus the localizer currently used for rendering.
#[derive(Clone, Copy, PartialEq)]
pub struct LocaleState {
    requested: Signal<Language>,
    localizer: Signal<Localizer>,
}

impl LocaleState {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(localizer: Localizer) -> Self {
        Self {
            requested: Signal::new(localizer.language()),
            localizer: Signal::new(localizer),
        }
    }

    #[must_use]
    pub fn requested(&self) -> Language {
        *self.requested.read()
    }

    pub fn request(&mut self, language: Language) {
        self.requested.set(language);
    }

    #[must_use]
    pub fn localizer(&self) -> Localizer {
        self.localizer.read().clone()
    }

    pub fn replace(&mut self, localizer: Localizer) {
        self.localizer.set(localizer);
    }
}
