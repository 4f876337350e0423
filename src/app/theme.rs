use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{Theme, ThemePreference, THEME_STORAGE_KEY};

/// Page-wide theme: the persisted choice plus the OS signal it falls back to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    preference: Signal<ThemePreference>,
    set_preference: WriteSignal<ThemePreference>,
    prefers_dark: Signal<bool>,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.preference.get(), self.prefers_dark.get())
    }

    pub fn toggle(&self) {
        let next = Theme::resolve(
            self.preference.get_untracked(),
            self.prefers_dark.get_untracked(),
        )
        .toggled();
        log::debug!("switching to {} theme", next.label());
        self.set_preference.set(next.into());
    }
}

pub fn use_theme() -> ThemeState {
    let (preference, set_preference, _) =
        use_local_storage::<ThemePreference, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    ThemeState {
        preference,
        set_preference,
        prefers_dark,
    }
}
