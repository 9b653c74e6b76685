use super::{indexed, Screen};
use crate::components::{
    Action, Button, Pressable, Setting, SettingItem, SettingKind, Target,
};
use crate::context::RenderContext;
use crate::error::{AppError, Result};
use crate::icon::IconName;
use crate::navigation::Route;
use crate::view::{div, text, View};
use indexmap::IndexMap;
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Stagger};
use kinetic_core::TraceEvent;
use kinetic_theme::ButtonVariant;

pub const NOTIFICATIONS: &str = "notifications";
pub const DARK_MODE: &str = "dark_mode";
pub const AUTO_SYNC: &str = "auto_sync";

const SETTINGS: [Setting; 7] = [
    Setting {
        title: "Notifications",
        description: Some("Receive push notifications"),
        icon: IconName::Notifications,
        kind: SettingKind::Toggle(NOTIFICATIONS),
    },
    Setting {
        title: "Dark Mode",
        description: Some("Use dark theme"),
        icon: IconName::Moon,
        kind: SettingKind::Toggle(DARK_MODE),
    },
    Setting {
        title: "Auto Sync",
        description: Some("Automatically sync data"),
        icon: IconName::Sync,
        kind: SettingKind::Toggle(AUTO_SYNC),
    },
    Setting {
        title: "Privacy & Security",
        description: Some("Manage your privacy settings"),
        icon: IconName::Shield,
        kind: SettingKind::Navigation(Target::Trace("Privacy settings pressed")),
    },
    Setting {
        title: "Account",
        description: Some("Manage your account settings"),
        icon: IconName::PersonCircle,
        kind: SettingKind::Navigation(Target::Route(Route::Profile)),
    },
    Setting {
        title: "Help & Support",
        description: Some("Get help and contact support"),
        icon: IconName::HelpCircle,
        kind: SettingKind::Navigation(Target::Trace("Help pressed")),
    },
    Setting {
        title: "About",
        description: Some("App version and information"),
        icon: IconName::InformationCircle,
        kind: SettingKind::Navigation(Target::Trace("About pressed")),
    },
];

/// In-memory preference toggles, in display order
///
/// Lives as long as the screen instance that owns it. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    toggles: IndexMap<&'static str, bool>,
}

impl SettingsState {
    pub fn get(&self, key: &str) -> Option<bool> {
        self.toggles.get(key).copied()
    }

    /// Flip a toggle. Returns the new value, or `None` for unknown keys.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let value = self.toggles.get_mut(key)?;
        *value = !*value;
        Some(*value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.toggles.iter().map(|(key, value)| (*key, *value))
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            toggles: IndexMap::from([(NOTIFICATIONS, true), (DARK_MODE, true), (AUTO_SYNC, false)]),
        }
    }
}

#[derive(Debug)]
pub struct SettingsScreen {
    back: Button,
    header: ItemMotion,
    rows: Vec<SettingItem>,
    sign_out: Button,
    version: String,
    state: SettingsState,
}

impl SettingsScreen {
    pub fn new(handle: SchedulerHandle, version: &str) -> Self {
        let rows = Stagger::new(100, 50)
            .assign(SETTINGS)
            .into_iter()
            .map(|item| SettingItem::new(handle.clone(), item))
            .collect();
        Self {
            back: Button::back(handle.clone()),
            header: ItemMotion::new(handle.clone()).with_entrance(EntranceConfig::header_fade()),
            rows,
            sign_out: Button::new(
                handle,
                "sign-out",
                "Sign Out",
                Action::Trace("Sign out pressed".to_string()),
            )
            .variant(ButtonVariant::Danger),
            version: version.to_string(),
            state: SettingsState::default(),
        }
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    pub fn rows(&self) -> &[SettingItem] {
        &self.rows
    }
}

impl Screen for SettingsScreen {
    fn route(&self) -> Route {
        Route::Settings
    }

    fn name(&self) -> &'static str {
        "SettingsScreen"
    }

    fn mount(&mut self) {
        self.header.mount();
        self.rows.iter_mut().for_each(SettingItem::mount);
    }

    fn unmount(&mut self) {
        self.header.unmount();
        self.rows.iter_mut().for_each(SettingItem::unmount);
        self.back.unmount();
        self.sign_out.unmount();
    }

    fn render(&self, cx: &RenderContext<'_>) -> View {
        cx.trace(TraceEvent::screen(self.name()));
        let styles = cx.styles();

        let header = div(styles.header())
            .child(self.back.render(cx))
            .child(text(self.route().title(), styles.subtitle()))
            .child(View::Spacer(60.0));

        let rows = self.rows.iter().map(|row| {
            let value = row.toggle_key().and_then(|key| self.state.get(key));
            row.render(cx, value)
        });

        let footer = div(styles.button_container())
            .child(self.sign_out.render(cx))
            .child(text(
                format!("Version {}", self.version),
                styles.text_secondary().with_size(12.0).centered(),
            ));

        let body = div(Default::default())
            .key("intro")
            .motion(self.header.frame())
            .child(text("Preferences", styles.title()))
            .child(text("Customize your app experience", styles.text_secondary()))
            .child(div(Default::default()).children(rows))
            .child(footer);

        div(styles.screen()).child(header).child(body).into()
    }

    fn pressable(&mut self, key: &str) -> Option<&mut dyn Pressable> {
        match key {
            "back" => Some(&mut self.back),
            "sign-out" => Some(&mut self.sign_out),
            _ => indexed(&mut self.rows, SettingItem::KEY_PREFIX, key)
                .map(|r| r as &mut dyn Pressable),
        }
    }

    fn toggle(&mut self, key: &str) -> Result<bool> {
        let value = self.state.toggle(key).ok_or_else(|| AppError::UnknownToggle {
            screen: self.name(),
            key: key.to_string(),
        })?;
        tracing::debug!(key, value, "setting toggled");
        Ok(value)
    }

    fn toggle_value(&self, key: &str) -> Option<bool> {
        self.state.get(key)
    }
}
