use super::{Action, Pressable, Target};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::view::{div, text, SwitchView, View};
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Staggered};
use kinetic_theme::{Edges, FontWeight};

/// What a settings row does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKind {
    /// Boolean preference flipped by the row's switch, keyed by name
    Toggle(&'static str),
    /// Row with a disclosure chevron
    Navigation(Target),
    /// Plain row
    Action(Target),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setting {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub icon: IconName,
    pub kind: SettingKind,
}

/// Settings row that slides in from the left
///
/// Toggle rows ignore presses on the row itself; only their switch changes
/// the value.
#[derive(Debug)]
pub struct SettingItem {
    key: String,
    setting: Setting,
    motion: ItemMotion,
}

impl SettingItem {
    pub const KEY_PREFIX: &'static str = "setting";

    pub fn new(handle: SchedulerHandle, item: Staggered<Setting>) -> Self {
        Self {
            key: format!("{}:{}", Self::KEY_PREFIX, item.index),
            setting: item.item,
            motion: ItemMotion::new(handle)
                .with_entrance(EntranceConfig::setting_row().with_delay(item.delay_ms)),
        }
    }

    pub fn setting(&self) -> &Setting {
        &self.setting
    }

    pub fn motion(&self) -> &ItemMotion {
        &self.motion
    }

    /// Key of the preference this row toggles, if it is a toggle row
    pub fn toggle_key(&self) -> Option<&'static str> {
        match self.setting.kind {
            SettingKind::Toggle(key) => Some(key),
            _ => None,
        }
    }

    pub fn mount(&mut self) {
        self.motion.mount();
    }

    pub fn unmount(&mut self) {
        self.motion.unmount();
    }

    /// `value` is the current state for toggle rows
    pub fn render(&self, cx: &RenderContext<'_>, value: Option<bool>) -> View {
        let styles = cx.styles();
        let theme = cx.theme();
        let card = styles.card();

        let mut label = div(Default::default()).child(text(
            self.setting.title,
            styles.text().with_weight(FontWeight::SemiBold),
        ));
        if let Some(description) = self.setting.description {
            label = label.child(text(description, styles.text_secondary()));
        }

        let mut row = div(styles.space_between()).child(
            div(styles.row())
                .child(
                    div(styles.icon_tile(
                        theme.colors.background_alt,
                        theme.radii.sm,
                        theme.spacing.sm,
                    ))
                    .child(Icon::new(self.setting.icon, 20.0, theme.colors.primary)),
                )
                .child(label),
        );

        match self.setting.kind {
            SettingKind::Toggle(key) => {
                let on = value.unwrap_or(false);
                row = row.child(SwitchView {
                    key: format!("switch:{key}"),
                    value: on,
                    track: if on {
                        theme.colors.primary
                    } else {
                        theme.colors.border
                    },
                    thumb: if on {
                        theme.colors.text
                    } else {
                        theme.colors.text_secondary
                    },
                });
            }
            SettingKind::Navigation(_) => {
                row = row.child(Icon::new(
                    IconName::ChevronForward,
                    20.0,
                    theme.colors.text_secondary,
                ));
            }
            SettingKind::Action(_) => {}
        }

        div(card.with_margin(Edges::symmetric(theme.spacing.xs, 0.0)))
            .key(&self.key)
            .motion(self.motion.frame())
            .child(row)
            .into()
    }
}

impl Pressable for SettingItem {
    fn press_in(&mut self) -> bool {
        self.toggle_key().is_none()
    }

    fn press_out(&mut self) {}

    fn cancel_press(&mut self) {}

    fn action(&self) -> Option<Action> {
        match self.setting.kind {
            SettingKind::Toggle(_) => None,
            SettingKind::Navigation(target) | SettingKind::Action(target) => Some(target.action()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;
    use kinetic_animation::{AnimationScheduler, Stagger};
    use kinetic_core::NullSink;
    use kinetic_theme::Theme;

    const ROWS: [Setting; 3] = [
        Setting {
            title: "Dark Mode",
            description: Some("Use dark theme"),
            icon: IconName::Moon,
            kind: SettingKind::Toggle("dark_mode"),
        },
        Setting {
            title: "Account",
            description: None,
            icon: IconName::PersonCircle,
            kind: SettingKind::Navigation(Target::Route(Route::Profile)),
        },
        Setting {
            title: "Sync now",
            description: None,
            icon: IconName::Sync,
            kind: SettingKind::Action(Target::Trace("Sync pressed")),
        },
    ];

    fn rows(scheduler: &AnimationScheduler) -> Vec<SettingItem> {
        Stagger::new(100, 50)
            .assign(ROWS)
            .into_iter()
            .map(|item| SettingItem::new(scheduler.handle(), item))
            .collect()
    }

    #[test]
    fn test_toggle_row_ignores_presses() {
        let scheduler = AnimationScheduler::new();
        let mut rows = rows(&scheduler);
        assert!(!rows[0].press_in());
        assert_eq!(rows[0].action(), None);
        assert_eq!(rows[0].toggle_key(), Some("dark_mode"));

        assert!(rows[1].press_in());
        assert_eq!(rows[1].action(), Some(Action::Navigate(Route::Profile)));
        assert_eq!(rows[2].action(), Some(Action::Trace("Sync pressed".into())));
    }

    #[test]
    fn test_right_element_by_kind() {
        let scheduler = AnimationScheduler::new();
        let theme = Theme::midnight();
        let cx = RenderContext::new(&theme, &NullSink);
        let rows = rows(&scheduler);

        let toggle = rows[0].render(&cx, Some(true));
        let switch = toggle.find_switch("switch:dark_mode").unwrap();
        assert!(switch.value);
        assert_eq!(switch.track, theme.colors.primary);
        assert!(toggle.contains_text("Use dark theme"));

        let nav = rows[1].render(&cx, None);
        assert!(nav.outline().contains("icon chevron-forward-outline"));

        let plain = rows[2].render(&cx, None);
        assert!(!plain.outline().contains("chevron"));
        assert!(plain.find_switch("switch:dark_mode").is_none());
    }

    #[test]
    fn test_rows_cascade_by_position() {
        let scheduler = AnimationScheduler::new();
        let rows = rows(&scheduler);
        let delays: Vec<u32> = rows
            .iter()
            .filter_map(|row| row.motion().entrance().map(|e| e.config().delay_ms))
            .collect();
        assert_eq!(delays, vec![100, 150, 200]);
    }
}
