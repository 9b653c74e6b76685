use super::Screen;
use crate::components::{Action, Button, Pressable, ProfileField, ProfileItem};
use crate::context::RenderContext;
use crate::icon::{Icon, IconName};
use crate::navigation::Route;
use crate::view::{div, text, View};
use kinetic_animation::{EntranceConfig, ItemMotion, SchedulerHandle, Stagger};
use kinetic_core::TraceEvent;
use kinetic_theme::{BoxStyle, ButtonVariant, Edges, Layout};

const FIELDS: [ProfileField; 5] = [
    ProfileField {
        label: "Name",
        value: "John Doe",
        icon: IconName::PersonOutline,
    },
    ProfileField {
        label: "Email",
        value: "john.doe@example.com",
        icon: IconName::Mail,
    },
    ProfileField {
        label: "Phone",
        value: "+1 (555) 123-4567",
        icon: IconName::Call,
    },
    ProfileField {
        label: "Location",
        value: "San Francisco, CA",
        icon: IconName::Location,
    },
    ProfileField {
        label: "Member Since",
        value: "January 2024",
        icon: IconName::Calendar,
    },
];

#[derive(Debug)]
pub struct ProfileScreen {
    back: Button,
    avatar: ItemMotion,
    rows: Vec<ProfileItem>,
    edit: Button,
    account_settings: Button,
}

impl ProfileScreen {
    pub fn new(handle: SchedulerHandle) -> Self {
        let rows = Stagger::new(100, 100)
            .assign(FIELDS)
            .into_iter()
            .map(|item| ProfileItem::new(handle.clone(), item))
            .collect();
        Self {
            back: Button::back(handle.clone()),
            avatar: ItemMotion::new(handle.clone()).with_entrance(EntranceConfig::hero()),
            rows,
            edit: Button::new(
                handle.clone(),
                "edit-profile",
                "Edit Profile",
                Action::Trace("Edit profile pressed".to_string()),
            ),
            account_settings: Button::new(
                handle,
                "account-settings",
                "Account Settings",
                Action::Navigate(Route::Settings),
            )
            .variant(ButtonVariant::Secondary),
        }
    }

    pub fn rows(&self) -> &[ProfileItem] {
        &self.rows
    }
}

impl Screen for ProfileScreen {
    fn route(&self) -> Route {
        Route::Profile
    }

    fn name(&self) -> &'static str {
        "ProfileScreen"
    }

    fn mount(&mut self) {
        self.avatar.mount();
        self.rows.iter_mut().for_each(ProfileItem::mount);
    }

    fn unmount(&mut self) {
        self.avatar.unmount();
        self.rows.iter_mut().for_each(ProfileItem::unmount);
        for button in [&mut self.back, &mut self.edit, &mut self.account_settings] {
            button.unmount();
        }
    }

    fn render(&self, cx: &RenderContext<'_>) -> View {
        cx.trace(TraceEvent::screen(self.name()));
        let styles = cx.styles();
        let theme = cx.theme();

        let header = div(styles.header())
            .child(self.back.render(cx))
            .child(text(self.route().title(), styles.subtitle()))
            .child(View::Spacer(60.0));

        let avatar = div(BoxStyle::default().with_layout(Layout::Center).with_margin(Edges {
            bottom: theme.spacing.xl,
            ..Edges::ZERO
        }))
        .key("avatar")
        .motion(self.avatar.frame())
        .child(div(styles.avatar(100.0)).child(Icon::new(IconName::Person, 40.0, theme.colors.text)))
        .child(text("John Doe", styles.title().with_size(24.0).centered()))
        .child(div(styles.badge()).child(text("Premium Member", styles.badge_text())));

        let buttons = div(styles.button_container())
            .child(self.edit.render(cx))
            .child(self.account_settings.render(cx));

        div(styles.screen())
            .child(header)
            .child(avatar)
            .child(div(Default::default()).children(self.rows.iter().map(|row| row.render(cx))))
            .child(buttons)
            .into()
    }

    fn pressable(&mut self, key: &str) -> Option<&mut dyn Pressable> {
        match key {
            "back" => Some(&mut self.back),
            "edit-profile" => Some(&mut self.edit),
            "account-settings" => Some(&mut self.account_settings),
            _ => None,
        }
    }
}
