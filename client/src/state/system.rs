//! Hero-panel system selector.
//!
//! Four fixed systems, each with static display metadata. Exactly one is
//! highlighted at any time; unknown ids leave the selection untouched.

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

/// Class applied to every selector button that is not highlighted.
pub const DEFAULT_BUTTON_CLASS: &str = "system-btn p-4 rounded-lg border-2 bg-orange-800 border-orange-600 \
                                        text-orange-400 hover:border-orange-500 transition-all hover:scale-105";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SystemId {
    #[default]
    Power,
    Wifi,
    Security,
    Smart,
}

/// Static display metadata for one system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemInfo {
    /// Lucide icon name.
    pub icon: &'static str,
    /// Tailwind text color class.
    pub color: &'static str,
    /// Tailwind background class.
    pub bg: &'static str,
    pub label: &'static str,
}

impl SystemId {
    pub const ALL: [Self; 4] = [Self::Power, Self::Wifi, Self::Security, Self::Smart];

    /// Parse the `data-system` id. Returns `None` for anything outside the set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "power" => Some(Self::Power),
            "wifi" => Some(Self::Wifi),
            "security" => Some(Self::Security),
            "smart" => Some(Self::Smart),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Wifi => "wifi",
            Self::Security => "security",
            Self::Smart => "smart",
        }
    }

    #[must_use]
    pub fn info(self) -> SystemInfo {
        match self {
            Self::Power => {
                SystemInfo { icon: "zap", color: "text-yellow-500", bg: "bg-yellow-100", label: "Електроживлення" }
            }
            Self::Wifi => {
                SystemInfo { icon: "wifi", color: "text-blue-500", bg: "bg-blue-100", label: "Інтернет & Wi-Fi" }
            }
            Self::Security => {
                SystemInfo { icon: "shield", color: "text-green-500", bg: "bg-green-100", label: "Охорона" }
            }
            Self::Smart => {
                SystemInfo { icon: "home", color: "text-purple-500", bg: "bg-purple-100", label: "Розумний дім" }
            }
        }
    }
}

/// Which system the hero panel currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorState {
    active: SystemId,
}

impl SelectorState {
    #[must_use]
    pub fn active(&self) -> SystemId {
        self.active
    }

    /// Select by raw `data-system` id. Returns `false` (and changes nothing)
    /// when the id is not one of the four known systems.
    pub fn select(&mut self, raw: &str) -> bool {
        let Some(id) = SystemId::parse(raw) else {
            return false;
        };
        self.active = id;
        true
    }

    pub fn reset(&mut self) {
        self.active = SystemId::default();
    }

    #[must_use]
    pub fn is_active(&self, id: SystemId) -> bool {
        self.active == id
    }

    /// Full class string for the button of `id`.
    #[must_use]
    pub fn button_class(&self, id: SystemId) -> String {
        if self.is_active(id) {
            let info = id.info();
            format!(
                "system-btn p-4 rounded-lg border-2 {} border-current {} transition-all hover:scale-105",
                info.bg, info.color
            )
        } else {
            DEFAULT_BUTTON_CLASS.to_owned()
        }
    }

    /// Class string for the active-system icon.
    #[must_use]
    pub fn icon_class(&self) -> String {
        format!("w-6 h-6 {}", self.active.info().color)
    }

    /// Icon markup handed to the icon library for re-rendering.
    #[must_use]
    pub fn icon_markup(&self) -> String {
        format!(
            r#"<i id="active-system-icon" data-lucide="{}" class="{}"></i>"#,
            self.active.info().icon,
            self.icon_class()
        )
    }
}
