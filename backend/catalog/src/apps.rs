//! # App Menu
//!
//! Every page of the site shares one menu, keyed by app index. Index 0 is the
//! home entry, the rest are the apps themselves. The contact form offers the
//! app labels (never home) and the server accepts a label from any locale.
use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

pub const HOME_KEY: &str = "home";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// Path of the locale's landing page.
    pub fn home_path(self) -> String {
        format!("/{}", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

pub struct MenuItem {
    pub key: &'static str,
    pub ja: &'static str,
    pub en: &'static str,
}

impl MenuItem {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.ja,
            Locale::En => self.en,
        }
    }

    pub fn is_home(&self) -> bool {
        self.key == HOME_KEY
    }
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        key: HOME_KEY,
        ja: "ホーム",
        en: "HOME",
    },
    MenuItem {
        key: "elevator",
        ja: "LETS ELEVATOR",
        en: "LETS ELEVATOR",
    },
    MenuItem {
        key: "elevator_neo",
        ja: "LETS ELEVATOR NEO",
        en: "LETS ELEVATOR NEO",
    },
    MenuItem {
        key: "signal",
        ja: "LETS SIGNAL",
        en: "LETS SIGNAL",
    },
    MenuItem {
        key: "crossing",
        ja: "踏切シミュレーター",
        en: "LETS CROSSING",
    },
    MenuItem {
        key: "phonics",
        ja: "あそんでまなぶ！フォニックス",
        en: "Phonics Play",
    },
    MenuItem {
        key: "vocabulary",
        ja: "あそんでまなぶ！えいたんご",
        en: "Word Flash",
    },
    MenuItem {
        key: "toilet",
        ja: "トイレシミュレーター",
        en: "LETS TOILET",
    },
    MenuItem {
        key: "allowance",
        ja: "おこづかいメモ",
        en: "Allowance Tracker",
    },
    MenuItem {
        key: "transit",
        ja: "のりかえナビ",
        en: "Transit Navi",
    },
];

/// App labels shown in the contact form's selector for `locale`.
pub fn menu_labels(locale: Locale) -> Vec<&'static str> {
    MENU.iter()
        .filter(|item| !item.is_home())
        .map(|item| item.label(locale))
        .collect()
}

static ALLOWED_APPS: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    Locale::ALL
        .into_iter()
        .flat_map(menu_labels)
        .collect()
});

/// Union of every locale's app labels, home excluded.
pub fn allowed_apps() -> &'static BTreeSet<&'static str> {
    &ALLOWED_APPS
}

pub fn is_allowed_app(label: &str) -> bool {
    ALLOWED_APPS.contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_never_offered() {
        for locale in Locale::ALL {
            let labels = menu_labels(locale);
            assert_eq!(labels.len(), MENU.len() - 1);
            assert!(!labels.contains(&"HOME"));
            assert!(!labels.contains(&"ホーム"));
        }

        assert!(!is_allowed_app("HOME"));
        assert!(!is_allowed_app("ホーム"));
    }

    #[test]
    fn test_labels_from_both_locales_are_allowed() {
        assert!(is_allowed_app("LETS ELEVATOR"));
        assert!(is_allowed_app("踏切シミュレーター"));
        assert!(is_allowed_app("LETS CROSSING"));
        assert!(!is_allowed_app("NonExistentApp"));
        assert!(!is_allowed_app("lets elevator"));
    }

    #[test]
    fn test_shared_labels_are_counted_once() {
        let total: usize = Locale::ALL.iter().map(|&l| menu_labels(l).len()).sum();

        assert!(allowed_apps().len() < total);
        assert!(allowed_apps().contains("LETS SIGNAL"));
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.home_path(), "/en");
    }
}
