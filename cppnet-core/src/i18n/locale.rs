use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

struct LocaleMeta {
    code: &'static str,
    name: &'static str,
    rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
    },
];

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    const fn meta(self) -> &'static LocaleMeta {
        match self {
            Self::En => &LOCALE_META[0],
            Self::Ar => &LOCALE_META[1],
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        self.meta().code
    }

    #[must_use]
    pub const fn native_name(self) -> &'static str {
        self.meta().name
    }

    #[must_use]
    pub const fn direction(self) -> TextDirection {
        if self.meta().rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// The other locale of the pair, as offered by the language toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
