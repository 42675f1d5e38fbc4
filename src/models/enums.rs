use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + label + std::str::FromStr pattern.
/// `FromStr` accepts the wire value or the display label.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal, $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Human-readable text shown in dropdowns and column titles.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($s | $label => Ok(Self::$variant)),+,
                    other => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: other.into(),
                    }),
                }
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(DocumentStatus {
    Final => "final", "Final Version",
    Working => "working", "Working Copy",
    Review => "review", "In Review",
});

str_enum!(VersionChoice {
    Final => "final", "Final Version",
    Working => "working", "Working Copy",
});

str_enum!(Category {
    Policies => "policies", "Policies",
    Reports => "reports", "Reports",
    Forms => "forms", "Forms",
    Procedures => "procedures", "Procedures",
    Guidelines => "guidelines", "Guidelines",
    Templates => "templates", "Templates",
});

impl DocumentStatus {
    /// Status a document lands in for a given `is_final` flag. Never `Review`.
    pub fn from_is_final(is_final: bool) -> Self {
        if is_final {
            Self::Final
        } else {
            Self::Working
        }
    }
}

impl Default for VersionChoice {
    fn default() -> Self {
        Self::Working
    }
}

impl VersionChoice {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }
}
