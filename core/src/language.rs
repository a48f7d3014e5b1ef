//! Query parameter enums: language codes, AES key formats and stats filters.
//!
//! Every enum renders to the exact string the upstream API expects and parses
//! back from it. Defaults are explicit constants so call sites can pass them
//! without relying on implicit default arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

macro_rules! param_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal), default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            pub const DEFAULT: $name = $name::$default;

            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

param_enum! {
    /// Locale accepted by the `language` query parameter.
    Language("language"), default English {
        English => "en",
        German => "de",
        Arabic => "ar",
        Japanese => "ja",
        Spanish => "es",
        French => "fr",
        Italian => "it",
        Korean => "ko",
        Polish => "pl",
        PortugueseBrazil => "pt-BR",
        Russian => "ru",
        Turkish => "tr",
        ChineseSimplified => "zh-CN",
        ChineseTraditional => "zh-Hant",
    }
}

param_enum! {
    /// Encoding of the keys returned by the AES endpoint.
    KeyFormat("key format"), default Hex {
        Hex => "hex",
        Base64 => "base64",
    }
}

param_enum! {
    /// Platform an account name belongs to.
    AccountType("account type"), default Epic {
        Epic => "epic",
        PlayStation => "psn",
        Xbox => "xbl",
    }
}

param_enum! {
    TimeWindow("time window"), default Lifetime {
        Lifetime => "lifetime",
        Season => "season",
    }
}

param_enum! {
    /// Which input platform the rendered stats image covers.
    StatsImage("stats image"), default None {
        All => "all",
        KeyboardMouse => "keyboardMouse",
        Gamepad => "gamepad",
        Touch => "touch",
        None => "none",
    }
}
