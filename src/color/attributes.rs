//! Closed vocabularies accepted by the classifiers.
//!
//! Every enum maps one-to-one onto a snake_case wire string, which is what
//! tool arguments carry and what serde reads and writes.

/// A closed vocabulary with one wire string per variant.
pub trait WireEnum: Sized + Copy + 'static {
    const NAMES: &'static [&'static str];

    fn from_wire(value: &str) -> Option<Self>;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, for exhaustive table checks.
            #[cfg(test)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::color::attributes::WireEnum for $name {
            const NAMES: &'static [&'static str] = $name::NAMES;

            fn from_wire(value: &str) -> Option<Self> {
                $name::parse(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::parse(&value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::unknown_variant(&value, $name::NAMES)
                })
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    pub enum SkinTone {
        Light => "light",
        Medium => "medium",
        Dark => "dark",
    }
}

wire_enum! {
    pub enum Undertone {
        Cold => "cold",
        Warm => "warm",
        Neutral => "neutral",
    }
}

wire_enum! {
    pub enum VeinColor {
        Blue => "blue",
        BlueGreen => "blue_green",
        Purple => "purple",
        Green => "green",
        OliveGreen => "olive_green",
        Indeterminate => "indeterminate",
    }
}

wire_enum! {
    pub enum JewelryPreference {
        Silver => "silver",
        Gold => "gold",
        Both => "both",
    }
}

wire_enum! {
    pub enum SunReaction {
        Burns => "burns",
        TansSlowly => "tans_slowly",
        TansEasily => "tans_easily",
    }
}

wire_enum! {
    pub enum LipColor {
        Pink => "pink",
        Coral => "coral",
        Peach => "peach",
        RosyBrown => "rosy_brown",
        NaturalRed => "natural_red",
    }
}

wire_enum! {
    pub enum EyeColor {
        Blue => "blue",
        Green => "green",
        Brown => "brown",
        Gray => "gray",
        Hazel => "hazel",
        Black => "black",
        Honey => "honey",
        BlueGray => "blue_gray",
        GreenGray => "green_gray",
    }
}

wire_enum! {
    pub enum HairColor {
        PlatinumBlonde => "platinum_blonde",
        Blonde => "blonde",
        AshBlonde => "ash_blonde",
        LightBrown => "light_brown",
        Chestnut => "chestnut",
        DarkBrown => "dark_brown",
        Black => "black",
        LightRed => "light_red",
        Red => "red",
        DarkRed => "dark_red",
        Gray => "gray",
        White => "white",
        GoldenChestnut => "golden_chestnut",
        GoldenBlonde => "golden_blonde",
    }
}

wire_enum! {
    pub enum ContrastLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

wire_enum! {
    pub enum Temperature {
        Warm => "warm",
        Cold => "cold",
    }
}

wire_enum! {
    /// Saturation or contrast rating of a season.
    pub enum Level {
        Low => "low",
        Medium => "medium",
        High => "high",
        VeryHigh => "very_high",
    }
}
