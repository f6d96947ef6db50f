/// Declares a closed enum carried on the wire as a string.
///
/// Generates serde renames, `as_str`, `Display` and a `FromStr` that rejects
/// anything outside the set with [`crate::Error::InvalidArgument`].
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The value the API uses for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )*
                    other => Err(crate::Error::invalid_argument(format!(
                        "`{}` is not a valid {}; expected one of: {}",
                        other,
                        stringify!($name),
                        [$($wire),*].join(", ")
                    ))),
                }
            }
        }
    };
}

pub mod timestamp;
pub use self::timestamp::parse_api_timestamp;

mod car_data;
pub use self::car_data::{Brake, CarData, Drs};

mod driver;
pub use self::driver::Driver;

mod interval;
pub use self::interval::{Interval, RawGap, RawInterval, TimeGap};

mod lap;
pub use self::lap::{Lap, SegmentSector};

mod location;
pub use self::location::Location;

mod meeting;
pub use self::meeting::Meeting;

mod pit;
pub use self::pit::Pit;

mod position;
pub use self::position::Position;

mod race_control;
pub use self::race_control::{Flag, RaceControl, RaceControlCategory, RaceControlScope};

mod session;
pub use self::session::{Session, SessionType};

mod stint;
pub use self::stint::{Stint, TyreCompound};

mod team_radio;
pub use self::team_radio::TeamRadio;

mod weather;
pub use self::weather::Weather;
