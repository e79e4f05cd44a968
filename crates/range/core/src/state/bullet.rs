//! Bullet value types.

/// Closed enumeration of bullet types. Matched exhaustively everywhere;
/// there is no "unknown" runtime value.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BulletType {
    /// Stays below the speed of sound; quiet report.
    Subsonic,
    /// Standard round.
    Regular,
    /// Leaves a visible trace in flight.
    Tracer,
}

impl BulletType {
    /// Every variant, in declaration order.
    pub const ALL: [BulletType; 3] = [Self::Subsonic, Self::Regular, Self::Tracer];

    /// Maps an arbitrary integer onto a variant by modulo. Used when
    /// deriving a bullet type from a raw random draw.
    pub const fn from_index(index: u32) -> Self {
        match index % Self::ALL.len() as u32 {
            0 => Self::Subsonic,
            1 => Self::Regular,
            _ => Self::Tracer,
        }
    }
}

/// Smallest unit of ammunition. A bullet has no identity beyond its type;
/// it is copied freely and consumed permanently when fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    pub kind: BulletType,
}

impl Bullet {
    pub const fn new(kind: BulletType) -> Self {
        Self { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps_modulo() {
        assert_eq!(BulletType::from_index(0), BulletType::Subsonic);
        assert_eq!(BulletType::from_index(1), BulletType::Regular);
        assert_eq!(BulletType::from_index(2), BulletType::Tracer);
        assert_eq!(BulletType::from_index(3), BulletType::Subsonic);
        assert_eq!(BulletType::from_index(u32::MAX), BulletType::from_index(u32::MAX % 3));
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(BulletType::Subsonic.to_string(), "subsonic");
        assert_eq!("tracer".parse::<BulletType>(), Ok(BulletType::Tracer));
    }
}
