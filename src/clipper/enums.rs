use crate::error::ConfigurationError;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum JoinType {
    Square = 0,
    Round = 1,
    Miter = 2,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum EndType {
    Polygon = 0,
    Joined = 1,
    Butt = 2,
    Square = 3,
    Round = 4,
}

impl EndType {
    pub fn is_closed(self) -> bool {
        matches!(self, EndType::Polygon | EndType::Joined)
    }
}

impl TryFrom<u8> for ClipType {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClipType::Intersection),
            1 => Ok(ClipType::Union),
            2 => Ok(ClipType::Difference),
            3 => Ok(ClipType::Xor),
            _ => Err(ConfigurationError::UnknownClipType(value)),
        }
    }
}

impl TryFrom<u8> for PolyFillType {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PolyFillType::EvenOdd),
            1 => Ok(PolyFillType::NonZero),
            2 => Ok(PolyFillType::Positive),
            3 => Ok(PolyFillType::Negative),
            _ => Err(ConfigurationError::UnknownFillType(value)),
        }
    }
}

impl TryFrom<u8> for JoinType {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(JoinType::Square),
            1 => Ok(JoinType::Round),
            2 => Ok(JoinType::Miter),
            _ => Err(ConfigurationError::UnknownJoinType(value)),
        }
    }
}

impl TryFrom<u8> for EndType {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EndType::Polygon),
            1 => Ok(EndType::Joined),
            2 => Ok(EndType::Butt),
            3 => Ok(EndType::Square),
            4 => Ok(EndType::Round),
            _ => Err(ConfigurationError::UnknownEndType(value)),
        }
    }
}
