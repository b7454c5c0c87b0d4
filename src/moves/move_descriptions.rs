//! Packed move representation.
//!
//! Layout of the `u32`:
//! - bits 0..=7: source square
//! - bits 8..=15: destination square
//! - bits 16..=18: move type
//! - bits 19..=21: promotion piece code (0 = none)
//!
//! Consumers read moves through the accessors or `decode`; nothing outside
//! this module depends on the bit positions.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::bitboard::BITBOARD_CAPACITY;
use crate::game_state::chess_types::{PieceKind, Square};

const SOURCE_SHIFT: u32 = 0;
const DESTINATION_SHIFT: u32 = 8;
const MOVE_TYPE_SHIFT: u32 = 16;
const PROMOTION_SHIFT: u32 = 19;

const SQUARE_MASK: u32 = 0xFF;
const MOVE_TYPE_MASK: u32 = 0x7;
const PROMOTION_MASK: u32 = 0x7;
const USED_BITS: u32 = (1 << 22) - 1;

pub const NO_PROMOTION_CODE: u32 = 0;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Quiet = 0,
    Promotion = 1,
    Capture = 2,
    /// King steps two squares toward a rook on a higher column
    /// (the kingside analog on a standard board).
    CastleRight = 3,
    /// Same toward a lower column (the queenside analog).
    CastleLeft = 4,
    PromotionCapture = 5,
    /// Sentinel for "no move".
    None = 6,
}

impl MoveType {
    #[inline]
    pub const fn from_code(code: u32) -> Option<MoveType> {
        match code {
            0 => Some(MoveType::Quiet),
            1 => Some(MoveType::Promotion),
            2 => Some(MoveType::Capture),
            3 => Some(MoveType::CastleRight),
            4 => Some(MoveType::CastleLeft),
            5 => Some(MoveType::PromotionCapture),
            6 => Some(MoveType::None),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveType::Promotion | MoveType::PromotionCapture)
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveType::Capture | MoveType::PromotionCapture)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveType::CastleRight | MoveType::CastleLeft)
    }
}

#[inline]
pub const fn promotion_code(kind: PieceKind) -> Option<u32> {
    match kind {
        PieceKind::Knight => Some(1),
        PieceKind::Bishop => Some(2),
        PieceKind::Rook => Some(3),
        PieceKind::Queen => Some(4),
        _ => None,
    }
}

#[inline]
pub const fn promotion_kind_from_code(code: u32) -> Option<PieceKind> {
    match code {
        1 => Some(PieceKind::Knight),
        2 => Some(PieceKind::Bishop),
        3 => Some(PieceKind::Rook),
        4 => Some(PieceKind::Queen),
        _ => None,
    }
}

/// Unpacked move fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedMove {
    pub source: usize,
    pub destination: usize,
    pub move_type: MoveType,
    pub promotion: Option<PieceKind>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    pub const NULL: Move = Move((MoveType::None as u32) << MOVE_TYPE_SHIFT);

    /// Pack move fields, rejecting anything that would not survive a decode.
    pub fn encode(
        source: usize,
        destination: usize,
        move_type: MoveType,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        if source >= BITBOARD_CAPACITY || destination >= BITBOARD_CAPACITY {
            return Err(ChessErrors::InvalidMoveEncoding(format!(
                "square out of range: {source} -> {destination}"
            )));
        }
        let promo_code = match (move_type.is_promotion(), promotion) {
            (true, Some(kind)) => promotion_code(kind).ok_or_else(|| {
                ChessErrors::InvalidMoveEncoding(format!("cannot promote to {kind:?}"))
            })?,
            (false, None) => NO_PROMOTION_CODE,
            (true, None) => {
                return Err(ChessErrors::InvalidMoveEncoding(format!(
                    "{move_type:?} needs a promotion piece"
                )))
            }
            (false, Some(kind)) => {
                return Err(ChessErrors::InvalidMoveEncoding(format!(
                    "{move_type:?} cannot carry promotion to {kind:?}"
                )))
            }
        };
        Ok(Move::pack(
            source as Square,
            destination as Square,
            move_type,
            promo_code,
        ))
    }

    /// Infallible packing for callers that already hold valid fields.
    #[inline]
    pub(crate) const fn pack(
        source: Square,
        destination: Square,
        move_type: MoveType,
        promo_code: u32,
    ) -> Move {
        Move(
            ((source as u32) << SOURCE_SHIFT)
                | ((destination as u32) << DESTINATION_SHIFT)
                | ((move_type as u32) << MOVE_TYPE_SHIFT)
                | (promo_code << PROMOTION_SHIFT),
        )
    }

    #[inline]
    pub(crate) const fn quiet_or_capture(source: Square, destination: Square, capture: bool) -> Move {
        let move_type = if capture {
            MoveType::Capture
        } else {
            MoveType::Quiet
        };
        Move::pack(source, destination, move_type, NO_PROMOTION_CODE)
    }

    /// Validate a raw packed value.
    pub fn from_raw(raw: u32) -> ChessResult<Move> {
        if raw & !USED_BITS != 0 {
            return Err(ChessErrors::InvalidMoveEncoding(format!(
                "stray bits in {raw:#x}"
            )));
        }
        let candidate = Move(raw);
        let move_type = MoveType::from_code((raw >> MOVE_TYPE_SHIFT) & MOVE_TYPE_MASK)
            .ok_or_else(|| ChessErrors::InvalidMoveEncoding(format!("bad move type in {raw:#x}")))?;
        let promo_code = candidate.promotion_code();
        let promotion = promotion_kind_from_code(promo_code);
        if promo_code != NO_PROMOTION_CODE && promotion.is_none() {
            return Err(ChessErrors::InvalidMoveEncoding(format!(
                "bad promotion code {promo_code}"
            )));
        }
        // Re-encoding checks the type/promotion pairing.
        Move::encode(
            candidate.source() as usize,
            candidate.destination() as usize,
            move_type,
            promotion,
        )
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn source(self) -> Square {
        ((self.0 >> SOURCE_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn destination(self) -> Square {
        ((self.0 >> DESTINATION_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn move_type(self) -> MoveType {
        MoveType::from_code((self.0 >> MOVE_TYPE_SHIFT) & MOVE_TYPE_MASK).unwrap_or(MoveType::None)
    }

    #[inline]
    pub const fn promotion_code(self) -> u32 {
        (self.0 >> PROMOTION_SHIFT) & PROMOTION_MASK
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        promotion_kind_from_code(self.promotion_code())
    }

    pub fn decode(self) -> DecodedMove {
        DecodedMove {
            source: self.source() as usize,
            destination: self.destination() as usize,
            move_type: self.move_type(),
            promotion: self.promotion(),
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.move_type() == MoveType::None
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decoded = self.decode();
        write!(
            f,
            "Move({} -> {} {:?}",
            decoded.source, decoded.destination, decoded.move_type
        )?;
        if let Some(kind) = decoded.promotion {
            write!(f, " ={kind:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PROMOTION_KINDS;

    #[test]
    fn encode_then_decode_returns_the_fields() {
        let cases = [
            (0, 255, MoveType::Quiet, None),
            (17, 1, MoveType::Promotion, Some(PieceKind::Queen)),
            (200, 216, MoveType::Capture, None),
            (4, 6, MoveType::CastleRight, None),
            (4, 2, MoveType::CastleLeft, None),
            (30, 15, MoveType::PromotionCapture, Some(PieceKind::Knight)),
        ];
        for (source, destination, move_type, promotion) in cases {
            let mv = Move::encode(source, destination, move_type, promotion)
                .expect("valid fields should encode");
            assert_eq!(
                mv.decode(),
                DecodedMove {
                    source,
                    destination,
                    move_type,
                    promotion
                }
            );
            assert_eq!(Move::from_raw(mv.raw()), Ok(mv));
        }
    }

    #[test]
    fn every_type_and_promotion_pairing_round_trips_at_boundary_squares() {
        let move_types = [
            MoveType::Quiet,
            MoveType::Promotion,
            MoveType::Capture,
            MoveType::CastleRight,
            MoveType::CastleLeft,
            MoveType::PromotionCapture,
            MoveType::None,
        ];
        let promotions = std::iter::once(None).chain(PROMOTION_KINDS.into_iter().map(Some));
        let promotions: Vec<Option<PieceKind>> = promotions.collect();
        let squares = [0usize, 15, 16, 255];

        for move_type in move_types {
            for &promotion in &promotions {
                for source in squares {
                    for destination in squares {
                        let encoded = Move::encode(source, destination, move_type, promotion);
                        if move_type.is_promotion() != promotion.is_some() {
                            assert!(
                                encoded.is_err(),
                                "{move_type:?} with {promotion:?} should be rejected"
                            );
                            continue;
                        }
                        let mv = encoded.expect("matching pairing should encode");
                        assert_eq!(
                            mv.decode(),
                            DecodedMove {
                                source,
                                destination,
                                move_type,
                                promotion
                            }
                        );
                        assert_eq!(Move::from_raw(mv.raw()), Ok(mv));
                    }
                }
            }
        }
    }

    #[test]
    fn out_of_range_squares_are_not_truncated() {
        assert!(matches!(
            Move::encode(256, 0, MoveType::Quiet, None),
            Err(ChessErrors::InvalidMoveEncoding(_))
        ));
        assert!(Move::encode(0, 300, MoveType::Quiet, None).is_err());
    }

    #[test]
    fn promotion_must_match_move_type() {
        assert!(Move::encode(8, 0, MoveType::Promotion, None).is_err());
        assert!(Move::encode(8, 0, MoveType::Quiet, Some(PieceKind::Queen)).is_err());
        assert!(Move::encode(8, 0, MoveType::Promotion, Some(PieceKind::King)).is_err());
        assert!(Move::encode(8, 0, MoveType::Promotion, Some(PieceKind::Pawn)).is_err());
    }

    #[test]
    fn corrupted_raw_values_are_rejected() {
        assert!(Move::from_raw(7 << 16).is_err());
        assert!(Move::from_raw(1 << 22).is_err());
        assert!(Move::from_raw((MoveType::Quiet as u32) << 16 | 4 << 19).is_err());
        assert!(Move::from_raw(5 << 19 | (MoveType::Promotion as u32) << 16).is_err());
    }

    #[test]
    fn null_move_is_the_none_sentinel() {
        assert!(Move::NULL.is_null());
        assert_eq!(Move::default(), Move::NULL);
        assert_eq!(Move::from_raw(Move::NULL.raw()), Ok(Move::NULL));
    }
}
