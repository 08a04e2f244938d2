#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used to compare candidate captures.
    ///
    /// This is not a position evaluation: the table only ranks what a
    /// capture takes off the board. Kinds outside the table (pawns,
    /// kings, anything added later) count as 1.
    pub fn material_value(self) -> i32 {
        match self {
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            _ => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    /// Kind of the piece being moved.
    pub piece: PieceKind,
    pub is_capture: bool,
    /// Kind removed from the board; set iff `is_capture`. A capture with
    /// no kind attached still scores as a pawn-equivalent.
    pub captured: Option<PieceKind>,
    pub promo: Option<PieceKind>,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            is_capture: false,
            captured: None,
            promo: None,
        }
    }

    pub fn capture(from: u8, to: u8, piece: PieceKind, captured: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            is_capture: true,
            captured: Some(captured),
            promo: None,
        }
    }

    /// Material value of this move's capture, or `None` for a quiet move.
    pub fn capture_value(&self) -> Option<i32> {
        if !self.is_capture {
            return None;
        }
        Some(self.captured.map_or(1, PieceKind::material_value))
    }

    /// True when this move needs a promotion choice the caller did not make:
    /// a pawn reaching the first or last rank with `promo` unset.
    pub fn requires_promotion(&self) -> bool {
        self.piece == PieceKind::Pawn
            && self.promo.is_none()
            && (rank_of(self.to) == 0 || rank_of(self.to) == 7)
    }

    /// Fills in the highest-value promotion kind when one is required and
    /// the caller specified none. A caller-chosen `promo` is kept as-is.
    pub fn with_default_promotion(mut self) -> Self {
        if self.requires_promotion() {
            self.promo = Some(PieceKind::Queen);
        }
        self
    }

    /// Coordinate notation, e.g. "e7e8q" for a promotion.
    pub fn to_coord(&self) -> String {
        let mut s = format!("{}{}", sq_to_coord(self.from), sq_to_coord(self.to));
        if let Some(p) = self.promo {
            s.push(match p {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                PieceKind::Queen => 'q',
                _ => '?',
            });
        }
        s
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
