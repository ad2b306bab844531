use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissor,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissor];

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissor => "Scissor",
        }
    }

    /// Exact, case-sensitive match against the three move names.
    pub fn from_choice(choice: &str) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.name() == choice)
    }

    /// Rock beats Scissor, Scissor beats Paper, Paper beats Rock.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissor) | (Move::Scissor, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one round. Win variants carry the winning move, which fixes the loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tied(Move),
    UserWins(Move),
    ComputerWins(Move),
    Invalid,
}

pub fn resolve(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Tied(user)
    } else if user.beats(computer) {
        Outcome::UserWins(user)
    } else {
        Outcome::ComputerWins(computer)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/moves.rs"]
mod tests;
