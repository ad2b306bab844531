use super::*;

#[test]
fn test_from_choice_is_exact() {
    assert_eq!(Move::from_choice("Rock"), Some(Move::Rock));
    assert_eq!(Move::from_choice("Paper"), Some(Move::Paper));
    assert_eq!(Move::from_choice("Scissor"), Some(Move::Scissor));
    assert_eq!(Move::from_choice("rock"), None);
    assert_eq!(Move::from_choice("Scissors"), None);
    assert_eq!(Move::from_choice(" Rock"), None);
    assert_eq!(Move::from_choice(""), None);
}

#[test]
fn test_dominance_is_cyclic() {
    assert!(Move::Rock.beats(Move::Scissor));
    assert!(Move::Scissor.beats(Move::Paper));
    assert!(Move::Paper.beats(Move::Rock));
    for m in Move::ALL {
        assert!(!m.beats(m));
        let beaten = Move::ALL.iter().filter(|o| m.beats(**o)).count();
        assert_eq!(beaten, 1, "{m} should beat exactly one move");
    }
}

#[test]
fn test_rock_against_each_move() {
    assert_eq!(resolve(Move::Rock, Move::Scissor), Outcome::UserWins(Move::Rock));
    assert_eq!(
        resolve(Move::Rock, Move::Paper),
        Outcome::ComputerWins(Move::Paper)
    );
    assert_eq!(resolve(Move::Rock, Move::Rock), Outcome::Tied(Move::Rock));
}

#[test]
fn test_every_pairing_has_one_winner_or_tie() {
    for user in Move::ALL {
        for computer in Move::ALL {
            let outcome = resolve(user, computer);
            match outcome {
                Outcome::Tied(m) => assert!(user == computer && m == user),
                Outcome::UserWins(m) => assert!(m == user && user.beats(computer)),
                Outcome::ComputerWins(m) => assert!(m == computer && computer.beats(user)),
                Outcome::Invalid => panic!("valid moves resolved as invalid"),
            }
        }
    }
}
