use twentyone_engine::cards::Rank as R;
use twentyone_engine::errors::GameError;
use twentyone_engine::game::{Phase, Round};
use twentyone_engine::rules::Outcome;
use twentyone_engine::shoe::Shoe;

/// Deal order is player, dealer, player, dealer, then draws.
fn dealt(firsts: &[R]) -> Round {
    let mut round = Round::new(Shoe::stacked(firsts, 31).expect("stack"));
    round.deal().expect("deal ok");
    round
}

#[test]
fn natural_blackjack_resolves_before_any_hit() {
    for firsts in [
        [R::Ten, R::Nine, R::Ace, R::Seven],
        [R::Ace, R::Nine, R::King, R::Seven],
    ] {
        let mut round = dealt(&firsts);
        assert!(round.player().is_natural());
        assert_eq!(round.phase(), Phase::Resolved(Outcome::PlayerWins));
        assert_eq!(round.hit(), Err(GameError::RoundOver));
        assert_eq!(round.player().len(), 2);
    }
}

#[test]
fn hitting_to_bust_loses_and_locks_the_round() {
    // player 2,3 then 4,5,6,K ; dealer 10,7
    let mut round = dealt(&[
        R::Two,
        R::Ten,
        R::Three,
        R::Seven,
        R::Four,
        R::Five,
        R::Six,
        R::King,
    ]);
    let mut last = round.player().points();
    while round.phase() == Phase::PlayerTurn {
        round.hit().expect("hit ok");
        let now = round.player().points();
        assert!(now > last, "total must strictly increase: {} -> {}", last, now);
        last = now;
    }
    assert_eq!(last, 30);
    assert_eq!(round.phase(), Phase::Resolved(Outcome::DealerWins));
    assert_eq!(round.hit(), Err(GameError::RoundOver));
    assert_eq!(round.stand(), Err(GameError::RoundOver));
    assert_eq!(round.player().len(), 6);
}

#[test]
fn a_ten_on_a_pair_of_aces_busts() {
    // player A,A (12) hits a ten: 10 + 11 + 1 = 22
    let mut round = dealt(&[R::Ace, R::Ten, R::Ace, R::Seven, R::Ten]);
    assert_eq!(round.player().points(), 12);
    assert_eq!(round.hit(), Ok(Phase::Resolved(Outcome::DealerWins)));
    assert_eq!(round.player().points(), 22);
    assert_eq!(round.hit(), Err(GameError::RoundOver));
}

#[test]
fn an_ace_on_twenty_reaches_21() {
    // player 9,A (20) hits an ace: 9 + 11 + 1 = 21
    let mut round = dealt(&[R::Nine, R::Ten, R::Ace, R::Seven, R::Ace]);
    assert!(!round.player().is_natural());
    assert_eq!(round.hit(), Ok(Phase::Resolved(Outcome::PlayerWins)));
    assert_eq!(round.player().points(), 21);
}

#[test]
fn hitting_to_exactly_21_wins() {
    let mut round = dealt(&[R::Ten, R::Ten, R::Five, R::Seven, R::Six]);
    assert_eq!(round.hit(), Ok(Phase::Resolved(Outcome::PlayerWins)));
    assert_eq!(round.dealer().hidden_index(), None);
}

#[test]
fn dealer_on_16_draws_until_17_or_more() {
    // player 10,9 ; dealer 10,6 ; dealer draws 2 -> 18
    let mut round = dealt(&[R::Ten, R::Ten, R::Nine, R::Six, R::Two]);
    let phase = round.stand().expect("stand ok");
    assert_eq!(round.dealer().len(), 3);
    assert_eq!(round.dealer().points(), 18);
    assert_eq!(phase, Phase::Resolved(Outcome::PlayerWins));
}

#[test]
fn dealer_keeps_drawing_small_cards() {
    // dealer 10,2 draws 2,2 then 3 -> 19
    let mut round = dealt(&[R::Ten, R::Ten, R::Eight, R::Two, R::Two, R::Two, R::Three]);
    round.stand().expect("stand ok");
    assert_eq!(round.dealer().len(), 5);
    assert_eq!(round.dealer().points(), 19);
    assert_eq!(round.phase(), Phase::Resolved(Outcome::DealerWins));
}

#[test]
fn dealer_on_17_draws_nothing() {
    let mut round = dealt(&[R::Ten, R::Ten, R::Eight, R::Seven]);
    round.stand().expect("stand ok");
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.phase(), Phase::Resolved(Outcome::PlayerWins));
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut round = dealt(&[R::Ten, R::Ace, R::Seven, R::Six]);
    round.stand().expect("stand ok");
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.dealer().points(), 17);
    assert_eq!(round.phase(), Phase::Resolved(Outcome::Draw));
}

#[test]
fn dealer_bust_pays_player() {
    let mut round = dealt(&[R::Ten, R::Ten, R::Two, R::Six, R::King]);
    round.stand().expect("stand ok");
    assert!(round.dealer().is_bust());
    assert_eq!(round.phase(), Phase::Resolved(Outcome::PlayerWins));
}

#[test]
fn higher_dealer_wins_and_equal_draws() {
    let mut lose = dealt(&[R::Ten, R::Ten, R::Six, R::Eight]);
    lose.stand().expect("stand ok");
    assert_eq!(lose.phase(), Phase::Resolved(Outcome::DealerWins));

    let mut push = dealt(&[R::Ten, R::Jack, R::Eight, R::Eight]);
    push.stand().expect("stand ok");
    assert_eq!(push.phase(), Phase::Resolved(Outcome::Draw));
}

#[test]
fn stand_reveals_the_hidden_card() {
    let mut round = dealt(&[R::Ten, R::Ten, R::Nine, R::Seven]);
    assert_eq!(round.dealer().hidden_index(), Some(0));
    round.stand().expect("stand ok");
    assert_eq!(round.dealer().hidden_index(), None);
}

#[test]
fn random_rounds_always_resolve_within_one_shoe() {
    for seed in 0..500u64 {
        let mut shoe = Shoe::new_with_seed(seed);
        shoe.shuffle();
        let mut round = Round::new(shoe);
        let mut phase = round.deal().expect("deal ok");
        while phase == Phase::PlayerTurn {
            phase = if round.player().points() < 15 {
                round.hit().expect("hit ok")
            } else {
                round.stand().expect("stand ok")
            };
        }
        assert!(phase.is_resolved(), "seed {} ended in {:?}", seed, phase);
        assert!(round.shoe().dealt() <= 52);
    }
}
