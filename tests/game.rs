//! Game integration tests.

use std::collections::HashSet;

use stackrs::{
    ActionError, COMPUTER, Card, Deck, Game, GameOptions, GameState, HUMAN, Hand, Move,
    NUM_STACKS, Rank, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set_hand(game: &mut Game, player_id: usize, ranks: &[Rank]) {
    let hand = game.hand_mut(player_id).unwrap();
    hand.reset();
    for rank in ranks {
        hand.take_card(card(*rank, Suit::Hearts)).unwrap();
    }
}

fn set_stacks(game: &mut Game, ranks: [Rank; NUM_STACKS]) {
    for (index, rank) in ranks.into_iter().enumerate() {
        game.add_to_play_stack(card(rank, Suit::Spades), index).unwrap();
    }
}

fn is_sorted(hand: &Hand) -> bool {
    hand.cards()
        .windows(2)
        .all(|w| w[0].rank_position() <= w[1].rank_position())
}

#[test]
fn new_game_deals_seven_each_from_one_pack() {
    let mut game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.state(), GameState::NotStarted);

    game.new_game();
    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(game.cards_left_in_deck(), 42);

    for player_id in [COMPUTER, HUMAN] {
        let hand = game.get_hand(player_id).unwrap();
        assert_eq!(hand.len(), 7);
        assert_eq!(game.player_cards_left(player_id), 7);
        assert!(is_sorted(&hand));
    }
}

#[test]
fn same_seed_same_game() {
    let mut a = Game::new(GameOptions::default(), 5);
    let mut b = Game::new(GameOptions::default(), 5);
    a.new_game();
    b.new_game();

    assert_eq!(a.deck().cards(), b.deck().cards());
    for player_id in [COMPUTER, HUMAN] {
        assert_eq!(
            a.get_hand(player_id).unwrap().cards(),
            b.get_hand(player_id).unwrap().cards()
        );
    }
}

#[test]
fn excluded_cards_never_reach_play() {
    let excluded = [card(Rank::Ace, Suit::Spades), card(Rank::Joker, Suit::Hearts)];
    let options = GameOptions::default().with_excluded_cards(excluded.to_vec());
    let mut game = Game::new(options, 9);
    game.new_game();

    assert_eq!(game.cards_left_in_deck(), 56 - 2 - 14);
    for player_id in [COMPUTER, HUMAN] {
        let hand = game.get_hand(player_id).unwrap();
        assert!(hand.cards().iter().all(|c| !excluded.contains(c)));
    }
    assert!(game.deck().cards().iter().all(|c| !excluded.contains(c)));
}

#[test]
fn deal_stops_early_when_the_deck_runs_out() {
    let mut game = Game::new(GameOptions::default(), 1);
    *game.deck_mut() = Deck::from_cards(vec![
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Five, Suit::Clubs),
    ]);

    assert_eq!(game.deal(), 5);
    assert_eq!(game.cards_left_in_deck(), 0);

    // Seat 0 is served first each round.
    let computer = game.get_hand(COMPUTER).unwrap();
    let human = game.get_hand(HUMAN).unwrap();
    assert_eq!(
        computer.cards(),
        &[
            card(Rank::Five, Suit::Clubs),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
        ]
    );
    assert_eq!(
        human.cards(),
        &[card(Rank::Six, Suit::Clubs), card(Rank::Eight, Suit::Clubs)]
    );
}

#[test]
fn multi_pack_game_deals_from_a_larger_deck() {
    let options = GameOptions::default().with_packs(2).with_cards_per_hand(10);
    let mut game = Game::new(options, 2);
    game.new_game();
    assert_eq!(game.cards_left_in_deck(), 108 - 20);
}

#[test]
fn play_card_out_of_range_returns_invalid_card() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.new_game();

    assert!(!game.play_card(2, 0).is_valid());
    assert!(!game.play_card(HUMAN, 7).is_valid());
    assert_eq!(game.player_cards_left(HUMAN), 7);
    assert_eq!(game.state(), GameState::Dealt);

    let first = game.get_hand(HUMAN).unwrap().cards()[0];
    let played = game.play_card(HUMAN, 0);
    assert_eq!(played, first);
    assert_eq!(game.player_cards_left(HUMAN), 6);
    assert_eq!(game.state(), GameState::InPlay);
}

#[test]
fn unknown_seats() {
    let mut game = Game::new(GameOptions::default(), 3);
    assert!(game.get_hand(2).is_none());
    assert_eq!(game.player_cards_left(2), 0);
    assert_eq!(game.total_score_of_player(2), None);
    assert_eq!(game.update_pass_counter(2), Err(ActionError::PlayerNotFound));
    assert!(!game.deal_a_card_to(2).is_valid());
    assert!(game.look_for_a_move(2).is_none());
    assert!(!game.is_valid_move(2, 0, 0));
}

#[test]
fn is_valid_move_follows_the_acting_player() {
    let mut game = Game::new(GameOptions::default(), 4);
    set_hand(&mut game, COMPUTER, &[Rank::Six]);
    set_hand(&mut game, HUMAN, &[Rank::Nine]);
    set_stacks(&mut game, [Rank::Five, Rank::Ten, Rank::Queen]);

    assert!(game.is_valid_move(COMPUTER, 0, 0));
    assert!(!game.is_valid_move(COMPUTER, 0, 1));
    assert!(!game.is_valid_move(HUMAN, 0, 0));
    assert!(game.is_valid_move(HUMAN, 0, 1));
    assert!(!game.is_valid_move(HUMAN, 0, 2));

    assert!(!game.is_valid_move(HUMAN, 1, 1));
    assert!(!game.is_valid_move(HUMAN, 0, NUM_STACKS));
}

#[test]
fn ace_and_two_link_across_the_end() {
    let mut game = Game::new(GameOptions::default(), 4);
    set_hand(&mut game, HUMAN, &[Rank::Ace, Rank::Two, Rank::King]);
    set_stacks(&mut game, [Rank::Two, Rank::Ace, Rank::Three]);

    assert!(game.is_valid_move(HUMAN, 0, 0));
    assert!(game.is_valid_move(HUMAN, 1, 1));
    assert!(game.is_valid_move(HUMAN, 2, 1));
    assert!(!game.is_valid_move(HUMAN, 2, 0));
    assert!(!game.is_valid_move(HUMAN, 0, 2));
}

#[test]
fn empty_stacks_accept_anything() {
    let mut game = Game::new(GameOptions::default(), 6);
    game.new_game();
    assert!(game.cards_on_stacks().iter().all(|c| !c.is_valid()));
    assert!(game.is_valid_move(HUMAN, 0, 2));
    assert_eq!(game.look_for_a_move(COMPUTER).map(|m| m.stack_index), Some(0));
}

#[test]
fn invalid_hand_cards_are_never_playable() {
    let mut game = Game::new(GameOptions::default(), 6);
    game.hand_mut(HUMAN)
        .unwrap()
        .take_card(Card::from_symbol('?', Suit::Clubs))
        .unwrap();
    set_stacks(&mut game, [Rank::Joker, Rank::Five, Rank::Five]);
    assert!(!game.is_valid_move(HUMAN, 0, 0));
}

#[test]
fn wild_stack_always_yields_a_move() {
    let mut picks = HashSet::new();
    for seed in 0..64 {
        let mut game = Game::new(GameOptions::default(), seed);
        game.new_game();
        set_hand(
            &mut game,
            COMPUTER,
            &[Rank::Two, Rank::Four, Rank::Six, Rank::Eight, Rank::Ten, Rank::Queen, Rank::Ace],
        );
        set_stacks(&mut game, [Rank::Five, Rank::Joker, Rank::Nine]);

        let mv = game.look_for_a_move(COMPUTER).unwrap();
        assert_eq!(mv.stack_index, 1);
        assert!(mv.hand_index < game.player_cards_left(COMPUTER));
        assert!(game.is_valid_move(COMPUTER, mv.hand_index, mv.stack_index));
        picks.insert(mv.hand_index);
    }
    // The wild pick is random, not the first card every time.
    assert!(picks.len() > 1, "picked only {picks:?}");
}

#[test]
fn wild_pick_skips_invalid_cards() {
    for seed in 0..64 {
        let mut game = Game::new(GameOptions::default(), seed);
        let hand = game.hand_mut(COMPUTER).unwrap();
        hand.take_card(Card::from_symbol('?', Suit::Clubs)).unwrap();
        hand.take_card(card(Rank::Five, Suit::Clubs)).unwrap();
        set_stacks(&mut game, [Rank::Eight, Rank::Joker, Rank::Eight]);

        let mv = game.look_for_a_move(COMPUTER).unwrap();
        assert_eq!(mv, Move::new(1, 1));
        assert!(game.is_valid_move(COMPUTER, mv.hand_index, mv.stack_index));
        game.make_move(COMPUTER, mv).unwrap();
    }
}

#[test]
fn wild_stack_with_only_invalid_cards_has_no_move() {
    let mut game = Game::new(GameOptions::default(), 1);
    game.hand_mut(COMPUTER)
        .unwrap()
        .take_card(Card::INVALID)
        .unwrap();
    set_stacks(&mut game, [Rank::Joker, Rank::Joker, Rank::Joker]);
    assert_eq!(game.look_for_a_move(COMPUTER), None);
}

#[test]
fn search_returns_the_first_legal_pair() {
    let mut game = Game::new(GameOptions::default(), 8);
    set_hand(&mut game, COMPUTER, &[Rank::Three, Rank::Seven]);
    set_stacks(&mut game, [Rank::Eight, Rank::Four, Rank::Six]);

    assert_eq!(game.look_for_a_move(COMPUTER), Some(Move::new(0, 1)));

    set_hand(&mut game, COMPUTER, &[Rank::Queen, Rank::Seven]);
    assert_eq!(game.look_for_a_move(COMPUTER), Some(Move::new(1, 0)));
}

#[test]
fn no_move_means_a_pass() {
    let mut game = Game::new(GameOptions::default(), 8);
    set_hand(&mut game, COMPUTER, &[Rank::Two, Rank::Eight, Rank::King, Rank::Five]);
    set_stacks(&mut game, [Rank::Five, Rank::Five, Rank::Ten]);

    assert_eq!(game.look_for_a_move(COMPUTER), None);
    assert_eq!(game.total_score_of_player(COMPUTER), Some(0));
    assert_eq!(game.update_pass_counter(COMPUTER), Ok(1));
    assert_eq!(game.update_pass_counter(COMPUTER), Ok(2));
    assert_eq!(game.total_score_of_player(COMPUTER), Some(2));
    assert_eq!(game.total_score_of_player(HUMAN), Some(0));
}

#[test]
fn empty_hand_has_no_move() {
    let mut game = Game::new(GameOptions::default(), 8);
    set_stacks(&mut game, [Rank::Joker, Rank::Joker, Rank::Joker]);
    assert_eq!(game.look_for_a_move(COMPUTER), None);
}

#[test]
fn make_move_transfers_the_card() {
    let mut game = Game::new(GameOptions::default(), 10);
    game.new_game();
    set_hand(&mut game, HUMAN, &[Rank::Four, Rank::Jack]);
    set_stacks(&mut game, [Rank::Two, Rank::Queen, Rank::Seven]);

    assert_eq!(
        game.make_move(HUMAN, Move::new(0, 0)),
        Err(ActionError::IllegalMove)
    );
    assert_eq!(
        game.make_move(HUMAN, Move::new(2, 0)),
        Err(ActionError::CardNotFound)
    );
    assert_eq!(
        game.make_move(HUMAN, Move::new(0, 3)),
        Err(ActionError::StackNotFound)
    );
    assert_eq!(
        game.make_move(5, Move::new(0, 0)),
        Err(ActionError::PlayerNotFound)
    );
    assert_eq!(game.player_cards_left(HUMAN), 2);

    let played = game.make_move(HUMAN, Move::new(1, 1)).unwrap();
    assert_eq!(played, card(Rank::Jack, Suit::Hearts));
    assert_eq!(game.cards_on_stacks()[1], played);
    assert_eq!(
        game.get_hand(HUMAN).unwrap().cards(),
        &[card(Rank::Four, Suit::Hearts)]
    );
    assert_eq!(game.state(), GameState::InPlay);
}

#[test]
fn add_to_play_stack_checks_the_index() {
    let mut game = Game::new(GameOptions::default(), 10);
    assert_eq!(
        game.add_to_play_stack(card(Rank::Two, Suit::Clubs), NUM_STACKS),
        Err(ActionError::StackNotFound)
    );
    game.add_to_play_stack(card(Rank::Two, Suit::Clubs), 2).unwrap();
    assert_eq!(game.cards_on_stacks()[2], card(Rank::Two, Suit::Clubs));
}

#[test]
fn refresh_needs_a_card_per_stack() {
    let mut game = Game::new(GameOptions::default(), 12);
    set_stacks(&mut game, [Rank::Two, Rank::Three, Rank::Four]);
    *game.deck_mut() = Deck::from_cards(vec![
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Clubs),
    ]);

    assert!(!game.refresh_card_stack());
    assert_eq!(
        game.cards_on_stacks(),
        [
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ]
    );
    assert_eq!(game.cards_left_in_deck(), 2);

    game.deck_mut().initialize(1);
    assert!(game.refresh_card_stack());
    assert_eq!(game.cards_left_in_deck(), 53);
    assert_eq!(
        game.cards_on_stacks(),
        [
            card(Rank::Ace, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs),
        ]
    );
}

#[test]
fn deal_a_card_to_refills_a_hand() {
    let mut game = Game::new(GameOptions::default(), 14);
    game.new_game();
    let before = game.cards_left_in_deck();

    let dealt = game.deal_a_card_to(HUMAN);
    assert!(dealt.is_valid());
    assert_eq!(game.player_cards_left(HUMAN), 8);
    assert_eq!(game.cards_left_in_deck(), before - 1);
    assert_eq!(game.get_hand(HUMAN).unwrap().cards()[7], dealt);

    *game.deck_mut() = Deck::from_cards(Vec::new());
    assert!(!game.deal_a_card_to(HUMAN).is_valid());
    assert_eq!(game.player_cards_left(HUMAN), 8);
}

#[test]
fn deal_a_card_to_a_full_hand_keeps_the_deck() {
    let mut game = Game::new(GameOptions::default(), 14);
    game.new_game();
    let hand = game.hand_mut(COMPUTER).unwrap();
    while !hand.is_full() {
        hand.take_card(card(Rank::Two, Suit::Clubs)).unwrap();
    }
    let before = game.cards_left_in_deck();

    assert!(!game.deal_a_card_to(COMPUTER).is_valid());
    assert_eq!(game.cards_left_in_deck(), before);
}

#[test]
fn new_game_keeps_pass_counters() {
    let mut game = Game::new(GameOptions::default(), 15);
    game.new_game();
    game.update_pass_counter(HUMAN).unwrap();
    game.new_game();
    assert_eq!(game.total_score_of_player(HUMAN), Some(1));
    assert_eq!(game.state(), GameState::Dealt);
}

#[test]
fn commands_before_a_deal_leave_the_game_not_started() {
    let mut game = Game::new(GameOptions::default(), 16);
    game.add_to_play_stack(card(Rank::Two, Suit::Clubs), 0).unwrap();
    assert_eq!(game.state(), GameState::NotStarted);

    game.deck_mut().initialize(1);
    assert!(game.refresh_card_stack());
    assert!(game.deal_a_card_to(HUMAN).is_valid());
    assert!(game.play_card(HUMAN, 0).is_valid());
    assert_eq!(game.state(), GameState::NotStarted);

    game.new_game();
    assert_eq!(game.state(), GameState::Dealt);
    game.add_to_play_stack(card(Rank::Two, Suit::Clubs), 0).unwrap();
    assert_eq!(game.state(), GameState::InPlay);
}
