use kingshand::board::{Card, House, Player};
use kingshand::search::{evaluate, EvalWeights};

fn player(cards: &[House], banners: &[(House, u32)]) -> Player {
    let mut p = Player::default();
    for (i, &h) in cards.iter().enumerate() { p.add_card(Card::held(h, format!("card {i}"))); }
    for &(h, n) in banners { p.set_banner(h, n); }
    p
}

#[test]
fn default_weights_score_cards_and_banners() {
    let p1 = player(&[House::Stark, House::Stark, House::Tully], &[(House::Stark, 1)]);
    let p2 = player(&[House::Tyrell], &[]);
    let s = evaluate(&p1, &p2, &EvalWeights::default());
    assert!((s - (2.0 * 1.84 + 2.96)).abs() < 1e-5, "unexpected score {s}");
    let mirrored = evaluate(&p2, &p1, &EvalWeights::default());
    assert!((s + mirrored).abs() < 1e-5, "score must be antisymmetric: {s} vs {mirrored}");
}

#[test]
fn custom_weights_apply() {
    let p1 = player(&[House::Greyjoy, House::Greyjoy], &[(House::Greyjoy, 3)]);
    let p2 = player(&[], &[(House::Lannister, 1), (House::Tully, 1)]);
    let cards_only = EvalWeights { cards: 1.0, banners: 0.0 };
    assert_eq!(evaluate(&p1, &p2, &cards_only), 2.0);
    let banners_only = EvalWeights { cards: 0.0, banners: 1.0 };
    assert_eq!(evaluate(&p1, &p2, &banners_only), 1.0);
}

#[test]
fn empty_players_are_even() {
    assert_eq!(evaluate(&Player::default(), &Player::default(), &EvalWeights::default()), 0.0);
}
