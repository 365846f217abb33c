use wcq_sim::tables;
use wcq_sim::tournament::{Pairing, PastResult, Team, Tournament};
use wcq_sim::win_prob::{MatchTable, ModelParams, compute_match_prob};
use wcq_sim::Outcome;

fn two_teams(home_rating: f64, away_rating: f64) -> Tournament {
    Tournament::new(
        vec![
            Team::new("hom", home_rating, 30, 0),
            Team::new("awy", away_rating, 30, 0),
        ],
        &[],
        &[],
    )
    .expect("valid roster")
}

const PAIRING: Pairing = Pairing { home: 0, away: 1 };

#[test]
fn builtin_schedule_distributions_are_normalized() {
    let t = tables::afc_group_c().expect("builtin tables");
    let table = MatchTable::build(&t, &ModelParams::default()).expect("valid model");
    assert_eq!(table.len(), t.schedule().len());

    for (_, p) in table.entries() {
        assert!(p.home.is_finite() && p.draw.is_finite() && p.away.is_finite());
        assert!((p.sum() - 1.0).abs() < 1e-9);
        assert!(p.home >= 0.0 && p.draw >= 0.0 && p.away >= 0.0);
    }
}

#[test]
fn strong_home_side_is_favoured_in_builtin_table() {
    let t = tables::afc_group_c().expect("builtin tables");
    let pairing = Pairing {
        home: t.index_of("jpn").unwrap(),
        away: t.index_of("idn").unwrap(),
    };
    let p = compute_match_prob(&t, pairing, &ModelParams::default()).unwrap();
    assert!(p.home > p.away);
    assert!(p.home > 0.5);
}

#[test]
fn identical_teams_favour_the_home_side() {
    let t = two_teams(1600.0, 1600.0);
    let p = compute_match_prob(&t, PAIRING, &ModelParams::default()).unwrap();
    assert!(p.home > p.away);
    assert!((p.draw - 0.25 / 1.1).abs() < 1e-12);
}

#[test]
fn raising_home_rating_never_lowers_home_win() {
    let params = ModelParams::default();
    let mut last = 0.0;
    for rating in (1000..=2400).step_by(25) {
        let t = two_teams(rating as f64, 1600.0);
        let p = compute_match_prob(&t, PAIRING, &params).unwrap();
        assert!(p.home >= last, "home win fell at rating {rating}");
        last = p.home;
    }
}

#[test]
fn raising_away_rating_never_lowers_away_win() {
    let params = ModelParams::default();
    let mut last = 0.0;
    for rating in (1000..=2400).step_by(25) {
        let t = two_teams(1600.0, rating as f64);
        let p = compute_match_prob(&t, PAIRING, &params).unwrap();
        assert!(p.away >= last, "away win fell at rating {rating}");
        last = p.away;
    }
}

#[test]
fn model_is_pure() {
    let t = tables::afc_group_c().expect("builtin tables");
    let params = ModelParams::default();
    for &pairing in t.schedule() {
        let a = compute_match_prob(&t, pairing, &params).unwrap();
        let b = compute_match_prob(&t, pairing, &params).unwrap();
        assert_eq!(a.home.to_bits(), b.home.to_bits());
        assert_eq!(a.draw.to_bits(), b.draw.to_bits());
        assert_eq!(a.away.to_bits(), b.away.to_bits());
    }
}

#[test]
fn upset_history_lifts_the_underdog() {
    let teams = vec![
        Team::new("fav", 1700.0, 30, 0),
        Team::new("dog", 1400.0, 30, 0),
    ];
    let plain = Tournament::new(teams.clone(), &[], &[]).unwrap();
    let upset = Tournament::new(
        teams,
        &[PastResult::new("fav", "dog", Outcome::Away)],
        &[],
    )
    .unwrap();

    let dog_home = Pairing { home: 1, away: 0 };
    let before = compute_match_prob(&plain, dog_home, &ModelParams::default()).unwrap();
    let after = compute_match_prob(&upset, dog_home, &ModelParams::default()).unwrap();
    assert!(after.home > before.home);
    assert!(after.away < before.away);
}
