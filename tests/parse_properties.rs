use proptrack::domain::{Direction, League, ParsedBet, PlayerProp, StatKey, TeamTotal};
use proptrack::lexicon::aliases_for;
use proptrack::{parse_input, parse_line};

fn prop(line: &str) -> PlayerProp {
    match parse_line(line) {
        Some(ParsedBet::PlayerProp(p)) => p,
        other => panic!("expected a player prop for {line:?}, got {other:?}"),
    }
}

fn total(line: &str) -> TeamTotal {
    match parse_line(line) {
        Some(ParsedBet::TeamTotal(t)) => t,
        other => panic!("expected a total for {line:?}, got {other:?}"),
    }
}

#[test]
fn every_stat_alias_resolves_to_its_key() {
    for league in [League::Nba, League::Nfl] {
        for &(alias, key) in aliases_for(league) {
            let p = prop(&format!("Sample Guy 12+ {alias}"));
            assert_eq!(p.stat_type, key, "alias {alias:?}");
            assert_eq!(p.target, 12.0, "alias {alias:?}");
            assert_eq!(p.direction, Direction::Over, "alias {alias:?}");
            assert_eq!(p.league, league, "alias {alias:?}");
            assert_eq!(p.player_name, "Sample Guy", "alias {alias:?}");
        }
    }
}

#[test]
fn under_keyword_and_suffix() {
    assert_eq!(prop("Lebron under 25 points").direction, Direction::Under);
    assert_eq!(prop("Lebron 25- points").direction, Direction::Under);
    // the suffix sign wins over a conflicting keyword
    assert_eq!(prop("Lebron over 25- points").direction, Direction::Under);
    assert_eq!(prop("Lebron under 25+ points").direction, Direction::Over);
    // a sign glued to the stat still counts and never leaks into the name
    let glued = prop("lebron 25-pts");
    assert_eq!(glued.direction, Direction::Under);
    assert_eq!(glued.player_name, "Lebron");
    assert_eq!(prop("lebron 25+pts").player_name, "Lebron");
    assert_eq!(prop("kelce 5.5+rec").player_name, "Kelce");
    assert_eq!(prop("curry 4+3s").stat_type, StatKey::Threes);
}

#[test]
fn longest_alias_wins() {
    assert_eq!(prop("Jokic 30+ points rebounds assists").stat_type, StatKey::PtsRebAst);
    assert_eq!(prop("Jokic 30+ points rebounds").stat_type, StatKey::PtsReb);
    assert_eq!(prop("Henry 120+ rush rec yards").stat_type, StatKey::RushRecYards);
}

#[test]
fn team_lookup_ignores_case_and_whitespace() {
    let expected = parse_line("lakers ML").unwrap();
    assert_eq!(parse_line("Lakers ml"), Some(expected.clone()));
    assert_eq!(parse_line("  Lakers   ML"), Some(expected.clone()));
    assert_eq!(expected.display_title(), "Lakers ML");
}

#[test]
fn spread_sign_preserved() {
    let Some(ParsedBet::TeamSpread(s)) = parse_line("Chiefs -3.5") else {
        panic!("expected spread");
    };
    assert_eq!(s.spread, -3.5);
    let Some(ParsedBet::TeamSpread(s)) = parse_line("Chiefs +7") else {
        panic!("expected spread");
    };
    assert_eq!(s.spread, 7.0);
}

#[test]
fn total_forms_are_equivalent() {
    assert_eq!(total("Over 45.5 Chiefs Lions"), total("Chiefs Lions Over 45.5"));
    let t = total("Chiefs Lions Over 45.5");
    assert_eq!(t.team1.name, "Chiefs");
    assert_eq!(t.team2.name, "Lions");
    assert_eq!(t.target, 45.5);
    assert_eq!(t.league, League::Nfl);
}

#[test]
fn cross_league_total_rejected() {
    assert_eq!(parse_line("Over 10 Lakers Chiefs"), None);
}

#[test]
fn batch_split_preserves_order() {
    let bets = parse_input("lebron 25+ points, mahomes 300+ passing yards");
    assert_eq!(bets.len(), 2);
    assert_eq!(bets[0].display_title(), "Lebron 25+ PTS");
    assert_eq!(bets[1].display_title(), "Mahomes 300+ PASS YDS");

    let bets = parse_input("Lakers ML and Chiefs -3\nOver 45.5 Chiefs Lions; jokic 10+ boards");
    assert_eq!(bets.len(), 4);
}

#[test]
fn garbage_yields_nothing() {
    for input in ["", "   ", "asdkjh", ",,;\n"] {
        assert!(parse_input(input).is_empty(), "input {input:?}");
    }
}

#[test]
fn league_prefix_overrides_detection() {
    let bets = parse_input("nfl: giddey 15+ assists");
    assert_eq!(bets.len(), 1);
    assert_eq!(bets[0].league(), League::Nfl);
    let ParsedBet::PlayerProp(p) = &bets[0] else {
        panic!("expected prop");
    };
    assert_eq!(p.stat_type, StatKey::Assists);
    assert_eq!(p.player_name, "Giddey");
}

#[test]
fn zero_target_is_dropped() {
    assert_eq!(parse_line("lebron 0+ points"), None);
    assert_eq!(parse_line("Over 0 Chiefs Lions"), None);
}

#[test]
fn bets_serialize_with_bet_type_tag() {
    let value = serde_json::to_value(parse_line("Chiefs -3.5").unwrap()).unwrap();
    assert_eq!(value["betType"], "team_spread");
    assert_eq!(value["spread"], -3.5);
    assert_eq!(value["team"]["abbreviation"], "KC");
}
