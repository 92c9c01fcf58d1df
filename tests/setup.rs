//! Integration tests for the setup phase: adding and removing teams, then starting.

use petanque_tournament::{
    SequentialIds, TournamentEngine, TournamentError, TournamentSettings, TournamentStatus,
    TournamentType,
};

fn engine() -> TournamentEngine<SequentialIds> {
    TournamentEngine::new(SequentialIds::new())
}

#[test]
fn players_per_team_follows_type() {
    assert_eq!(TournamentType::TeteATete.players_per_team(), 1);
    assert_eq!(TournamentType::Doublette.players_per_team(), 2);
    assert_eq!(TournamentType::Triplette.players_per_team(), 3);
    assert_eq!(TournamentType::Quadrette.players_per_team(), 4);
    assert_eq!(TournamentType::Sextette.players_per_team(), 6);
    assert_eq!(TournamentType::PouleDoublette.players_per_team(), 2);
    assert_eq!(TournamentType::PouleTriplette.players_per_team(), 3);
}

#[test]
fn new_tournament_is_in_setup() {
    let e = engine();
    let t = e.create_tournament("Concours du dimanche", TournamentType::Doublette, TournamentSettings::default());
    assert_eq!(t.status, TournamentStatus::Setup);
    assert_eq!(t.current_round, 0);
    assert!(t.teams.is_empty());
    assert!(t.matches.is_empty());
}

#[test]
fn add_team_checks_size_against_type() {
    let e = engine();
    let mut t = e.create_tournament("Triplette", TournamentType::Triplette, TournamentSettings::default());
    let pair = e.create_team(&["A", "B"], 2).unwrap();
    assert!(matches!(t.add_team(pair), Err(TournamentError::InvalidTeam { .. })));

    let trio = e.create_team(&["A", "B", "C"], 3).unwrap();
    t.add_team(trio).unwrap();
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn remove_team_by_id() {
    let e = engine();
    let mut t = e.create_tournament("T", TournamentType::TeteATete, TournamentSettings::default());
    let a = e.create_team(&["A"], 1).unwrap();
    let b = e.create_team(&["B"], 1).unwrap();
    let a_id = a.id;
    t.add_team(a).unwrap();
    t.add_team(b).unwrap();

    t.remove_team(a_id).unwrap();
    assert_eq!(t.teams.len(), 1);
    assert_eq!(t.teams[0].number, 1);
    assert_eq!(t.remove_team(a_id), Err(TournamentError::TeamNotFound(a_id)));
}

#[test]
fn start_from_setup_then_teams_are_frozen() {
    let e = engine();
    let mut t = e.create_tournament("T", TournamentType::Doublette, TournamentSettings::default());
    for names in [["A", "B"], ["C", "D"], ["E", "F"], ["G", "H"]] {
        t.add_team(e.create_team(&names, 2).unwrap()).unwrap();
    }
    let started = e.start_tournament(&t).unwrap();
    assert_eq!(started.status, TournamentStatus::Active);
    assert_eq!(started.matches.len(), 2);
    // the setup snapshot is untouched
    assert_eq!(t.status, TournamentStatus::Setup);

    let mut frozen = started.clone();
    let extra = e.create_team(&["I", "J"], 2).unwrap();
    assert_eq!(
        frozen.add_team(extra),
        Err(TournamentError::InvalidState { actual: TournamentStatus::Active })
    );
    let first = frozen.teams[0].id;
    assert!(matches!(frozen.remove_team(first), Err(TournamentError::InvalidState { .. })));

    assert!(matches!(e.start_tournament(&started), Err(TournamentError::InvalidState { .. })));
}

#[test]
fn start_from_setup_with_one_team_fails() {
    let e = engine();
    let mut t = e.create_tournament("T", TournamentType::TeteATete, TournamentSettings::default());
    t.add_team(e.create_team(&["A"], 1).unwrap()).unwrap();
    assert_eq!(
        e.start_tournament(&t),
        Err(TournamentError::InsufficientTeams { found: 1 })
    );
}

#[test]
fn terrain_count_spreads_first_round() {
    let e = engine();
    let settings = TournamentSettings {
        max_rounds: None,
        terrain_count: Some(3),
    };
    let mut t = e.create_tournament("T", TournamentType::TeteATete, settings);
    for name in ["A", "B", "C", "D"] {
        t.add_team(e.create_team(&[name], 1).unwrap()).unwrap();
    }
    let t = e.start_tournament(&t).unwrap();
    let terrains: Vec<_> = t.matches.iter().map(|m| m.terrain).collect();
    assert_eq!(terrains, vec![Some(1), Some(2)]);
}

#[test]
fn teams_are_numbered_and_renumbered_after_removal() {
    let e = engine();
    let mut t = e.create_tournament("T", TournamentType::TeteATete, TournamentSettings::default());
    let teams: Vec<_> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| e.create_team(&[*name], 1).unwrap())
        .collect();
    assert!(teams.iter().all(|team| team.number == 0));
    let second = teams[1].id;
    for team in teams {
        t.add_team(team).unwrap();
    }
    let numbers: Vec<_> = t.teams.iter().map(|team| team.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);

    t.remove_team(second).unwrap();
    let numbered: Vec<_> = t
        .teams
        .iter()
        .map(|team| (team.players[0].as_str(), team.number))
        .collect();
    assert_eq!(numbered, vec![("A", 1), ("C", 2), ("D", 3)]);
    assert_eq!(t.teams[1].display_name(), "Équipe 2");
}
