use board_core::{
    Adjacency, BoardBuilder, BoardConfig, BoardSnapshot, CheckKind, DomainError, ErrorSeverity,
    EvadeRule, MovementBudget, Probability, RiskTable, Skills, Square, ThreatTable,
};
use pathing::{InvalidInput, PathFinder, RerollSource, SearchError, SearchRequest, SearchResult};

fn p(value: f64) -> Probability {
    Probability::new(value).unwrap()
}

fn run(board: &BoardSnapshot, table: &RiskTable, request: SearchRequest) -> SearchResult {
    PathFinder::new(board, table, BoardConfig::default())
        .search(&request)
        .unwrap()
}

/// Table where one adjacent threat makes evading a coin flip.
fn coin_flip_table() -> RiskTable {
    RiskTable::default().with_evade(ThreatTable::new(&[p(1.0), p(0.5)]).unwrap())
}

#[test]
fn open_board_reaches_manhattan_diamond() {
    let board = BoardBuilder::new(5, 5).build().unwrap();
    let table = RiskTable::default();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(3, 0, 0)),
    );

    let origin = Square::new(0, 0);
    let expected: Vec<Square> = (0..5)
        .flat_map(|row| (0..5).map(move |col| Square::new(row, col)))
        .filter(|square| origin.manhattan_distance(*square) <= 3)
        .collect();

    assert_eq!(expected.len(), 10);
    assert_eq!(result.reachable().collect::<Vec<_>>(), expected);
    for (square, record) in result.iter() {
        assert_eq!(record.probability, Probability::CERTAIN, "{square}");
        assert_eq!(record.len() as u32, origin.manhattan_distance(square));
        assert_eq!(record.check_count(), 0);
    }
    assert_eq!(result.safe_squares().count(), 10);
}

#[test]
fn diagonal_board_reaches_chebyshev_square() {
    let board = BoardBuilder::new(5, 5).build().unwrap();
    let table = RiskTable::default();
    let config = BoardConfig::default().with_adjacency(Adjacency::Diagonal);
    let result = PathFinder::new(&board, &table, config)
        .search(&SearchRequest::new(
            Square::new(0, 0),
            MovementBudget::new(2, 0, 0),
        ))
        .unwrap();

    assert_eq!(result.len(), 9);
    assert_eq!(result.get(Square::new(2, 2)).unwrap().len(), 2);
}

#[test]
fn threatened_neighbor_costs_an_evade() {
    let board = BoardBuilder::new(3, 3).with_threat((0, 1), 1).build().unwrap();
    let table = coin_flip_table();
    let budget = MovementBudget::new(1, 0, 0);

    let without = run(&board, &table, SearchRequest::new(Square::new(0, 0), budget));
    assert_eq!(without.probability(Square::new(0, 1)), Some(p(0.5)));
    assert_eq!(without.get(Square::new(0, 1)).unwrap().rerolls_used, 0);

    let with = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), budget.with_rerolls(1)),
    );
    let record = with.get(Square::new(0, 1)).unwrap();
    assert_eq!(record.probability, p(0.75));
    assert_eq!(record.rerolls_used, 1);
    assert_eq!(record.steps[0].checks[0].kind, CheckKind::Evade);
    assert_eq!(record.steps[0].checks[0].reroll, Some(RerollSource::Pool));
}

#[test]
fn enemy_adjacent_square_is_threatened() {
    // enemy at (0,2) covers (0,1); the unthreatened (1,0) stays safe
    let board = BoardBuilder::new(3, 3).with_enemy((0, 2)).build().unwrap();
    let table = coin_flip_table();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(1, 0, 0)),
    );

    assert_eq!(result.probability(Square::new(0, 1)), Some(p(0.5)));
    assert_eq!(result.probability(Square::new(1, 0)), Some(Probability::CERTAIN));
    assert!(!result.contains(Square::new(0, 2)));
}

#[test]
fn search_cost_follows_the_budget_not_the_board_area() {
    let board = BoardBuilder::new(50_000, 50_000)
        .with_enemy((10, 10))
        .build()
        .unwrap();
    let table = RiskTable::default();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(2, 0, 0)),
    );

    assert_eq!(result.len(), 6);
    assert_eq!(result.safe_squares().count(), 6);

    let near = run(
        &board,
        &table,
        SearchRequest::new(Square::new(8, 8), MovementBudget::new(2, 0, 0)),
    );
    assert_eq!(near.len(), 13);
    assert!(near.probability(Square::new(9, 9)).unwrap() < Probability::CERTAIN);
    assert_eq!(near.probability(Square::new(9, 8)), Some(Probability::CERTAIN));
}

#[test]
fn occupied_chokepoint_hides_squares_behind_it() {
    let board = BoardBuilder::new(1, 5).with_ally((0, 2)).build().unwrap();
    let table = RiskTable::default();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(4, 2, 3)),
    );

    assert_eq!(
        result.reachable().collect::<Vec<_>>(),
        vec![Square::new(0, 0), Square::new(0, 1)]
    );
}

#[test]
fn risky_third_step_uses_go_for_it_table() {
    let board = BoardBuilder::new(1, 4).build().unwrap();
    let table = RiskTable::default().with_risky_step(p(0.33));
    let budget = MovementBudget::new(2, 1, 0);

    let plain = run(&board, &table, SearchRequest::new(Square::new(0, 0), budget));
    assert_eq!(plain.probability(Square::new(0, 2)), Some(Probability::CERTAIN));
    let record = plain.get(Square::new(0, 3)).unwrap();
    assert_eq!(record.probability, p(0.33));
    assert_eq!(record.steps[2].checks[0].kind, CheckKind::RiskyStep);

    let rerolled = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), budget.with_rerolls(1)),
    );
    assert_eq!(
        rerolled.probability(Square::new(0, 3)),
        Some(p(0.33).rerolled())
    );
    assert!(rerolled.probability(Square::new(0, 3)).unwrap() > p(0.33));
}

#[test]
fn zero_allowance_keeps_only_origin() {
    let board = BoardBuilder::new(3, 3).build().unwrap();
    let table = RiskTable::default();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(1, 1), MovementBudget::new(0, 0, 0)),
    );

    assert_eq!(result.reachable().collect::<Vec<_>>(), vec![Square::new(1, 1)]);
}

#[test]
fn impossible_checks_are_never_returned() {
    let board = BoardBuilder::new(1, 4).with_threat((0, 1), 1).build().unwrap();
    let never = ThreatTable::new(&[p(1.0), Probability::IMPOSSIBLE]).unwrap();
    let table = RiskTable::default().with_evade(never);
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(3, 0, 2)),
    );

    assert_eq!(result.len(), 1);
}

#[test]
fn pickup_check_applies_on_the_item_square() {
    let board = BoardBuilder::new(1, 3).with_item((0, 2)).build().unwrap();
    let table = RiskTable::default();
    let budget = MovementBudget::new(2, 0, 0);

    let ignored = run(&board, &table, SearchRequest::new(Square::new(0, 0), budget));
    assert_eq!(ignored.probability(Square::new(0, 2)), Some(Probability::CERTAIN));

    let required = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), budget).with_pickup(true),
    );
    assert_eq!(
        required.probability(Square::new(0, 2)),
        Some(table.pickup.get(0))
    );

    let sure_hands = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), budget)
            .with_pickup(true)
            .with_skills(Skills::SURE_HANDS),
    );
    let record = sure_hands.get(Square::new(0, 2)).unwrap();
    assert_eq!(record.probability, table.pickup.get(0).rerolled());
    assert_eq!(record.skills_used, Skills::SURE_HANDS);
    assert_eq!(record.steps[1].checks[0].reroll, Some(RerollSource::Skill));
}

#[test]
fn skill_is_used_once_per_path() {
    // two threatened squares in a row; dodge covers only the first
    let board = BoardBuilder::new(1, 3)
        .with_threat((0, 1), 1)
        .with_threat((0, 2), 1)
        .build()
        .unwrap();
    let table = coin_flip_table();
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(2, 0, 0))
            .with_skills(Skills::DODGE),
    );

    let record = result.get(Square::new(0, 2)).unwrap();
    assert_eq!(record.probability, p(0.75) * p(0.5));
    assert_eq!(record.skills_used, Skills::DODGE);
}

#[test]
fn pool_reroll_is_saved_for_the_weaker_check() {
    // first step is a mild evade, second a harsh one; one reroll should
    // end up on the harsh step
    let board = BoardBuilder::new(1, 3)
        .with_threat((0, 1), 1)
        .with_threat((0, 2), 2)
        .build()
        .unwrap();
    let table = RiskTable::default()
        .with_evade(ThreatTable::new(&[p(1.0), p(0.8), p(0.3)]).unwrap());
    let result = run(
        &board,
        &table,
        SearchRequest::new(Square::new(0, 0), MovementBudget::new(2, 0, 1)),
    );

    let record = result.get(Square::new(0, 2)).unwrap();
    assert_eq!(record.probability, p(0.8) * p(0.3).rerolled());
    assert_eq!(record.steps[0].checks[0].reroll, None);
    assert_eq!(record.steps[1].checks[0].reroll, Some(RerollSource::Pool));

    // the one-step destination still spends its reroll greedily
    assert_eq!(
        result.probability(Square::new(0, 1)),
        Some(p(0.8).rerolled())
    );
}

#[test]
fn leave_rule_charges_escaping_a_threatened_origin() {
    let board = BoardBuilder::new(1, 3).with_threat((0, 0), 1).build().unwrap();
    let table = RiskTable::default();
    let config = BoardConfig::default().with_evade_rule(EvadeRule::OnLeave);
    let result = PathFinder::new(&board, &table, config)
        .search(&SearchRequest::new(
            Square::new(0, 0),
            MovementBudget::new(2, 0, 0),
        ))
        .unwrap();

    // priced by the clear destination
    let escape = table.evade.get(0);
    assert_eq!(result.probability(Square::new(0, 1)), Some(escape));
    assert_eq!(result.probability(Square::new(0, 2)), Some(escape));
}

#[test]
fn equal_routes_break_ties_deterministically() {
    let board = BoardBuilder::new(2, 2).build().unwrap();
    let table = RiskTable::default();
    let request = SearchRequest::new(Square::new(0, 0), MovementBudget::new(2, 0, 0));

    let first = run(&board, &table, request);
    let second = run(&board, &table, request);
    assert_eq!(first, second);
    // (0,1) sorts before (1,0), so the route through it is explored first
    assert_eq!(
        first.path_to(Square::new(1, 1)),
        Some(vec![Square::new(0, 1), Square::new(1, 1)])
    );
}

#[test]
fn rejects_invalid_origins() {
    let board = BoardBuilder::new(3, 3).with_enemy((1, 1)).build().unwrap();
    let table = RiskTable::default();
    let finder = PathFinder::new(&board, &table, BoardConfig::default());

    let outside = finder.search(&SearchRequest::new(
        Square::new(3, 0),
        MovementBudget::new(2, 0, 0),
    ));
    assert!(matches!(
        outside,
        Err(SearchError::InvalidInput(InvalidInput::OriginOutOfBounds { .. }))
    ));

    let occupied = finder
        .search(&SearchRequest::new(
            Square::new(1, 1),
            MovementBudget::new(2, 0, 0),
        ))
        .unwrap_err();
    assert_eq!(occupied.error_code(), "SEARCH_ORIGIN_OCCUPIED");
    assert_eq!(occupied.severity(), ErrorSeverity::Validation);
}

#[test]
fn rejects_invalid_tables() {
    let board = BoardBuilder::new(3, 3).build().unwrap();
    let table = RiskTable::default().with_risky_step(Probability::CERTAIN);
    let error = PathFinder::new(&board, &table, BoardConfig::default())
        .search(&SearchRequest::new(
            Square::new(0, 0),
            MovementBudget::new(2, 1, 0),
        ))
        .unwrap_err();

    assert_eq!(error.error_code(), "TABLE_RISKY_STEP_NOT_RISKY");
}
