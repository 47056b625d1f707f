use broadside::{
    Action, Board, CursorMover, Grid, Key, Player, PlayerError, PlayerKind, SelectionCycler,
    SessionConfig, Ship, ShipId, Square, StartSide,
};

#[derive(Debug, Clone, Default)]
struct RecordingShip {
    destroyed: bool,
    visible: bool,
    visibility_writes: Vec<bool>,
}

impl RecordingShip {
    fn alive() -> Self {
        Self::default()
    }

    fn wrecked() -> Self {
        Self {
            destroyed: true,
            ..Self::default()
        }
    }
}

impl Ship for RecordingShip {
    fn name(&self) -> &str {
        "Recorder"
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.visibility_writes.push(visible);
    }
}

struct Target(bool);

impl Square for Target {
    fn is_usable(&self) -> bool {
        self.0
    }
}

fn player(kind: PlayerKind, side: StartSide) -> Player<RecordingShip> {
    let grid = Grid::new(10, 10);
    Player::new(kind, side, &grid, &SessionConfig::default()).unwrap()
}

#[test]
fn test_start_positions_follow_side() {
    let grid = Grid::new(8, 6);
    let cfg = SessionConfig::default();
    let tl: Player<RecordingShip> =
        Player::new(PlayerKind::PlayerOne, StartSide::TopLeft, &grid, &cfg).unwrap();
    let br: Player<RecordingShip> =
        Player::new(PlayerKind::PlayerTwo, StartSide::BottomRight, &grid, &cfg).unwrap();
    assert_eq!(tl.start_position(), broadside::Coord::new(0, 0));
    assert_eq!(br.start_position(), broadside::Coord::new(7, 5));
    assert_eq!(br.start_square(&grid).unwrap().coord, broadside::Coord::new(7, 5));
}

#[test]
fn test_fresh_player_state() {
    let p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    assert!(p.fleet().is_empty());
    assert!(p.selected_ship().is_none());
    assert!(!p.is_hidden());
    assert_eq!(p.shots_remaining(), 4);
    assert_eq!(p.damage(), 50);
    assert_eq!(p.side(), StartSide::TopLeft);
}

#[test]
fn test_unknown_side_fails_fast() {
    let grid = Grid::new(10, 10);
    let err = Player::<RecordingShip>::from_side_name(
        PlayerKind::PlayerOne,
        "middle",
        &grid,
        &SessionConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlayerError::UnknownStartSide("middle".to_string()));

    let p = Player::<RecordingShip>::from_side_name(
        PlayerKind::PlayerTwo,
        "Bottom_Right",
        &grid,
        &SessionConfig::default(),
    )
    .unwrap();
    assert_eq!(p.side(), StartSide::BottomRight);
}

#[test]
fn test_empty_board_fails_fast() {
    let grid = Grid::new(0, 10);
    let err = Player::<RecordingShip>::new(
        PlayerKind::PlayerTwo,
        StartSide::BottomRight,
        &grid,
        &SessionConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlayerError::EmptyBoard { columns: 0, rows: 10 });
}

#[test]
fn test_turn_scenario() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    assert_eq!(p.start_position(), broadside::Coord::new(0, 0));

    p.add_ship(RecordingShip::alive());
    p.add_ship(RecordingShip::wrecked());
    p.add_ship(RecordingShip::alive());
    assert_eq!(p.num_ships_left(), 2);

    for expected in [3, 2, 1, 0, 0] {
        p.shoot(&Target(true));
        assert_eq!(p.shots_remaining(), expected);
    }

    p.reset_shots();
    assert_eq!(p.shots_left(), 4);
}

#[test]
fn test_shots_masked_when_fleet_destroyed() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    let id = p.add_ship(RecordingShip::wrecked());
    assert_eq!(p.shots_remaining(), 4);
    assert_eq!(p.shots_left(), 0);

    p.shoot(&Target(true));
    assert_eq!(p.shots_remaining(), 4, "stored count untouched by blocked shot");

    p.ship_mut(id).unwrap().destroyed = false;
    p.reset_shots();
    assert_eq!(p.shots_left(), 4);
}

#[test]
fn test_shot_outcome_reasons() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    p.add_ship(RecordingShip::alive());

    assert_eq!(p.try_shoot(&Target(false)), broadside::ShotOutcome::SquareUnusable);
    assert_eq!(p.shots_remaining(), 4);
    for _ in 0..4 {
        assert_eq!(p.try_shoot(&Target(true)), broadside::ShotOutcome::Fired);
    }
    assert_eq!(p.try_shoot(&Target(true)), broadside::ShotOutcome::NoShotsLeft);
}

#[test]
fn test_reset_position_is_idempotent() {
    let mut p = player(PlayerKind::PlayerTwo, StartSide::BottomRight);
    let mut cursor = CursorMover::new(10, 10);
    p.set_position(broadside::Coord::new(3, 4));
    p.reset_position(&mut cursor);
    assert_eq!(p.position(), broadside::Coord::new(9, 9));
    p.reset_position(&mut cursor);
    assert_eq!(p.position(), p.start_position());
    assert_eq!(
        cursor.last_move(),
        Some((PlayerKind::PlayerTwo, broadside::Coord::new(9, 9)))
    );
}

#[test]
fn test_hide_propagates_on_every_call() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    p.add_ship(RecordingShip::alive());
    p.add_ship(RecordingShip::wrecked());

    p.set_hidden(true);
    p.set_hidden(true);
    assert!(p.is_hidden());
    for ship in p.fleet() {
        assert_eq!(ship.visibility_writes, vec![false, false]);
    }

    p.toggle_hide();
    assert!(!p.is_hidden());
    for ship in p.fleet() {
        assert_eq!(ship.visibility_writes, vec![false, false, true]);
        assert!(ship.is_visible());
    }
}

#[test]
fn test_hide_resyncs_late_ship() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    p.set_hidden(true);
    let id = p.add_ship(RecordingShip {
        visible: true,
        ..RecordingShip::default()
    });
    p.set_hidden(true);
    assert!(!p.ship(id).unwrap().is_visible());
}

#[test]
fn test_ships_snapshot_is_independent() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    p.add_ship(RecordingShip::alive());
    p.add_ship(RecordingShip::alive());

    let mut snapshot = p.ships();
    snapshot[0].destroyed = true;
    snapshot.push(RecordingShip::alive());
    snapshot.clear();

    assert_eq!(p.num_ships_left(), 2);
    assert_eq!(p.fleet().len(), 2);
}

#[test]
fn test_selection_requires_fleet_membership() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    assert_eq!(
        p.set_selected_ship(ShipId(0)),
        Err(PlayerError::ShipNotInFleet(ShipId(0)))
    );
    let id = p.add_ship(RecordingShip::alive());
    p.set_selected_ship(id).unwrap();
    assert_eq!(p.selected_ship_id(), Some(id));
    assert!(p.set_selected_ship(ShipId(7)).is_err());
    assert_eq!(p.selected_ship_id(), Some(id));
    p.clear_selected_ship();
    assert!(p.selected_ship().is_none());
}

#[test]
fn test_keys_dispatch_through_bindings() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    let mut cursor = CursorMover::new(10, 10);
    let mut cycler = SelectionCycler::new();
    p.add_ship(RecordingShip::alive());
    p.add_ship(RecordingShip::wrecked());
    p.add_ship(RecordingShip::alive());

    assert_eq!(p.handle_key(Key::Char('d'), &mut cursor, &mut cycler), Some(Action::Right));
    assert_eq!(p.handle_key(Key::Char('s'), &mut cursor, &mut cycler), Some(Action::Down));
    assert_eq!(p.position(), broadside::Coord::new(1, 1));

    p.handle_key(Key::Char('w'), &mut cursor, &mut cycler);
    p.handle_key(Key::Char('w'), &mut cursor, &mut cycler);
    p.handle_key(Key::Char('a'), &mut cursor, &mut cycler);
    p.handle_key(Key::Char('a'), &mut cursor, &mut cycler);
    assert_eq!(p.position(), broadside::Coord::new(0, 0), "cursor clamps at the edge");

    p.handle_key(Key::Space, &mut cursor, &mut cycler);
    assert_eq!(p.selected_ship_id(), Some(ShipId(0)));
    p.handle_key(Key::Space, &mut cursor, &mut cycler);
    assert_eq!(p.selected_ship_id(), Some(ShipId(2)), "destroyed ship skipped");
    p.handle_key(Key::Space, &mut cursor, &mut cycler);
    assert_eq!(p.selected_ship_id(), Some(ShipId(0)));
    assert_eq!(cycler.confirmations(), 3);

    p.handle_key(Key::Char('q'), &mut cursor, &mut cycler);
    assert!(p.is_hidden());

    let before = p.state();
    assert_eq!(p.handle_key(Key::ArrowUp, &mut cursor, &mut cycler), None);
    assert_eq!(p.handle_key(Key::Char('z'), &mut cursor, &mut cycler), None);
    assert_eq!(p.state(), before);
}

#[test]
fn test_rebind_changes_dispatch() {
    let mut p = player(PlayerKind::PlayerTwo, StartSide::BottomRight);
    let mut cursor = CursorMover::new(10, 10);
    let mut cycler = SelectionCycler::new();
    p.rebind(Action::ToggleHide, Key::Char('h'));
    assert_eq!(p.handle_key(Key::Backspace, &mut cursor, &mut cycler), None);
    assert_eq!(
        p.handle_key(Key::Char('h'), &mut cursor, &mut cycler),
        Some(Action::ToggleHide)
    );
    assert!(p.keys_used().any(|k| k == Key::Char('h')));
}

#[test]
fn test_confirm_with_no_living_ships_clears_selection() {
    let mut p = player(PlayerKind::PlayerOne, StartSide::TopLeft);
    let mut cursor = CursorMover::new(10, 10);
    let mut cycler = SelectionCycler::new();
    let id = p.add_ship(RecordingShip::alive());
    p.set_selected_ship(id).unwrap();
    p.ship_mut(id).unwrap().destroyed = true;
    p.handle(Action::Enter, &mut cursor, &mut cycler);
    assert!(p.selected_ship_id().is_none());
}

#[test]
fn test_grid_square_lookup() {
    let mut grid = Grid::new(4, 3);
    assert_eq!(grid.columns(), 4);
    assert_eq!(grid.rows(), 3);
    assert!(grid.square(broadside::Coord::new(4, 0)).is_none());
    let at = broadside::Coord::new(3, 2);
    assert!(grid.square(at).unwrap().is_usable());
    assert!(grid.mark_fired(at));
    assert!(!grid.mark_fired(at));
    assert!(!grid.square(at).unwrap().is_usable());
}
