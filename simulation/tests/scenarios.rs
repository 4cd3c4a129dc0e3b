use pellet_chase_core::{CellCoord, CellKind, Direction, Event, GhostColor, GhostId, PlayState};
use pellet_chase_simulation::{Config, Simulation};
use pellet_chase_world::{GhostSpawn, Layout, MazeGrid, Rules};

fn layout(template: &[&str], player: CellCoord, ghosts: &[CellCoord]) -> Layout {
    let maze = MazeGrid::parse(template).expect("valid template");
    let spawns = ghosts
        .iter()
        .map(|cell| GhostSpawn::new(*cell, GhostColor::from_rgb(255, 0, 0)))
        .collect();
    Layout::new(maze, player, spawns).expect("valid layout")
}

fn count<F>(events: &[Event], predicate: F) -> usize
where
    F: Fn(&Event) -> bool,
{
    events.iter().filter(|event| predicate(event)).count()
}

#[test]
fn player_runs_right_until_wall() {
    let open = [
        "#########",
        "#       #",
        "#       #",
        "#       #",
        "#       #",
        "#       #",
        "#       #",
        "#       #",
        "#########",
    ];
    let mut simulation = Simulation::with_layout(
        layout(&open, CellCoord::new(1, 1), &[]),
        Config::default().with_seed(0),
    );
    let mut events = Vec::new();
    simulation.set_intent(Direction::Right, &mut events);

    for tick in 1..=12u32 {
        simulation.tick(&mut events);
        let player = simulation.player();
        assert_eq!(player.cell, CellCoord::new((1 + tick).min(7), 1));
        assert_eq!(player.direction, Direction::Right);
        assert_eq!(player.intent, Direction::Right);
    }
    assert!(events.contains(&Event::PlayerBlocked {
        at: CellCoord::new(7, 1),
        intent: Direction::Right,
    }));
}

#[test]
fn eating_last_pellet_wins_once() {
    let mut simulation = Simulation::with_layout(
        layout(
            &["#####", "# . #", "#   #", "#   #", "#####"],
            CellCoord::new(1, 1),
            &[CellCoord::new(3, 3)],
        ),
        Config::default().with_seed(0),
    );
    let mut events = Vec::new();
    simulation.set_intent(Direction::Right, &mut events);

    for _ in 0..10 {
        simulation.tick(&mut events);
    }

    let status = simulation.status();
    assert_eq!(status.score, 10);
    assert_eq!(status.pellets_remaining, 0);
    assert_eq!(status.play_state, PlayState::Won);
    assert_eq!(
        count(&events, |event| matches!(event, Event::GameWon { .. })),
        1
    );
    assert_eq!(
        count(&events, |event| matches!(event, Event::GameLost { .. })),
        0
    );
}

#[test]
fn caught_player_freezes_game_until_restart() {
    let mut simulation = Simulation::with_layout(
        layout(
            &["#######", "#     #", "#######"],
            CellCoord::new(1, 1),
            &[CellCoord::new(3, 1)],
        ),
        Config::default().with_seed(0),
    );
    let mut events = Vec::new();
    simulation.set_intent(Direction::Up, &mut events);

    for _ in 0..10 {
        simulation.tick(&mut events);
    }
    assert_eq!(simulation.play_state(), PlayState::Lost);
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, Event::GameLost { .. }))
            .collect::<Vec<_>>(),
        vec![&Event::GameLost {
            cell: CellCoord::new(1, 1),
            ghost: GhostId::new(0),
        }]
    );

    let frozen = simulation.snapshot();
    events.clear();
    for _ in 0..10 {
        simulation.tick(&mut events);
    }
    assert!(events.is_empty());
    assert_eq!(simulation.snapshot(), frozen);

    simulation.restart(&mut events);
    assert_eq!(events, vec![Event::GameRestarted]);
    assert_eq!(simulation.play_state(), PlayState::Running);
    assert_eq!(
        simulation.ghosts().get(GhostId::new(0)).map(|ghost| ghost.cell),
        Some(CellCoord::new(3, 1))
    );
}

#[test]
fn collision_is_judged_after_every_actor_moved() {
    let mut simulation = Simulation::with_layout(
        layout(
            &["########", "#      #", "########"],
            CellCoord::new(1, 1),
            &[CellCoord::new(4, 1)],
        ),
        Config::new(Rules::new(1, 10)).with_seed(0),
    );
    let mut events = Vec::new();

    // Tick 2: the player steps onto the ghost's cell while the ghost steps away.
    // Tick 5: player and ghost swap cells.
    for _ in 0..5 {
        simulation.tick(&mut events);
        assert_eq!(simulation.play_state(), PlayState::Running);
    }
    assert_eq!(simulation.player().cell, CellCoord::new(6, 1));

    simulation.tick(&mut events);
    assert_eq!(simulation.play_state(), PlayState::Lost);
    assert!(events.contains(&Event::GameLost {
        cell: CellCoord::new(6, 1),
        ghost: GhostId::new(0),
    }));
}

#[test]
fn invariants_hold_through_scripted_classic_play() {
    let mut simulation = Simulation::new(Config::default().with_seed(17)).expect("classic");
    let initial = simulation.snapshot();
    let script = [
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Right,
    ];

    let mut events = Vec::new();
    let mut last_score = 0;
    let mut last_remaining = initial.status.pellets_remaining;
    for tick in 0..2_000usize {
        if tick % 6 == 0 {
            simulation.set_intent(script[(tick / 6) % script.len()], &mut events);
        }
        events.clear();
        simulation.tick(&mut events);

        let frame = simulation.snapshot();
        let maze = frame.maze();
        assert!(maze.is_passable(frame.player.cell));
        for ghost in &frame.ghosts {
            assert!(maze.is_passable(ghost.cell));
        }
        assert_eq!(frame.status.pellets_remaining, maze.count(CellKind::Pellet));
        assert!(frame.status.score >= last_score);
        assert!(frame.status.pellets_remaining <= last_remaining);
        assert!(count(&events, |event| matches!(event, Event::PelletEaten { .. })) <= 1);
        assert!(
            count(&events, |event| matches!(
                event,
                Event::GameWon { .. } | Event::GameLost { .. }
            )) <= 1
        );
        last_score = frame.status.score;
        last_remaining = frame.status.pellets_remaining;

        match frame.status.play_state {
            PlayState::Running => {}
            PlayState::Won => {
                assert_eq!(frame.status.pellets_remaining, 0);
            }
            PlayState::Lost => {
                assert!(frame
                    .ghosts
                    .iter()
                    .any(|ghost| ghost.cell == frame.player.cell));
            }
        }

        if frame.status.play_state.is_terminal() {
            simulation.restart(&mut events);
            assert_eq!(simulation.snapshot(), initial);
            last_score = 0;
            last_remaining = initial.status.pellets_remaining;
        }
    }
}

#[test]
fn restart_mid_game_matches_fresh_session() {
    let mut simulation = Simulation::new(Config::default().with_seed(3)).expect("classic");
    let fresh = simulation.snapshot();
    let mut events = Vec::new();

    simulation.set_intent(Direction::Down, &mut events);
    for _ in 0..7 {
        simulation.tick(&mut events);
    }
    assert_ne!(simulation.snapshot(), fresh);

    simulation.restart(&mut events);
    assert_eq!(simulation.snapshot(), fresh);
    simulation.restart(&mut events);
    assert_eq!(simulation.snapshot(), fresh);
}
