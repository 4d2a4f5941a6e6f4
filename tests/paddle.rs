use glam::Vec2;
use proptest::prelude::*;
use tiny_arcade::consts::*;
use tiny_arcade::platform::dispatch_key;
use tiny_arcade::{Direction, FrameEvent, PaddleGame, Settings};

/// Hold whichever key moves the paddle under the ball
fn steer_toward_ball(game: &mut PaddleGame) {
    let centre = game.paddle().pos.x + game.paddle().width / 2.0;
    let target = game.ball().pos.x;
    game.key_up(Direction::Left);
    game.key_up(Direction::Right);
    if target < centre - 4.0 {
        game.key_down(Direction::Left);
    } else if target > centre + 4.0 {
        game.key_down(Direction::Right);
    }
}

#[test]
fn test_ball_beside_paddle_is_missed() {
    let mut game = PaddleGame::new(2024);
    // Park the paddle against the left wall
    game.key_down(Direction::Left);
    for _ in 0..60 {
        game.advance_frame();
        if !game.is_running() {
            game.serve();
        }
    }
    assert_eq!(game.paddle().pos.x, 0.0);

    game.place_ball(Vec2::new(500.0, 200.0), Vec2::new(0.0, 3.0));
    let mut frames = 0;
    while game.is_running() {
        game.advance_frame();
        frames += 1;
        assert!(frames < 200, "ball never left the field");
    }
    assert_eq!(game.score(), 0);
    assert!(game.ball().pos.y - game.ball().radius > FIELD_HEIGHT);

    // Stays stopped until served
    for _ in 0..10 {
        game.advance_frame();
    }
    assert!(!game.is_running());
}

#[test]
fn test_tracking_paddle_scores_and_caps_speed() {
    let mut game = PaddleGame::new(7);
    let mut last_speed = 0.0_f32;
    let mut hits = 0;

    for _ in 0..20_000 {
        steer_toward_ball(&mut game);
        for event in game.advance_frame() {
            match event {
                FrameEvent::PaddleHit { speed, .. } => {
                    assert!(speed + 1e-4 >= last_speed, "speed dropped: {last_speed} -> {speed}");
                    assert!(speed <= BALL_MAX_SPEED);
                    last_speed = speed;
                    hits += 1;
                }
                FrameEvent::Missed { .. } => {
                    last_speed = 0.0;
                }
                _ => {}
            }
        }
        if !game.is_running() {
            game.serve();
        }
    }

    assert!(hits > 0, "tracking paddle never returned the ball");
    assert!(game.best() >= 1);
}

#[test]
fn test_dead_centre_hit_at_cap() {
    let mut game = PaddleGame::new(11);
    game.reset();
    let centre = game.paddle().pos.x + game.paddle().width / 2.0;

    // Drop the ball on the middle of the paddle repeatedly until speed caps
    for _ in 0..40 {
        let speed = game.ball().speed();
        game.place_ball(Vec2::new(centre, PADDLE_Y - 2.0), Vec2::new(0.0, speed));
        game.advance_frame();
    }

    let vel = game.ball().vel;
    assert!(vel.x.abs() < 1e-4);
    assert!(vel.y < 0.0);
    assert!((vel.y.abs() - BALL_MAX_SPEED).abs() < 1e-4);
}

#[test]
fn test_custom_settings_apply() {
    let settings = Settings::from_json(r#"{ "field_width": 300.0, "paddle_width": 60.0 }"#).unwrap();
    let mut game = PaddleGame::with_settings(settings, 1);
    assert_eq!(game.paddle().pos.x, 120.0);
    game.key_down(Direction::Right);
    for _ in 0..100 {
        game.advance_frame();
        if !game.is_running() {
            game.serve();
        }
    }
    assert_eq!(game.paddle().pos.x, 240.0);
}

#[test]
fn test_space_serves_only_after_miss() {
    let mut game = PaddleGame::new(3);
    game.place_ball(Vec2::new(20.0, FIELD_HEIGHT + BALL_RADIUS), Vec2::new(0.0, 1.0));
    game.advance_frame();
    assert!(!game.is_running());

    assert!(dispatch_key(&mut game, "Space", true));
    assert!(game.is_running());
    assert_eq!(game.ball().pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
}

#[derive(Debug, Clone)]
enum Op {
    Frame,
    KeyDown(Direction),
    KeyUp(Direction),
    Serve,
    Reset,
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => Just(Op::Frame),
        2 => direction().prop_map(Op::KeyDown),
        2 => direction().prop_map(Op::KeyUp),
        1 => Just(Op::Serve),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn paddle_never_leaves_field(
        seed in any::<u64>(),
        inputs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..400),
    ) {
        let mut game = PaddleGame::new(seed);
        let max_x = FIELD_WIDTH - PADDLE_WIDTH;
        for (left, right) in inputs {
            game.key_up(Direction::Left);
            game.key_up(Direction::Right);
            if left {
                game.key_down(Direction::Left);
            }
            if right {
                game.key_down(Direction::Right);
            }
            game.advance_frame();
            if !game.is_running() {
                game.serve();
            }
            let x = game.paddle().pos.x;
            prop_assert!((0.0..=max_x).contains(&x), "paddle x {} out of range", x);
        }
    }

    #[test]
    fn best_never_decreases(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..600)) {
        let mut game = PaddleGame::new(seed);
        let mut best = game.best();
        for op in ops {
            match op {
                Op::Frame => {
                    steer_toward_ball(&mut game);
                    game.advance_frame();
                }
                Op::KeyDown(dir) => game.key_down(dir),
                Op::KeyUp(dir) => game.key_up(dir),
                Op::Serve => {
                    game.serve();
                }
                Op::Reset => game.reset(),
            }
            prop_assert!(game.best() >= best);
            prop_assert!(game.best() >= game.score());
            best = game.best();
        }
    }

    #[test]
    fn stopped_game_stays_stopped(seed in any::<u64>(), frames in 1usize..50) {
        let mut game = PaddleGame::new(seed);
        game.place_ball(Vec2::new(100.0, FIELD_HEIGHT + BALL_RADIUS), Vec2::new(1.0, 1.0));
        game.advance_frame();
        prop_assert!(!game.is_running());

        let snapshot = game.snapshot();
        game.key_down(Direction::Left);
        for _ in 0..frames {
            prop_assert!(game.advance_frame().is_empty());
        }
        prop_assert_eq!(game.snapshot(), snapshot);
    }
}
