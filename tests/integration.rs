// Integration tests (native) for the `marshmallow-roast` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use marshmallow_roast::render::DrawLog;
use marshmallow_roast::{
    Cue, Game, GameConfig, Marshmallow, MemoryScore, RecordingAudio, Screen, Stage, StopToken,
    stage_for,
};

fn steps_until(m: &mut Marshmallow, stage: Stage) -> usize {
    let mut steps = 0;
    while m.stage() != stage {
        m.roast(1.0);
        steps += 1;
    }
    steps
}

// Speed 0.09 with the multiplier pinned at 1.0.
#[test]
fn pinned_multiplier_stage_timeline() {
    let mut m = Marshmallow::new(0.0, 0.0, 20.0, 0.09);
    assert_eq!(steps_until(&mut m, Stage::Golden), 1112);
    let mut m = Marshmallow::new(0.0, 0.0, 20.0, 0.09);
    assert_eq!(steps_until(&mut m, Stage::Done), 2223);
    let mut m = Marshmallow::new(0.0, 0.0, 20.0, 0.09);
    assert_eq!(steps_until(&mut m, Stage::Burnt), 3334);

    // and the stage has certainly been reached by these step counts
    for (steps, want) in [
        (1122, Stage::Golden),
        (2234, Stage::Done),
        (3346, Stage::Burnt),
    ] {
        let mut m = Marshmallow::new(0.0, 0.0, 20.0, 0.09);
        for _ in 0..steps {
            m.roast(1.0);
        }
        assert_eq!(m.stage(), want, "after {steps} steps");
    }
}

#[test]
fn stage_is_a_step_function_of_timer() {
    let mut t = 0.0;
    while t < 400.0 {
        let expected = if t <= 100.0 {
            Stage::Raw
        } else if t <= 200.0 {
            Stage::Golden
        } else if t <= 300.0 {
            Stage::Done
        } else {
            Stage::Burnt
        };
        assert_eq!(stage_for(t), expected, "t = {t}");
        t += 0.25;
    }
}

#[test]
fn center_click_on_done_then_again() {
    let audio = RecordingAudio::new();
    let score = MemoryScore::new();
    let mut game = Game::new(
        GameConfig::default(),
        Box::new(audio.clone()),
        Box::new(score.clone()),
    )
    .unwrap();

    let mut log = DrawLog::new();
    let token = StopToken::new();
    while game.marshmallows()[3].stage() != Stage::Done {
        game.run_frames(&mut log, 1, &token);
    }
    let target = &game.marshmallows()[3];
    let (x, y) = (target.x(), target.y());

    assert_eq!(game.click(x, y), 5);
    assert_eq!(game.score(), 5);
    assert_eq!(score.last(), Some(5));
    assert_eq!(game.marshmallows()[3].stage(), Stage::Raw);
    assert_eq!(game.marshmallows()[3].timer(), 0.0);

    assert_eq!(game.click(x, y), 0);
    assert_eq!(game.score(), 5);
    assert_eq!(audio.count(Cue::Click), 1);
    assert_eq!(audio.count(Cue::Burn), 0);
}

#[test]
fn burnt_click_loses_points_and_plays_burn() {
    let audio = RecordingAudio::new();
    let mut game = Game::new(
        GameConfig::default(),
        Box::new(audio.clone()),
        Box::new(MemoryScore::new()),
    )
    .unwrap();
    while game.marshmallows()[0].stage() != Stage::Burnt {
        game.tick();
    }
    let (x, y) = (game.marshmallows()[0].x(), game.marshmallows()[0].y());
    assert_eq!(game.click(x, y), -2);
    assert_eq!(game.score(), -2);
    assert_eq!(audio.cues(), vec![Cue::Click, Cue::Burn]);
}

#[test]
fn initial_grid_layout() {
    let game = Game::headless(GameConfig::default()).unwrap();
    let ms = game.marshmallows();
    assert_eq!(ms.len(), 10);
    for (i, m) in ms.iter().enumerate() {
        let (row, col) = (i / 2, i % 2);
        assert_eq!(m.x(), 400.0 / 4.0 + col as f64 * 200.0);
        assert_eq!(m.y(), 80.0 + row as f64 * 120.0);
        assert_eq!(m.radius(), 20.0);
    }
    assert_eq!(ms[0].roasting_speed(), ms[8].roasting_speed());
    assert_eq!(game.screen(), Screen::Gameplay);
}

#[test]
fn multiplier_never_decreases_over_long_run() {
    let mut game = Game::headless(GameConfig::default()).unwrap();
    let start = game.multiplier();
    let mut prev = start;
    for _ in 0..10_000 {
        game.tick();
        assert!(game.multiplier() >= prev);
        prev = game.multiplier();
    }
    assert!(prev > start + 4.9);
}

#[test]
fn faster_fire_burns_sooner() {
    // Same speed, but the game's growing multiplier must beat the pinned timeline.
    let mut game = Game::headless(GameConfig::default()).unwrap();
    let mut frames = 0;
    while game.marshmallows()[4].stage() != Stage::Burnt {
        game.tick();
        frames += 1;
    }
    assert_eq!(game.marshmallows()[4].roasting_speed(), 0.09);
    assert!(frames < 3334);
}

#[cfg(feature = "serde_json")]
#[test]
fn json_config_drives_layout() {
    let cfg = GameConfig::from_json(r#"{ "rows": 2, "columns": 3, "margin": 50.0 }"#).unwrap();
    let game = Game::headless(cfg).unwrap();
    assert_eq!(game.marshmallows().len(), 6);
    assert_eq!(game.marshmallows()[3].y(), 125.0);
}
