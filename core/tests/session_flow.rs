use kakera_core::{
    DropOutcome, GameRules, ImageDescriptor, InputBatch, LevelCatalog, LevelEntry, PieceId,
    PlayArea, PuzzleSession, SessionController, SessionHost, SessionPhase,
};

#[derive(Default)]
struct RecordingHost {
    events: Vec<&'static str>,
}

impl SessionHost for RecordingHost {
    fn visible_play_area(&self) -> PlayArea {
        PlayArea::new(5.0, 3.0)
    }

    fn play_snap_sound(&mut self) {
        self.events.push("snap");
    }

    fn show_completion(&mut self) {
        self.events.push("show_completion");
    }

    fn hide_completion(&mut self) {
        self.events.push("hide_completion");
    }

    fn show_level_select(&mut self) {
        self.events.push("show_level_select");
    }

    fn hide_level_select(&mut self) {
        self.events.push("hide_level_select");
    }
}

/// Answers hit tests with a fixed piece, like a renderer that knows better.
struct PinnedHitHost {
    inner: RecordingHost,
    hit: Option<PieceId>,
}

impl SessionHost for PinnedHitHost {
    fn visible_play_area(&self) -> PlayArea {
        self.inner.visible_play_area()
    }

    fn hit_test(&self, _session: &PuzzleSession, _point: (f32, f32)) -> Option<PieceId> {
        self.hit
    }

    fn play_snap_sound(&mut self) {
        self.inner.play_snap_sound();
    }
}

fn square_catalog() -> LevelCatalog {
    let entries = ["dawn", "noon", "dusk"]
        .iter()
        .map(|slug| LevelEntry {
            label: slug.to_string(),
            slug: slug.to_string(),
            thumbnail: format!("thumbs/{slug}.png"),
            image: ImageDescriptor::new(512, 512),
        })
        .collect();
    LevelCatalog::new(entries)
}

fn controller() -> SessionController {
    SessionController::new(
        square_catalog(),
        GameRules {
            difficulty: 2,
            seed: Some(0x5EED),
        },
    )
}

fn solve_one(controller: &mut SessionController, host: &mut RecordingHost) -> DropOutcome {
    let id = controller
        .session()
        .pieces()
        .iter()
        .find(|piece| !piece.locked)
        .map(|piece| piece.id)
        .expect("an unlocked piece");
    let grab = controller.session().piece(id).expect("piece").position;
    controller.tick(&InputBatch::press(grab), host);
    let grabbed = controller.session().dragging().expect("grabbed a piece");
    let target = controller.session().piece(grabbed).expect("piece").target;
    controller.tick(&InputBatch::hover((0.0, 0.0)), host);
    controller.tick(&InputBatch::release(target), host)
}

#[test]
fn two_by_two_session_completes_and_unlocks_next_level() {
    let mut controller = controller();
    let mut host = RecordingHost::default();
    controller.open(&mut host);
    controller.start_level(0, &mut host).expect("start level 0");
    assert_eq!(controller.session().total_pieces(), 4);

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        outcomes.push(solve_one(&mut controller, &mut host));
    }
    assert!(outcomes[..3]
        .iter()
        .all(|outcome| matches!(outcome, DropOutcome::Locked { .. })));
    assert!(matches!(outcomes[3], DropOutcome::Completed { .. }));
    assert_eq!(controller.session().locked_count(), 4);
    assert_eq!(controller.session().phase(), SessionPhase::Complete);
    assert_eq!(controller.gate().levels_beaten(), 1);
    assert!(controller.gate().is_playable(1));
    assert!(!controller.gate().is_playable(2));

    let snaps = host.events.iter().filter(|event| **event == "snap").count();
    assert_eq!(snaps, 4);
    assert_eq!(host.events.last(), Some(&"show_completion"));
}

#[test]
fn dropping_locked_piece_again_does_not_double_count() {
    let mut controller = controller();
    let mut host = RecordingHost::default();
    controller.start_level(0, &mut host).expect("start");
    for _ in 0..4 {
        solve_one(&mut controller, &mut host);
    }
    let target = controller.session().piece(3).expect("piece").target;
    for _ in 0..3 {
        controller.tick(&InputBatch::press(target), &mut host);
        let outcome = controller.tick(&InputBatch::release(target), &mut host);
        assert_eq!(outcome, DropOutcome::NoDrag);
    }
    assert_eq!(controller.gate().levels_beaten(), 1);
    assert_eq!(controller.session().locked_count(), 4);
}

#[test]
fn restart_after_complete_keeps_progress() {
    let mut controller = controller();
    let mut host = RecordingHost::default();
    controller.start_level(0, &mut host).expect("start");
    for _ in 0..4 {
        solve_one(&mut controller, &mut host);
    }
    host.events.clear();
    controller.restart(&mut host);
    assert_eq!(controller.session().phase(), SessionPhase::Idle);
    assert_eq!(controller.session().total_pieces(), 0);
    assert_eq!(controller.gate().levels_beaten(), 1);
    assert_eq!(host.events, vec!["hide_completion", "show_level_select"]);

    controller.start_level(1, &mut host).expect("second level unlocked");
    assert_eq!(controller.session().phase(), SessionPhase::Playing);
    assert_eq!(controller.session().locked_count(), 0);
}

#[test]
fn restart_mid_game_discards_pieces() {
    let mut controller = controller();
    let mut host = RecordingHost::default();
    controller.start_level(0, &mut host).expect("start");
    solve_one(&mut controller, &mut host);
    controller.restart(&mut host);
    assert_eq!(controller.session().phase(), SessionPhase::Idle);
    assert_eq!(controller.session().locked_count(), 0);
    assert_eq!(controller.gate().levels_beaten(), 0);
}

#[test]
fn host_hit_test_cannot_select_locked_piece() {
    let mut controller = controller();
    let mut recording = RecordingHost::default();
    controller.start_level(0, &mut recording).expect("start");
    solve_one(&mut controller, &mut recording);
    let locked = controller
        .session()
        .pieces()
        .iter()
        .find(|piece| piece.locked)
        .map(|piece| piece.id)
        .expect("locked piece");

    let mut host = PinnedHitHost {
        inner: recording,
        hit: Some(locked),
    };
    controller.tick(&InputBatch::press((0.0, 0.0)), &mut host);
    assert_eq!(controller.session().dragging(), None);

    let free = (locked + 1) % 4;
    host.hit = Some(free);
    controller.tick(&InputBatch::press((0.0, 0.0)), &mut host);
    assert_eq!(controller.session().dragging(), Some(free));
}

#[test]
fn second_press_during_drag_is_ignored() {
    let mut controller = controller();
    let mut recording = RecordingHost::default();
    controller.start_level(0, &mut recording).expect("start");
    let mut host = PinnedHitHost {
        inner: recording,
        hit: Some(0),
    };
    controller.tick(&InputBatch::press((1.0, 1.0)), &mut host);
    host.hit = Some(1);
    controller.tick(&InputBatch::press((1.5, 1.0)), &mut host);
    assert_eq!(controller.session().dragging(), Some(0));
    assert_eq!(controller.session().piece(0).expect("piece").position, (1.5, 1.0));
}
