// tests/engine_tests.rs
//
// Движок партии:
//  1) создание партии и ошибки конструктора;
//  2) record_score: начисление, повторная категория, неизвестный игрок;
//  3) play_turn / start на скриптованном и детерминированном RNG;
//  4) история событий.

use yatzy_engine::domain::{CategoryId, ConfigError, GameConfig, GameError, Hand, HandError};
use yatzy_engine::engine::{EngineError, GameEngine, GameEventKind, RandomSource};
use yatzy_engine::infra::rng::DeterministicRng;

//
// ---------- helpers ----------
//

/// RNG, который по кругу выдаёт заранее заданные значения.
struct ScriptedRng {
    values: Vec<u8>,
    idx: usize,
}

impl ScriptedRng {
    fn new(values: Vec<u8>) -> Self {
        Self { values, idx: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        let v = self.values[self.idx % self.values.len()];
        self.idx += 1;
        v
    }
}

fn hand(dice: [u8; 5]) -> Hand {
    Hand::new(dice).expect("valid hand")
}

//
// ---------- создание ----------
//

#[test]
fn engine_new_builds_players() {
    let engine = GameEngine::new(4).unwrap();

    let positions: Vec<u32> = engine.game.players.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
    assert!(engine.history.is_empty());
    assert_eq!(engine.turns_played, 0);
    assert!(!engine.is_finished());
    assert_eq!(engine.categories().len(), 15);
}

#[test]
fn engine_new_rejects_zero_players() {
    assert!(matches!(
        GameEngine::new(0),
        Err(EngineError::Game(GameError::InvalidPlayerCount(0)))
    ));
}

#[test]
fn engine_from_config() {
    let engine = GameEngine::from_config(&GameConfig::new(3).with_seed(1)).unwrap();
    assert_eq!(engine.game.player_count(), 3);

    assert!(matches!(
        GameEngine::from_config(&GameConfig::new(0)),
        Err(EngineError::Config(_))
    ));
}

#[test]
fn engine_from_config_uses_category_list() {
    let mut identifiers: Vec<&str> = CategoryId::ALL.iter().map(|id| id.identifier()).collect();
    identifiers.rotate_left(5);

    let engine = GameEngine::from_config(&GameConfig::new(2).with_categories(identifiers)).unwrap();
    assert_eq!(engine.categories().len(), 15);
    assert_eq!(
        engine.categories().score(CategoryId::TwoPairs, &hand([4, 4, 4, 4, 2])),
        16
    );

    let bad = GameConfig::new(2).with_categories(["chance", "kind:9"]);
    assert!(matches!(
        GameEngine::from_config(&bad),
        Err(EngineError::Config(ConfigError::Category(_)))
    ));
}

//
// ---------- record_score ----------
//

#[test]
fn record_score_adds_points_and_marks_category() {
    let mut engine = GameEngine::new(2).unwrap();

    let points = engine
        .record_score(1, CategoryId::Chance, &hand([2, 3, 4, 5, 1]))
        .unwrap();
    assert_eq!(points, 15);

    let player = engine.game.player(1).unwrap();
    assert_eq!(player.points, 15);
    assert!(player.is_used(CategoryId::Chance));
    assert!(!engine.game.player(2).unwrap().is_used(CategoryId::Chance));

    assert_eq!(
        engine.history.events.last().map(|e| e.kind.clone()),
        Some(GameEventKind::CategoryScored {
            position: 1,
            category: CategoryId::Chance,
            points: 15,
            total: 15,
        })
    );
}

/// Повторная запись в ту же категорию отклоняется, очки не меняются.
#[test]
fn record_score_rejects_used_category() {
    let mut engine = GameEngine::new(1).unwrap();
    engine
        .record_score(1, CategoryId::Yatzy, &hand([6, 6, 6, 6, 6]))
        .unwrap();

    let err = engine
        .record_score(1, CategoryId::Yatzy, &hand([5, 5, 5, 5, 5]))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Game(GameError::CategoryAlreadyUsed {
            position: 1,
            category: CategoryId::Yatzy
        })
    ));
    assert_eq!(engine.game.player(1).unwrap().points, 50);
    assert_eq!(engine.history.len(), 1);
}

#[test]
fn record_score_unknown_player() {
    let mut engine = GameEngine::new(2).unwrap();
    let err = engine
        .record_score(9, CategoryId::Chance, &hand([1, 1, 1, 1, 1]))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Game(GameError::PlayerNotFound(9))
    ));
}

#[test]
fn zero_score_still_uses_category() {
    let mut engine = GameEngine::new(1).unwrap();
    let points = engine
        .record_score(1, CategoryId::LargeStraight, &hand([1, 1, 2, 3, 4]))
        .unwrap();
    assert_eq!(points, 0);
    assert!(engine.game.player(1).unwrap().is_used(CategoryId::LargeStraight));
}

//
// ---------- выбор категории ----------
//

#[test]
fn best_category_prefers_highest_score() {
    let engine = GameEngine::new(1).unwrap();
    let player = engine.game.player(1).unwrap();

    assert_eq!(
        engine.best_category(player, &hand([6, 6, 6, 6, 6])),
        Some((CategoryId::Yatzy, 50))
    );
    assert_eq!(
        engine.best_category(player, &hand([2, 3, 4, 5, 6])),
        Some((CategoryId::LargeStraight, 40))
    );
}

/// При равенстве выигрывает категория, стоящая раньше в наборе.
#[test]
fn best_category_ties_go_to_earlier_category() {
    let mut engine = GameEngine::new(1).unwrap();
    for id in CategoryId::ALL {
        if !matches!(id, CategoryId::Ones | CategoryId::Twos) {
            engine.record_score(1, id, &hand([1, 1, 1, 1, 1])).unwrap();
        }
    }

    // ones = 2, twos = 2
    let player = engine.game.player(1).unwrap();
    assert_eq!(
        engine.best_category(player, &hand([1, 1, 2, 3, 4])),
        Some((CategoryId::Ones, 2))
    );
}

//
// ---------- ходы ----------
//

#[test]
fn play_turn_rolls_and_scores_current_player() {
    let mut engine = GameEngine::new(2).unwrap();
    let mut rng = ScriptedRng::new(vec![6, 6, 6, 6, 6, 2, 3, 4, 5, 6]);

    let first = engine.play_turn(&mut rng).unwrap();
    assert_eq!(first.position, 1);
    assert_eq!(first.hand, hand([6, 6, 6, 6, 6]));
    assert_eq!(first.category, CategoryId::Yatzy);
    assert_eq!(first.points, 50);
    assert_eq!(first.total, 50);

    let second = engine.play_turn(&mut rng).unwrap();
    assert_eq!(second.position, 2);
    assert_eq!(second.category, CategoryId::LargeStraight);
    assert_eq!(second.points, 40);

    // снова первый игрок, yatzy уже занят
    let third = engine.play_turn(&mut rng).unwrap();
    assert_eq!(third.position, 1);
    assert_eq!(third.category, CategoryId::Chance);
    assert_eq!(third.points, 30);
    assert_eq!(third.total, 80);

    assert_eq!(engine.turns_played, 3);
}

#[test]
fn play_turn_rejects_bad_die_from_rng() {
    let mut engine = GameEngine::new(1).unwrap();
    let mut rng = ScriptedRng::new(vec![7]);

    let err = engine.play_turn(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Hand(HandError::DieOutOfRange { index: 0, value: 7 })
    ));
    assert_eq!(engine.turns_played, 0);
    assert_eq!(engine.game.player(1).unwrap().points, 0);
}

/// Если текущий игрок уже всё записал вручную – ход переходит к следующему.
#[test]
fn play_turn_skips_finished_player() {
    let mut engine = GameEngine::new(2).unwrap();
    for id in CategoryId::ALL {
        engine.record_score(1, id, &hand([3, 3, 3, 3, 3])).unwrap();
    }

    let mut rng = DeterministicRng::from_seed(5);
    let outcome = engine.play_turn(&mut rng).unwrap();
    assert_eq!(outcome.position, 2);
}

/// Полная партия: 15 ходов на игрока, все категории закрыты.
#[test]
fn start_plays_full_game() {
    let mut engine = GameEngine::new(3).unwrap();
    let mut rng = DeterministicRng::from_seed(42);

    let summary = engine.start(&mut rng).unwrap();

    assert!(engine.is_finished());
    assert_eq!(summary.turns_played, 45);
    assert_eq!(summary.standings.len(), 3);
    assert!(summary
        .standings
        .windows(2)
        .all(|w| w[0].1 >= w[1].1));
    assert!(!summary.winners.is_empty());
    assert!(summary.winners.contains(&summary.standings[0].0));

    for player in &engine.game.players {
        assert!(player.is_finished());
        assert_eq!(
            summary
                .standings
                .iter()
                .find(|(pos, _)| *pos == player.position)
                .map(|(_, pts)| *pts),
            Some(player.points)
        );
    }

    // история: старт, 45 × (бросок + запись), финиш
    let events = &engine.history.events;
    assert_eq!(events.len(), 1 + 45 * 2 + 1);
    assert_eq!(
        events.first().map(|e| e.kind.clone()),
        Some(GameEventKind::GameStarted { player_count: 3 })
    );
    assert!(matches!(
        events.last().map(|e| &e.kind),
        Some(GameEventKind::GameFinished { .. })
    ));
    let rolls = events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::DiceRolled { .. }))
        .count();
    assert_eq!(rolls, 45);
    assert!(events.iter().enumerate().all(|(i, e)| e.index == i as u32));
}

#[test]
fn finished_game_rejects_further_turns() {
    let mut engine = GameEngine::new(1).unwrap();
    let mut rng = DeterministicRng::from_seed(7);
    engine.start(&mut rng).unwrap();

    assert!(matches!(
        engine.play_turn(&mut rng),
        Err(EngineError::GameFinished)
    ));
    assert!(matches!(
        engine.start(&mut rng),
        Err(EngineError::GameFinished)
    ));
}

/// Одинаковый seed – одинаковая партия.
#[test]
fn same_seed_same_game() {
    let mut a = GameEngine::new(2).unwrap();
    let mut b = GameEngine::new(2).unwrap();

    let sa = a.start(&mut DeterministicRng::from_seed(2024)).unwrap();
    let sb = b.start(&mut DeterministicRng::from_seed(2024)).unwrap();

    assert_eq!(sa, sb);
    assert_eq!(a.history, b.history);
}

#[test]
fn history_dumps_to_json() {
    let mut engine = GameEngine::new(1).unwrap();
    engine
        .record_score(1, CategoryId::Pairs, &hand([5, 3, 6, 6, 5]))
        .unwrap();

    let json = engine.history.to_json().unwrap();
    assert!(json.contains("CategoryScored"));
    assert!(json.contains("\"pairs\""));
}
