//! BrightPath Headless Harness
//!
//! Replays sequencing runs and sweeps the content generators.
//! Runs entirely in-process: no UI, no collaborators, no clock.
//!
//! Usage:
//!   cargo run -p brightpath-simtest
//!   cargo run -p brightpath-simtest -- --verbose
//!   cargo run -p brightpath-simtest -- --json

use std::collections::HashSet;

use brightpath_logic::catalog::{sequence_for, GameKind, Phase};
use brightpath_logic::config::{validate_config, EngineConfig};
use brightpath_logic::content::arithmetic::{self, instantiate, Archetype, Problem};
use brightpath_logic::content::lexical::LexicalRelationGenerator;
use brightpath_logic::content::mirror::{mirror_options, mirror_variants};
use brightpath_logic::content::phonetic::{analyze, curated_words};
use brightpath_logic::content::rhyme::{generate_round, RhymeRound};
use brightpath_logic::content::Difficulty;
use brightpath_logic::error::{CollaboratorError, GameLogicViolation};
use brightpath_logic::games::{
    Feedback, FallingWordMachine, GameEvent, GameMachine, SyllableSlicerMachine,
};
use brightpath_logic::profile::{LearnerProfile, ProfileCategory};
use brightpath_logic::sequence::{SequenceController, SequencePhase};
use brightpath_logic::session::LearningSession;
use brightpath_logic::topic::{resolve_topic_content, ContentSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

// ── Engine configuration (same JSON a host would ship) ──────────────────
const CONFIG_JSON: &str = include_str!("../data/engine_config.json");

const SWEEP: usize = 1000;

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    println!("=== BrightPath Harness ===\n");

    let mut results = Vec::new();

    // 1. Engine configuration
    let config = match EngineConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            println!("  ✗ config_parse: {e}");
            std::process::exit(1);
        }
    };
    results.extend(validate_engine_config(&config));

    // 2. Catalog table
    results.extend(validate_catalog(verbose));

    // 3. Sequence controller runs
    results.extend(validate_sequence(&config));

    // 4. Content generators
    results.extend(validate_content(verbose));

    // 5. Game machine checks
    results.extend(validate_machines(&config));

    // 6. Whole sessions
    results.extend(validate_sessions(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("  ✗ report: {e}"),
        }
    } else {
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Engine Configuration ─────────────────────────────────────────────

fn validate_engine_config(config: &EngineConfig) -> Vec<TestResult> {
    println!("--- Engine Config ---");
    let mut results = Vec::new();

    let errors = validate_config(config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "shipped configuration is usable".into()
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    results.push(TestResult {
        name: "config_matches_defaults".into(),
        passed: *config == EngineConfig::default(),
        detail: "shipped file mirrors built-in defaults".into(),
    });

    results
}

// ── 2. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    for category in ProfileCategory::ALL {
        let sequence = sequence_for(category);
        let unique: HashSet<GameKind> = sequence.games().iter().map(|g| g.kind).collect();
        let guided_first = sequence
            .games()
            .iter()
            .enumerate()
            .all(|(i, g)| (g.phase == Phase::Guided) == (i < sequence.guided_len()));
        results.push(TestResult {
            name: format!("catalog_{}", category.label().to_lowercase()),
            passed: !sequence.is_empty() && unique.len() == sequence.len() && guided_first,
            detail: format!(
                "{} games, {} guided",
                sequence.len(),
                sequence.guided_len()
            ),
        });
        if verbose {
            let ids: Vec<_> = sequence.games().iter().map(|g| g.id()).collect();
            println!("  {:<9} {}", category.label(), ids.join(" → "));
        }
    }

    results
}

// ── 3. Sequence Controller ──────────────────────────────────────────────

fn validate_sequence(config: &EngineConfig) -> Vec<TestResult> {
    println!("--- Sequence Controller ---");
    let mut results = Vec::new();
    let rewards = config.rewards;

    // ADHD run completed game by game
    let mut controller = SequenceController::new(rewards);
    controller.start(ProfileCategory::Adhd);
    let order = [
        GameKind::Gallery,
        GameKind::Quiz,
        GameKind::TypeQuest,
        GameKind::WordWrestle,
    ];
    let all_ok = order.iter().all(|&game| controller.complete(game).is_ok());
    let expected = 2 * rewards.guided + 2 * rewards.practice;
    results.push(TestResult {
        name: "sequence_adhd_run".into(),
        passed: all_ok
            && controller.phase() == SequencePhase::Completed
            && controller.completed().len() == 4
            && controller.score() == expected,
        detail: format!("score {} (expected {expected})", controller.score()),
    });

    // Completing a game that is not active is refused
    let mut controller = SequenceController::new(rewards);
    controller.start(ProfileCategory::Dyslexia);
    let refused = controller.complete(GameKind::Syllable);
    results.push(TestResult {
        name: "sequence_rejects_wrong_game".into(),
        passed: matches!(refused, Err(GameLogicViolation::NotActiveGame { .. }))
            && controller.index() == 0
            && controller.score() == 0,
        detail: format!("{refused:?}"),
    });

    // Skips never score
    let mut controller = SequenceController::new(rewards);
    controller.start(ProfileCategory::None);
    while controller.skip().is_ok() && controller.phase() != SequencePhase::Completed {}
    results.push(TestResult {
        name: "sequence_skips_score_nothing".into(),
        passed: controller.score() == 0 && controller.phase() == SequencePhase::Completed,
        detail: format!("{} games skipped", controller.summary().skipped.len()),
    });

    results
}

// ── 4. Content Generators ───────────────────────────────────────────────

fn validate_content(verbose: bool) -> Vec<TestResult> {
    println!("--- Content Generators ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);

    // Every generated answer is derivable from its operands
    for difficulty in Difficulty::ALL {
        let mismatches = (0..SWEEP)
            .map(|_| arithmetic::generate(difficulty, &mut rng))
            .filter(|q| q.answer != q.problem.solve() || q.prompt != q.problem.prompt())
            .count();
        results.push(TestResult {
            name: format!("arithmetic_{difficulty:?}_consistent").to_lowercase(),
            passed: mismatches == 0,
            detail: format!("{mismatches}/{SWEEP} inconsistent questions"),
        });
    }

    // Easy subtraction never goes negative
    let negative = (0..SWEEP)
        .filter(|_| match instantiate(Archetype::Subtract, &mut rng) {
            Problem::Subtract { larger, smaller } => larger < smaller,
            _ => true,
        })
        .count();
    results.push(TestResult {
        name: "arithmetic_subtract_non_negative".into(),
        passed: negative == 0,
        detail: format!("{negative}/{SWEEP} negative answers"),
    });

    // Lexical option sets: answer present once, no duplicates
    let mut generator = LexicalRelationGenerator::new();
    let invalid = (0..SWEEP)
        .map(|_| generator.generate(&mut rng))
        .filter(|record| !record.options_are_valid())
        .count();
    results.push(TestResult {
        name: "lexical_options_valid".into(),
        passed: invalid == 0,
        detail: format!("{invalid}/{SWEEP} invalid option sets"),
    });

    // Syllables always reassemble the word
    let samples = ["garden", "station", "knitting", "rhythm", "a", "strengths", "coxcomb"];
    let broken: Vec<String> = curated_words()
        .chain(samples)
        .filter(|w| analyze(w).joined() != *w)
        .map(str::to_string)
        .collect();
    results.push(TestResult {
        name: "phonetic_concatenation".into(),
        passed: broken.is_empty(),
        detail: if broken.is_empty() {
            "every split reassembles its word".into()
        } else {
            format!("broken: {}", broken.join(", "))
        },
    });
    if verbose {
        for word in samples {
            println!("  {:<10} {}", word, analyze(word).hyphenated());
        }
    }

    // Letters mirror case-insensitively; anything else is its own mirror
    let symmetric_ok = ('a'..='z')
        .all(|c| mirror_variants(c) == mirror_variants(c.to_ascii_uppercase()))
        && ['7', '?', ' ']
            .iter()
            .all(|&c| mirror_variants(c).is_self_symmetric());
    let options_ok = ('A'..='Z').all(|c| mirror_options(c, &mut rng).contains(&c.to_string()));
    results.push(TestResult {
        name: "mirror_tables".into(),
        passed: symmetric_ok && options_ok,
        detail: "options contain the letter; non-letters are fixed points".into(),
    });

    // Rhyme rounds contain their rhyme exactly once
    let bad_rounds = (0..SWEEP)
        .map(|_| generate_round(4, &mut rng))
        .filter(|round| round.options.iter().filter(|o| **o == round.rhyme).count() != 1)
        .count();
    results.push(TestResult {
        name: "rhyme_rounds_valid".into(),
        passed: bad_rounds == 0,
        detail: format!("{bad_rounds}/{SWEEP} bad rounds"),
    });

    results
}

// ── 5. Game Machines ────────────────────────────────────────────────────

fn validate_machines(config: &EngineConfig) -> Vec<TestResult> {
    println!("--- Game Machines ---");
    let mut results = Vec::new();

    // A wrong catch disables the word and resets the combo
    let round = RhymeRound {
        word: "bat".into(),
        rhyme: "hat".into(),
        options: ["cat", "hat", "dog", "sun"].map(String::from).to_vec(),
    };
    let mut falling =
        FallingWordMachine::from_rounds(config.falling_words, vec![round.clone(), round]);
    let first = falling.catch_word("hat");
    let wrong = falling.catch_word("cat");
    let score = falling.score();
    let again = falling.catch_word("cat");
    results.push(TestResult {
        name: "falling_word_disables_wrong_catch".into(),
        passed: matches!(first, Ok(step) if step.feedback == Feedback::RoundComplete)
            && matches!(wrong, Ok(step) if step.feedback == Feedback::Incorrect)
            && again == Err(GameLogicViolation::OptionDisabled("cat".into()))
            && falling.combo() == 0
            && falling.score() == score,
        detail: format!("second tap → {again:?}"),
    });

    // Fragments must be tapped in order
    let mut slicer = SyllableSlicerMachine::new(vec![analyze("banana")]);
    let early = slicer.tap(1);
    let steps: Vec<_> = (0..3).filter_map(|i| slicer.tap(i).ok()).collect();
    let completed = steps.last().and_then(|s| s.event);
    results.push(TestResult {
        name: "syllable_slicer_in_order".into(),
        passed: matches!(early, Err(GameLogicViolation::OutOfOrder { expected: 0, tapped: 1 }))
            && steps.len() == 3
            && completed
                == Some(GameEvent::Completed {
                    game: GameKind::Syllable,
                    score: 1,
                })
            && slicer.is_finished(),
        detail: format!("early tap → {early:?}"),
    });

    results
}

// ── 6. Sessions ─────────────────────────────────────────────────────────

fn validate_sessions(config: &EngineConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Sessions ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);

    // Collaborator down: content falls back and every sequence still runs
    for category in ProfileCategory::ALL {
        let content = resolve_topic_content(
            "volcanoes",
            Err(CollaboratorError::Timeout),
            &config.content,
            &mut rng,
        );
        let fallback = content.source == ContentSource::Fallback;
        let mut session = LearningSession::new(config.clone(), 11);
        session.start(LearnerProfile::new("sim", category), content);

        let mut skips = 0;
        while session.phase() != SequencePhase::Completed {
            if session.skip_game().is_err() {
                break;
            }
            skips += 1;
            session.advance_time(1_000);
        }
        let summary = session.summary();
        results.push(TestResult {
            name: format!("session_{}_skip_through", category.label().to_lowercase()),
            passed: fallback
                && summary.phase == SequencePhase::Completed
                && summary.score == 0
                && skips == sequence_for(category).len(),
            detail: format!("{skips} skips, score {}", summary.score),
        });
        if verbose {
            println!("  {:<9} skipped {:?}", category.label(), summary.skipped);
        }
    }

    results
}
