//! Property-based tests for the content generators and the sequence controller.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use brightpath_logic::catalog::{sequence_for, Phase};
use brightpath_logic::config::RewardConfig;
use brightpath_logic::content::arithmetic::{generate, Problem};
use brightpath_logic::content::lexical::{LexicalRelationGenerator, WORD_BANK};
use brightpath_logic::content::mirror::mirror_options;
use brightpath_logic::content::phonetic::analyze;
use brightpath_logic::content::{Answer, Difficulty};
use brightpath_logic::profile::ProfileCategory;
use brightpath_logic::sequence::{SequenceController, SequencePhase};

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn category_strategy() -> impl Strategy<Value = ProfileCategory> {
    prop::sample::select(ProfileCategory::ALL.to_vec())
}

/// Digit runs of a prompt, in order.
fn numbers(prompt: &str) -> Vec<i64> {
    prompt
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Recompute the answer from the prompt text alone.
fn answer_from_prompt(problem: &Problem, prompt: &str) -> Answer {
    let n = numbers(prompt);
    match problem {
        Problem::Add { .. } => Answer::Integer(n[0] + n[1]),
        Problem::Subtract { .. } => Answer::Integer(n[0] - n[1]),
        Problem::MultiplySimple { .. } | Problem::MultiplyWide { .. } => {
            Answer::Integer(n[0] * n[1])
        }
        Problem::DivideSimple { .. } => {
            assert_eq!(n[0] % n[1], 0, "{prompt}");
            Answer::Integer(n[0] / n[1])
        }
        Problem::DivideRemainder { .. } => Answer::Integer(n[0] % n[1]),
        Problem::FractionAdd { .. } => Answer::Integer(n[0] + n[2]),
        Problem::DecimalAdd { .. } => Answer::Tenths(n[0] * 10 + n[1] + n[2] * 10 + n[3]),
        Problem::GeometrySides { .. } => {
            let sides = [("Triangle", 3), ("Square", 4), ("Pentagon", 5), ("Hexagon", 6)];
            let (_, count) = sides
                .iter()
                .find(|(name, _)| prompt.contains(name))
                .expect("known shape");
            Answer::Integer(*count)
        }
        Problem::FractionMultiply { .. } => Answer::Text(format!("{}/{}", n[2], n[1] * n[3])),
        Problem::Percentage { .. } => Answer::Integer(n[0] * n[1] / 100),
        Problem::LinearEquation { .. } => {
            if prompt.starts_with("x + ") {
                Answer::Integer(n[1] - n[0])
            } else if prompt.starts_with("x - ") || prompt.starts_with("x ÷ ") {
                if prompt.contains('÷') {
                    Answer::Integer(n[0] * n[1])
                } else {
                    Answer::Integer(n[0] + n[1])
                }
            } else {
                Answer::Integer(n[1] / n[0])
            }
        }
        Problem::RomanNumeral { .. } => {
            let value = [("XII", 12), ("XX", 20), ("IX", 9), ("V", 5)]
                .iter()
                .find(|(symbol, _)| prompt.contains(&format!("is {symbol} in")))
                .map(|(_, v)| *v)
                .expect("known numeral");
            Answer::Integer(value)
        }
    }
}

proptest! {
    #[test]
    fn arithmetic_answer_recomputable_from_prompt(
        seed in any::<u64>(),
        difficulty in difficulty_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = generate(difficulty, &mut rng);
        prop_assert_eq!(&question.answer, &question.problem.solve());
        let recomputed = answer_from_prompt(&question.problem, &question.prompt);
        prop_assert_eq!(recomputed, question.answer.clone());
        prop_assert!(question.answer.accepts(&question.answer.to_string()));
    }

    #[test]
    fn lexical_distractors_are_unrelated(seed in any::<u64>(), calls in 1..20usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut generator = LexicalRelationGenerator::new();
        for _ in 0..calls {
            let record = generator.generate(&mut rng);
            prop_assert!(record.options_are_valid());
            let headword = generator.last_word().expect("headword recorded");
            let entry = WORD_BANK.iter().find(|e| e.word == headword).expect("in bank");
            let answer = record.answer.to_string();
            for option in record.options.iter().filter(|o| **o != answer) {
                prop_assert!(option != headword);
                prop_assert!(!entry.synonyms.contains(&option.as_str()));
                prop_assert!(!entry.antonyms.contains(&option.as_str()));
            }
        }
    }

    #[test]
    fn mirror_options_always_contain_base(c in any::<char>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = mirror_options(c, &mut rng);
        prop_assert_eq!(options.len(), 4);
        prop_assert!(options.contains(&c.to_ascii_uppercase().to_string()));
    }

    #[test]
    fn syllables_reproduce_the_word(word in "[a-zA-Z]{0,16}") {
        let analysis = analyze(&word);
        prop_assert_eq!(analysis.syllables.concat(), word);
        prop_assert_eq!(analysis.syllables.len(), analysis.pronunciations.len());
        if let Some(stress) = analysis.stress {
            prop_assert!(stress < analysis.syllables.len());
        }
    }

    #[test]
    fn score_counts_only_completions(
        category in category_strategy(),
        ops in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let rewards = RewardConfig::default();
        let mut controller = SequenceController::new(rewards);
        controller.start(category);
        let sequence = sequence_for(category);

        let mut completes = 0;
        let mut expected_score = 0;
        for complete in ops {
            let Some(current) = controller.current().copied() else { break };
            if complete {
                controller.complete(current.kind).unwrap();
                completes += 1;
                expected_score += match current.phase {
                    Phase::Guided => rewards.guided,
                    Phase::Practice => rewards.practice,
                };
            } else {
                controller.skip().unwrap();
            }
        }

        prop_assert_eq!(controller.completed().len(), completes);
        prop_assert_eq!(controller.score(), expected_score);
        prop_assert!(controller.index() <= sequence.len());
        if controller.index() == sequence.len() {
            prop_assert_eq!(controller.phase(), SequencePhase::Completed);
        }
    }
}
