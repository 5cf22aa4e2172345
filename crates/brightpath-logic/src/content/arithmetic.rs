//! Arithmetic question generator for the timed combat quiz.
//!
//! Each difficulty tier owns a fixed set of archetypes. A call picks one
//! archetype uniformly, draws its operands from the archetype's ranges and
//! derives the answer from them, so every [`Problem`] carries enough data
//! to recompute its own answer.
//!
//! ```
//! use brightpath_logic::content::arithmetic::generate;
//! use brightpath_logic::content::Difficulty;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let question = generate(Difficulty::Easy, &mut rng);
//! assert_eq!(question.answer, question.problem.solve());
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::question::{Answer, Difficulty, QuestionRecord};

/// Question archetypes, one per row of the generator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Add,
    Subtract,
    MultiplySimple,
    DivideSimple,
    MultiplyWide,
    DivideRemainder,
    FractionAdd,
    DecimalAdd,
    GeometrySides,
    FractionMultiply,
    Percentage,
    LinearEquation,
    RomanNumeral,
}

impl Archetype {
    /// Archetypes available at a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> &'static [Archetype] {
        match difficulty {
            Difficulty::Easy => &[
                Archetype::Add,
                Archetype::Subtract,
                Archetype::MultiplySimple,
                Archetype::DivideSimple,
            ],
            Difficulty::Medium => &[
                Archetype::MultiplyWide,
                Archetype::DivideSimple,
                Archetype::FractionAdd,
                Archetype::DecimalAdd,
                Archetype::GeometrySides,
            ],
            Difficulty::Hard => &[
                Archetype::DivideRemainder,
                Archetype::FractionMultiply,
                Archetype::Percentage,
                Archetype::LinearEquation,
                Archetype::RomanNumeral,
            ],
        }
    }
}

/// Polygon names with a fixed side count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 4] = [
        Shape::Triangle,
        Shape::Square,
        Shape::Pentagon,
        Shape::Hexagon,
    ];

    pub fn sides(self) -> i64 {
        match self {
            Shape::Triangle => 3,
            Shape::Square => 4,
            Shape::Pentagon => 5,
            Shape::Hexagon => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "Triangle",
            Shape::Square => "Square",
            Shape::Pentagon => "Pentagon",
            Shape::Hexagon => "Hexagon",
        }
    }
}

/// Roman numerals the generator asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RomanNumeral {
    V,
    IX,
    XII,
    XX,
}

impl RomanNumeral {
    pub const ALL: [RomanNumeral; 4] = [
        RomanNumeral::V,
        RomanNumeral::IX,
        RomanNumeral::XII,
        RomanNumeral::XX,
    ];

    pub fn value(self) -> i64 {
        match self {
            RomanNumeral::V => 5,
            RomanNumeral::IX => 9,
            RomanNumeral::XII => 12,
            RomanNumeral::XX => 20,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RomanNumeral::V => "V",
            RomanNumeral::IX => "IX",
            RomanNumeral::XII => "XII",
            RomanNumeral::XX => "XX",
        }
    }
}

/// Operation stated in a linear equation; the unknown is found by inverting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationForm {
    /// `x + c = c + v`
    Add,
    /// `x - c = v`
    Subtract,
    /// `cx = c * v`
    Multiply,
    /// `x ÷ c = v`
    Divide,
}

impl EquationForm {
    pub const ALL: [EquationForm; 4] = [
        EquationForm::Add,
        EquationForm::Subtract,
        EquationForm::Multiply,
        EquationForm::Divide,
    ];
}

/// A generated problem with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Problem {
    Add { a: i64, b: i64 },
    Subtract { larger: i64, smaller: i64 },
    MultiplySimple { a: i64, b: i64 },
    DivideSimple { divisor: i64, quotient: i64 },
    MultiplyWide { a: i64, b: i64 },
    DivideRemainder { dividend: i64, divisor: i64 },
    FractionAdd { first: i64, second: i64, denominator: i64 },
    /// Operands in tenths.
    DecimalAdd { first: i64, second: i64 },
    GeometrySides { shape: Shape },
    /// `1/denominator × numerator/divisor`
    FractionMultiply { denominator: i64, numerator: i64, divisor: i64 },
    Percentage { percent: i64, base: i64 },
    LinearEquation { form: EquationForm, coefficient: i64, value: i64 },
    RomanNumeral { numeral: RomanNumeral },
}

impl Problem {
    pub fn archetype(&self) -> Archetype {
        match self {
            Problem::Add { .. } => Archetype::Add,
            Problem::Subtract { .. } => Archetype::Subtract,
            Problem::MultiplySimple { .. } => Archetype::MultiplySimple,
            Problem::DivideSimple { .. } => Archetype::DivideSimple,
            Problem::MultiplyWide { .. } => Archetype::MultiplyWide,
            Problem::DivideRemainder { .. } => Archetype::DivideRemainder,
            Problem::FractionAdd { .. } => Archetype::FractionAdd,
            Problem::DecimalAdd { .. } => Archetype::DecimalAdd,
            Problem::GeometrySides { .. } => Archetype::GeometrySides,
            Problem::FractionMultiply { .. } => Archetype::FractionMultiply,
            Problem::Percentage { .. } => Archetype::Percentage,
            Problem::LinearEquation { .. } => Archetype::LinearEquation,
            Problem::RomanNumeral { .. } => Archetype::RomanNumeral,
        }
    }

    /// Canonical answer derived from the operands.
    pub fn solve(&self) -> Answer {
        match *self {
            Problem::Add { a, b } => Answer::Integer(a + b),
            Problem::Subtract { larger, smaller } => Answer::Integer(larger - smaller),
            Problem::MultiplySimple { a, b } | Problem::MultiplyWide { a, b } => {
                Answer::Integer(a * b)
            }
            Problem::DivideSimple { quotient, .. } => Answer::Integer(quotient),
            Problem::DivideRemainder { dividend, divisor } => Answer::Integer(dividend % divisor),
            Problem::FractionAdd { first, second, .. } => Answer::Integer(first + second),
            Problem::DecimalAdd { first, second } => Answer::Tenths(first + second),
            Problem::GeometrySides { shape } => Answer::Integer(shape.sides()),
            Problem::FractionMultiply {
                denominator,
                numerator,
                divisor,
            } => Answer::Text(format!("{}/{}", numerator, denominator * divisor)),
            Problem::Percentage { percent, base } => Answer::Integer(percent * base / 100),
            Problem::LinearEquation {
                form,
                coefficient,
                value,
            } => match form {
                EquationForm::Add | EquationForm::Multiply => Answer::Integer(value),
                EquationForm::Subtract => Answer::Integer(coefficient + value),
                EquationForm::Divide => Answer::Integer(coefficient * value),
            },
            Problem::RomanNumeral { numeral } => Answer::Integer(numeral.value()),
        }
    }

    /// Prompt text shown to the learner.
    pub fn prompt(&self) -> String {
        match *self {
            Problem::Add { a, b } => format!("{a} + {b}"),
            Problem::Subtract { larger, smaller } => format!("{larger} - {smaller}"),
            Problem::MultiplySimple { a, b } | Problem::MultiplyWide { a, b } => {
                format!("{a} × {b}")
            }
            Problem::DivideSimple { divisor, quotient } => {
                format!("{} ÷ {}", divisor * quotient, divisor)
            }
            Problem::DivideRemainder { dividend, divisor } => {
                format!("{dividend} ÷ {divisor} (remainder?)")
            }
            Problem::FractionAdd {
                first,
                second,
                denominator,
            } => format!(
                "{first}/{denominator} + {second}/{denominator} (answer as ?/{denominator})"
            ),
            Problem::DecimalAdd { first, second } => format!(
                "{} + {}",
                Answer::Tenths(first),
                Answer::Tenths(second)
            ),
            Problem::GeometrySides { shape } => format!("Sides on a {}?", shape.name()),
            Problem::FractionMultiply {
                denominator,
                numerator,
                divisor,
            } => format!("1/{denominator} × {numerator}/{divisor}"),
            Problem::Percentage { percent, base } => format!("{percent}% of {base}?"),
            Problem::LinearEquation {
                form,
                coefficient,
                value,
            } => match form {
                EquationForm::Add => format!("x + {} = {}", coefficient, coefficient + value),
                EquationForm::Subtract => format!("x - {coefficient} = {value}"),
                EquationForm::Multiply => format!("{}x = {}", coefficient, coefficient * value),
                EquationForm::Divide => format!("x ÷ {coefficient} = {value}"),
            },
            Problem::RomanNumeral { numeral } => {
                format!("What is {} in numbers?", numeral.symbol())
            }
        }
    }
}

/// A generated arithmetic question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticQuestion {
    pub difficulty: Difficulty,
    pub problem: Problem,
    pub prompt: String,
    pub answer: Answer,
}

impl ArithmeticQuestion {
    pub fn to_record(&self) -> QuestionRecord {
        QuestionRecord::typed(self.prompt.clone(), self.answer.clone(), self.difficulty)
    }
}

/// Generate a question at the given difficulty.
pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> ArithmeticQuestion {
    let archetypes = Archetype::for_difficulty(difficulty);
    let archetype = archetypes[rng.gen_range(0..archetypes.len())];
    let problem = instantiate(archetype, rng);
    ArithmeticQuestion {
        difficulty,
        prompt: problem.prompt(),
        answer: problem.solve(),
        problem,
    }
}

/// Draw operands for an archetype.
pub fn instantiate(archetype: Archetype, rng: &mut impl Rng) -> Problem {
    match archetype {
        Archetype::Add => Problem::Add {
            a: rng.gen_range(1..=20),
            b: rng.gen_range(1..=20),
        },
        Archetype::Subtract => {
            let c = rng.gen_range(1..=20);
            let d = rng.gen_range(1..=20);
            Problem::Subtract {
                larger: c.max(d),
                smaller: c.min(d),
            }
        }
        Archetype::MultiplySimple => Problem::MultiplySimple {
            a: rng.gen_range(1..=10),
            b: rng.gen_range(1..=10),
        },
        Archetype::DivideSimple => Problem::DivideSimple {
            divisor: rng.gen_range(2..=11),
            quotient: rng.gen_range(2..=11),
        },
        Archetype::MultiplyWide => Problem::MultiplyWide {
            a: rng.gen_range(5..=19),
            b: rng.gen_range(5..=19),
        },
        Archetype::DivideRemainder => Problem::DivideRemainder {
            dividend: rng.gen_range(20..=69),
            divisor: rng.gen_range(3..=12),
        },
        Archetype::FractionAdd => {
            let denominator = [4, 6, 8][rng.gen_range(0..3)];
            let first = rng.gen_range(1..denominator);
            // first must leave room for a second numerator of at least 1
            let first = if first == denominator - 1 {
                rng.gen_range(1..denominator - 1)
            } else {
                first
            };
            let mut second = rng.gen_range(1..denominator);
            while first + second >= denominator {
                second = rng.gen_range(1..denominator);
            }
            Problem::FractionAdd {
                first,
                second,
                denominator,
            }
        }
        Archetype::DecimalAdd => Problem::DecimalAdd {
            first: rng.gen_range(10..=59),
            second: rng.gen_range(10..=59),
        },
        Archetype::GeometrySides => Problem::GeometrySides {
            shape: Shape::ALL[rng.gen_range(0..Shape::ALL.len())],
        },
        Archetype::FractionMultiply => Problem::FractionMultiply {
            numerator: rng.gen_range(1..=5),
            denominator: rng.gen_range(2..=6),
            divisor: rng.gen_range(1..=5),
        },
        Archetype::Percentage => Problem::Percentage {
            percent: [10, 20, 25, 50][rng.gen_range(0..4)],
            base: [40, 60, 80, 100][rng.gen_range(0..4)],
        },
        Archetype::LinearEquation => Problem::LinearEquation {
            form: EquationForm::ALL[rng.gen_range(0..EquationForm::ALL.len())],
            coefficient: rng.gen_range(2..=11),
            value: rng.gen_range(2..=11),
        },
        Archetype::RomanNumeral => Problem::RomanNumeral {
            numeral: RomanNumeral::ALL[rng.gen_range(0..RomanNumeral::ALL.len())],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_archetype_sets() {
        assert_eq!(Archetype::for_difficulty(Difficulty::Easy).len(), 4);
        assert_eq!(Archetype::for_difficulty(Difficulty::Medium).len(), 5);
        assert_eq!(Archetype::for_difficulty(Difficulty::Hard).len(), 5);
    }

    #[test]
    fn test_generated_archetype_belongs_to_tier() {
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let q = generate(difficulty, &mut rng);
                assert!(Archetype::for_difficulty(difficulty).contains(&q.problem.archetype()));
                assert_eq!(q.difficulty, difficulty);
            }
        }
    }

    #[test]
    fn test_every_archetype_eventually_drawn() {
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in Difficulty::ALL {
            let seen: HashSet<Archetype> = (0..500)
                .map(|_| generate(difficulty, &mut rng).problem.archetype())
                .collect();
            assert_eq!(seen.len(), Archetype::for_difficulty(difficulty).len());
        }
    }

    #[test]
    fn test_fraction_add_numerators_below_denominator() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            match instantiate(Archetype::FractionAdd, &mut rng) {
                Problem::FractionAdd {
                    first,
                    second,
                    denominator,
                } => {
                    assert!([4, 6, 8].contains(&denominator));
                    assert!(first >= 1 && second >= 1);
                    assert!(first + second < denominator);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_prompts() {
        assert_eq!(Problem::Subtract { larger: 9, smaller: 4 }.prompt(), "9 - 4");
        assert_eq!(
            Problem::DivideSimple { divisor: 3, quotient: 7 }.prompt(),
            "21 ÷ 3"
        );
        assert_eq!(Problem::DecimalAdd { first: 12, second: 30 }.prompt(), "1.2 + 3.0");
        assert_eq!(
            Problem::LinearEquation {
                form: EquationForm::Multiply,
                coefficient: 4,
                value: 6
            }
            .prompt(),
            "4x = 24"
        );
        assert_eq!(
            Problem::RomanNumeral { numeral: RomanNumeral::IX }.prompt(),
            "What is IX in numbers?"
        );
    }

    #[test]
    fn test_fraction_multiply_is_unreduced() {
        let problem = Problem::FractionMultiply {
            denominator: 2,
            numerator: 2,
            divisor: 4,
        };
        assert_eq!(problem.solve(), Answer::Text("2/8".into()));
        assert_eq!(problem.prompt(), "1/2 × 2/4");
    }

    #[test]
    fn test_equation_inversion() {
        let solve = |form| {
            Problem::LinearEquation {
                form,
                coefficient: 3,
                value: 5,
            }
            .solve()
        };
        assert_eq!(solve(EquationForm::Add), Answer::Integer(5));
        assert_eq!(solve(EquationForm::Subtract), Answer::Integer(8));
        assert_eq!(solve(EquationForm::Multiply), Answer::Integer(5));
        assert_eq!(solve(EquationForm::Divide), Answer::Integer(15));
    }

    #[test]
    fn test_record_is_typed() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = generate(Difficulty::Hard, &mut rng).to_record();
        assert!(!record.is_multiple_choice());
        assert_eq!(record.difficulty, Some(Difficulty::Hard));
    }
}
