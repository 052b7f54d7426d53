//! The modulo-three calculator service.

use super::error::CalculatorError;
use super::ModThreeState;
use crate::core::{Automaton, AutomatonDefinition, FiniteAutomaton, State};
use tracing::trace;

/// Remainder reported alongside every error by
/// [`ModuloCalculator::calculate_with_sentinel`].
pub const SENTINEL_REMAINDER: i64 = -1;

/// A service computing remainders of numbers given as digit strings.
pub trait ModuloCalculator {
    /// Compute the remainder of the number `input` represents.
    fn calculate(&self, input: &str) -> Result<u32, CalculatorError>;

    /// [`calculate`](Self::calculate) flattened into a
    /// `(remainder, error)` pair.
    ///
    /// The error is present exactly when the remainder is
    /// [`SENTINEL_REMAINDER`].
    fn calculate_with_sentinel(&self, input: &str) -> (i64, Option<CalculatorError>) {
        match self.calculate(input) {
            Ok(remainder) => (i64::from(remainder), None),
            Err(err) => (SENTINEL_REMAINDER, Some(err)),
        }
    }
}

/// Computes N mod 3 for N written in binary, most-significant bit first.
///
/// Generic over the automaton driving it; the default is the validated
/// map-backed engine built from [`mod_three_definition`], and
/// [`ModThreeTable`] is a drop-in dense replacement.
///
/// [`mod_three_definition`]: super::mod_three_definition
/// [`ModThreeTable`]: super::ModThreeTable
#[derive(Clone, Debug)]
pub struct ModThreeCalculator<A = FiniteAutomaton<ModThreeState>> {
    automaton: A,
}

impl ModThreeCalculator {
    /// Build the engine from `definition`.
    ///
    /// Fails with [`CalculatorError::Init`] if the definition is rejected.
    pub fn new(definition: AutomatonDefinition<ModThreeState>) -> Result<Self, CalculatorError> {
        let automaton = definition.build().map_err(CalculatorError::Init)?;
        Ok(Self { automaton })
    }
}

impl<A: Automaton<State = ModThreeState>> ModThreeCalculator<A> {
    /// Drive the calculator with an already-built automaton.
    pub fn with_automaton(automaton: A) -> Self {
        Self { automaton }
    }

    /// The underlying automaton.
    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// Char position and value of the first symbol outside the alphabet.
    ///
    /// Only called once the whole input failed validation. An automaton
    /// that rejects a string while accepting each of its chars is blamed on
    /// the first char.
    fn first_foreign_symbol(&self, input: &str) -> (usize, char) {
        let mut buf = [0u8; 4];
        input
            .chars()
            .enumerate()
            .find(|(_, c)| !self.automaton.validate_input(c.encode_utf8(&mut buf)))
            .or_else(|| input.chars().next().map(|c| (0, c)))
            .unwrap_or((0, char::REPLACEMENT_CHARACTER))
    }
}

impl<A: Automaton<State = ModThreeState>> ModuloCalculator for ModThreeCalculator<A> {
    /// The empty (or all-whitespace) input is the number zero. Any other
    /// input must consist of binary digits only; whitespace mixed with
    /// digits is rejected.
    fn calculate(&self, input: &str) -> Result<u32, CalculatorError> {
        if input.trim().is_empty() {
            return Ok(0);
        }

        if !self.automaton.validate_input(input) {
            let (position, symbol) = self.first_foreign_symbol(input);
            trace!(%symbol, position, "rejected non-binary input");
            return Err(CalculatorError::InvalidInput {
                input: input.to_string(),
                symbol,
                position,
            });
        }

        let terminal = self.automaton.run(input)?;

        if !self.automaton.is_accepting(&terminal) {
            return Err(CalculatorError::NonAccepting {
                state: terminal.name().to_string(),
            });
        }

        trace!(bits = input.len(), state = terminal.name(), "calculated remainder");
        Ok(terminal.remainder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, ExecutionError};
    use crate::modthree::{mod_three_definition, ModThreeTable};
    use std::error::Error;

    /// Scripted automaton for exercising each branch of `calculate`.
    struct MockAutomaton {
        run: fn(&str) -> Result<ModThreeState, ExecutionError>,
        accepting: fn(&ModThreeState) -> bool,
        valid: fn(&str) -> bool,
    }

    impl Automaton for MockAutomaton {
        type State = ModThreeState;

        fn run(&self, input: &str) -> Result<ModThreeState, ExecutionError> {
            (self.run)(input)
        }

        fn is_accepting(&self, state: &ModThreeState) -> bool {
            (self.accepting)(state)
        }

        fn validate_input(&self, input: &str) -> bool {
            (self.valid)(input)
        }
    }

    fn calculator() -> ModThreeCalculator {
        ModThreeCalculator::new(mod_three_definition()).unwrap()
    }

    #[test]
    fn calculates_small_numbers() {
        let calc = calculator();

        assert_eq!(calc.calculate("1"), Ok(1));
        assert_eq!(calc.calculate("110"), Ok(0));
        assert_eq!(calc.calculate("101"), Ok(2));
        assert_eq!(calc.calculate("1101"), Ok(1));
    }

    #[test]
    fn empty_and_blank_inputs_are_zero() {
        let calc = calculator();

        assert_eq!(calc.calculate(""), Ok(0));
        assert_eq!(calc.calculate("   \t\n"), Ok(0));
    }

    #[test]
    fn whitespace_mixed_with_digits_is_rejected() {
        let calc = calculator();

        assert_eq!(
            calc.calculate(" 101"),
            Err(CalculatorError::InvalidInput {
                input: " 101".to_string(),
                symbol: ' ',
                position: 0,
            })
        );
        assert!(matches!(
            calc.calculate("10 1"),
            Err(CalculatorError::InvalidInput {
                symbol: ' ',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn invalid_input_names_first_foreign_symbol() {
        let calc = calculator();

        let err = calc.calculate("10x2").unwrap_err();

        assert_eq!(
            err,
            CalculatorError::InvalidInput {
                input: "10x2".to_string(),
                symbol: 'x',
                position: 2,
            }
        );
        let message = err.to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains("position 2"));
    }

    #[test]
    fn invalid_input_position_counts_chars_not_bytes() {
        let calc = calculator();

        assert!(matches!(
            calc.calculate("1é0z"),
            Err(CalculatorError::InvalidInput {
                symbol: 'é',
                position: 1,
                ..
            })
        ));
        assert!(matches!(
            calc.calculate("01€"),
            Err(CalculatorError::InvalidInput {
                symbol: '€',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn inconsistent_validation_blames_first_symbol() {
        let calc = ModThreeCalculator::with_automaton(MockAutomaton {
            run: |_| Ok(ModThreeState::S0),
            accepting: |_| true,
            valid: |input| input.chars().count() == 1,
        });

        assert_eq!(
            calc.calculate("10"),
            Err(CalculatorError::InvalidInput {
                input: "10".to_string(),
                symbol: '1',
                position: 0,
            })
        );
    }

    #[test]
    fn invalid_input_pairs_with_sentinel() {
        let calc = calculator();

        let (remainder, err) = calc.calculate_with_sentinel("1A01");
        assert_eq!(remainder, SENTINEL_REMAINDER);
        assert!(matches!(err, Some(CalculatorError::InvalidInput { .. })));
    }

    #[test]
    fn valid_input_has_no_error() {
        let calc = calculator();

        assert_eq!(calc.calculate_with_sentinel("101"), (2, None));
    }

    #[test]
    fn rejected_definition_fails_initialization() {
        let mut definition = mod_three_definition();
        definition.transitions.clear();

        let err = ModThreeCalculator::new(definition).unwrap_err();

        assert!(matches!(
            err,
            CalculatorError::Init(ConfigError::MissingStateRow { .. })
        ));
        assert!(err
            .to_string()
            .starts_with("failed to initialize FSM engine"));
        assert!(err.source().is_some());
    }

    #[test]
    fn execution_errors_are_wrapped() {
        let calc = ModThreeCalculator::with_automaton(MockAutomaton {
            run: |_| {
                Err(ExecutionError::MissingStateRow {
                    state: "S1".to_string(),
                })
            },
            accepting: |_| true,
            valid: |_| true,
        });

        let err = calc.calculate("10").unwrap_err();

        assert_eq!(
            err,
            CalculatorError::Execution(ExecutionError::MissingStateRow {
                state: "S1".to_string()
            })
        );
        assert!(err.to_string().contains("Transition rule missing for state 'S1'"));
        assert_eq!(calc.calculate_with_sentinel("10").0, SENTINEL_REMAINDER);
    }

    #[test]
    fn non_accepting_terminal_state_is_an_error() {
        let calc = ModThreeCalculator::with_automaton(MockAutomaton {
            run: |_| Ok(ModThreeState::S2),
            accepting: |state| *state == ModThreeState::S0,
            valid: |_| true,
        });

        assert_eq!(
            calc.calculate("101"),
            Err(CalculatorError::NonAccepting {
                state: "S2".to_string()
            })
        );
    }

    #[test]
    fn blank_input_never_reaches_the_automaton() {
        let calc = ModThreeCalculator::with_automaton(MockAutomaton {
            run: |_| panic!("run must not be called"),
            accepting: |_| panic!("is_accepting must not be called"),
            valid: |_| panic!("validate_input must not be called"),
        });

        assert_eq!(calc.calculate("  "), Ok(0));
    }

    #[test]
    fn dense_table_drives_the_calculator() {
        let calc = ModThreeCalculator::with_automaton(ModThreeTable);

        assert_eq!(calc.calculate("1111"), Ok(0));
        assert!(calc.calculate("12").is_err());
    }

    #[test]
    fn boxed_automata_drive_the_calculator() {
        let boxed = ModThreeCalculator::with_automaton(Box::new(ModThreeTable));
        assert_eq!(boxed.calculate("101"), Ok(2));

        let engines: Vec<Box<dyn Automaton<State = ModThreeState>>> = vec![
            Box::new(mod_three_definition().build().unwrap()),
            Box::new(ModThreeTable),
        ];
        for engine in engines {
            let calc = ModThreeCalculator::with_automaton(engine);
            assert_eq!(calc.calculate("1101"), Ok(1));
            assert!(matches!(
                calc.calculate("1A01"),
                Err(CalculatorError::InvalidInput {
                    symbol: 'A',
                    position: 1,
                    ..
                })
            ));
        }
    }
}
