//! Automaton description parser
//!
//! The input has two sections separated by a blank line:
//!
//! ```text
//! 0 1 a
//! 1 2 b c
//! 2 2
//!
//! 2
//! ```
//!
//! Every line of the first section is an arrow `from to [words...]`. Every
//! line of the second section lists final states. The starting state is the
//! smallest state seen in the first section.

use std::collections::BTreeSet;
use std::io::BufRead;

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::{AutomatonDatabase, Diagnostic};
use crate::core::{AutomatonError, Parser as CoreParser, StateId, Transition, TransitionLabel};

/// Parser options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Leave transition words containing `"` out of the label instead of
    /// only warning about them
    pub drop_quoted_words: bool,
}

/// Which section of the description is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Transitions,
    Finals,
}

/// Mutable state threaded through a single scan of the input
#[derive(Debug)]
struct ParseContext {
    config: ParserConfig,
    section: Section,
    normal_states: BTreeSet<StateId>,
    final_states: BTreeSet<StateId>,
    transitions: Vec<Transition>,
    starting_state: Option<StateId>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseContext {
    fn new(config: ParserConfig) -> Self {
        Self {
            config,
            section: Section::Transitions,
            normal_states: BTreeSet::new(),
            final_states: BTreeSet::new(),
            transitions: Vec::new(),
            starting_state: None,
            diagnostics: Vec::new(),
        }
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "Recorded diagnostic");
        self.diagnostics.push(diagnostic);
    }

    fn read_line(&mut self, number: usize, line: &str) -> Result<(), AutomatonError> {
        if line.trim().is_empty() {
            return self.close_transitions();
        }

        match self.section {
            Section::Transitions => {
                self.read_transition(number, line);
                Ok(())
            }
            Section::Finals => self.read_finals(number, line),
        }
    }

    /// Switch to the final-state section, fixing the starting state
    fn close_transitions(&mut self) -> Result<(), AutomatonError> {
        if self.section == Section::Transitions {
            trace!("Transition section closed");
        }
        self.section = Section::Finals;

        if self.starting_state.is_none() {
            let start = self
                .normal_states
                .first()
                .copied()
                .ok_or(AutomatonError::NoStates)?;
            debug!(start, "Inferred starting state");
            self.starting_state = Some(start);
        }
        Ok(())
    }

    fn read_transition(&mut self, number: usize, line: &str) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            self.warn(Diagnostic::ShortLine { line: number });
            return;
        }

        let (Ok(from), Ok(to)) = (tokens[0].parse::<StateId>(), tokens[1].parse::<StateId>())
        else {
            self.warn(Diagnostic::NonIntegerState { line: number });
            return;
        };

        let mut words = Vec::with_capacity(tokens.len() - 2);
        for word in &tokens[2..] {
            if word.contains('"') {
                let dropped = self.config.drop_quoted_words;
                self.warn(Diagnostic::QuotedWord {
                    line: number,
                    word: word.to_string(),
                    dropped,
                });
                if dropped {
                    continue;
                }
            }
            words.push(word.to_string());
        }

        self.normal_states.insert(from);
        self.normal_states.insert(to);

        let label = TransitionLabel::from_words(words);
        trace!(line = number, from, to, %label, "Parsed transition");
        self.transitions.push(Transition { from, to, label });
    }

    fn read_finals(&mut self, number: usize, line: &str) -> Result<(), AutomatonError> {
        let states = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<StateId>()
                    .map_err(|_| AutomatonError::invalid_final_state(number, token))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for state in states {
            if self.normal_states.remove(&state) {
                trace!(line = number, state, "Marked state final");
                self.final_states.insert(state);
            } else if !self.final_states.contains(&state) {
                self.warn(Diagnostic::IsolatedFinalState {
                    line: number,
                    state,
                });
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<AutomatonDatabase, AutomatonError> {
        // Input may end without a separator line
        self.close_transitions()?;
        let start = self.starting_state.ok_or(AutomatonError::NoStates)?;

        if start != 0 {
            self.warn(Diagnostic::NonZeroStart { state: start });
        }

        Ok(AutomatonDatabase::from_parts(
            self.normal_states,
            self.final_states,
            self.transitions,
            start,
            self.diagnostics,
        ))
    }
}

/// Parser for the two-section automaton description format
#[derive(Debug, Clone, Default)]
pub struct AutomatonParser {
    config: ParserConfig,
}

impl AutomatonParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parse a sequence of lines in one pass
    ///
    /// Malformed transition lines become diagnostics on the returned model.
    /// A non-integer final state, or a description without any state, is
    /// fatal.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<AutomatonDatabase, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parse_span = span!(Level::INFO, "parse_automaton");
        let _enter = parse_span.enter();

        let mut context = ParseContext::new(self.config);
        let mut line_count = 0;
        for (index, line) in lines.into_iter().enumerate() {
            line_count = index + 1;
            context.read_line(line_count, line.as_ref())?;
        }

        let database = context.finish()?;
        info!(
            lines = line_count,
            states = database.state_count(),
            transitions = database.transition_count(),
            warnings = database.diagnostics().len(),
            "Parsing completed"
        );
        Ok(database)
    }

    /// Parse a description read line by line from `reader`
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<AutomatonDatabase, AutomatonError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        self.parse_lines(lines)
    }
}

impl CoreParser<AutomatonDatabase> for AutomatonParser {
    fn parse(&self, input: &str) -> Result<AutomatonDatabase> {
        Ok(self.parse_lines(input.lines())?)
    }

    fn name(&self) -> &'static str {
        "automaton"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateRole;

    fn parse(input: &str) -> AutomatonDatabase {
        AutomatonParser::new().parse_lines(input.lines()).unwrap()
    }

    #[test]
    fn test_parser_metadata() {
        let parser = AutomatonParser::new();
        assert_eq!(parser.name(), "automaton");
        assert_eq!(parser.version(), "0.1.0");
        assert!(!parser.config().drop_quoted_words);
    }

    #[test]
    fn test_labels_and_epsilon() {
        let db = parse("0 1 a b\n1 2\n\n");
        assert_eq!(db.transitions()[0], Transition::with_words(0, 1, ["a", "b"]));
        assert_eq!(db.transitions()[1], Transition::epsilon(1, 2));
        assert_eq!(db.transitions()[0].label.to_string(), "a, b");
    }

    #[test]
    fn test_repeated_whitespace_collapses() {
        let db = parse("0   1\t\tx   y\n\n");
        assert_eq!(db.transitions()[0], Transition::with_words(0, 1, ["x", "y"]));
        assert!(!db.has_diagnostics());
    }

    #[test]
    fn test_short_line_is_skipped() {
        let db = parse("0 1\n7\n\n");
        assert_eq!(db.transition_count(), 1);
        assert!(!db.contains_state(7));
        assert_eq!(db.diagnostics(), &[Diagnostic::ShortLine { line: 2 }]);
    }

    #[test]
    fn test_non_integer_state_is_skipped() {
        let db = parse("0 1\nq0 q1 a\n1 x\n\n");
        assert_eq!(db.transition_count(), 1);
        assert_eq!(
            db.diagnostics(),
            &[
                Diagnostic::NonIntegerState { line: 2 },
                Diagnostic::NonIntegerState { line: 3 },
            ]
        );
    }

    #[test]
    fn test_quoted_word_kept_by_default() {
        let db = parse("0 1 \"a b\n\n");
        assert_eq!(db.transitions()[0].label.to_string(), "\"a, b");
        assert_eq!(
            db.diagnostics(),
            &[Diagnostic::QuotedWord {
                line: 1,
                word: "\"a".to_string(),
                dropped: false,
            }]
        );
    }

    #[test]
    fn test_quoted_word_dropped_when_configured() {
        let parser = AutomatonParser::with_config(ParserConfig {
            drop_quoted_words: true,
        });
        let db = parser.parse_lines("0 1 \"a b\n0 1 \"c\"\n\n".lines()).unwrap();
        assert_eq!(db.transitions()[0].label.to_string(), "b");
        assert!(db.transitions()[1].label.is_epsilon());
        assert_eq!(db.diagnostics().len(), 2);
    }

    #[test]
    fn test_parallel_transitions_not_merged() {
        let db = parse("0 1 a\n0 1 a\n0 1 b\n\n");
        assert_eq!(db.transition_count(), 3);
        assert_eq!(db.state_count(), 2);
    }

    #[test]
    fn test_start_is_fixed_before_finals() {
        let db = parse("3 1\n1 2\n\n1");
        assert_eq!(db.starting_state(), 1);
        assert_eq!(db.role(1), Some(StateRole::Final));
        assert_eq!(db.diagnostics(), &[Diagnostic::NonZeroStart { state: 1 }]);
    }

    #[test]
    fn test_negative_states() {
        let db = parse("-2 0 a\n\n0");
        assert_eq!(db.starting_state(), -2);
        assert_eq!(db.role(-2), Some(StateRole::Normal));
    }

    #[test]
    fn test_missing_separator() {
        let db = parse("0 1 a\n1 2 b");
        assert_eq!(db.starting_state(), 0);
        assert_eq!(db.final_states().count(), 0);
        assert_eq!(db.transition_count(), 2);
    }

    #[test]
    fn test_whitespace_only_line_is_separator() {
        let db = parse("0 1\n   \n1");
        assert_eq!(db.role(1), Some(StateRole::Final));
    }

    #[test]
    fn test_extra_blank_lines_in_finals() {
        let db = parse("0 1\n\n\n1\n\n0");
        assert_eq!(db.final_states().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_crlf_input() {
        let db = parse("0 1 a\r\n\r\n1\r\n");
        assert_eq!(db.transitions()[0].label.to_string(), "a");
        assert_eq!(db.role(1), Some(StateRole::Final));
    }

    #[test]
    fn test_no_states_is_fatal() {
        let parser = AutomatonParser::new();
        assert!(matches!(
            parser.parse_lines("\n1".lines()),
            Err(AutomatonError::NoStates)
        ));
        assert!(matches!(
            parser.parse_lines("".lines()),
            Err(AutomatonError::NoStates)
        ));
        assert!(matches!(
            parser.parse_lines("x y\n\n".lines()),
            Err(AutomatonError::NoStates)
        ));
    }

    #[test]
    fn test_invalid_final_reports_line_and_token() {
        let err = AutomatonParser::new()
            .parse_lines("0 1\n\n1\n2 z".lines())
            .unwrap_err();
        match err {
            AutomatonError::InvalidFinalState { line, token } => {
                assert_eq!(line, 4);
                assert_eq!(token, "z");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reader() {
        let input = std::io::Cursor::new("0 1 a\n\n1\n");
        let db = AutomatonParser::new().parse_reader(input).unwrap();
        assert_eq!(db.role(1), Some(StateRole::Final));
    }

    #[test]
    fn test_core_parser_trait_wraps_fatal_error() {
        let err = <AutomatonParser as CoreParser<AutomatonDatabase>>::parse(
            &AutomatonParser::new(),
            "0 1\n\nfoo",
        )
        .unwrap_err();
        assert!(err.downcast_ref::<AutomatonError>().is_some());
    }
}
