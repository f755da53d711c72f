//! Edge case tests for description parsing and DOT output
//!
//! Tests for boundary conditions, unusual inputs, and error handling.

// =============================================================================
// Malformed transition lines
// =============================================================================

mod malformed_transitions {
    use fsadot::prelude::*;

    #[test]
    fn test_every_bad_line_is_reported_in_order() {
        let input = "0\n0 1 a\nx 1\n0 y b\n1 0\n\n";
        let db = fsadot::parse(input).unwrap();

        assert_eq!(db.transition_count(), 2);
        let lines: Vec<_> = db.diagnostics().iter().filter_map(|d| d.line()).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_skipped_lines_add_no_states() {
        let db = fsadot::parse("5 6\n1 a\nq 0\n\n").unwrap();
        assert_eq!(db.state_count(), 2);
        assert_eq!(db.starting_state(), 5);
    }

    #[test]
    fn test_out_of_range_state_is_not_an_integer() {
        let db = fsadot::parse("0 1\n0 99999999999999999999 a\n\n").unwrap();
        assert_eq!(db.transition_count(), 1);
        assert_eq!(
            db.diagnostics()[0],
            Diagnostic::NonIntegerState { line: 2 }
        );
    }

    #[test]
    fn test_signed_state_ids() {
        let db = fsadot::parse("+3 -3\n\n").unwrap();
        assert_eq!(db.starting_state(), -3);
        assert!(db.contains_state(3));
    }
}

// =============================================================================
// Final-state section
// =============================================================================

mod final_states {
    use fsadot::prelude::*;

    #[test]
    fn test_several_finals_per_line() {
        let db = fsadot::parse("0 1\n1 2\n2 3\n\n1 3\n2").unwrap();
        assert_eq!(db.final_states().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(db.normal_states().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_fatal_error_after_valid_finals() {
        let err = fsadot::parse("0 1\n\n1\n0 1.5").unwrap_err();
        assert!(matches!(
            err,
            AutomatonError::InvalidFinalState { line: 4, ref token } if token == "1.5"
        ));
    }

    #[test]
    fn test_transition_after_separator_is_fatal() {
        let err = fsadot::parse("0 1\n\n1 2 a").unwrap_err();
        assert!(matches!(
            err,
            AutomatonError::InvalidFinalState { line: 3, ref token } if token == "a"
        ));
    }
}

// =============================================================================
// Empty and degenerate descriptions
// =============================================================================

mod degenerate {
    use fsadot::prelude::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(fsadot::parse(""), Err(AutomatonError::NoStates)));
    }

    #[test]
    fn test_only_separator() {
        assert!(matches!(fsadot::parse("\n\n"), Err(AutomatonError::NoStates)));
    }

    #[test]
    fn test_self_loop_only() {
        let db = fsadot::parse("0 0 a\n\n0").unwrap();
        assert_eq!(db.state_count(), 1);
        let dot = fsadot::emit(&db).unwrap();
        assert!(dot.contains("state0->state0[label=\"a\"];"));
    }
}

// =============================================================================
// Label text
// =============================================================================

mod labels {
    #[test]
    fn test_unicode_words_pass_through() {
        let dot = fsadot::render("0 1 α β→γ\n\n1").unwrap();
        assert!(dot.contains("[label=\"α, β→γ\"]"));
    }

    #[test]
    fn test_backslash_is_escaped() {
        let dot = fsadot::render("0 1 a\\b\n\n").unwrap();
        assert!(dot.contains("[label=\"a\\\\b\"]"));
    }

    #[test]
    fn test_word_order_preserved() {
        let dot = fsadot::render("0 1 c b a\n\n").unwrap();
        assert!(dot.contains("[label=\"c, b, a\"]"));
    }
}
