//! End-to-end checks of the documented pipeline properties.

use proptest::prelude::*;
use textpath_core::{
    compile, compile_instructions, Glyph, GlyphRepository, InMemoryGlyphSource, Instruction,
    LayoutEngine, LayoutParams, Motion, RunKind, TextPathError,
};

fn repository() -> GlyphRepository {
    let source = InMemoryGlyphSource::from_definitions([
        "(a)\nG0 X0 Y0\nG1 X4 Y0\nG1 X4 Y5\nG1 X0 Y5\n",
        "(b)\nG0 X0 Y7\nG1 X0 Y0\nG1 X3 Y0\n",
        "(c)\nG0 X3 Y0\nG1 X0 Y0\nG1 X0 Y4\nG1 X3 Y4\n",
    ])
    .unwrap();
    GlyphRepository::from_source(&source).unwrap()
}

proptest! {
    #[test]
    fn prop_compile_is_deterministic(
        text in "[abc \n]{0,40}",
        line_length in 0.0..60.0f64,
        line_spacing in 0.0..20.0f64,
        padding in -2.0..4.0f64,
        passes in 1u32..5,
    ) {
        let repo = repository();
        let params = LayoutParams::new(line_length, line_spacing, padding).with_passes(passes);
        let first = compile(&repo, &text, &params).unwrap();
        let second = compile(&repo, &text, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_blank_runs_carry_no_instructions(text in "[abc \n]{0,40}") {
        let repo = repository();
        let engine = LayoutEngine::new(&repo, LayoutParams::default()).unwrap();
        for run in engine.place(&text).unwrap() {
            if run.kind != RunKind::Glyph {
                prop_assert!(run.instructions.is_empty());
            }
        }
    }
}

#[test]
fn test_advance_width_of_reference_glyph() {
    let glyph = Glyph::parse("G0 X0 Y0\nG1 X5 Y0\nG1 X5 Y3\n").unwrap();
    assert_eq!(glyph.advance_width(), 5.0);
}

#[test]
fn test_cumulative_wrap_moves_glyph_down_one_line() {
    let six = Glyph::from_parts(
        vec![Instruction::travel(0.0, 0.0), Instruction::stroke(6.0, 0.0)],
        6.0,
    );
    let repo = GlyphRepository::builder()
        .glyph('x', six.clone())
        .glyph('y', six)
        .build();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(10.0, 3.0, 0.0)).unwrap();
    let runs = engine.place("xyx").unwrap();

    // Cumulative x reaches 12 after the second glyph, so the third drops a line.
    assert_eq!(runs[1].offset_y, runs[0].offset_y);
    assert_eq!(runs[2].offset_y, runs[0].offset_y - 3.0);
}

#[test]
fn test_newline_resets_cursor_regardless_of_position() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(1_000.0, 4.0, 1.0)).unwrap();
    for prefix in ["", "a", "abcabc", "a b c"] {
        let text = format!("{prefix}\na");
        let runs = engine.place(&text).unwrap();
        let last = runs.last().unwrap();
        assert_eq!(last.offset_x, 0.0, "prefix {prefix:?}");
        assert_eq!(last.offset_y, -4.0, "prefix {prefix:?}");
    }
}

#[test]
fn test_anchor_placement() {
    let repo = repository();
    let params = LayoutParams::new(100.0, 8.0, 1.0)
        .with_passes(3)
        .with_baseline(-1.0);
    let out = compile_instructions(&repo, "c", &params).unwrap();

    let first = out.first().unwrap();
    let last = out.last().unwrap();
    let body = &out[1..out.len() - 1];
    let min_x = body.iter().map(|i| i.x()).fold(f64::INFINITY, f64::min);
    let max_x = body.iter().map(|i| i.x()).fold(f64::NEG_INFINITY, f64::max);

    assert_eq!(first.motion(), Motion::Move);
    assert_eq!(last.motion(), Motion::Move);
    assert_eq!(first.y(), -1.0);
    assert_eq!(last.y(), -1.0);
    assert_eq!(first.x(), min_x);
    assert_eq!(last.x(), max_x);
}

#[test]
fn test_unknown_character_produces_no_output() {
    let repo = repository();
    let result = compile(&repo, "abc\nabz", &LayoutParams::default());
    assert_eq!(
        result,
        Err(TextPathError::UnknownCharacter { ch: 'z', position: 6 })
    );
}

#[test]
fn test_repository_is_shared_across_threads() {
    let repo = repository();
    let params = LayoutParams::new(20.0, 8.0, 1.0).with_passes(2);
    let expected = compile(&repo, "abc abc\ncab", &params).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compile(&repo, "abc abc\ncab", &params).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
