use textpath_core::{
    Glyph, GlyphRepository, InMemoryGlyphSource, Instruction, LayoutEngine, LayoutParams,
    RunKind, TextPathError,
};

fn repository() -> GlyphRepository {
    let source = InMemoryGlyphSource::new()
        .with_glyph('o', "G0 X0 Y0\nG1 X6 Y0\nG1 X6 Y6\nG1 X0 Y6\nG1 X0 Y0\n")
        .with_glyph('i', "G0 X1 Y0\nG1 X1 Y6\n");
    GlyphRepository::from_source(&source).unwrap()
}

#[test]
fn test_wrap_after_line_length_reached() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(10.0, 8.0, 0.0)).unwrap();
    let runs = engine.place("ooo").unwrap();

    // 6 < 10 keeps the second glyph on the first line; 12 >= 10 wraps.
    assert_eq!((runs[0].offset_x, runs[0].offset_y), (0.0, 0.0));
    assert_eq!((runs[1].offset_x, runs[1].offset_y), (6.0, 0.0));
    assert_eq!((runs[2].offset_x, runs[2].offset_y), (0.0, -8.0));
}

#[test]
fn test_padding_counts_toward_wrap() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(10.0, 8.0, 4.0)).unwrap();
    let runs = engine.place("oo").unwrap();
    assert_eq!(runs[1].offset_y, -8.0);
}

#[test]
fn test_negative_padding_overlaps() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(100.0, 8.0, -2.0)).unwrap();
    let runs = engine.place("oo").unwrap();
    assert_eq!(runs[1].offset_x, 4.0);
    assert_eq!(runs[1].instructions[0].x(), 4.0);
}

#[test]
fn test_newline_always_wraps() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(1000.0, 5.0, 1.0)).unwrap();
    let runs = engine.place("i\ni\n\ni").unwrap();

    assert_eq!(runs[1].kind, RunKind::Newline);
    assert_eq!((runs[2].offset_x, runs[2].offset_y), (0.0, -5.0));
    assert_eq!((runs[5].offset_x, runs[5].offset_y), (0.0, -15.0));
}

#[test]
fn test_space_advances_by_sentinel_width() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(100.0, 8.0, 1.0)).unwrap();
    let runs = engine.place("i i").unwrap();

    assert_eq!(runs[1].kind, RunKind::Space);
    assert!(runs[1].is_empty());
    // 'i' has zero width: 0 + 1, then space 4 + 1.
    assert_eq!(runs[2].offset_x, 6.0);
    assert_eq!(runs[2].instructions[0].x(), 7.0);
}

#[test]
fn test_wide_glyph_is_never_split() {
    let wide = Glyph::from_parts(
        vec![Instruction::travel(0.0, 0.0), Instruction::stroke(50.0, 0.0)],
        50.0,
    );
    let repo = GlyphRepository::builder().glyph('w', wide).build();
    let engine = LayoutEngine::new(&repo, LayoutParams::new(10.0, 8.0, 0.0)).unwrap();
    let runs = engine.place("ww").unwrap();

    assert_eq!(runs[0].instructions[1].x(), 50.0);
    assert_eq!(runs[0].offset_y, 0.0);
    assert_eq!(runs[1].offset_x, 0.0);
    assert_eq!(runs[1].offset_y, -8.0);
}

#[test]
fn test_runs_are_tagged_with_source_character() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::default()).unwrap();
    let runs = engine.place("oi").unwrap();
    assert!(runs[0].instructions.iter().all(|i| i.source_char() == Some('o')));
    assert!(runs[1].instructions.iter().all(|i| i.source_char() == Some('i')));
}

#[test]
fn test_unknown_character_reports_position() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::default()).unwrap();
    let err = engine.place("oi\nx").unwrap_err();
    assert_eq!(err, TextPathError::UnknownCharacter { ch: 'x', position: 3 });
}

#[test]
fn test_empty_text() {
    let repo = repository();
    let engine = LayoutEngine::new(&repo, LayoutParams::default()).unwrap();
    assert!(engine.place("").unwrap().is_empty());
}
