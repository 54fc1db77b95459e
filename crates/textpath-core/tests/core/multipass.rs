use textpath_core::{
    GlyphRepository, InMemoryGlyphSource, LayoutEngine, LayoutParams, Motion, MultiPassExpander,
};

fn runs(text: &str, params: LayoutParams) -> Vec<textpath_core::CharacterRun> {
    let source = InMemoryGlyphSource::new().with_glyph('v', "G0 X0 Y6\nG1 X2 Y0\nG1 X4 Y6\n");
    let repo = GlyphRepository::from_source(&source).unwrap();
    LayoutEngine::new(&repo, params).unwrap().place(text).unwrap()
}

#[test]
fn test_expanded_run_structure() {
    let runs = runs("v", LayoutParams::default());
    let expanded = MultiPassExpander::new(3, 0.0).expand_run(&runs[0]);

    assert_eq!(expanded.len(), 3 * 3 + 2);
    let body = &expanded[1..expanded.len() - 1];
    let mut reversed = runs[0].instructions.clone();
    reversed.reverse();
    assert_eq!(&body[0..3], runs[0].instructions.as_slice());
    assert_eq!(&body[3..6], reversed.as_slice());
    assert_eq!(&body[6..9], runs[0].instructions.as_slice());
}

#[test]
fn test_anchor_uses_line_offset() {
    let params = LayoutParams::new(5.0, 10.0, 1.0);
    let runs = runs("vv", params);
    let expander = MultiPassExpander::new(2, 1.5);

    let second = expander.expand_run(&runs[1]);
    assert_eq!(runs[1].offset_y, -10.0);
    assert_eq!(second[0].y(), -8.5);
    assert_eq!(second[second.len() - 1].y(), -8.5);
    assert_eq!(second[0].x(), 0.0);
    assert_eq!(second[second.len() - 1].x(), 4.0);
    assert_eq!(second[0].motion(), Motion::Move);
}

#[test]
fn test_newline_and_space_pass_through() {
    let runs = runs("v \nv", LayoutParams::default());
    let expander = MultiPassExpander::new(4, 0.0);
    assert!(expander.expand_run(&runs[1]).is_empty());
    assert!(expander.expand_run(&runs[2]).is_empty());
}

#[test]
fn test_expansion_is_deterministic() {
    let runs = runs("vvv", LayoutParams::default());
    let expander = MultiPassExpander::new(5, 2.0);
    for run in &runs {
        assert_eq!(expander.expand_run(run), expander.expand_run(run));
    }
}
