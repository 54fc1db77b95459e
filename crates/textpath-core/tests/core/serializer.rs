use proptest::prelude::*;
use textpath_core::serializer::{parse, render};
use textpath_core::{Instruction, Motion};

fn instruction() -> impl Strategy<Value = Instruction> {
    (
        any::<bool>(),
        -10_000.0..10_000.0f64,
        -10_000.0..10_000.0f64,
        proptest::option::of(any::<char>()),
    )
        .prop_map(|(write, x, y, tag)| {
            let motion = if write { Motion::Write } else { Motion::Move };
            let instr = Instruction::new(motion, x, y);
            match tag {
                Some(ch) => instr.tagged(ch),
                None => instr,
            }
        })
}

proptest! {
    #[test]
    fn prop_parse_render_round_trip(xs in proptest::collection::vec(instruction(), 1..64)) {
        let parsed = parse(&render(&xs));
        prop_assert_eq!(parsed.len(), xs.len());
        for (a, b) in xs.iter().zip(&parsed) {
            prop_assert_eq!(a.motion(), b.motion());
            prop_assert_eq!(a.source_char(), b.source_char());
            prop_assert!((a.x() - b.x()).abs() <= 1e-5);
            prop_assert!((a.y() - b.y()).abs() <= 1e-5);
        }
    }

    #[test]
    fn prop_render_ends_with_terminator(xs in proptest::collection::vec(instruction(), 1..16)) {
        let text = render(&xs);
        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text.split('\n').count(), xs.len() + 1);
        prop_assert_eq!(text.split('\n').last(), Some(""));
    }
}

#[test]
fn test_parse_tolerates_foreign_lines() {
    let text = "(header)\r\nG0 X1.00000 Y2.00000 #a\r\nG1 X1.00000\r\nG1 X3.00000 Y2.00000 #a\r\n";
    let parsed = parse(text);
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].motion(), Motion::Write);
}
