use alu_rs::constants::LAST_STEP;
use alu_rs::sequencer::Step;
use alu_rs::{Operation, StepSequencer, describe_step, total_steps};

#[test]
fn test_every_operation_has_eleven_steps() {
    for op in Operation::ALL {
        let mut seq = StepSequencer::new(0x5A, 0x3C, op);
        let mut labels = vec![seq.describe_current().label];
        while seq.advance() {
            labels.push(seq.describe_current().label);
        }
        assert_eq!(labels.len(), total_steps(), "{}", op);
        for (index, label) in labels.iter().enumerate() {
            assert!(
                label.starts_with(&format!("Step {}:", index + 1)),
                "{}: {}",
                op,
                label
            );
        }
    }
}

#[test]
fn test_terminal_step_is_absorbing() {
    let mut seq = StepSequencer::new(9, 9, Operation::Sub);
    for _ in 0..50 {
        seq.advance();
    }
    assert_eq!(seq.cursor(), LAST_STEP);
    assert_eq!(seq.describe_current().step, Step::Output);
    seq.reset();
    assert_eq!(seq.describe_current().step, Step::Load);
}

#[test]
fn test_highlight_grows_by_one_bit_per_step() {
    for index in 2..LAST_STEP {
        let desc = describe_step(0xFF, 0x01, Operation::Add, index);
        assert_eq!(desc.highlighted_bits(), (0..=index - 2).collect::<Vec<_>>());
    }
}

#[test]
fn test_add_bit_labels_agree_with_result() {
    let (a, b) = (0b1011_0110, 0b0110_1101);
    let value = alu_rs::compute(a, b, Operation::Add).value;
    for bit in 0..8 {
        let desc = describe_step(a, b, Operation::Add, bit + 2);
        let expected = format!("= {}, carry out", (value >> bit) & 1);
        assert!(desc.label.contains(&expected), "{}", desc.label);
    }
}

#[test]
fn test_not_load_step_still_reports_b() {
    let desc = describe_step(202, 7, Operation::Not, 0);
    assert!(desc.label.ends_with("B = 00000111 (7)"));
}
