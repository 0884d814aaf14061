use super::*;

#[test]
fn jumps_to_register_target() {
    let (machine, line, _) = run_step(
        &["jr $ra", "add $zero, $zero, $zero", "sub $zero, $zero, $zero"],
        &[],
        |m| {
            m.registers
                .write(RegisterId::RA, constants::TEXT_BASE + 2 * constants::WORD_BYTES);
        },
    );

    assert_eq!(line, 2);
    assert_eq!(machine.pc, constants::TEXT_BASE + 2 * constants::WORD_BYTES);
}

#[test]
fn zero_target_terminates_the_program() {
    let (_, line, capture) = run_step(&["jr $ra"], &[], |_| {});

    assert_eq!(line, 1);
    assert!(capture
        .logs
        .iter()
        .any(|l| l.contains("completed")));
}

#[test]
fn target_past_text_segment_terminates_the_program() {
    let (_, line, capture) = run_step(&["jr $ra"], &[], |m| {
        m.registers.write(RegisterId::RA, 0xFFFF_FFFF);
    });

    assert_eq!(line, 1);
    assert!(capture
        .logs
        .iter()
        .any(|l| l.contains("completed")));
}
