use super::*;

#[test]
fn jumps_unconditionally() {
    let (machine, line, capture) = run_step(
        &["j target", "add $zero, $zero, $zero", "sub $zero, $zero, $zero"],
        &[("target", 2)],
        |_| {},
    );

    assert_eq!(line, 2);
    assert_eq!(machine.pc, constants::TEXT_BASE + 2 * constants::WORD_BYTES);
    assert!(capture.logs.iter().any(|l| l.contains("target")));
}

#[test]
fn unknown_label_is_logged_and_pc_still_advances() {
    let (machine, line, capture) = run_step(&["j nowhere"], &[], |_| {});

    assert_eq!(line, 1);
    assert_eq!(machine.pc, constants::TEXT_BASE + constants::WORD_BYTES);
    assert!(capture.logs.iter().any(|l| l.starts_with("Error:")));
}
