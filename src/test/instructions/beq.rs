use super::*;

const PROGRAM: [&str; 3] = [
    "beq $t0, $t1, loop",
    "add $zero, $zero, $zero",
    "sub $zero, $zero, $zero",
];

#[test]
fn branches_when_equal() {
    let (machine, line, capture) = run_step(&PROGRAM, &[("loop", 2)], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 4);
        m.registers
            .write(RegisterId::from_name("$t1").unwrap(), 4);
    });

    assert_eq!(line, 2);
    assert_eq!(machine.pc, constants::TEXT_BASE + 2 * constants::WORD_BYTES);
    assert!(capture.logs.iter().any(|l| l.starts_with("Branching")));
}

#[test]
fn falls_through_when_not_equal() {
    let (machine, line, _) = run_step(&PROGRAM, &[("loop", 2)], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 4);
        m.registers
            .write(RegisterId::from_name("$t1").unwrap(), 9);
    });

    assert_eq!(line, 1);
    assert_eq!(machine.pc, constants::TEXT_BASE + constants::WORD_BYTES);
}
