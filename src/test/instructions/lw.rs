use super::*;

#[test]
fn loads_from_offset_base() {
    let (machine, ..) = run_step(&["lw $t0, 4($sp)"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$sp").unwrap(), constants::DATA_BASE);
        m.memory.write_word(constants::DATA_BASE + 4, 7).unwrap();
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t0").unwrap()),
        7
    );
}

#[test]
fn loads_from_named_data_label() {
    let (machine, ..) = run_step(&["lw $t0, count"], &[], |m| {
        m.memory.load_named(&[("count".to_owned(), 5)]);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t0").unwrap()),
        5
    );
}

#[test]
fn unaligned_access_is_logged_and_leaves_register_untouched() {
    let (machine, _, capture) = run_step(&["lw $t0, 1($sp)"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$sp").unwrap(), constants::DATA_BASE);
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 0xABCD);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t0").unwrap()),
        0xABCD
    );
    assert!(capture.logs.iter().any(|l| l.starts_with("Error:")));
}

#[test]
fn malformed_parens_are_logged_not_panicked() {
    // ')' before '(' is a plausible typo for offset(base); it must fall through to the
    // unknown-data-label error path instead of panicking on a bad slice range.
    let (machine, _, capture) = run_step(&["lw $t0, 4)($sp"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 0xABCD);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t0").unwrap()),
        0xABCD
    );
    assert!(capture.logs.iter().any(|l| l.starts_with("Error:")));
}
