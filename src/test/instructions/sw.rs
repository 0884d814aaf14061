use super::*;

#[test]
fn stores_to_offset_base() {
    let (machine, ..) = run_step(&["sw $t0, 8($sp)"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$sp").unwrap(), constants::DATA_BASE);
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 99);
    });

    assert_eq!(
        machine.memory.read_word(constants::DATA_BASE + 8).unwrap(),
        99
    );
}

#[test]
fn stores_to_named_data_label() {
    let (machine, ..) = run_step(&["sw $t0, count"], &[], |m| {
        m.memory.load_named(&[("count".to_owned(), 0)]);
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 41);
    });

    assert_eq!(machine.memory.lookup_named("count"), Some(41));
}
