use super::*;

#[test]
fn bitwise_and() {
    let (machine, ..) = run_step(&["and $t2, $t0, $t1"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 0b1100);
        m.registers
            .write(RegisterId::from_name("$t1").unwrap(), 0b1010);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t2").unwrap()),
        0b1000
    );
}
