use super::*;

#[test]
fn shifts_right_logically() {
    let (machine, ..) = run_step(&["srl $t1, $t0, 4"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 0xFFFF_FFFF);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t1").unwrap()),
        0x0FFF_FFFF
    );
}
