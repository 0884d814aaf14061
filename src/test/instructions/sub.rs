use super::*;

#[test]
fn subtracts_two_registers() {
    let (machine, ..) = run_step(&["sub $t2, $t0, $t1"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 10);
        m.registers
            .write(RegisterId::from_name("$t1").unwrap(), 3);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t2").unwrap()),
        7
    );
}

#[test]
fn wraps_on_underflow() {
    let (machine, ..) = run_step(&["sub $t2, $t0, $t1"], &[], |m| {
        m.registers
            .write(RegisterId::from_name("$t0").unwrap(), 0);
        m.registers
            .write(RegisterId::from_name("$t1").unwrap(), 1);
    });

    assert_eq!(
        machine.registers.read(RegisterId::from_name("$t2").unwrap()) as i32,
        -1
    );
}
