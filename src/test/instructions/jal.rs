use super::*;

#[test]
fn jumps_and_stores_return_address() {
    let (machine, line, _) = run_step(
        &["jal target", "add $zero, $zero, $zero", "sub $zero, $zero, $zero"],
        &[("target", 2)],
        |_| {},
    );

    assert_eq!(line, 2);
    assert_eq!(machine.pc, constants::TEXT_BASE + 2 * constants::WORD_BYTES);
    assert_eq!(
        machine.registers.read(RegisterId::RA),
        constants::TEXT_BASE + constants::WORD_BYTES
    );
}
