use fridgescript::{
    error::{AsmError, RuntimeError},
    run_assembly,
    vm::{
        asm,
        instr::Operand,
        machine::{Machine, StepOutcome},
    },
};

const MAX_STEPS: usize = 10_000;

fn run(text: &str) -> Machine {
    match run_assembly(text, MAX_STEPS) {
        Ok(machine) => machine,
        Err(e) => panic!("Assembly failed: {e}"),
    }
}

const COUNTDOWN: &str = r#"
; count down from five
PUSH 5
POP R0
STORE R0, VAR_0
LABEL loop
PUSH VAR_0
POP R0
CMP R0, 0
JE done
PRINT VAR_0
PUSH VAR_0
PUSH 1
POP R1
POP R0
SUB R0, R1
PUSH R0
POP R0
STORE R0, VAR_0
JMP loop
LABEL done
PRINT "liftoff"
HALT
"#;

#[test]
fn countdown_prints_in_order() {
    let machine = run(COUNTDOWN);
    assert_eq!(machine.output, vec!["5", "4", "3", "2", "1", "liftoff"]);
}

#[test]
fn printed_programs_parse_back() {
    let original = asm::parse(COUNTDOWN).unwrap();
    let reparsed = asm::parse(&original.to_string()).unwrap();
    assert_eq!(original.instrs, reparsed.instrs);
}

#[test]
fn commands_drive_the_fridge() {
    let machine = run(concat!("SET_TEMP 3\n",
                              "SET_MODE ECO\n",
                              "ADD_ITEM \"milk\"\n",
                              "ADD_ITEM \"eggs\"\n",
                              "REMOVE_ITEM \"milk\"\n",
                              "HALT\n"));
    assert_eq!(machine.fridge.temp, 3);
    assert_eq!(machine.fridge.mode.to_string(), "ECO");
    assert_eq!(machine.fridge.items, vec!["eggs".to_string()]);
}

#[test]
fn set_temp_accepts_a_register() {
    let machine = run("LOAD R0, 7\nSET_TEMP R0\nHALT");
    assert_eq!(machine.fridge.temp, 7);
}

#[test]
fn halt_stops_before_later_instructions() {
    let machine = run("SET_TEMP 1\nHALT\nSET_TEMP 99");
    assert_eq!(machine.fridge.temp, 1);
}

#[test]
fn check_sensor_loads_into_r0() {
    let program = asm::parse("CHECK_SENSOR ENERGY\nHALT").unwrap();
    let mut machine = Machine::new(program).unwrap();
    machine.run(MAX_STEPS).unwrap();
    assert_eq!(machine.r0(), 50);
}

#[test]
fn print_distinguishes_text_from_operands() {
    let machine = run("LOAD R0, 9\nPRINT \"R0\"\nPRINT R0\nHALT");
    assert_eq!(machine.output, vec!["R0", "9"]);
}

#[test]
fn memory_slots_default_to_zero() {
    let machine = run("PUSH VAR_3\nPOP R0\nHALT");
    assert_eq!(machine.r0(), 0);
    assert_eq!(machine.memory_slot(3), 0);
}

#[test]
fn conditional_jumps_follow_the_flags() {
    let machine = run(concat!("LOAD R0, 2\n",
                              "CMP R0, 5\n",
                              "JL less\n",
                              "SET_TEMP 99\n",
                              "LABEL less\n",
                              "SET_TEMP 1\n",
                              "HALT\n"));
    assert_eq!(machine.fridge.temp, 1);
}

#[test]
fn stepping_reports_the_halt() {
    let program = asm::parse("SET_TEMP 2\nHALT").unwrap();
    let mut machine = Machine::new(program).unwrap();

    assert!(matches!(machine.step(), Ok(StepOutcome::Continue)));
    assert!(matches!(machine.step(), Ok(StepOutcome::Halted)));
    assert!(machine.current_instr().is_none());
    assert_eq!(machine.steps(), 2);
}

#[test]
fn demo_assembly_runs() {
    let text = std::fs::read_to_string("demos/countdown.fasm").expect("missing file");
    let machine = run(&text);
    assert_eq!(machine.output, vec!["3", "2", "1", "chilling"]);
    assert_eq!(machine.fridge.temp, 2);
}

#[test]
fn unknown_opcode_is_rejected() {
    assert!(matches!(asm::parse("FROB R0"), Err(AsmError::UnknownOpcode { .. })));
}

#[test]
fn operand_count_is_checked() {
    assert!(matches!(asm::parse("ADD R0"), Err(AsmError::OperandCountMismatch { .. })));
    assert!(matches!(asm::parse("PUSH 1, 2"), Err(AsmError::OperandCountMismatch { .. })));
    assert!(matches!(asm::parse("HALT 0"), Err(AsmError::OperandCountMismatch { .. })));
}

#[test]
fn malformed_operands_are_rejected() {
    assert!(matches!(asm::parse("PUSH banana"), Err(AsmError::InvalidOperand { .. })));
    assert!(matches!(asm::parse("PUSH VAR_x"), Err(AsmError::InvalidOperand { .. })));
}

#[test]
fn invalid_mode_and_sensor_are_rejected() {
    assert!(matches!(asm::parse("SET_MODE FROSTY"), Err(AsmError::InvalidMode { .. })));
    assert!(matches!(asm::parse("CHECK_SENSOR HUMIDITY"), Err(AsmError::InvalidSensor { .. })));
}

#[test]
fn missing_jump_target_fails_at_load() {
    let program = asm::parse("JMP nowhere\nHALT").unwrap();
    assert!(matches!(Machine::new(program), Err(RuntimeError::UnknownLabel { .. })));
}

#[test]
fn popping_an_empty_stack_is_an_error() {
    let err = run_assembly("POP R0\nHALT", MAX_STEPS).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::StackUnderflow { pc: 0 }));
}

#[test]
fn popping_into_a_literal_is_an_error() {
    let err = run_assembly("PUSH 1\nPOP 5\nHALT", MAX_STEPS).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::ReadOnlyOperand { pc: 1 }));
}

#[test]
fn division_by_zero_is_an_error() {
    let text = "LOAD R0, 4\nLOAD R1, 0\nDIV R0, R1\nHALT";
    let err = run_assembly(text, MAX_STEPS).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn arithmetic_overflow_is_an_error() {
    let text = "LOAD R0, 9223372036854775807\nADD R0, 1\nHALT";
    let err = run_assembly(text, MAX_STEPS).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::Overflow { pc: 1 }));

    let text = "LOAD R0, -9223372036854775808\nLOAD R1, -1\nDIV R0, R1\nHALT";
    let err = run_assembly(text, MAX_STEPS).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::Overflow { .. }));
}

#[test]
fn a_spin_loop_hits_the_step_limit() {
    let err = run_assembly("LABEL spin\nJMP spin", 50).unwrap_err();
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::StepLimitExceeded { limit: 50 }));
}

#[test]
fn operands_print_in_source_form() {
    assert_eq!(Operand::Imm(-3).to_string(), "-3");
    assert_eq!(Operand::R0.to_string(), "R0");
    assert_eq!(Operand::R1.to_string(), "R1");
    assert_eq!(Operand::Var(2).to_string(), "VAR_2");
}
