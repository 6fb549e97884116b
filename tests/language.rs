use std::{collections::HashSet, fs};

use fridgescript::{
    ast::Literal,
    compiler::lexer::Token,
    run_source,
    vm::{fridge::Mode, machine::Machine},
};
use walkdir::WalkDir;

const MAX_STEPS: usize = 10_000;

fn run(src: &str) -> Machine {
    match run_source(src, MAX_STEPS) {
        Ok(machine) => machine,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run_source(src, MAX_STEPS).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "fridge"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        if let Err(e) = run_source(&content, MAX_STEPS) {
            panic!("Demo script {path:?} failed: {e}");
        }
        count += 1;
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(run("var x = 1 + 2\nset_temp x").fridge.temp, 3);
    assert_eq!(run("var x = 7 * 9\nset_temp x").fridge.temp, 63);
    assert_eq!(run("var x = 8 - 5\nset_temp x").fridge.temp, 3);
    assert_eq!(run("var x = 10 / 2\nset_temp x").fridge.temp, 5);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(run("set_temp 2 + 3 * 4").fridge.temp, 14);
    assert_eq!(run("set_temp (2 + 3) * 4").fridge.temp, 20);
    assert_eq!(run("set_temp 20 - 10 - 5").fridge.temp, 5);
}

#[test]
fn unary_minus() {
    assert_eq!(run("set_temp -5").fridge.temp, -5);
    assert_eq!(run("set_temp --5").fridge.temp, 5);
    assert_eq!(run("var x = 3\nset_temp -x + 1").fridge.temp, -2);
}

#[test]
fn reassignment() {
    let machine = run("var x = 1\nx = x + 10\nset_temp x");
    assert_eq!(machine.fridge.temp, 11);
}

#[test]
fn comparisons_produce_zero_or_one() {
    assert_eq!(run("var b = 3 < 4\nset_temp b").fridge.temp, 1);
    assert_eq!(run("var b = 3 > 4\nset_temp b").fridge.temp, 0);
    assert_eq!(run("var b = 4 <= 4\nset_temp b").fridge.temp, 1);
    assert_eq!(run("var b = 4 >= 5\nset_temp b").fridge.temp, 0);
    assert_eq!(run("var b = 2 == 2\nset_temp b").fridge.temp, 1);
    assert_eq!(run("var b = 2 != 2\nset_temp b").fridge.temp, 0);
}

#[test]
fn if_else_branch_selection() {
    let machine = run("if 2 < 3 { set_temp 7 } else { set_temp 11 }");
    assert_eq!(machine.fridge.temp, 7);

    let machine = run("if 2 > 3 { set_temp 7 } else { set_temp 11 }");
    assert_eq!(machine.fridge.temp, 11);
}

#[test]
fn else_if_chain() {
    let script = r#"
        var t = 6
        if t < 3 {
            set_mode "TURBO"
        } else if t < 9 {
            set_mode "ECO"
        } else {
            set_mode "NORMAL"
        }
    "#;
    assert_eq!(run(script).fridge.mode, Mode::Eco);
}

#[test]
fn else_may_start_on_its_own_line() {
    let script = r#"
        if 1 > 2 {
            set_temp 9
        }
        else {
            set_temp 3
        }
    "#;
    assert_eq!(run(script).fridge.temp, 3);

    let script = r#"
        var t = 5
        if t < 3 {
            set_mode "TURBO"
        }
        else if t < 9 {
            set_mode "ECO"
        }
    "#;
    assert_eq!(run(script).fridge.mode, Mode::Eco);
}

#[test]
fn boolean_literals_in_conditions() {
    let machine = run("var ok = true\nif ok { set_mode \"TURBO\" }");
    assert_eq!(machine.fridge.mode, Mode::Turbo);

    let machine = run("var ok = false\nif ok { set_mode \"TURBO\" }");
    assert_eq!(machine.fridge.mode, Mode::Normal);
}

#[test]
fn while_loop_counts_down() {
    let machine = run("var t = 8\nwhile t > 2 { t = t - 1 }\nset_temp t");
    assert_eq!(machine.fridge.temp, 2);
}

#[test]
fn while_loop_accumulates() {
    let script = r#"
        var sum = 0
        var i = 1
        while i <= 5 {
            sum = sum + i
            i = i + 1
        }
        set_temp sum
    "#;
    assert_eq!(run(script).fridge.temp, 15);
}

#[test]
fn set_mode_switches_modes() {
    assert_eq!(run("set_mode \"ECO\"").fridge.mode, Mode::Eco);
    assert_eq!(run("set_mode \"TURBO\"").fridge.mode, Mode::Turbo);
    assert_eq!(run("set_mode \"NORMAL\"").fridge.mode, Mode::Normal);
}

#[test]
fn items_are_added_and_removed() {
    let machine = run("add_item \"milk\"\nadd_item \"eggs\"\nremove_item \"milk\"");
    assert_eq!(machine.fridge.items, vec!["eggs".to_string()]);
    assert!(machine.fridge.contains("eggs"));
    assert!(!machine.fridge.contains("milk"));
}

#[test]
fn removing_a_missing_item_is_not_an_error() {
    let machine = run("remove_item \"ghost\"");
    assert!(machine.fridge.items.is_empty());
}

#[test]
fn print_collects_output() {
    let machine = run("print \"hello\"\nvar x = 6\nprint x * 7");
    assert_eq!(machine.output, vec!["hello".to_string(), "42".to_string()]);
}

#[test]
fn sensors_read_their_defaults() {
    assert_eq!(run("set_temp energy").fridge.temp, 50);
    assert_eq!(run("set_temp outside_temp").fridge.temp, 25);
    assert_eq!(run("set_temp door").fridge.temp, 0);
}

#[test]
fn door_sensor_drives_a_branch() {
    let program = fridgescript::compile("if door { set_mode \"TURBO\" }").unwrap();
    let mut machine = Machine::new(program).unwrap();
    machine.sensors.door = true;
    machine.run(MAX_STEPS).unwrap();
    assert_eq!(machine.fridge.mode, Mode::Turbo);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let script = r#"
        // prepare the fridge
        set_temp 1

        // and stock it
        add_item "butter" // trailing comment
    "#;
    let machine = run(script);
    assert_eq!(machine.fridge.temp, 1);
    assert_eq!(machine.fridge.items, vec!["butter".to_string()]);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.fridge").expect("missing file");
    let machine = run(&script);
    assert_eq!(machine.fridge.temp, 2);
    assert_eq!(machine.fridge.mode, Mode::Eco);
    assert!(machine.fridge.contains("leftovers"));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("var x = 10 / 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("set_temp x");
}

#[test]
fn assignment_to_undeclared_variable_is_error() {
    assert_failure("x = 1");
}

#[test]
fn redeclaration_is_error() {
    assert_failure("var x = 1\nvar x = 2");
}

#[test]
fn sensor_names_are_reserved() {
    assert_failure("var door = 1");
    assert_failure("energy = 2");
}

#[test]
fn invalid_mode_is_error() {
    assert_failure("set_mode \"FROSTY\"");
}

#[test]
fn command_without_string_operand_is_error() {
    assert_failure("add_item milk");
    assert_failure("set_mode 3");
}

#[test]
fn unclosed_block_is_error() {
    assert_failure("while 1 < 2 { set_temp 1");
}

#[test]
fn infinite_loop_hits_the_step_limit() {
    assert!(fridgescript::run_source("while 1 > 0 { }", 500).is_err());
}

#[test]
fn literals_carry_one_of_three_payloads() {
    assert_eq!(Literal::from(42), Literal::Number(42));
    assert_eq!(Literal::from("milk"), Literal::Str("milk".to_string()));
    assert_eq!(Literal::from(true), Literal::Bool(true));

    assert_eq!(Literal::Number(7).as_number(), Some(7));
    assert_eq!(Literal::Bool(true).as_number(), Some(1));
    assert_eq!(Literal::Bool(false).as_number(), Some(0));
    assert_eq!(Literal::Str("milk".to_string()).as_number(), None);
}

#[test]
fn token_codes_match_the_generated_header() {
    assert_eq!(Token::Identifier("x".to_string()).code(), 258);
    assert_eq!(Token::Number(0).code(), 259);
    assert_eq!(Token::Str(String::new()).code(), 260);
    assert_eq!(Token::Bool(true).code(), 261);
    assert_eq!(Token::Var.code(), 262);
    assert_eq!(Token::If.code(), 263);
    assert_eq!(Token::Else.code(), 264);
    assert_eq!(Token::While.code(), 265);
    assert_eq!(Token::SetTemp.code(), 266);
    assert_eq!(Token::SetMode.code(), 267);
    assert_eq!(Token::AddItem.code(), 268);
    assert_eq!(Token::RemoveItem.code(), 269);
    assert_eq!(Token::Print.code(), 270);
    assert_eq!(Token::EqualEqual.code(), 271);
    assert_eq!(Token::BangEqual.code(), 272);
    assert_eq!(Token::LessEqual.code(), 273);
    assert_eq!(Token::GreaterEqual.code(), 274);
}

#[test]
fn parser_visible_token_codes_are_distinct() {
    let tokens = [Token::Identifier("x".to_string()),
                  Token::Number(0),
                  Token::Str(String::new()),
                  Token::Bool(true),
                  Token::Var,
                  Token::If,
                  Token::Else,
                  Token::While,
                  Token::SetTemp,
                  Token::SetMode,
                  Token::AddItem,
                  Token::RemoveItem,
                  Token::Print,
                  Token::EqualEqual,
                  Token::BangEqual,
                  Token::LessEqual,
                  Token::GreaterEqual,
                  Token::Less,
                  Token::Greater,
                  Token::Equals,
                  Token::Plus,
                  Token::Minus,
                  Token::Star,
                  Token::Slash,
                  Token::LParen,
                  Token::RParen,
                  Token::LBrace,
                  Token::RBrace,
                  Token::NewLine];

    let codes: HashSet<u16> = tokens.iter().map(Token::code).collect();
    assert_eq!(codes.len(), tokens.len());
}
