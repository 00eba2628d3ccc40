use std::fs;

use imp::{
    config::DEFAULT_MAX_DEPTH, error::ErrorKind, interpreter::environment::Environment, run_source,
};
use walkdir::WalkDir;

#[test]
fn program_files_produce_expected_environments() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "imp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let env = run_source(&source, false).unwrap_or_else(|e| {
                                                panic!("Program {path:?} failed:\n{source}\nError: {e}")
                                            });
        assert_eq!(env, parse_expected(&expected), "unexpected environment for {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

/// Reads `name = value` lines.
fn parse_expected(content: &str) -> Environment {
    content.lines()
           .filter(|line| !line.trim().is_empty())
           .map(|line| {
               let (name, value) = line.split_once('=')
                                       .unwrap_or_else(|| panic!("Malformed line {line:?}"));
               let value = value.trim()
                                .parse::<i64>()
                                .unwrap_or_else(|e| panic!("Malformed value in {line:?}: {e}"));
               (name.trim().to_string(), value)
           })
           .collect()
}

fn assert_env(src: &str, expected: &[(&str, i64)]) {
    match run_source(src, false) {
        Ok(env) => assert_eq!(env, expected.iter().copied().collect::<Environment>()),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run_source(src, false) {
        Ok(env) => panic!("Script succeeded but was expected to fail, environment:\n{env}"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

#[test]
fn empty_program() {
    assert_env("", &[]);
    assert_env("  \n\t\n", &[]);
}

#[test]
fn assign_literals_and_identifiers() {
    assert_env("i = 20; _qwert_ = 2;", &[("i", 20), ("_qwert_", 2)]);
    assert_env("i = 20; y = i;", &[("i", 20), ("y", 20)]);
}

#[test]
fn assignment_overwrites() {
    assert_env("i=1;i=2;", &[("i", 2)]);
    assert_env("i = 1; i = i + i; i = i + i;", &[("i", 4)]);
}

#[test]
fn arithmetic_chains_group_to_the_right() {
    assert_env("i = 5 + 21 / 4;", &[("i", 10)]);
    assert_env("i = 21 / 4;", &[("i", 5)]);
    assert_env("i = 16 / 4 / 2;", &[("i", 8)]);
    assert_env("i = 1 + 2 + 3 + 4;", &[("i", 10)]);
}

#[test]
fn conditionals_select_one_block() {
    assert_env("if(true){ i = 11; } else { y = 13; }", &[("i", 11)]);
    assert_env("if(false){ i = 11; } else { y = 13; }", &[("y", 13)]);
    assert_env("if(!false){ i = 17; }else{}", &[("i", 17)]);
}

#[test]
fn loops() {
    assert_env("while(false){ i = 17; }", &[]);
    assert_env("x=4;y=10;product=0;i=0;while(i+1<=x){product=product+y;i=i+1;}",
               &[("x", 4), ("y", 10), ("product", 40), ("i", 4)]);
    assert_env("base=2;exponent=10;result=1;i=1;while(i<=exponent){j=1;temp_product=0;while(j<=base){temp_product=result+temp_product;j=j+1;}result=temp_product;i=i+1;}",
               &[("base", 2),
                 ("exponent", 10),
                 ("result", 1024),
                 ("i", 11),
                 ("j", 3),
                 ("temp_product", 1024)]);
}

#[test]
fn blocks_share_the_environment() {
    assert_env("if (true) { a = 1; } else {} b = a + 1;", &[("a", 1), ("b", 2)]);
    assert_env("i = 0; while (i <= 2) { last = i; i = i + 1; }", &[("i", 3), ("last", 2)]);
}

#[test]
fn conjunction_short_circuits() {
    assert_env("if(false && y <= 1){}else{}", &[]);
    assert_env("if(false && y <= 1){ a = 1; }else{ a = 2; }", &[("a", 2)]);
    assert_failure("if(true && y <= 1){}else{}", ErrorKind::UnboundVariable);
}

#[test]
fn unbound_variable_is_error() {
    assert_failure("i=y;", ErrorKind::UnboundVariable);
    assert_failure("i = 1; j = i + k;", ErrorKind::UnboundVariable);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("i = 1 / 0;", ErrorKind::Arithmetic);
    assert_failure("z = 0; i = 10 / z;", ErrorKind::Arithmetic);
}

#[test]
fn overflow_is_error() {
    assert_failure("i = 9223372036854775807 + 1;", ErrorKind::Arithmetic);
}

#[test]
fn malformed_programs_are_syntax_errors() {
    assert_failure("i = 1", ErrorKind::Syntax);
    assert_failure("while (true) { i = 1;", ErrorKind::Syntax);
    assert_failure("if (true) { i = 1; }", ErrorKind::Syntax);
    assert_failure("i = 5 - 3;", ErrorKind::Syntax);
    assert_failure("i = 2 * 3;", ErrorKind::Syntax);
    assert_failure("i = -1;", ErrorKind::Syntax);
    assert_failure("if (1 < 2) {} else {}", ErrorKind::Syntax);
    assert_failure("if (true || false) {} else {}", ErrorKind::Syntax);
    assert_failure("i = 1; }", ErrorKind::Syntax);
    assert_failure("i = 1 # comment", ErrorKind::Syntax);
}

#[test]
fn deep_nesting_is_resource_exhaustion() {
    let chain = format!("i = {}1;", "1 + ".repeat(2000));
    assert_failure(&chain, ErrorKind::ResourceExhausted);

    let loops = format!("{}{}", "while (false) {".repeat(1000), "}".repeat(1000));
    assert_failure(&loops, ErrorKind::ResourceExhausted);

    for depth in [250, 300] {
        assert_failure(&nested_ifs(depth), ErrorKind::ResourceExhausted);
    }
}

/// `depth` nested conditionals around a single increment of `i`.
fn nested_ifs(depth: usize) -> String {
    format!("i = 0;{}i = i + 1;{}",
            "if (true) {".repeat(depth),
            "} else {}".repeat(depth))
}

#[test]
fn nesting_within_the_limit_runs() {
    let chain = format!("i = {}1;", "1 + ".repeat(60));
    assert_env(&chain, &[("i", 61)]);

    assert_env(&nested_ifs(60), &[("i", 1)]);
}

#[test]
fn default_limit_fits_a_small_thread_stack() {
    std::thread::Builder::new().stack_size(2 * 1024 * 1024)
                               .spawn(|| {
                                   assert_env(&nested_ifs(60), &[("i", 1)]);
                                   assert_failure(&nested_ifs(DEFAULT_MAX_DEPTH + 1),
                                                  ErrorKind::ResourceExhausted);
                               })
                               .expect("failed to spawn test thread")
                               .join()
                               .expect("test thread panicked");
}

#[test]
fn long_statement_sequences_do_not_nest() {
    let source = "i = i + 1;\n".repeat(20_000);
    let source = format!("i = 0;\n{source}");
    assert_env(&source, &[("i", 20_000)]);
}
