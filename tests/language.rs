use std::{fs, io};

use rust_decimal::Decimal;
use starlight::{
    error::{Error, RuntimeError},
    execute,
    interpreter::environment::{ConsoleEnvironment, Environment, FakeEnvironment},
};
use walkdir::WalkDir;

fn d(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "star"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Cannot read demo {path:?}: {e}"));

        let inputs = header_numbers(&content, "input:");
        let expected = header_numbers(&content, "output:");

        let mut env = FakeEnvironment::new(inputs);
        let run = execute(&content, &mut env).unwrap_or_else(|e| {
                                                 panic!("Demo {path:?} failed:\n{content}\nError: {e}")
                                             });

        assert_eq!(run.results, expected, "results of {path:?}");
        assert_eq!(env.outputs(), expected.as_slice(), "output of {path:?}");
        assert_eq!(env.remaining_inputs(), 0, "unused input in {path:?}");
        count += 1;
    }

    assert!(count > 0, "No demo programs found in demos/");
}

/// Reads the numbers listed on a `// <key> ...` header line.
fn header_numbers(content: &str, key: &str) -> Vec<Decimal> {
    content.lines()
           .filter_map(|line| line.trim().strip_prefix("//"))
           .filter_map(|line| line.trim().strip_prefix(key))
           .flat_map(str::split_whitespace)
           .map(d)
           .collect()
}

#[test]
fn execute_reports_final_variables() {
    let mut env = FakeEnvironment::default();
    let run = execute("ЗВЕЗДА СВЕТ x : КВАЗАР = 2; x **= 10; ЗАКРЫТАЯ_ЗВЕЗДА", &mut env).unwrap();
    assert_eq!(run.variables["x"], d("1024"));
    assert!(run.results.is_empty());
}

#[test]
fn execute_rejects_blank_source() {
    let mut env = FakeEnvironment::default();
    assert!(matches!(execute("", &mut env), Err(Error::EmptySource)));
    assert!(matches!(execute(" \n\t ", &mut env), Err(Error::EmptySource)));
    assert_eq!(Error::EmptySource.line(), None);
}

#[test]
fn each_execution_starts_fresh() {
    let mut env = FakeEnvironment::default();
    let src = "ЗВЕЗДА СВЕТ x : КВАЗАР = 1; ИЗЛУЧАТЬ(x); ЗАКРЫТАЯ_ЗВЕЗДА";
    execute(src, &mut env).unwrap();
    execute(src, &mut env).unwrap();
    assert_eq!(env.outputs(), &[Decimal::ONE, Decimal::ONE]);
}

#[test]
fn console_environment_reads_and_writes_lines() {
    let mut output = Vec::new();
    let mut env = ConsoleEnvironment::new("oops\n3\n".as_bytes(), &mut output);
    let run = execute("ЗВЕЗДА СВЕТ r : НОВА; ПРИЕМ_СИГНАЛА(r); ИЗЛУЧАТЬ(r * 2, 0.5); ЗАКРЫТАЯ_ЗВЕЗДА",
                      &mut env).unwrap();
    drop(env);

    assert_eq!(run.results, vec![d("6"), d("0.5")]);
    assert_eq!(String::from_utf8(output).unwrap(),
               "Error! Enter a valid number:\n6\n0.5\n");
}

#[test]
fn console_environment_end_of_input() {
    let mut output = Vec::new();
    let mut env = ConsoleEnvironment::new("".as_bytes(), &mut output);
    let err = execute("ЗВЕЗДА СВЕТ r : НОВА; ПРИЕМ_СИГНАЛА(r); ЗАКРЫТАЯ_ЗВЕЗДА", &mut env).unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::InputUnavailable { line: 1 })));
}

struct UnflushableWriter;

impl io::Write for UnflushableWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("flush failed"))
    }
}

#[test]
fn console_environment_gives_up_when_the_prompt_cannot_be_flushed() {
    let mut env = ConsoleEnvironment::new("oops\n3\n".as_bytes(), UnflushableWriter);
    assert_eq!(env.read_number(), None);

    let mut env = ConsoleEnvironment::new("3\n".as_bytes(), UnflushableWriter);
    assert_eq!(env.read_number(), Some(d("3")));
}
