use std::{env, fs, process};

use starlight::stats::LexicalStats;

fn rendered(src: &str) -> String {
    LexicalStats::collect(src).to_string()
}

#[test]
fn counts_from_a_file() {
    let path = env::temp_dir().join(format!("starlight-stats-{}.star", process::id()));
    fs::write(&path,
              "ЗВЕЗДА
    СВЕТ импульс : квазар = 42;
    СВЕТ флаг : вакуум = истина;

    ЕСЛИ (импульс > 20) {
        ИЗЛУЧАТЬ(импульс);
    } ИЛИ_НЕТ {
        ИЗЛУЧАТЬ(0);
    }

    ОРБИТА (импульс < 100) {
        импульс += 5;
        ИЗЛУЧАТЬ(импульс);
    }
ЗАКРЫТАЯ_ЗВЕЗДА
").unwrap();

    let stats = LexicalStats::from_file(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(stats.unwrap().to_string(),
               "keywords: 13\nidentifier: 7\nnumber literals: 5\noperators: 5\nother lexemes: 24");
}

#[test]
fn missing_file_is_an_error() {
    let path = env::temp_dir().join("starlight-stats-does-not-exist.star");
    assert!(LexicalStats::from_file(path).is_err());
}

#[test]
fn numeric_expressions() {
    let src = "ЗВЕЗДА
    СВЕТ а : квазар = 10;
    СВЕТ б : квазар = 20;
    ИЗЛУЧАТЬ(а + б);
    ИЗЛУЧАТЬ(а * б - 5);
ЗАКРЫТАЯ_ЗВЕЗДА";
    assert_eq!(rendered(src),
               "keywords: 8\nidentifier: 6\nnumber literals: 3\noperators: 5\nother lexemes: 10");
}

#[test]
fn simple_program() {
    let src = "ЗВЕЗДА
    СВЕТ х : квазар = 10;
    СВЕТ у : квазар = 20;
    СВЕТ сумма : квазар = х + у;
    ИЗЛУЧАТЬ(сумма);
ЗАКРЫТАЯ_ЗВЕЗДА";
    assert_eq!(rendered(src),
               "keywords: 9\nidentifier: 6\nnumber literals: 2\noperators: 4\nother lexemes: 9");
}

#[test]
fn function_definition_is_only_lexed() {
    let src = "ФОТОН факториал(н: квазар): квазар {
    ЕСЛИ (н <= 1) {
        ВЕРНУТЬ 1;
    }
    ВЕРНУТЬ н * факториал(н - 1);
}";
    assert_eq!(rendered(src),
               "keywords: 6\nidentifier: 6\nnumber literals: 3\noperators: 3\nother lexemes: 14");
}

#[test]
fn boolean_expressions() {
    let src = "ЗВЕЗДА
    СВЕТ флаг1 : вакуум = истина;
    СВЕТ флаг2 : вакуум = ложь;
    ЕСЛИ (флаг1 && !флаг2) {
        ИЗЛУЧАТЬ(1);
    }
ЗАКРЫТАЯ_ЗВЕЗДА";
    assert_eq!(rendered(src),
               "keywords: 10\nidentifier: 4\nnumber literals: 1\noperators: 4\nother lexemes: 11");
}

#[test]
fn empty_and_comment_only_sources() {
    let zero = "keywords: 0\nidentifier: 0\nnumber literals: 0\noperators: 0\nother lexemes: 0";
    assert_eq!(rendered(""), zero);
    assert_eq!(rendered("// Это комментарий\n/*\n Многострочный\n комментарий\n*/"), zero);
}

#[test]
fn error_tokens_count_as_other_lexemes() {
    let stats = LexicalStats::collect("x @ 1 #");
    assert_eq!(stats.identifiers, 1);
    assert_eq!(stats.numeric_literals, 1);
    assert_eq!(stats.other, 2);
    assert_eq!(stats.total(), 4);
}
